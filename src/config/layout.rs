//! Monitor layout assembled from geometry strings
//!
//! The layout holds the raw monitor areas in configuration order, plus
//! the axis used to merge them into the regions a layout engine may
//! maximise windows into.

use log::debug;

use crate::config::geometry::{ConfigError, parse_geometry};
use crate::domain::core::Area;
use crate::domain::list::AreaList;
use crate::domain::union::UnionAxis;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorLayout {
    monitors: AreaList,
    axis: UnionAxis,
}

impl MonitorLayout {
    /// Builds a layout from monitor areas
    ///
    /// Every monitor must cover at least one pixel and no two monitors may
    /// overlap.
    pub fn new(monitors: Vec<Area>, axis: UnionAxis) -> Result<Self, ConfigError> {
        if monitors.is_empty() {
            return Err(ConfigError::EmptyLayout);
        }

        for (index, area) in monitors.iter().enumerate() {
            if area.is_empty() {
                return Err(ConfigError::EmptyMonitor { index, area: *area });
            }
            if let Some(offset) = monitors[index + 1..].iter().position(|o| o.intersects(area)) {
                return Err(ConfigError::OverlappingMonitors {
                    first: index,
                    second: index + 1 + offset,
                });
            }
        }

        debug!("monitor layout with {} monitor(s), {:?} merge", monitors.len(), axis);
        Ok(Self {
            monitors: monitors.into(),
            axis,
        })
    }

    /// Builds a layout from geometry strings such as `1920x1080+0+0`
    ///
    /// # Example
    /// ```rust
    /// use screen_area::{Area, MonitorLayout, UnionAxis};
    ///
    /// let layout = MonitorLayout::from_geometries(
    ///     ["1920x1080+0+0", "1920x1080+1920+0"],
    ///     UnionAxis::Horizontal,
    /// )?;
    /// assert_eq!(layout.regions().as_slice(), &[Area::new(0, 0, 3840, 1080)]);
    /// # Ok::<(), screen_area::ConfigError>(())
    /// ```
    pub fn from_geometries<I, S>(geometries: I, axis: UnionAxis) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let monitors = geometries
            .into_iter()
            .map(|g| parse_geometry(g.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(monitors, axis)
    }

    pub fn monitors(&self) -> &AreaList {
        &self.monitors
    }

    pub fn axis(&self) -> UnionAxis {
        self.axis
    }

    /// Returns the monitors merged along the layout's axis
    pub fn regions(&self) -> AreaList {
        self.monitors.merged(self.axis)
    }

    /// Returns the index of the monitor containing a point
    pub fn monitor_at(&self, px: i32, py: i32) -> Option<usize> {
        self.monitors.iter().position(|m| m.contains_point(px, py))
    }

    /// Returns the index of the monitor sharing most pixels with a window
    pub fn monitor_for(&self, window: &Area) -> Option<usize> {
        self.monitors.best_target_index(window)
    }
}
