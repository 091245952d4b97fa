//! Core area type and geometric predicates
//!
//! Areas live on an inclusive integer pixel grid: an area of width 1 covers
//! exactly the column `x`, so its right edge equals `x`. The y axis grows
//! downward.

use std::fmt;

/// Axis-aligned rectangle on the pixel grid
///
/// Construction never validates. Negative extents are representable and
/// only reported by [`Area::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Area {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Area {
    /// Sentinel used by callers that need a raw "no area" value
    pub const INVALID: Area = Area::new(-1, -1, -1, -1);

    /// Creates a new area
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the `(-1, -1, -1, -1)` sentinel
    pub const fn invalid() -> Self {
        Self::INVALID
    }

    /// Returns true if both extents are non-negative
    pub fn is_valid(&self) -> bool {
        self.width >= 0 && self.height >= 0
    }

    /// Returns true if the area covers no pixel
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Returns the inclusive right edge
    pub fn right(&self) -> i32 {
        self.x + (self.width - 1)
    }

    /// Returns the inclusive bottom edge
    pub fn bottom(&self) -> i32 {
        self.y + (self.height - 1)
    }

    /// Returns the number of pixels covered
    pub fn area(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }

    /// Returns true if this area contains the given point
    pub fn contains_point(&self, px: i32, py: i32) -> bool {
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }

    /// Returns true if `other` lies entirely inside this area
    pub fn contains(&self, other: &Area) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Returns true if the two areas share at least one pixel
    ///
    /// Edges are inclusive: areas meeting on a single column or row overlap.
    pub fn intersects(&self, other: &Area) -> bool {
        // [other][self]
        if other.right() < self.x {
            return false;
        }
        // [self][other]
        if other.x > self.right() {
            return false;
        }
        // other above self
        if other.bottom() < self.y {
            return false;
        }
        // other below self
        other.y <= self.bottom()
    }

    /// Returns the overlapping region, or None if the areas are disjoint
    pub fn intersection(&self, other: &Area) -> Option<Area> {
        if !self.intersects(other) {
            return None;
        }

        let x1 = self.x.max(other.x);
        let x2 = self.right().min(other.right());
        let y1 = self.y.max(other.y);
        let y2 = self.bottom().min(other.bottom());

        Some(Area::new(x1, y1, x2 - x1 + 1, y2 - y1 + 1))
    }

    /// Same as [`Area::intersection`] but yields [`Area::INVALID`] when disjoint
    pub fn intersect_or_invalid(&self, other: &Area) -> Area {
        self.intersection(other).unwrap_or(Self::INVALID)
    }

    /// Returns the smallest area that covers both areas
    pub fn bounding_box(&self, other: &Area) -> Area {
        let left = self.x.min(other.x);
        let top = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());

        Area::new(left, top, right - left + 1, bottom - top + 1)
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[x={} y={} w={} h={}]",
            self.x, self.y, self.width, self.height
        )
    }
}
