//! Debug rasteriser for area sets
//!
//! Draws areas into a tiny-skia pixmap so merge results can be inspected
//! visually. Each area gets its own colour from a small palette, which
//! makes strip boundaries visible.

use tiny_skia::{Color, IntRect, Paint, Pixmap, Transform};

use crate::domain::core::Area;

/// Rendering errors
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("Nothing to render")]
    EmptyInput,

    #[error("Cannot render degenerate area {0}")]
    InvalidArea(Area),

    #[error("Failed to create {width}x{height} pixmap for rendering")]
    PixmapCreationFailed { width: i32, height: i32 },
}

impl Area {
    /// Converts to a tiny-skia integer rectangle
    ///
    /// Returns None for degenerate or invalid areas.
    pub fn to_int_rect(&self) -> Option<IntRect> {
        let width = u32::try_from(self.width).ok()?;
        let height = u32::try_from(self.height).ok()?;
        IntRect::from_xywh(self.x, self.y, width, height)
    }
}

/// Renders area sets with a cycling colour palette
#[derive(Debug, Clone)]
pub struct AreaRenderer {
    palette: Vec<Color>,
    background: Color,
}

impl AreaRenderer {
    pub fn new() -> Self {
        Self {
            palette: vec![
                Color::from_rgba8(230, 25, 75, 255),
                Color::from_rgba8(60, 180, 75, 255),
                Color::from_rgba8(0, 130, 200, 255),
                Color::from_rgba8(245, 130, 48, 255),
            ],
            background: Color::TRANSPARENT,
        }
    }

    /// Replaces the fill palette; an empty palette keeps the current one
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        if !palette.is_empty() {
            self.palette = palette;
        }
        self
    }

    /// Colour used for the area at `index`
    pub fn color_for(&self, index: usize) -> Color {
        self.palette[index % self.palette.len()]
    }

    /// Renders the areas onto a canvas sized to their bounding box
    ///
    /// The bounding box origin maps to pixel (0, 0). Areas are moved into
    /// canvas space with integer arithmetic before reaching tiny-skia.
    pub fn render(&self, areas: &[Area]) -> Result<Pixmap, RendererError> {
        let (first, rest) = areas.split_first().ok_or(RendererError::EmptyInput)?;
        let bounds = rest.iter().fold(*first, |acc, area| acc.bounding_box(area));

        let mut pixmap = u32::try_from(bounds.width)
            .ok()
            .zip(u32::try_from(bounds.height).ok())
            .and_then(|(width, height)| Pixmap::new(width, height))
            .ok_or(RendererError::PixmapCreationFailed {
                width: bounds.width,
                height: bounds.height,
            })?;
        pixmap.fill(self.background);

        for (index, area) in areas.iter().enumerate() {
            // Offsets stay within the bounding box, so they cannot overflow
            let local = Area::new(area.x - bounds.x, area.y - bounds.y, area.width, area.height);
            let rect = local
                .to_int_rect()
                .ok_or(RendererError::InvalidArea(*area))?
                .to_rect();

            let mut paint = Paint::default();
            paint.set_color(self.color_for(index));
            paint.anti_alias = false;

            pixmap.fill_rect(rect, &paint, Transform::identity(), None);
        }

        Ok(pixmap)
    }
}

impl Default for AreaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(pixmap: &Pixmap, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let p = pixmap.pixel(x, y).unwrap();
        (p.red(), p.green(), p.blue(), p.alpha())
    }

    #[test]
    fn int_rect_conversion() {
        let rect = Area::new(-5, 3, 10, 20).to_int_rect().unwrap();
        assert_eq!((rect.x(), rect.y(), rect.width(), rect.height()), (-5, 3, 10, 20));
        assert!(Area::new(0, 0, 0, 5).to_int_rect().is_none());
        assert!(Area::INVALID.to_int_rect().is_none());
    }

    #[test]
    fn renders_strips_in_palette_colours() {
        let renderer = AreaRenderer::new();
        let strips = Area::new(10, 10, 5, 10)
            .horizontal_union(&Area::new(15, 13, 5, 10))
            .unwrap();
        let pixmap = renderer.render(&strips).unwrap();

        assert_eq!((pixmap.width(), pixmap.height()), (10, 13));
        // top strip covers columns 0..5 of the first three rows
        assert_eq!(rgba(&pixmap, 0, 0), (230, 25, 75, 255));
        assert_eq!(rgba(&pixmap, 9, 0), (0, 0, 0, 0));
        // middle strip spans the full width
        assert_eq!(rgba(&pixmap, 9, 3), (60, 180, 75, 255));
        // bottom strip only on the right
        assert_eq!(rgba(&pixmap, 9, 12), (0, 130, 200, 255));
        assert_eq!(rgba(&pixmap, 0, 12), (0, 0, 0, 0));
    }

    #[test]
    fn renders_areas_at_the_coordinate_minimum() {
        let renderer = AreaRenderer::new();
        let areas = [
            Area::new(i32::MIN, i32::MIN, 2, 2),
            Area::new(i32::MIN + 2, i32::MIN, 2, 2),
        ];
        let pixmap = renderer.render(&areas).unwrap();

        assert_eq!((pixmap.width(), pixmap.height()), (4, 2));
        assert_eq!(rgba(&pixmap, 1, 1), (230, 25, 75, 255));
        assert_eq!(rgba(&pixmap, 2, 0), (60, 180, 75, 255));
        assert_eq!(rgba(&pixmap, 3, 1), (60, 180, 75, 255));
    }

    #[test]
    fn empty_input_is_an_error() {
        let renderer = AreaRenderer::default();
        assert!(matches!(renderer.render(&[]), Err(RendererError::EmptyInput)));
    }

    #[test]
    fn degenerate_area_is_an_error() {
        let renderer = AreaRenderer::default();
        let result = renderer.render(&[Area::new(0, 0, 4, 4), Area::new(1, 1, 0, 2)]);
        assert!(matches!(result, Err(RendererError::InvalidArea(_))));
    }

    #[test]
    fn custom_palette_cycles() {
        let renderer = AreaRenderer::new().with_palette(vec![Color::WHITE]);
        assert_eq!(renderer.color_for(0), Color::WHITE);
        assert_eq!(renderer.color_for(3), Color::WHITE);
    }
}
