//! Win32 rectangle conversions
//!
//! Win32 `RECT` uses exclusive right/bottom edges while areas use
//! inclusive ones, so `RECT::right == Area::right() + 1`.

use windows::Win32::Foundation::RECT;

use crate::domain::core::Area;

impl From<RECT> for Area {
    fn from(rect: RECT) -> Self {
        Area::new(
            rect.left,
            rect.top,
            rect.right - rect.left,
            rect.bottom - rect.top,
        )
    }
}

impl From<Area> for RECT {
    fn from(area: Area) -> Self {
        RECT {
            left: area.x,
            top: area.y,
            right: area.right() + 1,
            bottom: area.bottom() + 1,
        }
    }
}
