//! Configuration surface for screen areas
//!
//! Monitor geometry arrives as text (X11 geometry strings) together with
//! the axis used to merge neighbouring monitors. This module turns that
//! text into validated areas and layouts.

pub mod geometry;
pub mod layout;

pub use geometry::{ConfigError, parse_geometry};
pub use layout::MonitorLayout;
