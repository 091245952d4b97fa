//! Integer rectangle algebra for screen, monitor and window regions
//!
//! Areas live on an inclusive pixel grid. Besides overlap tests and
//! intersections, two touching or overlapping areas can be merged into at
//! most three disjoint strips that exactly tile their union, either sliced
//! horizontally ([`Area::horizontal_union`]) or vertically
//! ([`Area::vertical_union`]).

pub mod config;
pub mod domain;
#[cfg(windows)]
pub mod platform;
pub mod ui;

pub use config::{ConfigError, MonitorLayout};
pub use domain::core::Area;
pub use domain::list::AreaList;
pub use domain::union::{Strips, UnionAxis};
pub use ui::{AreaRenderer, RendererError};
