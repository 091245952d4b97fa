//! Visual debugging helpers
//!
//! Rendering is kept apart from the geometry so the domain layer has no
//! drawing dependency.

pub mod renderer;

pub use renderer::{AreaRenderer, RendererError};
