//! Geometry of screen areas
//!
//! Pure value types and algorithms with no knowledge of any windowing
//! system or drawing backend.

pub mod core;
pub mod list;
pub mod union;
