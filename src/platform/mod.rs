//! Platform-specific interop
//!
//! Conversions between areas and native windowing-system types.

pub mod windows;
