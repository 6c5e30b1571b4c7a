//! Slideout Core
//!
//! Shared utilities for the slideout panel container: logging setup,
//! profiling scopes, integer/float geometry, colors and hash collections.

pub mod alloc;
pub mod color;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;

pub use color::Color;
