//! Float vector math used for pointer positions and velocities.
//!
//! Re-exports the SIMD-accelerated [`glam`] types. Layout itself is done in
//! integer pixels (see [`crate::geometry`]); `glam` covers the continuous
//! side of gesture input.
//!
//! ```
//! use slideout_core::math::Vec2;
//!
//! let down = Vec2::new(4.0, 100.0);
//! let now = Vec2::new(124.0, 102.0);
//! assert_eq!((now - down).x, 120.0);
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{Vec2, vec2};
