//! Test utilities for the slideout container.
//!
//! This crate provides a scripted [`DragController`](slideout::DragController)
//! so container behavior can be exercised without a real input stack.
//!
//! # Overview
//!
//! - `MockDragController` - deterministic gesture tracker that records every
//!   call (requires `mock` feature)
//! - [`gestures`] - helpers that build pointer event sequences
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use slideout::{ChildSpec, Dimension, MeasureSpec, PanelConfig, PanelContainer};
//! use slideout_test_utils::MockDragController;
//!
//! let mock = MockDragController::new();
//! let mut container = PanelContainer::new(PanelConfig::default(), Box::new(mock.clone()));
//! container
//!     .add_child(ChildSpec::new("menu").panel().width(Dimension::Px(300)))
//!     .unwrap();
//! container.add_child(ChildSpec::new("main").content()).unwrap();
//! container
//!     .measure(MeasureSpec::exactly(1080), MeasureSpec::exactly(1920))
//!     .unwrap();
//! container.layout();
//!
//! container.open(true).unwrap();
//! assert_eq!(mock.count_smooth_slides(), 1);
//! # }
//! ```
//!
//! # Design
//!
//! The mock is a cheap handle around `Arc<Mutex<_>>`: one clone is boxed
//! into the container, the other stays with the test to inspect calls.

pub mod gestures;
#[cfg(feature = "mock")]
pub mod mock_drag;

#[cfg(feature = "mock")]
pub use mock_drag::*;
