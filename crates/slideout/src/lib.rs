//! Slideout - a single-panel sliding drawer container
//!
//! This crate implements a headless container with:
//! - One edge-anchored panel and one filling content child
//! - A half-range offset model (`0.5` collapsed, `1.0` open) with parallax
//! - Drag/settle state machine driven by a pluggable [`DragController`]
//! - Ordered listener notification, scrim drawing and clip rectangles
//! - Back-key handling, accessibility exposure and saved open state
//!
//! ## Quick Start
//!
//! ```rust
//! use slideout::{ChildSpec, Dimension, HostEvent, MeasureSpec, PanelConfig, PanelContainer};
//! use slideout_test_utils::MockDragController;
//!
//! let mut container = PanelContainer::new(
//!     PanelConfig::default().with_density(2.0),
//!     Box::new(MockDragController::new()),
//! );
//! container
//!     .add_child(ChildSpec::new("menu").panel().width(Dimension::Px(600)))
//!     .unwrap();
//! container.add_child(ChildSpec::new("content").content()).unwrap();
//!
//! // In the host's layout pass:
//! container
//!     .measure(MeasureSpec::exactly(1080), MeasureSpec::exactly(1920))
//!     .unwrap();
//! container.layout();
//!
//! // Animated open, then drive frames until the settle finishes:
//! container.open(true).unwrap();
//! while container.on_frame() {
//!     if container.pop_events().contains(&HostEvent::RequestLayout) {
//!         container.layout();
//!     }
//! }
//! assert!(container.is_open());
//! ```

pub mod child;
pub mod config;
pub mod container;
pub mod drag;
pub mod draw;
pub mod error;
pub mod host;
pub mod input;
pub mod listener;
pub mod measure;
pub mod offset;
pub mod saved_state;
pub mod visibility;

pub use child::{Child, ChildId, ChildRole, ChildSpec, DeclaredParams, Dimension, Margins};
pub use config::{DisallowInterceptPolicy, PanelConfig};
pub use container::PanelContainer;
pub use drag::{DragCallback, DragController, DragState, DrawerState, EdgeFlags, PointerId};
pub use draw::{ClipRect, DrawCommand, DrawList};
pub use error::{PanelError, Result};
pub use host::HostEvent;
pub use input::{HandleStatus, Key, PointerAction, PointerEvent};
pub use listener::{DrawerEvent, DrawerListener, ListenerId, ListenerRegistry, Subscription};
pub use measure::{MeasureMode, MeasureSpec};
pub use offset::{OpenState, SlideParams};
pub use saved_state::SavedState;
pub use visibility::{AccessibilityImportance, AccessibilityNodeInfo};

// Re-export core types used in the public API
pub use slideout_core::Color;
pub use slideout_core::geometry::{Pos, Rect, Size};
