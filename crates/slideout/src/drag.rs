//! Boundary with the gesture tracker that drives the content child.
//!
//! A [`DragController`] detects edge touches, tracks velocity and runs the
//! settle animation. It never owns the container: every call that may move a
//! child or report progress receives the container as a `&mut dyn
//! DragCallback` for the duration of that call.

use bitflags::bitflags;
use slideout_core::geometry::{Pos, Rect};

use crate::child::ChildId;
use crate::input::PointerEvent;

/// Drag state reported by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragState {
    /// No drag and no settle in progress.
    #[default]
    Idle,
    /// A pointer is actively dragging the captured child.
    Dragging,
    /// The captured child is animating towards a target.
    Settling,
}

/// The container's derived state, mirrored from the controller every frame.
pub type DrawerState = DragState;

bitflags! {
    /// Container edges tracked for edge-initiated drags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct EdgeFlags: u8 {
        const LEFT   = 1 << 0;
        const RIGHT  = 1 << 1;
        const TOP    = 1 << 2;
        const BOTTOM = 1 << 3;
        const ALL = Self::LEFT.bits() | Self::RIGHT.bits() | Self::TOP.bits() | Self::BOTTOM.bits();
    }
}

/// Pointer identifier as reported by the input source.
pub type PointerId = u32;

/// What the controller asks of, and reports to, the container.
pub trait DragCallback {
    /// Whether `child` may be captured. Only the content child is draggable.
    fn try_capture(&mut self, child: ChildId, pointer: PointerId) -> bool;

    fn on_captured(&mut self, _child: ChildId, _pointer: PointerId) {}

    fn on_drag_state_changed(&mut self, state: DragState);

    /// The captured child has moved to `left`/`top` (already applied).
    fn on_position_changed(&mut self, child: ChildId, left: i32, top: i32, dx: i32, dy: i32);

    /// The pointer let go. Returns where the captured child should settle.
    ///
    /// The controller settles the captured child at the returned position,
    /// polled through [`DragController::continue_settling`]. `None` leaves
    /// the child where it is.
    fn on_released(&mut self, child: ChildId, x_velocity: f32, y_velocity: f32) -> Option<Pos<i32>>;

    fn on_edge_touched(&mut self, _edges: EdgeFlags, _pointer: PointerId) {}

    fn on_edge_drag_started(&mut self, _edges: EdgeFlags, _pointer: PointerId) {}

    /// Maximum horizontal travel of `child`.
    fn horizontal_drag_range(&self, child: ChildId) -> i32;

    fn vertical_drag_range(&self, _child: ChildId) -> i32 {
        0
    }

    fn clamp_horizontal(&self, child: ChildId, left: i32, dx: i32) -> i32;

    fn clamp_vertical(&self, child: ChildId, top: i32, dy: i32) -> i32;

    /// Topmost child under the point, in container coordinates.
    fn child_at(&self, x: f32, y: f32) -> Option<ChildId>;

    fn child_bounds(&self, child: ChildId) -> Option<Rect<i32>>;

    /// Move a child by a pixel delta without a layout pass.
    fn offset_child(&mut self, child: ChildId, dx: i32, dy: i32);

    fn container_bounds(&self) -> Rect<i32>;
}

/// Gesture tracker consumed by the container.
pub trait DragController {
    /// Capture-pass heuristic: should the container steal this event stream?
    fn should_intercept(&mut self, event: &PointerEvent, callback: &mut dyn DragCallback) -> bool;

    /// Handling-pass processing: velocity tracking, capture, drag, release.
    fn process_gesture(&mut self, event: &PointerEvent, callback: &mut dyn DragCallback);

    fn is_edge_touched(&self, edges: EdgeFlags) -> bool;

    fn set_edge_tracking_enabled(&mut self, edges: EdgeFlags);

    fn set_min_fling_velocity(&mut self, velocity: f32);

    /// Start animating `child` to `left`/`top`. Returns `true` if motion is
    /// needed and `continue_settling` must be polled.
    fn smooth_slide_to(
        &mut self,
        child: ChildId,
        left: i32,
        top: i32,
        callback: &mut dyn DragCallback,
    ) -> bool;

    /// Advance the settle animation by one frame. Returns `true` while
    /// another frame is required.
    fn continue_settling(&mut self, defer_callbacks: bool, callback: &mut dyn DragCallback) -> bool;

    fn drag_state(&self) -> DragState;

    /// Cancel any drag or settle in progress, ending in [`DragState::Idle`].
    fn abort(&mut self, callback: &mut dyn DragCallback);
}
