//! Scripted drag controller for testing.
//!
//! Follows the usual edge-drag helper protocol closely enough for container
//! tests: touch slop before capture on the capture pass, immediate capture
//! on the handling pass, release velocity from the last two samples and a
//! linear settle that advances a fixed number of pixels per frame.

use std::sync::Arc;

use parking_lot::Mutex;
use slideout::{
    ChildId, DragCallback, DragController, DragState, EdgeFlags, PointerAction, PointerEvent,
    PointerId,
};
use slideout_core::alloc::HashMap;
use slideout_core::geometry::Pos;
use slideout_core::math::Vec2;

/// Default width of the edge-touch zone in pixels.
pub const DEFAULT_EDGE_SIZE: f32 = 20.0;

/// Default touch slop in pixels.
pub const DEFAULT_TOUCH_SLOP: f32 = 8.0;

/// Default settle speed in pixels per frame.
pub const DEFAULT_SETTLE_STEP: i32 = 50;

/// Records a controller call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum DragCall {
    ShouldIntercept { action: PointerAction },
    ProcessGesture { action: PointerAction },
    SetEdgeTracking { edges: EdgeFlags },
    SetMinFlingVelocity { velocity: f32 },
    SmoothSlideTo { child: ChildId, left: i32, top: i32 },
    SettleCapturedAt { left: i32, top: i32 },
    ContinueSettling,
    Abort,
}

#[derive(Debug, Clone, Copy)]
struct PointerTrack {
    initial: Vec2,
    last: Vec2,
    last_time_ms: u64,
    velocity: Vec2,
}

#[derive(Debug)]
struct Inner {
    calls: Vec<DragCall>,
    state: DragState,
    tracked_edges: EdgeFlags,
    touched_edges: EdgeFlags,
    edge_size: f32,
    touch_slop: f32,
    settle_step: i32,
    min_fling_velocity: f32,
    captured: Option<ChildId>,
    active_pointer: Option<PointerId>,
    pointers: HashMap<PointerId, PointerTrack>,
    settle_target: Option<Pos<i32>>,
}

impl Default for Inner {
    fn default() -> Self {
        Inner {
            calls: Vec::new(),
            state: DragState::Idle,
            tracked_edges: EdgeFlags::empty(),
            touched_edges: EdgeFlags::empty(),
            edge_size: DEFAULT_EDGE_SIZE,
            touch_slop: DEFAULT_TOUCH_SLOP,
            settle_step: DEFAULT_SETTLE_STEP,
            min_fling_velocity: 0.0,
            captured: None,
            active_pointer: None,
            pointers: HashMap::default(),
            settle_target: None,
        }
    }
}

/// Mock implementation of [`DragController`].
///
/// Clones share state, so a test keeps one handle while the container owns
/// another.
///
/// # Example
///
/// ```rust
/// use slideout_test_utils::{DragCall, MockDragController};
///
/// let mock = MockDragController::new().with_settle_step(100);
/// assert!(mock.calls().is_empty());
/// assert_eq!(mock.settle_step(), 100);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockDragController {
    inner: Arc<Mutex<Inner>>,
}

impl MockDragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pixels moved per settle frame.
    pub fn with_settle_step(self, step: i32) -> Self {
        self.inner.lock().settle_step = step.max(1);
        self
    }

    pub fn with_touch_slop(self, slop: f32) -> Self {
        self.inner.lock().touch_slop = slop;
        self
    }

    pub fn with_edge_size(self, size: f32) -> Self {
        self.inner.lock().edge_size = size;
        self
    }

    pub fn settle_step(&self) -> i32 {
        self.inner.lock().settle_step
    }

    /// Get all recorded calls.
    pub fn calls(&self) -> Vec<DragCall> {
        self.inner.lock().calls.clone()
    }

    /// Clear recorded calls.
    pub fn clear_calls(&self) {
        self.inner.lock().calls.clear();
    }

    pub fn count_smooth_slides(&self) -> usize {
        self.count(|call| matches!(call, DragCall::SmoothSlideTo { .. }))
    }

    pub fn count_aborts(&self) -> usize {
        self.count(|call| matches!(call, DragCall::Abort))
    }

    pub fn count_settles(&self) -> usize {
        self.count(|call| matches!(call, DragCall::SettleCapturedAt { .. }))
    }

    fn count(&self, predicate: impl Fn(&DragCall) -> bool) -> usize {
        self.inner.lock().calls.iter().filter(|call| predicate(call)).count()
    }

    pub fn tracked_edges(&self) -> EdgeFlags {
        self.inner.lock().tracked_edges
    }

    pub fn min_fling_velocity(&self) -> f32 {
        self.inner.lock().min_fling_velocity
    }

    pub fn captured(&self) -> Option<ChildId> {
        self.inner.lock().captured
    }
}

impl Inner {
    fn set_state(&mut self, state: DragState, callback: &mut dyn DragCallback) {
        if self.state == state {
            return;
        }
        tracing::trace!("Mock drag state {:?} -> {:?}", self.state, state);
        self.state = state;
        callback.on_drag_state_changed(state);
        if state == DragState::Idle {
            self.captured = None;
        }
    }

    fn capture(&mut self, child: ChildId, pointer: PointerId, callback: &mut dyn DragCallback) {
        self.captured = Some(child);
        self.active_pointer = Some(pointer);
        callback.on_captured(child, pointer);
        self.set_state(DragState::Dragging, callback);
    }

    fn try_capture_for_drag(
        &mut self,
        child: ChildId,
        pointer: PointerId,
        callback: &mut dyn DragCallback,
    ) -> bool {
        if self.captured == Some(child) && self.active_pointer == Some(pointer) {
            return true;
        }
        if callback.try_capture(child, pointer) {
            self.capture(child, pointer, callback);
            return true;
        }
        false
    }

    fn touched_edges_at(&self, position: Vec2, callback: &dyn DragCallback) -> EdgeFlags {
        let bounds = callback.container_bounds().to_f32();
        let mut edges = EdgeFlags::empty();
        if position.x < bounds.left() + self.edge_size {
            edges |= EdgeFlags::LEFT;
        }
        if position.x > bounds.right() - self.edge_size {
            edges |= EdgeFlags::RIGHT;
        }
        if position.y < bounds.top() + self.edge_size {
            edges |= EdgeFlags::TOP;
        }
        if position.y > bounds.bottom() - self.edge_size {
            edges |= EdgeFlags::BOTTOM;
        }
        edges & self.tracked_edges
    }

    fn pointer_down(&mut self, event: &PointerEvent, callback: &mut dyn DragCallback) {
        self.pointers.insert(
            event.pointer,
            PointerTrack {
                initial: event.position,
                last: event.position,
                last_time_ms: event.time_ms,
                velocity: Vec2::ZERO,
            },
        );
        let edges = self.touched_edges_at(event.position, callback);
        self.touched_edges |= edges;
        if !edges.is_empty() {
            callback.on_edge_touched(edges, event.pointer);
        }
    }

    /// Update the track for `event`. Returns the delta from the last sample.
    fn track_move(&mut self, event: &PointerEvent) -> Vec2 {
        let Some(track) = self.pointers.get_mut(&event.pointer) else {
            return Vec2::ZERO;
        };
        let delta = event.position - track.last;
        let elapsed = event.time_ms.saturating_sub(track.last_time_ms);
        if elapsed > 0 {
            track.velocity = delta * (1000.0 / elapsed as f32);
        }
        track.last = event.position;
        track.last_time_ms = event.time_ms;
        delta
    }

    /// Capture the child under the initial point once the pointer passes slop.
    fn check_slop_and_capture(&mut self, event: &PointerEvent, callback: &mut dyn DragCallback) {
        let Some(track) = self.pointers.get(&event.pointer).copied() else {
            return;
        };
        let total = event.position - track.initial;
        if total.x.abs() <= self.touch_slop || total.x.abs() <= total.y.abs() {
            return;
        }
        let Some(child) = callback.child_at(track.initial.x, track.initial.y) else {
            return;
        };
        if callback.horizontal_drag_range(child) <= 0 {
            return;
        }
        if !self.touched_edges.is_empty() {
            callback.on_edge_drag_started(self.touched_edges, event.pointer);
        }
        self.try_capture_for_drag(child, event.pointer, callback);
    }

    fn drag_by(&mut self, delta: Vec2, callback: &mut dyn DragCallback) {
        let Some(child) = self.captured else {
            return;
        };
        let Some(bounds) = callback.child_bounds(child) else {
            return;
        };
        let (dx, dy) = (delta.x as i32, delta.y as i32);
        let left = callback.clamp_horizontal(child, bounds.left() + dx, dx);
        let top = callback.clamp_vertical(child, bounds.top() + dy, dy);
        let (moved_x, moved_y) = (left - bounds.left(), top - bounds.top());
        if moved_x != 0 || moved_y != 0 {
            callback.offset_child(child, moved_x, moved_y);
            callback.on_position_changed(child, left, top, moved_x, moved_y);
        }
    }

    fn release(&mut self, velocity: Vec2, callback: &mut dyn DragCallback) {
        let Some(child) = self.captured else {
            return;
        };
        let x_velocity = self.clamp_fling(velocity.x);
        let y_velocity = self.clamp_fling(velocity.y);
        if let Some(target) = callback.on_released(child, x_velocity, y_velocity) {
            self.record(DragCall::SettleCapturedAt {
                left: target.x,
                top: target.y,
            });
            self.start_settle(child, target, callback);
        }
        if self.state == DragState::Dragging {
            self.set_state(DragState::Idle, callback);
        }
    }

    fn clamp_fling(&self, velocity: f32) -> f32 {
        if velocity.abs() < self.min_fling_velocity {
            0.0
        } else {
            velocity
        }
    }

    fn start_settle(&mut self, child: ChildId, target: Pos<i32>, callback: &mut dyn DragCallback) -> bool {
        let Some(bounds) = callback.child_bounds(child) else {
            return false;
        };
        if bounds.left() == target.x && bounds.top() == target.y {
            self.settle_target = None;
            self.set_state(DragState::Idle, callback);
            return false;
        }
        self.captured = Some(child);
        self.settle_target = Some(target);
        self.set_state(DragState::Settling, callback);
        true
    }

    fn step_settle(&mut self, callback: &mut dyn DragCallback) -> bool {
        let (Some(child), Some(target)) = (self.captured, self.settle_target) else {
            self.set_state(DragState::Idle, callback);
            return false;
        };
        let Some(bounds) = callback.child_bounds(child) else {
            self.settle_target = None;
            self.set_state(DragState::Idle, callback);
            return false;
        };

        let step = self.settle_step;
        let dx = (target.x - bounds.left()).clamp(-step, step);
        let dy = (target.y - bounds.top()).clamp(-step, step);
        if dx != 0 || dy != 0 {
            callback.offset_child(child, dx, dy);
            callback.on_position_changed(child, bounds.left() + dx, bounds.top() + dy, dx, dy);
        }

        let arrived = bounds.left() + dx == target.x && bounds.top() + dy == target.y;
        if arrived {
            self.settle_target = None;
            self.set_state(DragState::Idle, callback);
        }
        self.state == DragState::Settling
    }

    fn reset_pointers(&mut self) {
        self.pointers.clear();
        self.touched_edges = EdgeFlags::empty();
        self.active_pointer = None;
    }

    fn record(&mut self, call: DragCall) {
        self.calls.push(call);
    }
}

impl DragController for MockDragController {
    fn should_intercept(&mut self, event: &PointerEvent, callback: &mut dyn DragCallback) -> bool {
        let mut inner = self.inner.lock();
        inner.record(DragCall::ShouldIntercept {
            action: event.action,
        });

        match event.action {
            PointerAction::Down => {
                inner.reset_pointers();
                inner.pointer_down(event, callback);
                if inner.state == DragState::Settling
                    && let Some(child) = callback.child_at(event.x(), event.y())
                    && inner.captured == Some(child)
                {
                    inner.try_capture_for_drag(child, event.pointer, callback);
                }
            }
            PointerAction::PointerDown => inner.pointer_down(event, callback),
            PointerAction::Move => {
                inner.track_move(event);
                if inner.state == DragState::Idle {
                    inner.check_slop_and_capture(event, callback);
                }
            }
            PointerAction::PointerUp => {
                inner.pointers.remove(&event.pointer);
            }
            PointerAction::Up | PointerAction::Cancel => inner.reset_pointers(),
        }

        inner.state == DragState::Dragging
    }

    fn process_gesture(&mut self, event: &PointerEvent, callback: &mut dyn DragCallback) {
        let mut inner = self.inner.lock();
        inner.record(DragCall::ProcessGesture {
            action: event.action,
        });

        match event.action {
            PointerAction::Down => {
                inner.reset_pointers();
                inner.pointer_down(event, callback);
                if let Some(child) = callback.child_at(event.x(), event.y()) {
                    inner.try_capture_for_drag(child, event.pointer, callback);
                }
            }
            PointerAction::PointerDown => inner.pointer_down(event, callback),
            PointerAction::Move => {
                let delta = inner.track_move(event);
                if inner.state == DragState::Dragging {
                    if inner.active_pointer == Some(event.pointer) {
                        inner.drag_by(delta, callback);
                    }
                } else {
                    inner.check_slop_and_capture(event, callback);
                }
            }
            PointerAction::PointerUp => {
                let released = inner.pointers.remove(&event.pointer);
                if inner.state == DragState::Dragging && inner.active_pointer == Some(event.pointer) {
                    let velocity = released.map_or(Vec2::ZERO, |track| track.velocity);
                    inner.release(velocity, callback);
                }
            }
            PointerAction::Up => {
                if inner.state == DragState::Dragging {
                    // Velocity comes from the last move sample.
                    let velocity = event_velocity(&inner, event.pointer);
                    inner.release(velocity, callback);
                }
                inner.reset_pointers();
            }
            PointerAction::Cancel => {
                if inner.state == DragState::Dragging {
                    inner.release(Vec2::ZERO, callback);
                }
                inner.reset_pointers();
            }
        }
    }

    fn is_edge_touched(&self, edges: EdgeFlags) -> bool {
        self.inner.lock().touched_edges.intersects(edges)
    }

    fn set_edge_tracking_enabled(&mut self, edges: EdgeFlags) {
        let mut inner = self.inner.lock();
        inner.record(DragCall::SetEdgeTracking { edges });
        inner.tracked_edges = edges;
    }

    fn set_min_fling_velocity(&mut self, velocity: f32) {
        let mut inner = self.inner.lock();
        inner.record(DragCall::SetMinFlingVelocity { velocity });
        inner.min_fling_velocity = velocity;
    }

    fn smooth_slide_to(
        &mut self,
        child: ChildId,
        left: i32,
        top: i32,
        callback: &mut dyn DragCallback,
    ) -> bool {
        let mut inner = self.inner.lock();
        inner.record(DragCall::SmoothSlideTo { child, left, top });
        inner.captured = Some(child);
        inner.active_pointer = None;
        inner.start_settle(child, Pos::new(left, top), callback)
    }

    fn continue_settling(&mut self, _defer_callbacks: bool, callback: &mut dyn DragCallback) -> bool {
        let mut inner = self.inner.lock();
        if inner.state != DragState::Settling {
            return false;
        }
        inner.record(DragCall::ContinueSettling);
        inner.step_settle(callback)
    }

    fn drag_state(&self) -> DragState {
        self.inner.lock().state
    }

    fn abort(&mut self, callback: &mut dyn DragCallback) {
        let mut inner = self.inner.lock();
        inner.record(DragCall::Abort);
        inner.reset_pointers();

        if inner.state == DragState::Settling
            && let (Some(child), Some(target)) = (inner.captured, inner.settle_target)
            && let Some(bounds) = callback.child_bounds(child)
        {
            // Jump to the end of the animation.
            let (dx, dy) = (target.x - bounds.left(), target.y - bounds.top());
            if dx != 0 || dy != 0 {
                callback.offset_child(child, dx, dy);
                callback.on_position_changed(child, target.x, target.y, dx, dy);
            }
        }
        inner.settle_target = None;
        inner.set_state(DragState::Idle, callback);
    }
}

fn event_velocity(inner: &Inner, pointer: PointerId) -> Vec2 {
    inner
        .pointers
        .get(&pointer)
        .map_or(Vec2::ZERO, |track| track.velocity)
}
