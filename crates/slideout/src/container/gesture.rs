//! Pointer and key routing, and the drag controller's view of the container.

use slideout_core::geometry::{Pos, Rect};

use crate::child::ChildId;
use crate::config::DisallowInterceptPolicy;
use crate::drag::{DragCallback, DragState, EdgeFlags, PointerId};
use crate::host::HostEvent;
use crate::input::{HandleStatus, Key, PointerAction, PointerEvent};
use crate::offset::{DRAWER_ON_SCREEN, OPEN_RELEASE_THRESHOLD, offset_for_content_left};

use super::PanelContainer;
use super::state::ContainerCore;

impl DragCallback for ContainerCore {
    fn try_capture(&mut self, child: ChildId, _pointer: PointerId) -> bool {
        self.content().is_some_and(|content| content.id == child)
    }

    fn on_drag_state_changed(&mut self, state: DragState) {
        if state == DragState::Dragging && self.drawer_state != DragState::Dragging {
            self.cancel_child_touches();
        }
        let panel = self.panel().map(|panel| panel.id);
        self.update_drawer_state(state, state, panel);
    }

    fn on_position_changed(&mut self, child: ChildId, left: i32, _top: i32, _dx: i32, _dy: i32) {
        let Some(index) = self.panel_index() else {
            tracing::warn!("Child {} moved without a panel attached", child);
            return;
        };
        let width = self.children[index].bounds.width;
        let Some(offset) = offset_for_content_left(left, width) else {
            return;
        };

        self.set_offset(index, offset);
        self.request_layout();
        self.invalidate();
    }

    fn on_released(&mut self, _child: ChildId, x_velocity: f32, _y_velocity: f32) -> Option<Pos<i32>> {
        let panel = self.panel()?;
        let offset = panel.slide.on_screen;
        let width = panel.bounds.width;
        let top = self.content().map_or(0, |content| content.top());

        let left = if x_velocity > 0.0 || (x_velocity == 0.0 && offset > OPEN_RELEASE_THRESHOLD) {
            width
        } else {
            0
        };
        tracing::trace!(
            "Released at offset {:.3} with velocity {:.1}, settling to {}",
            offset,
            x_velocity,
            left
        );

        self.invalidate();
        Some(Pos::new(left, top))
    }

    fn horizontal_drag_range(&self, _child: ChildId) -> i32 {
        self.panel().map_or(0, |panel| panel.bounds.width)
    }

    fn clamp_horizontal(&self, child: ChildId, left: i32, _dx: i32) -> i32 {
        match self.panel() {
            Some(panel) => left.clamp(0, panel.bounds.width.max(0)),
            None => self.child_bounds(child).map_or(0, |bounds| bounds.left()),
        }
    }

    fn clamp_vertical(&self, child: ChildId, top: i32, _dy: i32) -> i32 {
        self.child_bounds(child).map_or(top, |bounds| bounds.top())
    }

    fn child_at(&self, x: f32, y: f32) -> Option<ChildId> {
        self.find_top_child_under(x, y)
    }

    fn child_bounds(&self, child: ChildId) -> Option<Rect<i32>> {
        self.index_of(child).map(|index| self.children[index].bounds)
    }

    fn offset_child(&mut self, child: ChildId, dx: i32, dy: i32) {
        if let Some(index) = self.index_of(child) {
            self.children[index].bounds.offset(dx, dy);
        }
    }

    fn container_bounds(&self) -> Rect<i32> {
        Rect::new(0, 0, self.size.width, self.size.height)
    }
}

impl PanelContainer {
    /// Capture pass. Returns `true` when the container takes over the
    /// pointer stream from its children.
    pub fn on_intercept_pointer(&mut self, event: &PointerEvent) -> bool {
        let intercept_for_drag = self.dragger.should_intercept(event, &mut self.core);
        let mut intercept_for_tap = false;

        match event.action {
            PointerAction::Down => {
                self.core.initial_motion = event.position;
                if self.core.config.tap_to_close && self.core.max_on_screen() > DRAWER_ON_SCREEN {
                    let under = self.core.find_top_child_under(event.x(), event.y());
                    intercept_for_tap = under.is_some()
                        && under == self.core.content().map(|content| content.id);
                }
                self.core.reset_touch_flags();
            }
            PointerAction::Up | PointerAction::Cancel => self.core.reset_touch_flags(),
            _ => {}
        }

        intercept_for_drag || intercept_for_tap || self.core.children_canceled_touch
    }

    /// Handling pass. The container consumes every event it is given.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        self.dragger.process_gesture(event, &mut self.core);

        match event.action {
            PointerAction::Down => {
                self.core.initial_motion = event.position;
                self.core.reset_touch_flags();
            }
            PointerAction::Up => {
                if self.core.config.tap_to_close {
                    self.close_on_tap(event);
                }
                self.core.disallow_intercept_requested = false;
            }
            PointerAction::Cancel => self.core.reset_touch_flags(),
            _ => {}
        }

        true
    }

    fn close_on_tap(&mut self, event: &PointerEvent) {
        let distance = (event.position - self.core.initial_motion).length();
        if distance >= self.core.config.tap_slop_px() {
            return;
        }
        let under = self.core.find_top_child_under(event.x(), event.y());
        if under.is_none() || under != self.core.content().map(|content| content.id) {
            return;
        }
        if let Some(panel) = self.core.find_visible_panel() {
            tracing::debug!("Tap on content, closing panel {}", panel);
            if let Err(err) = self.close_panel(panel, true) {
                tracing::warn!("Failed to close panel on tap: {}", err);
            }
        }
    }

    /// A descendant asks ancestors not to intercept its gesture.
    ///
    /// When honored with `disallow == true` the panel is closed at once.
    pub fn request_disallow_intercept(&mut self, disallow: bool) {
        let honored = match self.core.config.disallow_intercept {
            DisallowInterceptPolicy::Always => true,
            DisallowInterceptPolicy::UnlessEdgeTouched => {
                !self.dragger.is_edge_touched(EdgeFlags::LEFT)
            }
        };

        self.core.disallow_intercept_requested = disallow;
        if !honored {
            tracing::trace!("Ignoring disallow-intercept request during an edge touch");
            return;
        }

        self.core.host.push(HostEvent::DisallowParentIntercept(disallow));
        if disallow && let Some(panel) = self.core.panel().map(|panel| panel.id) {
            if let Err(err) = self.close_panel(panel, false) {
                tracing::warn!("Failed to close panel on disallow-intercept: {}", err);
            }
        }
    }

    /// Back is consumed only while a panel is visible.
    pub fn on_key_down(&mut self, key: Key) -> HandleStatus {
        if key == Key::Back && self.core.find_visible_panel().is_some() {
            return HandleStatus::consumed();
        }
        HandleStatus::ignored()
    }

    /// Back closes the visible panel with animation.
    pub fn on_key_up(&mut self, key: Key) -> HandleStatus {
        if key != Key::Back {
            return HandleStatus::ignored();
        }

        let Some(panel) = self.core.find_visible_panel() else {
            return HandleStatus::ignored();
        };
        match self.close_panel(panel, true) {
            Ok(()) => HandleStatus::consumed(),
            Err(err) => {
                tracing::warn!("Back key could not close panel: {}", err);
                HandleStatus::ignored()
            }
        }
    }
}
