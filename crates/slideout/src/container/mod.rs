//! The panel container.
//!
//! [`PanelContainer`] hosts exactly one panel and one content child. The
//! panel is anchored to the left edge and revealed by dragging the content
//! to the right (or by [`open`](PanelContainer::open)); the content moves
//! twice as far as the panel so the two slide with a parallax effect.
//!
//! The container never touches a real display or input source. Hosts feed
//! it measure constraints, pointer and key events and frame ticks, then
//! read back child bounds, a [`DrawList`](crate::DrawList) and the queued
//! [`HostEvent`]s.
//!
//! # Example
//!
//! ```
//! use slideout::{ChildSpec, Dimension, MeasureSpec, PanelConfig, PanelContainer};
//! use slideout_test_utils::MockDragController;
//!
//! let mut container = PanelContainer::new(
//!     PanelConfig::default(),
//!     Box::new(MockDragController::new()),
//! );
//! container
//!     .add_child(ChildSpec::new("menu").panel().width(Dimension::Px(300)))
//!     .unwrap();
//! container.add_child(ChildSpec::new("content").content()).unwrap();
//!
//! container
//!     .measure(MeasureSpec::exactly(1080), MeasureSpec::exactly(1920))
//!     .unwrap();
//! container.layout();
//! assert_eq!(container.find_panel().unwrap().left(), -150);
//!
//! container.open(false).unwrap();
//! assert!(container.is_open());
//! ```

mod gesture;
mod layout;
mod state;

use slideout_core::Color;

use crate::child::{Child, ChildId, ChildSpec};
use crate::config::PanelConfig;
use crate::drag::{DragController, DragState, DrawerState, EdgeFlags};
use crate::error::{PanelError, Result};
use crate::host::HostEvent;
use crate::listener::{DrawerListener, ListenerId};
use crate::offset::{DRAWER_ON_SCREEN, OpenState};
use crate::saved_state::SavedState;
use crate::visibility::{AccessibilityNodeInfo, VisibilityManager};

use self::state::ContainerCore;

/// A container with one edge-anchored sliding panel and one content child.
pub struct PanelContainer {
    dragger: Box<dyn DragController>,
    core: ContainerCore,
}

impl std::fmt::Debug for PanelContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelContainer")
            .field("core", &self.core)
            .field("drag_state", &self.dragger.drag_state())
            .finish()
    }
}

impl PanelContainer {
    /// Create an empty container driven by `dragger`.
    ///
    /// The controller is configured for left-edge tracking and the
    /// density-scaled minimum fling velocity from `config`.
    pub fn new(config: PanelConfig, mut dragger: Box<dyn DragController>) -> Self {
        dragger.set_edge_tracking_enabled(EdgeFlags::LEFT);
        dragger.set_min_fling_velocity(config.min_fling_velocity_px());
        tracing::debug!(
            "Created panel container (density {}, min fling {} px/s)",
            config.density,
            config.min_fling_velocity_px()
        );

        PanelContainer {
            dragger,
            core: ContainerCore::new(config),
        }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.core.config
    }

    // -- Children --

    /// Attach a child. It must carry the panel or content role.
    ///
    /// A panel attached while a restored open state is pending is reopened
    /// with animation.
    pub fn add_child(&mut self, spec: ChildSpec) -> Result<()> {
        let Some(role) = spec.role else {
            return Err(PanelError::MissingRole { child: spec.id });
        };
        if self.core.index_of(spec.id).is_some() {
            return Err(PanelError::DuplicateChild { child: spec.id });
        }

        let mut child = Child::new(spec.id, role, spec.declared);
        let any_open = self.core.find_open_panel().is_some();
        child.importance = VisibilityManager::initial_importance(&child, any_open);
        let is_panel = child.is_panel();

        tracing::debug!("Attached {:?} child {}", role, spec.id);
        self.core.children.push(child);
        self.core.request_layout();

        if is_panel && self.core.pending_restore.take().is_some() {
            tracing::debug!("Applying pending restore to panel {}", spec.id);
            self.open_panel(spec.id, true)?;
        }
        Ok(())
    }

    /// Detach a child and return its final state.
    pub fn remove_child(&mut self, id: ChildId) -> Result<Child> {
        let index = self
            .core
            .index_of(id)
            .ok_or(PanelError::UnknownChild { child: id })?;
        let child = self.core.children.remove(index);
        tracing::debug!("Detached child {}", id);
        self.core.request_layout();
        Ok(child)
    }

    /// Show or hide (gone) a child. Hidden children are skipped by measure,
    /// draw and focus.
    pub fn set_child_visible(&mut self, id: ChildId, visible: bool) -> Result<()> {
        let index = self
            .core
            .index_of(id)
            .ok_or(PanelError::UnknownChild { child: id })?;
        let child = &mut self.core.children[index];
        if child.visible != visible {
            child.visible = visible;
            self.core.request_layout();
            self.core.invalidate();
        }
        Ok(())
    }

    pub fn child(&self, id: ChildId) -> Option<&Child> {
        self.core.index_of(id).map(|index| &self.core.children[index])
    }

    pub fn children(&self) -> &[Child] {
        &self.core.children
    }

    /// The first child carrying the panel role.
    pub fn find_panel(&self) -> Option<&Child> {
        self.core.panel()
    }

    /// The first child carrying the content role.
    pub fn find_content(&self) -> Option<&Child> {
        self.core.content()
    }

    /// Topmost child whose bounds contain the point (half-open).
    pub fn find_top_child_under(&self, x: f32, y: f32) -> Option<ChildId> {
        self.core.find_top_child_under(x, y)
    }

    // -- Listeners --

    /// Register a listener. Listeners are notified last-registered first.
    pub fn add_listener(&mut self, listener: Box<dyn DrawerListener>) -> ListenerId {
        self.core.listeners.add(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let removed = self.core.listeners.remove(id).is_some();
        if !removed {
            tracing::warn!("Tried to remove unknown listener {:?}", id);
        }
        removed
    }

    /// Replace the single primary listener, leaving added listeners alone.
    pub fn set_listener(&mut self, listener: Option<Box<dyn DrawerListener>>) -> Option<ListenerId> {
        self.core.listeners.set_listener(listener)
    }

    // -- Open/close protocol --

    /// Open the panel.
    pub fn open(&mut self, animate: bool) -> Result<()> {
        let panel = self.require_any_panel()?;
        self.open_panel(panel, animate)
    }

    /// Close the panel.
    pub fn close(&mut self, animate: bool) -> Result<()> {
        let panel = self.require_any_panel()?;
        self.close_panel(panel, animate)
    }

    /// Open a specific panel child.
    ///
    /// Before the first layout the panel simply starts open. An animated
    /// open starts a settle; otherwise the children jump to their open
    /// positions and the opened notification fires at once.
    pub fn open_panel(&mut self, id: ChildId, animate: bool) -> Result<()> {
        let index = self.core.require_panel(id)?;

        if self.core.first_layout {
            let slide = &mut self.core.children[index].slide;
            slide.on_screen = 1.0;
            slide.open_state = OpenState::OPENED;
            VisibilityManager::update(&mut self.core.children, id, true);
            tracing::debug!("Panel {} starts open", id);
        } else if animate {
            self.core.children[index].slide.open_state |= OpenState::OPENING;
            let width = self.core.children[index].bounds.width;
            self.slide_content_to(id, width);
        } else {
            self.dragger.abort(&mut self.core);
            self.core.move_panel_to_offset(false);
            let derived = self.dragger.drag_state();
            self.core.update_drawer_state(derived, DragState::Idle, Some(id));
        }

        self.core.invalidate();
        Ok(())
    }

    /// Close a specific panel child. Mirrors [`open_panel`](Self::open_panel).
    pub fn close_panel(&mut self, id: ChildId, animate: bool) -> Result<()> {
        let index = self.core.require_panel(id)?;

        if self.core.first_layout {
            let slide = &mut self.core.children[index].slide;
            slide.on_screen = DRAWER_ON_SCREEN;
            slide.open_state = OpenState::empty();
            VisibilityManager::update(&mut self.core.children, id, false);
            tracing::debug!("Panel {} starts closed", id);
        } else if animate {
            self.core.children[index].slide.open_state |= OpenState::CLOSING;
            self.slide_content_to(id, 0);
        } else {
            self.dragger.abort(&mut self.core);
            self.core.move_panel_to_offset(true);
            let derived = self.dragger.drag_state();
            self.core.update_drawer_state(derived, DragState::Idle, Some(id));
        }

        self.core.invalidate();
        Ok(())
    }

    fn slide_content_to(&mut self, panel: ChildId, left: i32) {
        let Some((content, top)) = self.core.content().map(|content| (content.id, content.top()))
        else {
            tracing::warn!("No content child to slide, moving panel {} directly", panel);
            self.core.move_panel_to_offset(left == 0);
            let derived = self.dragger.drag_state();
            self.core.update_drawer_state(derived, DragState::Idle, Some(panel));
            return;
        };

        if self.dragger.smooth_slide_to(content, left, top, &mut self.core) {
            self.core.host.push(HostEvent::RequestFrame);
        } else {
            // Already there: settle the protocol flags right away.
            let derived = self.dragger.drag_state();
            self.core.update_drawer_state(derived, DragState::Idle, Some(panel));
        }
    }

    fn require_any_panel(&self) -> Result<ChildId> {
        self.core.panel().map(Child::id).ok_or(PanelError::NoPanel)
    }

    /// Whether the panel is fully open. `false` without a panel.
    pub fn is_open(&self) -> bool {
        self.core.panel().is_some_and(|panel| panel.slide.is_opened())
    }

    /// Whether any part of the panel is revealed. `false` without a panel.
    pub fn is_visible(&self) -> bool {
        self.core.panel().is_some_and(|panel| panel.slide.is_visible())
    }

    pub fn is_panel_open(&self, id: ChildId) -> Result<bool> {
        let index = self.core.require_panel(id)?;
        Ok(self.core.children[index].slide.is_opened())
    }

    pub fn is_panel_visible(&self, id: ChildId) -> Result<bool> {
        let index = self.core.require_panel(id)?;
        Ok(self.core.children[index].slide.is_visible())
    }

    /// Current panel offset in `[0.5, 1.0]`, or 0 without a panel.
    pub fn panel_offset(&self) -> f32 {
        self.core.offset_of(self.core.panel_index())
    }

    /// Set a panel's offset directly, clamped to `[0.5, 1.0]`.
    ///
    /// Slide listeners fire when the stored value changes. Positions are
    /// applied on the next layout pass.
    pub fn set_panel_offset(&mut self, id: ChildId, offset: f32) -> Result<()> {
        let index = self.core.require_panel(id)?;
        self.core.set_offset(index, offset);
        self.core.request_layout();
        Ok(())
    }

    pub fn drawer_state(&self) -> DrawerState {
        self.core.drawer_state
    }

    // -- Persistence and lifecycle --

    /// Snapshot the open state. A panel resting open or mid-open is saved.
    pub fn save_state(&self) -> SavedState {
        let reopen = self
            .core
            .children
            .iter()
            .any(|child| child.is_panel() && child.slide.wants_reopen());
        if reopen {
            SavedState::open_at(EdgeFlags::LEFT)
        } else {
            SavedState::closed()
        }
    }

    /// Reopen the panel if `state` says so. Without a panel yet, the reopen
    /// is deferred until one is attached.
    pub fn restore_state(&mut self, state: SavedState) -> Result<()> {
        let Some(edge) = state.open_panel_edge.filter(|_| state.should_reopen()) else {
            return Ok(());
        };
        match self.core.panel().map(Child::id) {
            Some(panel) => {
                tracing::debug!("Restoring open panel {}", panel);
                self.open_panel(panel, true)
            }
            None => {
                tracing::debug!("No panel yet, deferring restore");
                self.core.pending_restore = Some(edge);
                Ok(())
            }
        }
    }

    /// The container was attached to a window. The next layout is a first layout.
    pub fn on_attached(&mut self) {
        self.core.first_layout = true;
    }

    pub fn on_detached(&mut self) {
        self.core.first_layout = true;
    }

    /// Window focus changes decide whether open/close posts window-state events.
    pub fn set_window_focused(&mut self, focused: bool) {
        self.core.window_focused = focused;
    }

    // -- Focus and accessibility --

    /// Children eligible for focus traversal: the open panel while one is
    /// open, otherwise every visible non-panel child.
    pub fn focusable_children(&self) -> Vec<ChildId> {
        let children = self.core.children.iter().filter(|child| child.visible);
        if self.core.find_open_panel().is_some() {
            children
                .filter(|child| child.slide.is_opened())
                .map(Child::id)
                .collect()
        } else {
            children
                .filter(|child| !child.is_panel())
                .map(Child::id)
                .collect()
        }
    }

    /// Children not hidden from assistive technology, in child order.
    pub fn accessible_children(&self) -> Vec<ChildId> {
        VisibilityManager::accessible_children(&self.core.children)
    }

    pub fn accessibility_node_info(&self) -> AccessibilityNodeInfo {
        VisibilityManager::node_info(&self.core.children)
    }

    // -- Scrim, host events --

    pub fn set_scrim_color(&mut self, color: Color) {
        self.core.set_scrim_color(color);
    }

    /// Largest child offset as sampled by the last [`on_frame`](Self::on_frame).
    pub fn scrim_opacity(&self) -> f32 {
        self.core.scrim_opacity
    }

    /// Whether a descendant has asked not to be intercepted during the
    /// current gesture.
    pub fn is_intercept_disallowed(&self) -> bool {
        self.core.disallow_intercept_requested
    }

    /// Whether a layout pass has been requested and not yet popped.
    pub fn needs_layout(&self) -> bool {
        self.core.host.contains(HostEvent::RequestLayout)
    }

    /// Drain the requests queued for the host since the last call.
    pub fn pop_events(&mut self) -> Vec<HostEvent> {
        self.core.host.pop_all()
    }
}
