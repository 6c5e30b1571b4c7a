//! Container state shared by layout, gesture handling and the public API.
//!
//! Everything except the drag controller lives here so the controller can
//! be handed `&mut ContainerCore` as its [`DragCallback`](crate::DragCallback)
//! while the container still owns both.

use slideout_core::Color;
use slideout_core::geometry::Size;
use slideout_core::math::Vec2;

use crate::child::{Child, ChildId};
use crate::config::PanelConfig;
use crate::drag::{DragState, EdgeFlags};
use crate::error::{PanelError, Result};
use crate::host::{HostEvent, HostQueue};
use crate::listener::ListenerRegistry;
use crate::offset::{Checkpoint, DRAWER_ON_SCREEN, OpenState};
use crate::visibility::VisibilityManager;

#[derive(Debug)]
pub(crate) struct ContainerCore {
    pub(crate) config: PanelConfig,
    pub(crate) children: Vec<Child>,
    pub(crate) listeners: ListenerRegistry,
    pub(crate) host: HostQueue,
    /// Size from the last measure pass.
    pub(crate) size: Size<i32>,
    pub(crate) drawer_state: DragState,
    /// Largest `on_screen` among children, sampled by the frame hook.
    pub(crate) scrim_opacity: f32,
    pub(crate) in_layout: bool,
    pub(crate) first_layout: bool,
    pub(crate) disallow_intercept_requested: bool,
    pub(crate) children_canceled_touch: bool,
    pub(crate) initial_motion: Vec2,
    pub(crate) window_focused: bool,
    pub(crate) pending_restore: Option<EdgeFlags>,
}

impl ContainerCore {
    pub(crate) fn new(config: PanelConfig) -> Self {
        ContainerCore {
            config,
            children: Vec::new(),
            listeners: ListenerRegistry::new(),
            host: HostQueue::default(),
            size: Size::new(0, 0),
            drawer_state: DragState::Idle,
            scrim_opacity: 0.0,
            in_layout: false,
            first_layout: true,
            disallow_intercept_requested: false,
            children_canceled_touch: false,
            initial_motion: Vec2::ZERO,
            window_focused: false,
            pending_restore: None,
        }
    }

    pub(crate) fn index_of(&self, id: ChildId) -> Option<usize> {
        self.children.iter().position(|child| child.id == id)
    }

    pub(crate) fn panel_index(&self) -> Option<usize> {
        self.children.iter().position(Child::is_panel)
    }

    pub(crate) fn content_index(&self) -> Option<usize> {
        self.children.iter().position(Child::is_content)
    }

    pub(crate) fn panel(&self) -> Option<&Child> {
        self.panel_index().map(|index| &self.children[index])
    }

    pub(crate) fn content(&self) -> Option<&Child> {
        self.content_index().map(|index| &self.children[index])
    }

    /// Index of `id`, which must be an attached panel.
    pub(crate) fn require_panel(&self, id: ChildId) -> Result<usize> {
        let index = self
            .index_of(id)
            .ok_or(PanelError::UnknownChild { child: id })?;
        if !self.children[index].is_panel() {
            return Err(PanelError::NotAPanel { child: id });
        }
        Ok(index)
    }

    pub(crate) fn find_open_panel(&self) -> Option<ChildId> {
        self.children
            .iter()
            .find(|child| child.slide.is_opened())
            .map(Child::id)
    }

    pub(crate) fn find_visible_panel(&self) -> Option<ChildId> {
        self.children
            .iter()
            .find(|child| child.is_panel() && child.slide.is_visible())
            .map(Child::id)
    }

    pub(crate) fn max_on_screen(&self) -> f32 {
        self.children
            .iter()
            .map(|child| child.slide.on_screen)
            .fold(0.0, f32::max)
    }

    /// Offset of `index`, or 0 when there is no such child.
    pub(crate) fn offset_of(&self, index: Option<usize>) -> f32 {
        index.map_or(0.0, |index| self.children[index].slide.on_screen)
    }

    /// Store a clamped offset and notify listeners if it changed.
    pub(crate) fn set_offset(&mut self, index: usize, offset: f32) {
        let child = &mut self.children[index];
        if let Some(stored) = child.slide.set_offset(offset) {
            let id = child.id;
            tracing::trace!("Panel {} offset -> {:.4}", id, stored);
            self.listeners.dispatch_slide(id, stored);
        }
    }

    pub(crate) fn request_layout(&mut self) {
        if !self.in_layout {
            self.host.push(HostEvent::RequestLayout);
        }
    }

    pub(crate) fn invalidate(&mut self) {
        self.host.push(HostEvent::Invalidate);
    }

    pub(crate) fn set_scrim_color(&mut self, color: Color) {
        self.config.scrim_color = color;
        self.invalidate();
    }

    /// Jump panel and content to the collapsed or fully open position
    /// without a layout pass.
    pub(crate) fn move_panel_to_offset(&mut self, collapse: bool) {
        let Some(panel) = self.panel_index() else {
            return;
        };

        let width = self.children[panel].bounds.width;
        let (panel_target, content_target) = if collapse {
            ((width as f32 * DRAWER_ON_SCREEN) as i32 - width, 0)
        } else {
            (0, width)
        };

        let panel_left = self.children[panel].bounds.left();
        self.children[panel].bounds.offset(panel_target - panel_left, 0);
        if let Some(content) = self.content_index() {
            let content_left = self.children[content].bounds.left();
            self.children[content]
                .bounds
                .offset(content_target - content_left, 0);
        }

        self.set_offset(panel, if collapse { DRAWER_ON_SCREEN } else { 1.0 });
    }

    /// Mirror the controller's state and, when `active_state` is idle, run
    /// the open/closed checkpoint for `active_panel`.
    pub(crate) fn update_drawer_state(
        &mut self,
        derived: DragState,
        active_state: DragState,
        active_panel: Option<ChildId>,
    ) {
        if active_state == DragState::Idle
            && let Some(index) = active_panel.and_then(|id| self.index_of(id))
        {
            match self.children[index].slide.checkpoint() {
                Checkpoint::Closed => self.dispatch_closed(index),
                Checkpoint::Open => self.dispatch_opened(index),
                Checkpoint::Between => {}
            }
        }

        if derived != self.drawer_state {
            tracing::trace!("Drawer state {:?} -> {:?}", self.drawer_state, derived);
            self.drawer_state = derived;
            self.listeners.dispatch_state_changed(derived);
        }
    }

    fn dispatch_closed(&mut self, index: usize) {
        let child = &mut self.children[index];
        let was_opened = child.slide.is_opened();
        child.slide.open_state = OpenState::empty();
        if !was_opened {
            return;
        }

        let id = child.id;
        tracing::debug!("Panel {} closed", id);
        self.listeners.dispatch_closed(id);
        VisibilityManager::update(&mut self.children, id, false);

        if self.window_focused {
            self.host.push(HostEvent::RootWindowStateChanged);
        }
    }

    fn dispatch_opened(&mut self, index: usize) {
        let child = &mut self.children[index];
        let was_opened = child.slide.is_opened();
        child.slide.open_state = OpenState::OPENED;
        if was_opened {
            return;
        }

        let id = child.id;
        tracing::debug!("Panel {} opened", id);
        self.listeners.dispatch_opened(id);
        VisibilityManager::update(&mut self.children, id, true);

        if self.window_focused {
            self.host.push(HostEvent::WindowStateChanged);
        }
        self.host.push(HostEvent::RequestFocus(id));
    }

    /// Cancel in-flight child gestures once per gesture.
    pub(crate) fn cancel_child_touches(&mut self) {
        if !self.children_canceled_touch {
            self.host.push(HostEvent::CancelChildTouches);
            self.children_canceled_touch = true;
        }
    }

    pub(crate) fn reset_touch_flags(&mut self) {
        self.disallow_intercept_requested = false;
        self.children_canceled_touch = false;
    }

    pub(crate) fn find_top_child_under(&self, x: f32, y: f32) -> Option<ChildId> {
        let (x, y) = (x.floor() as i32, y.floor() as i32);
        self.children
            .iter()
            .rev()
            .find(|child| child.bounds.contains(x, y))
            .map(Child::id)
    }
}
