//! Requests from the container to its host.
//!
//! The container runs headless; everything it needs from the windowing
//! side is queued here and popped by the host with
//! [`PanelContainer::pop_events`](crate::PanelContainer::pop_events).

use crate::child::ChildId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// Run measure + layout again.
    RequestLayout,
    /// Repaint without layout.
    Invalidate,
    /// Call the frame hook again on the next animation frame.
    RequestFrame,
    /// Give input focus to a child.
    RequestFocus(ChildId),
    /// Accessibility window-state-changed, sent from the window root.
    RootWindowStateChanged,
    /// Accessibility window-state-changed, sent from the container.
    WindowStateChanged,
    /// Send a cancel to every child's in-flight gesture.
    CancelChildTouches,
    /// Forward a disallow-intercept request to the container's parent.
    DisallowParentIntercept(bool),
}

#[derive(Debug, Default)]
pub(crate) struct HostQueue {
    events: Vec<HostEvent>,
}

impl HostQueue {
    pub(crate) fn push(&mut self, event: HostEvent) {
        // Repeated invalidations within a frame collapse into one.
        if matches!(event, HostEvent::Invalidate | HostEvent::RequestLayout | HostEvent::RequestFrame)
            && self.events.last() == Some(&event)
        {
            return;
        }
        self.events.push(event);
    }

    pub(crate) fn pop_all(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn contains(&self, event: HostEvent) -> bool {
        self.events.contains(&event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consecutive_repaints_collapse() {
        let mut queue = HostQueue::default();
        queue.push(HostEvent::Invalidate);
        queue.push(HostEvent::Invalidate);
        queue.push(HostEvent::RequestLayout);
        queue.push(HostEvent::Invalidate);
        assert_eq!(
            queue.pop_all(),
            vec![HostEvent::Invalidate, HostEvent::RequestLayout, HostEvent::Invalidate]
        );
        assert!(queue.pop_all().is_empty());
    }

    #[test]
    fn test_focus_requests_are_kept() {
        let mut queue = HostQueue::default();
        let id = ChildId::new("panel");
        queue.push(HostEvent::RequestFocus(id));
        queue.push(HostEvent::RequestFocus(id));
        assert!(queue.contains(HostEvent::RequestFocus(id)));
        assert_eq!(queue.pop_all().len(), 2);
    }
}
