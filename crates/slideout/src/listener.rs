//! Ordered multicast of drawer events.
//!
//! Listeners are notified last-registered-first. A listener may unsubscribe
//! itself by returning [`Subscription::Unsubscribe`] from any callback; the
//! removal is queued and applied once the current dispatch has finished, so
//! earlier-registered listeners still see the event.

use crate::child::ChildId;
use crate::drag::DragState;

/// Returned by listener callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Subscription {
    #[default]
    Keep,
    Unsubscribe,
}

/// An event delivered to listeners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawerEvent {
    Slide { panel: ChildId, offset: f32 },
    Opened { panel: ChildId },
    Closed { panel: ChildId },
    StateChanged { state: DragState },
}

/// Observer of panel movement and state.
///
/// All methods default to doing nothing, so implementors only override what
/// they care about.
pub trait DrawerListener {
    fn on_slide(&mut self, _panel: ChildId, _offset: f32) -> Subscription {
        Subscription::Keep
    }

    fn on_opened(&mut self, _panel: ChildId) -> Subscription {
        Subscription::Keep
    }

    fn on_closed(&mut self, _panel: ChildId) -> Subscription {
        Subscription::Keep
    }

    fn on_state_changed(&mut self, _state: DragState) -> Subscription {
        Subscription::Keep
    }
}

/// Closures receive every event.
impl<F> DrawerListener for F
where
    F: FnMut(DrawerEvent) -> Subscription,
{
    fn on_slide(&mut self, panel: ChildId, offset: f32) -> Subscription {
        self(DrawerEvent::Slide { panel, offset })
    }

    fn on_opened(&mut self, panel: ChildId) -> Subscription {
        self(DrawerEvent::Opened { panel })
    }

    fn on_closed(&mut self, panel: ChildId) -> Subscription {
        self(DrawerEvent::Closed { panel })
    }

    fn on_state_changed(&mut self, state: DragState) -> Subscription {
        self(DrawerEvent::StateChanged { state })
    }
}

/// Handle returned on registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Registry of drawer listeners.
#[derive(Default)]
pub struct ListenerRegistry {
    entries: Vec<(ListenerId, Box<dyn DrawerListener>)>,
    next_id: u64,
    /// Listener installed via [`set_listener`](Self::set_listener).
    primary: Option<ListenerId>,
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("len", &self.entries.len())
            .field("primary", &self.primary)
            .finish()
    }
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, listener: Box<dyn DrawerListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub fn remove(&mut self, id: ListenerId) -> Option<Box<dyn DrawerListener>> {
        if self.primary == Some(id) {
            self.primary = None;
        }
        let index = self.entries.iter().position(|(entry, _)| *entry == id)?;
        Some(self.entries.remove(index).1)
    }

    /// Replace the single listener previously installed through this method.
    ///
    /// Listeners added with [`add`](Self::add) are unaffected.
    pub fn set_listener(&mut self, listener: Option<Box<dyn DrawerListener>>) -> Option<ListenerId> {
        if let Some(previous) = self.primary.take() {
            self.remove(previous);
        }
        self.primary = listener.map(|listener| self.add(listener));
        self.primary
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|(entry, _)| *entry == id)
    }

    pub(crate) fn dispatch_slide(&mut self, panel: ChildId, offset: f32) {
        self.dispatch(|listener| listener.on_slide(panel, offset));
    }

    pub(crate) fn dispatch_opened(&mut self, panel: ChildId) {
        self.dispatch(|listener| listener.on_opened(panel));
    }

    pub(crate) fn dispatch_closed(&mut self, panel: ChildId) {
        self.dispatch(|listener| listener.on_closed(panel));
    }

    pub(crate) fn dispatch_state_changed(&mut self, state: DragState) {
        self.dispatch(|listener| listener.on_state_changed(state));
    }

    fn dispatch<F>(&mut self, mut notify: F)
    where
        F: FnMut(&mut dyn DrawerListener) -> Subscription,
    {
        let mut unsubscribed = Vec::new();
        for (id, listener) in self.entries.iter_mut().rev() {
            if notify(listener.as_mut()) == Subscription::Unsubscribe {
                unsubscribed.push(*id);
            }
        }
        for id in unsubscribed {
            tracing::trace!("Listener {:?} unsubscribed during dispatch", id);
            self.remove(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder(tag: &'static str, log: &Rc<RefCell<Vec<&'static str>>>) -> Box<dyn DrawerListener> {
        let log = Rc::clone(log);
        Box::new(move |_event: DrawerEvent| {
            log.borrow_mut().push(tag);
            Subscription::Keep
        })
    }

    #[test]
    fn test_last_registered_first() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ListenerRegistry::new();
        registry.add(recorder("first", &log));
        registry.add(recorder("second", &log));
        registry.add(recorder("third", &log));

        registry.dispatch_opened(ChildId::new("panel"));

        assert_eq!(*log.borrow(), vec!["third", "second", "first"]);
    }

    #[test]
    fn test_self_removal_does_not_skip_others() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ListenerRegistry::new();
        registry.add(recorder("first", &log));
        let once_log = Rc::clone(&log);
        registry.add(Box::new(move |_event: DrawerEvent| {
            once_log.borrow_mut().push("once");
            Subscription::Unsubscribe
        }));
        registry.add(recorder("third", &log));

        registry.dispatch_closed(ChildId::new("panel"));
        assert_eq!(*log.borrow(), vec!["third", "once", "first"]);
        assert_eq!(registry.len(), 2);

        log.borrow_mut().clear();
        registry.dispatch_closed(ChildId::new("panel"));
        assert_eq!(*log.borrow(), vec!["third", "first"]);
    }

    #[test]
    fn test_default_methods_keep() {
        struct OnlyOpened(u32);
        impl DrawerListener for OnlyOpened {
            fn on_opened(&mut self, _panel: ChildId) -> Subscription {
                self.0 += 1;
                Subscription::Keep
            }
        }

        let mut registry = ListenerRegistry::new();
        registry.add(Box::new(OnlyOpened(0)));
        registry.dispatch_slide(ChildId::new("p"), 0.7);
        registry.dispatch_state_changed(DragState::Settling);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_set_listener_replaces_previous() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ListenerRegistry::new();
        let added = registry.add(recorder("added", &log));
        registry.set_listener(Some(recorder("a", &log)));
        registry.set_listener(Some(recorder("b", &log)));
        assert_eq!(registry.len(), 2);

        registry.dispatch_opened(ChildId::new("p"));
        assert_eq!(*log.borrow(), vec!["b", "added"]);

        registry.set_listener(None);
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(added));
    }

    #[test]
    fn test_remove_unknown() {
        let mut registry = ListenerRegistry::new();
        let id = registry.add(Box::new(|_event: DrawerEvent| Subscription::Keep));
        assert!(registry.remove(id).is_some());
        assert!(registry.remove(id).is_none());
        assert!(registry.is_empty());
    }
}
