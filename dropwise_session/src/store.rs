// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag session store and its subscription protocol.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use crate::error::SessionError;
use crate::item::{DragInfo, DragItem, DragKind, LayerKey};
use crate::registry::{ScrollRegistration, ScrollRegistry};

/// Identifies a subscription for [`SessionStore::unsubscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// The item and position of the drag in flight.
#[derive(Debug, PartialEq)]
pub struct ActiveDrag<K, D> {
    /// The dragged item.
    pub item: Rc<DragItem<K, D>>,
    /// Its last position.
    pub info: DragInfo,
}

/// Snapshot view handed to selectors.
#[derive(Debug)]
pub struct SessionState<K, D, C> {
    item: Option<Rc<DragItem<K, D>>>,
    drag_info: Option<DragInfo>,
    scroll: ScrollRegistry<C>,
    revision: u64,
}

impl<K, D, C> SessionState<K, D, C> {
    /// The dragged item, if a drag is active.
    ///
    /// Items are shared behind `Rc`; selectors that want "changed" to mean
    /// "a different drag" can compare with [`Rc::ptr_eq`].
    pub fn item(&self) -> Option<&Rc<DragItem<K, D>>> {
        self.item.as_ref()
    }

    /// The live drag position, if a drag is active.
    pub fn drag_info(&self) -> Option<&DragInfo> {
        self.drag_info.as_ref()
    }

    /// Returns `true` while a drag is in flight.
    pub fn is_active(&self) -> bool {
        self.item.is_some()
    }

    /// Monotonic counter bumped by every committed write.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The active item if it belongs to `kind` within `layer`.
    pub fn item_for(&self, kind: DragKind, layer: Option<LayerKey>) -> Option<&Rc<DragItem<K, D>>> {
        self.item.as_ref().filter(|item| item.matches(kind, layer))
    }
}

impl<K: PartialEq, D, C> SessionState<K, D, C> {
    /// Returns `true` if the item `id` of `kind` within `layer` is being dragged.
    pub fn is_dragging_item(&self, kind: DragKind, layer: Option<LayerKey>, id: &K) -> bool {
        self.item_for(kind, layer).is_some_and(|item| item.id == *id)
    }
}

impl<K, D, C: Copy + Eq + Hash> SessionState<K, D, C> {
    /// Registered scroll containers, innermost first.
    pub fn scroll_containers(&self) -> &[C] {
        self.scroll.containers()
    }
}

type Notify<K, D, C> = Box<dyn FnMut(&SessionState<K, D, C>)>;

struct Subscriber<K, D, C> {
    id: SubscriptionId,
    notify: Notify<K, D, C>,
}

/// Process-wide record of the drag in flight, owned by an engine instance.
///
/// Writes commit and then notify every subscriber synchronously, in
/// subscription order. A subscriber selects a slice of the state and is called
/// only when that slice changed under its equality; there is no batching, so
/// every pointer sample produces one notification pass.
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use kurbo::{Point, Rect};
/// use dropwise_session::{DragInfo, DragItem, DragKind, SessionStore};
///
/// let mut store: SessionStore<u32, (), u8> = SessionStore::new();
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = seen.clone();
/// store.subscribe(
///     |s| s.drag_info().map(|i| i.current_pos),
///     move |pos| sink.borrow_mut().push(*pos),
/// );
///
/// let info = DragInfo::from_grab(
///     Point::new(0.0, 0.0),
///     Point::new(5.0, 0.0),
///     Rect::new(0.0, 0.0, 10.0, 10.0),
///     false,
/// );
/// store.set_active(DragItem::new(1, DragKind("card"), ()), info).unwrap();
/// store.update_position(|i| i.follow_pointer(Point::new(9.0, 0.0)));
/// store.clear();
///
/// assert_eq!(
///     *seen.borrow(),
///     [Some(Point::new(5.0, 5.0)), Some(Point::new(9.0, 5.0)), None]
/// );
/// ```
pub struct SessionStore<K, D, C> {
    state: SessionState<K, D, C>,
    subscribers: Vec<Subscriber<K, D, C>>,
    next_subscription: u64,
}

impl<K: fmt::Debug, D: fmt::Debug, C: fmt::Debug> fmt::Debug for SessionStore<K, D, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl<K, D, C> Default for SessionStore<K, D, C> {
    fn default() -> Self {
        Self {
            state: SessionState {
                item: None,
                drag_info: None,
                scroll: ScrollRegistry::default(),
                revision: 0,
            },
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }
}

impl<K, D, C: Copy + Eq + Hash> SessionStore<K, D, C> {
    /// Creates an idle store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &SessionState<K, D, C> {
        &self.state
    }

    /// The dragged item, if any.
    pub fn item(&self) -> Option<&Rc<DragItem<K, D>>> {
        self.state.item()
    }

    /// The live drag position, if any.
    pub fn drag_info(&self) -> Option<&DragInfo> {
        self.state.drag_info()
    }

    /// Returns `true` while a drag is in flight.
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Starts a session.
    ///
    /// A second drag cannot start while one is in flight: overwriting the
    /// active item would break the in-flight offset math, so the call is
    /// rejected and the existing session is left untouched.
    pub fn set_active(&mut self, item: DragItem<K, D>, info: DragInfo) -> Result<(), SessionError> {
        if self.state.is_active() {
            return Err(SessionError::AlreadyActive);
        }
        tracing::debug!(kind = item.kind.0, layer = ?item.layer, "drag session started");
        self.state.item = Some(Rc::new(item));
        self.state.drag_info = Some(info);
        self.commit();
        Ok(())
    }

    /// Updates the active drag position. Returns `false` (and notifies no one)
    /// if no drag is active.
    pub fn update_position(&mut self, update: impl FnOnce(&mut DragInfo)) -> bool {
        let Some(info) = self.state.drag_info.as_mut() else {
            return false;
        };
        update(info);
        self.commit();
        true
    }

    /// Ends the session, returning what was being dragged.
    pub fn clear(&mut self) -> Option<ActiveDrag<K, D>> {
        let item = self.state.item.take();
        let info = self.state.drag_info.take();
        let ended = item.zip(info).map(|(item, info)| ActiveDrag { item, info });
        if ended.is_some() {
            tracing::debug!("drag session cleared");
            self.commit();
        }
        ended
    }

    /// Registers a chain of scroll containers (innermost first).
    pub fn register_scroll_containers(&mut self, chain: &[C]) -> ScrollRegistration {
        let (registration, changed) = self.state.scroll.register(chain);
        if changed {
            self.commit();
        }
        registration
    }

    /// Releases a chain registered with
    /// [`register_scroll_containers`](Self::register_scroll_containers).
    pub fn unregister_scroll_containers(&mut self, registration: ScrollRegistration) {
        if self.state.scroll.unregister(registration) {
            self.commit();
        }
    }

    /// Registered scroll containers, innermost first.
    pub fn scroll_containers(&self) -> &[C] {
        self.state.scroll_containers()
    }

    /// Subscribes `listener` to the slice picked by `selector`, compared with
    /// `PartialEq`.
    pub fn subscribe<S, F, L>(&mut self, selector: F, listener: L) -> SubscriptionId
    where
        K: 'static,
        D: 'static,
        C: 'static,
        S: PartialEq + 'static,
        F: Fn(&SessionState<K, D, C>) -> S + 'static,
        L: FnMut(&S) + 'static,
    {
        self.subscribe_with(selector, <S as PartialEq>::eq, listener)
    }

    /// Subscribes `listener` to the slice picked by `selector`, compared with
    /// `eq`.
    ///
    /// The selector runs once now to capture the baseline; the listener is
    /// not called until the slice changes.
    pub fn subscribe_with<S, F, E, L>(&mut self, selector: F, eq: E, mut listener: L) -> SubscriptionId
    where
        K: 'static,
        D: 'static,
        C: 'static,
        S: 'static,
        F: Fn(&SessionState<K, D, C>) -> S + 'static,
        E: Fn(&S, &S) -> bool + 'static,
        L: FnMut(&S) + 'static,
    {
        let mut last = selector(&self.state);
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push(Subscriber {
            id,
            notify: Box::new(move |state| {
                let next = selector(state);
                if !eq(&last, &next) {
                    last = next;
                    listener(&last);
                }
            }),
        });
        id
    }

    /// Removes a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() != before
    }

    fn commit(&mut self) {
        self.state.revision += 1;
        for subscriber in &mut self.subscribers {
            (subscriber.notify)(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use core::cell::RefCell;
    use kurbo::{Point, Rect};

    const CARD: DragKind = DragKind("card");

    fn info() -> DragInfo {
        DragInfo::from_grab(
            Point::new(100.0, 100.0),
            Point::new(100.0, 100.0),
            Rect::new(60.0, 80.0, 160.0, 130.0),
            false,
        )
    }

    #[test]
    fn second_begin_is_rejected_without_touching_state() {
        let mut store: SessionStore<u32, (), u8> = SessionStore::new();
        store.set_active(DragItem::new(1, CARD, ()), info()).unwrap();
        let err = store.set_active(DragItem::new(2, CARD, ()), info());
        assert_eq!(err, Err(SessionError::AlreadyActive));
        assert_eq!(store.item().unwrap().id, 1);
    }

    #[test]
    fn update_without_drag_is_a_noop() {
        let mut store: SessionStore<u32, (), u8> = SessionStore::new();
        let rev = store.state().revision();
        assert!(!store.update_position(|i| i.follow_pointer(Point::ZERO)));
        assert!(store.clear().is_none());
        assert_eq!(store.state().revision(), rev);
    }

    #[test]
    fn subscribers_fire_in_registration_order_on_change_only() {
        let log = Rc::new(RefCell::new(vec![]));
        let mut store: SessionStore<u32, (), u8> = SessionStore::new();
        let a = log.clone();
        store.subscribe(|s| s.is_active(), move |_| a.borrow_mut().push("active"));
        let b = log.clone();
        store.subscribe(
            |s| s.drag_info().map(|i| i.current_pos),
            move |_| b.borrow_mut().push("pos"),
        );

        store.set_active(DragItem::new(1, CARD, ()), info()).unwrap();
        assert_eq!(*log.borrow(), ["active", "pos"]);

        // Same position: only the revision changes, nobody is told.
        store.update_position(|i| i.follow_pointer(Point::new(100.0, 100.0)));
        assert_eq!(log.borrow().len(), 2);

        store.update_position(|i| i.follow_pointer(Point::new(120.0, 100.0)));
        assert_eq!(*log.borrow(), ["active", "pos", "pos"]);
    }

    #[test]
    fn identity_selector_sees_each_new_drag() {
        let count = Rc::new(RefCell::new(0));
        let mut store: SessionStore<u32, (), u8> = SessionStore::new();
        let c = count.clone();
        store.subscribe_with(
            |s| s.item().cloned(),
            |a, b| match (a, b) {
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            },
            move |_| *c.borrow_mut() += 1,
        );
        store.set_active(DragItem::new(1, CARD, ()), info()).unwrap();
        store.update_position(|i| i.follow_pointer(Point::new(1.0, 1.0)));
        store.clear();
        store.set_active(DragItem::new(1, CARD, ()), info()).unwrap();
        assert_eq!(*count.borrow(), 3);
    }

    #[test]
    fn unsubscribed_listeners_stay_quiet() {
        let count = Rc::new(RefCell::new(0));
        let mut store: SessionStore<u32, (), u8> = SessionStore::new();
        let c = count.clone();
        let id = store.subscribe(|s| s.revision(), move |_| *c.borrow_mut() += 1);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set_active(DragItem::new(1, CARD, ()), info()).unwrap();
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn scroll_registration_notifies_only_on_membership_change() {
        let count = Rc::new(RefCell::new(0));
        let mut store: SessionStore<u32, (), u8> = SessionStore::new();
        let c = count.clone();
        store.subscribe(
            |s| s.scroll_containers().to_vec(),
            move |_| *c.borrow_mut() += 1,
        );
        let a = store.register_scroll_containers(&[1, 0]);
        let b = store.register_scroll_containers(&[1, 0]);
        assert_eq!(*count.borrow(), 1);
        store.unregister_scroll_containers(a);
        assert_eq!(*count.borrow(), 1);
        store.unregister_scroll_containers(b);
        assert_eq!(*count.borrow(), 2);
        assert!(store.scroll_containers().is_empty());
    }

    #[test]
    fn item_filters_respect_kind_and_layer() {
        let mut store: SessionStore<u32, (), u8> = SessionStore::new();
        store
            .set_active(
                DragItem::new(7, CARD, ()).with_layer(Some(LayerKey(1))),
                info(),
            )
            .unwrap();
        let state = store.state();
        assert!(state.item_for(CARD, Some(LayerKey(1))).is_some());
        assert!(state.item_for(CARD, None).is_none());
        assert!(state.is_dragging_item(CARD, Some(LayerKey(1)), &7));
        assert!(!state.is_dragging_item(CARD, Some(LayerKey(1)), &8));
    }
}
