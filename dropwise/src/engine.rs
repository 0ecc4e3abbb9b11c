// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag engine: one session, its drop zones and autoscroll.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use dropwise_autoscroll::{Autoscroller, ScrollNode};
use dropwise_geometry::{
    GeometrySignal, GeometryTracker, RectListener, ScrollContainer, VisibleRect,
};
use dropwise_session::{
    DragInfo, DragItem, ScrollRegistration, SessionState, SessionStore, SubscriptionId,
};
use dropwise_zones::{DropZone, Resolution, ZoneId, ZoneRegistry};
use hashbrown::HashMap;
use kurbo::{Point, Rect};

use crate::config::{EngineConfig, Key};
use crate::error::DragError;
use crate::host::DragHost;

/// Geometry of a zone that matches the active drag.
struct ZoneGeometry<N> {
    tracker: GeometryTracker<N>,
    registration: ScrollRegistration,
}

/// Coordinates one drag at a time across drop zones and scroll containers.
///
/// The engine owns the [`SessionStore`], the [`ZoneRegistry`], the geometry
/// trackers of every zone that matches the active drag, a tracker per
/// registered scroll container, and the [`Autoscroller`]. Every method that
/// can change what is on screen takes the host, so the engine never holds on
/// to it.
///
/// Each committed position runs, in order:
///
/// 1. the session store's subscribers;
/// 2. the drop zone resolver, hit testing the element centre;
/// 3. autoscroll selection, hit testing the raw pointer.
///
/// Zone callbacks and store subscribers receive values, not the engine, so
/// nothing re-enters it while a pass is running.
pub struct DragEngine<N, K, D> {
    config: EngineConfig,
    store: SessionStore<K, D, ScrollContainer<N>>,
    zones: ZoneRegistry<N, K, D>,
    zone_geometry: HashMap<ZoneId, ZoneGeometry<N>>,
    rect_listeners: HashMap<ZoneId, RectListener>,
    containers: HashMap<ScrollContainer<N>, GeometryTracker<N>>,
    autoscroll: Autoscroller<ScrollContainer<N>>,
}

impl<N: fmt::Debug, K: fmt::Debug, D: fmt::Debug> fmt::Debug for DragEngine<N, K, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragEngine")
            .field("config", &self.config)
            .field("store", &self.store)
            .field("zones", &self.zones)
            .field("tracked_zones", &self.zone_geometry.len())
            .field("containers", &self.containers.len())
            .field("autoscroll", &self.autoscroll)
            .finish_non_exhaustive()
    }
}

impl<N, K, D> Default for DragEngine<N, K, D>
where
    N: Copy + Eq + Hash + fmt::Debug,
{
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<N, K, D> DragEngine<N, K, D>
where
    N: Copy + Eq + Hash + fmt::Debug,
{
    /// Creates an idle engine.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            store: SessionStore::new(),
            zones: ZoneRegistry::new(),
            zone_geometry: HashMap::new(),
            rect_listeners: HashMap::new(),
            containers: HashMap::new(),
            autoscroll: Autoscroller::new(config.autoscroll),
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The session state.
    pub fn session(&self) -> &SessionState<K, D, ScrollContainer<N>> {
        self.store.state()
    }

    /// Returns `true` while a drag is in flight.
    pub fn is_dragging(&self) -> bool {
        self.store.is_active()
    }

    /// The dragged item, if any.
    pub fn active_item(&self) -> Option<&Rc<DragItem<K, D>>> {
        self.store.item()
    }

    /// The live drag position, if any.
    pub fn drag_info(&self) -> Option<&DragInfo> {
        self.store.drag_info()
    }

    /// Registered drop zones.
    pub fn zones(&self) -> &ZoneRegistry<N, K, D> {
        &self.zones
    }

    /// Returns `true` if the element is over zone `id`.
    pub fn is_over(&self, id: ZoneId) -> bool {
        self.zones.is_over(id)
    }

    /// The autoscroll state.
    pub fn autoscroll(&self) -> &Autoscroller<ScrollContainer<N>> {
        &self.autoscroll
    }

    /// Scroll containers that currently matter, innermost first.
    pub fn scroll_containers(&self) -> &[ScrollContainer<N>] {
        self.store.scroll_containers()
    }

    /// Starts a drag.
    ///
    /// `raw_start` is where the pointer went down, `raw_current` the sample
    /// that crossed the drag threshold, and `element` the grabbed node's
    /// bounding rectangle measured now. Positions published from here on are
    /// element centres. A drag already in flight is left untouched and the
    /// call fails.
    pub fn begin_drag<H: DragHost<N>>(
        &mut self,
        host: &mut H,
        item: DragItem<K, D>,
        raw_start: Point,
        raw_current: Point,
        element: Rect,
        is_touch: bool,
    ) -> Result<(), DragError> {
        let info = DragInfo::from_grab(raw_start, raw_current, element, is_touch);
        if let Err(err) = self.store.set_active(item, info) {
            tracing::warn!(%err, "drag start rejected");
            return Err(err.into());
        }
        self.sync_zone_geometry(&*host);
        self.resolve(false);
        self.update_autoscroll(host);
        Ok(())
    }

    /// Follows a raw pointer sample. Returns `false` if no drag is active.
    pub fn on_pointer_move<H: DragHost<N>>(&mut self, host: &mut H, raw: Point) -> bool {
        if !self.store.update_position(|info| info.follow_pointer(raw)) {
            return false;
        }
        self.resolve(false);
        self.update_autoscroll(host);
        true
    }

    /// Ends the drag by dropping the element where it is.
    ///
    /// The topmost zone under the element centre receives the drop; the
    /// session is cleared afterwards either way.
    pub fn on_pointer_up<H: DragHost<N>>(&mut self, host: &mut H) -> Resolution {
        if !self.store.is_active() {
            return Resolution::Miss;
        }
        let resolution = self.resolve(true);
        tracing::debug!(zone = ?resolution.zone(), "drag dropped");
        self.finish(host);
        resolution
    }

    /// A touch sequence was interrupted. The drag is dropped in place, like a
    /// touch end.
    pub fn on_touch_cancel<H: DragHost<N>>(&mut self, host: &mut H) -> Resolution {
        self.on_pointer_up(host)
    }

    /// Cancels the drag if `key` cancels under the configured
    /// [`CancelPolicy`](crate::CancelPolicy). Returns `true` if a drag was
    /// cancelled.
    pub fn on_key_down<H: DragHost<N>>(&mut self, host: &mut H, key: Key) -> bool {
        self.config.cancel_policy.cancels(key) && self.cancel(host)
    }

    /// Cancels the drag without dropping. Zones under the element receive a
    /// leave. Returns `false` if no drag was active.
    pub fn cancel<H: DragHost<N>>(&mut self, host: &mut H) -> bool {
        if !self.store.is_active() {
            return false;
        }
        tracing::debug!("drag cancelled");
        self.finish(host);
        true
    }

    /// Registers a drop zone, placing it by the host's stacking order.
    pub fn register_drop_zone<H: DragHost<N>>(
        &mut self,
        host: &mut H,
        zone: DropZone<N, K, D>,
    ) -> ZoneId {
        let id = self.zones.insert(zone, &*host);
        if self.store.is_active() {
            self.sync_zone_geometry(&*host);
            self.resolve(false);
            self.update_autoscroll(host);
        }
        id
    }

    /// Unregisters a drop zone. It receives no further callbacks, not even a
    /// leave.
    pub fn unregister_drop_zone<H: DragHost<N>>(
        &mut self,
        host: &mut H,
        id: ZoneId,
    ) -> Option<DropZone<N, K, D>> {
        let zone = self.zones.remove(id)?;
        self.rect_listeners.remove(&id);
        if let Some(geometry) = self.zone_geometry.remove(&id) {
            self.store.unregister_scroll_containers(geometry.registration);
            self.sync_containers(&*host);
            self.update_autoscroll(host);
        }
        Some(zone)
    }

    /// Registers extra scroll containers (innermost first) for autoscroll,
    /// independently of any drop zone.
    pub fn register_scroll_ancestors<H: DragHost<N>>(
        &mut self,
        host: &mut H,
        chain: &[ScrollContainer<N>],
    ) -> ScrollRegistration {
        let registration = self.store.register_scroll_containers(chain);
        self.sync_containers(&*host);
        self.update_autoscroll(host);
        registration
    }

    /// Releases containers registered with
    /// [`register_scroll_ancestors`](Self::register_scroll_ancestors).
    pub fn unregister_scroll_ancestors<H: DragHost<N>>(
        &mut self,
        host: &mut H,
        registration: ScrollRegistration,
    ) {
        self.store.unregister_scroll_containers(registration);
        self.sync_containers(&*host);
        self.update_autoscroll(host);
    }

    /// Registers the scroll ancestors of `node`, as a drop zone on it would.
    pub fn register_scroll_ancestors_of<H: DragHost<N>>(
        &mut self,
        host: &mut H,
        node: N,
    ) -> ScrollRegistration {
        let chain = dropwise_geometry::scroll_parents(&*host, node);
        self.register_scroll_ancestors(host, &chain)
    }

    /// Current visible rectangle of a zone, while a matching drag is active.
    pub fn query_rect(&self, id: ZoneId) -> Option<VisibleRect> {
        self.zone_geometry.get(&id).and_then(|g| g.tracker.rect())
    }

    /// Installs the single rectangle listener of a zone, returning the one it
    /// replaces.
    ///
    /// The listener receives the zone's rectangle whenever it changes while a
    /// matching drag is active, and `None` when tracking stops.
    pub fn set_rect_listener(&mut self, id: ZoneId, listener: RectListener) -> Option<RectListener> {
        match self.zone_geometry.get_mut(&id) {
            Some(geometry) => geometry.tracker.subscribe(listener),
            None => self.rect_listeners.insert(id, listener),
        }
    }

    /// Removes the rectangle listener of a zone.
    pub fn clear_rect_listener(&mut self, id: ZoneId) -> Option<RectListener> {
        let tracked = self
            .zone_geometry
            .get_mut(&id)
            .and_then(|g| g.tracker.unsubscribe());
        tracked.or_else(|| self.rect_listeners.remove(&id))
    }

    /// Reacts to a host geometry notification.
    ///
    /// Affected trackers re-measure; if a zone rectangle changed the resolver
    /// runs again, and if a scroll container changed or scrolled autoscroll
    /// re-selects.
    pub fn on_geometry_signal<H: DragHost<N>>(
        &mut self,
        host: &mut H,
        signal: GeometrySignal<N>,
    ) {
        let mut zones_changed = false;
        for geometry in self.zone_geometry.values_mut() {
            zones_changed |= geometry.tracker.on_signal(&*host, &signal);
        }
        let mut containers_changed = false;
        for tracker in self.containers.values_mut() {
            containers_changed |= tracker.on_signal(&*host, &signal);
        }
        let scrolled = matches!(
            signal,
            GeometrySignal::Scrolled(container) if self.containers.contains_key(&container)
        );
        if zones_changed {
            self.resolve(false);
        }
        if containers_changed || scrolled {
            self.rebuild_scroll_nodes(&*host);
            self.update_autoscroll(host);
        }
    }

    /// Runs an animation frame the engine requested.
    ///
    /// Frames the engine no longer expects are ignored. Otherwise the active
    /// container scrolls one momentum step and everything depending on its
    /// geometry is refreshed.
    pub fn on_animation_frame<H: DragHost<N>>(
        &mut self,
        host: &mut H,
        request: dropwise_autoscroll::FrameRequest,
    ) {
        let Some(step) = self.autoscroll.on_frame(request, host) else {
            return;
        };
        host.scroll_by(step.container, step.delta);
        self.on_geometry_signal(host, GeometrySignal::Scrolled(step.container));
    }

    fn finish<H: DragHost<N>>(&mut self, host: &mut H) {
        self.store.clear();
        self.resolve(false);
        self.sync_zone_geometry(&*host);
        self.autoscroll.stop(host);
    }

    fn resolve(&mut self, dropped: bool) -> Resolution {
        let position = self.store.drag_info().map(|info| info.current_pos);
        let item = self.store.item().map(Rc::as_ref);
        let geometry = &self.zone_geometry;
        self.zones.resolve(position, dropped, item, |id| {
            geometry.get(&id).and_then(|g| g.tracker.rect())
        })
    }

    fn update_autoscroll<H: DragHost<N>>(&mut self, host: &mut H) {
        let raw = self.store.drag_info().map(DragInfo::raw_pointer);
        self.autoscroll.update(raw, host);
    }

    /// Attaches trackers to zones matching the active item and detaches the
    /// rest.
    fn sync_zone_geometry<H: DragHost<N>>(&mut self, host: &H) {
        let wanted: Vec<(ZoneId, N)> = match self.store.item() {
            Some(item) => self
                .zones
                .iter()
                .filter(|(_, zone)| zone.accepts(item))
                .map(|(id, zone)| (id, zone.node))
                .collect(),
            None => Vec::new(),
        };

        let stale: Vec<ZoneId> = self
            .zone_geometry
            .keys()
            .filter(|id| !wanted.iter().any(|(w, _)| w == *id))
            .copied()
            .collect();
        for id in stale {
            if let Some(geometry) = self.zone_geometry.remove(&id) {
                if let Some(listener) = geometry.tracker.detach() {
                    self.rect_listeners.insert(id, listener);
                }
                self.store
                    .unregister_scroll_containers(geometry.registration);
            }
        }

        for (id, node) in wanted {
            if self.zone_geometry.contains_key(&id) {
                continue;
            }
            let listener = self.rect_listeners.remove(&id);
            let tracker = GeometryTracker::attach_with(host, ScrollContainer::Node(node), listener);
            let registration = self.store.register_scroll_containers(tracker.scroll_parents());
            self.zone_geometry.insert(
                id,
                ZoneGeometry {
                    tracker,
                    registration,
                },
            );
        }
        self.sync_containers(host);
    }

    /// Matches container trackers to the registered containers.
    fn sync_containers<H: DragHost<N>>(&mut self, host: &H) {
        let registered = self.store.scroll_containers();
        self.containers.retain(|c, _| registered.contains(c));
        for container in registered {
            if !self.containers.contains_key(container) {
                self.containers
                    .insert(*container, GeometryTracker::attach(host, *container));
            }
        }
        self.rebuild_scroll_nodes(host);
    }

    fn rebuild_scroll_nodes<H: DragHost<N>>(&mut self, host: &H) {
        let config = *self.autoscroll.config();
        let nodes: Vec<ScrollNode<ScrollContainer<N>>> = self
            .store
            .scroll_containers()
            .iter()
            .filter_map(|container| {
                let rect = self.containers.get(container)?.rect()?;
                let metrics = host.scroll_metrics(*container)?;
                ScrollNode::new(*container, &rect, metrics, &config)
            })
            .collect();
        self.autoscroll.set_nodes(nodes);
    }
}

impl<N, K, D> DragEngine<N, K, D>
where
    N: Copy + Eq + Hash + fmt::Debug + 'static,
    K: 'static,
    D: 'static,
{
    /// Calls `listener` with the new drag position whenever it changes, and
    /// with `None` when the drag ends.
    pub fn on_position_changed(
        &mut self,
        mut listener: impl FnMut(Option<&DragInfo>) + 'static,
    ) -> SubscriptionId {
        self.store.subscribe(
            |s| s.drag_info().copied(),
            move |info: &Option<DragInfo>| listener(info.as_ref()),
        )
    }

    /// Calls `listener` whenever a different drag starts or the drag ends.
    ///
    /// Items are compared by identity, so two consecutive drags of equal
    /// items still notify.
    pub fn on_active_item_changed(
        &mut self,
        mut listener: impl FnMut(Option<&Rc<DragItem<K, D>>>) + 'static,
    ) -> SubscriptionId {
        self.store.subscribe_with(
            |s| s.item().cloned(),
            |a, b| match (a, b) {
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            },
            move |item: &Option<Rc<DragItem<K, D>>>| listener(item.as_ref()),
        )
    }

    /// Subscribes to a selected slice of the session state; see
    /// [`SessionStore::subscribe`].
    pub fn subscribe<S, F, L>(&mut self, selector: F, listener: L) -> SubscriptionId
    where
        S: PartialEq + 'static,
        F: Fn(&SessionState<K, D, ScrollContainer<N>>) -> S + 'static,
        L: FnMut(&S) + 'static,
    {
        self.store.subscribe(selector, listener)
    }

    /// Removes a subscription.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }
}
