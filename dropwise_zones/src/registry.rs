// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacking-ordered drop zone registry and the per-sample resolver.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use dropwise_geometry::VisibleRect;
use dropwise_session::{DragItem, DragKind, LayerKey};
use kurbo::Point;

use crate::order::{StackingOrder, insertion_index};
use crate::target::{DragOver, DropEvent, DropTarget};

/// Identifies a registered drop zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneId(u64);

/// Everything the registry needs to know about a drop zone.
pub struct DropZone<N, K, D> {
    /// Host node the zone covers.
    pub node: N,
    /// Kind of item the zone accepts.
    pub kind: DragKind,
    /// Layer the zone lives in; `None` is the root layer.
    pub layer: Option<LayerKey>,
    /// Receives the zone's notifications.
    pub target: Box<dyn DropTarget<K, D>>,
}

impl<N, K, D> DropZone<N, K, D> {
    /// Creates a root-layer zone.
    pub fn new(node: N, kind: DragKind, target: impl DropTarget<K, D> + 'static) -> Self {
        Self {
            node,
            kind,
            layer: None,
            target: Box::new(target),
        }
    }

    /// Moves the zone into `layer`.
    #[must_use]
    pub fn with_layer(mut self, layer: Option<LayerKey>) -> Self {
        self.layer = layer;
        self
    }

    /// Returns `true` if the zone reacts to `item`.
    pub fn accepts(&self, item: &DragItem<K, D>) -> bool {
        item.matches(self.kind, self.layer)
    }
}

impl<N: fmt::Debug, K, D> fmt::Debug for DropZone<N, K, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropZone")
            .field("node", &self.node)
            .field("kind", &self.kind)
            .field("layer", &self.layer)
            .finish_non_exhaustive()
    }
}

struct Entry<N, K, D> {
    id: ZoneId,
    zone: DropZone<N, K, D>,
    over: bool,
    last_position: Option<Point>,
}

impl<N, K, D> Entry<N, K, D> {
    fn set_over(&mut self, over: bool) {
        if self.over == over {
            return;
        }
        self.over = over;
        if !over {
            self.last_position = None;
            self.zone.target.on_drag_over(DragOver {
                item: None,
                position: None,
            });
        }
        self.zone.target.on_over_changed(over);
    }
}

/// What a resolver pass found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// No zone is under the element.
    Miss,
    /// The element is over this zone.
    Over(ZoneId),
    /// The element was dropped on this zone.
    Dropped(ZoneId),
}

impl Resolution {
    /// The zone that was hit, if any.
    pub fn zone(self) -> Option<ZoneId> {
        match self {
            Self::Miss => None,
            Self::Over(id) | Self::Dropped(id) => Some(id),
        }
    }
}

/// Drop zones kept topmost first.
///
/// Zones are placed by binary search against a [`StackingOrder`] when they
/// are inserted; the list is never re-sorted, so the order reflects the
/// stacking at insertion time. Removal is a linear scan.
///
/// ```
/// use core::cmp::Ordering;
/// use kurbo::{Point, Rect};
/// use dropwise_geometry::VisibleRect;
/// use dropwise_session::{DragItem, DragKind};
/// use dropwise_zones::{DropCallbacks, DropZone, Resolution, ZoneRegistry};
///
/// const CARD: DragKind = DragKind("card");
/// let by_z = |a: &u32, b: &u32| a.cmp(b);
///
/// let mut zones: ZoneRegistry<u32, u32, ()> = ZoneRegistry::new();
/// let low = zones.insert(DropZone::new(1, CARD, DropCallbacks::new()), &by_z);
/// let high = zones.insert(DropZone::new(2, CARD, DropCallbacks::new()), &by_z);
///
/// // Both zones cover the same area; the higher one wins.
/// let item = DragItem::new(0, CARD, ());
/// let area = VisibleRect::unclipped(Rect::new(0.0, 0.0, 100.0, 100.0));
/// let hit = zones.resolve(Some(Point::new(50.0, 50.0)), false, Some(&item), |_| Some(area));
/// assert_eq!(hit, Resolution::Over(high));
/// assert!(zones.is_over(high));
/// assert!(!zones.is_over(low));
/// ```
pub struct ZoneRegistry<N, K, D> {
    entries: Vec<Entry<N, K, D>>,
    next_id: u64,
}

impl<N: fmt::Debug, K, D> fmt::Debug for ZoneRegistry<N, K, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| (e.id, &e.zone.node, e.over)))
            .finish()
    }
}

impl<N, K, D> Default for ZoneRegistry<N, K, D> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<N, K, D> ZoneRegistry<N, K, D> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered zones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no zone is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts `zone` at its stacking position.
    pub fn insert<O>(&mut self, zone: DropZone<N, K, D>, order: &O) -> ZoneId
    where
        O: StackingOrder<N> + ?Sized,
    {
        let nodes: Vec<&N> = self.entries.iter().map(|e| &e.zone.node).collect();
        let index = insertion_index(&nodes, &zone.node, order);
        let id = ZoneId(self.next_id);
        self.next_id += 1;
        self.entries.insert(
            index,
            Entry {
                id,
                zone,
                over: false,
                last_position: None,
            },
        );
        id
    }

    /// Removes a zone without notifying it.
    pub fn remove(&mut self, id: ZoneId) -> Option<DropZone<N, K, D>> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index).zone)
    }

    /// Looks up a zone.
    pub fn get(&self, id: ZoneId) -> Option<&DropZone<N, K, D>> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.zone)
    }

    /// Zone ids, topmost first.
    pub fn ids(&self) -> impl Iterator<Item = ZoneId> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    /// Zones, topmost first.
    pub fn iter(&self) -> impl Iterator<Item = (ZoneId, &DropZone<N, K, D>)> + '_ {
        self.entries.iter().map(|e| (e.id, &e.zone))
    }

    /// Returns `true` if the element is currently over zone `id`.
    pub fn is_over(&self, id: ZoneId) -> bool {
        self.entries.iter().any(|e| e.id == id && e.over)
    }

    /// The zone the element is currently over, if any.
    pub fn over_zone(&self) -> Option<ZoneId> {
        self.entries.iter().find(|e| e.over).map(|e| e.id)
    }

    /// Runs one resolver pass.
    ///
    /// `position` is the element centre in screen space, or `None` once the
    /// session has ended. Zones are tested topmost first; the first zone that
    /// accepts `item` and whose rectangle (looked up through `rect_of`)
    /// contains `position` wins:
    ///
    /// - not `dropped`: it becomes over and receives
    ///   [`on_drag_over`](DropTarget::on_drag_over) with the zone-local
    ///   position, unless that position equals the last one delivered;
    /// - `dropped`: it receives [`on_drop`](DropTarget::on_drop) and is no
    ///   longer over.
    ///
    /// Every other zone is forced not over. A zone that stops being over gets a
    /// single leave notification.
    pub fn resolve(
        &mut self,
        position: Option<Point>,
        dropped: bool,
        item: Option<&DragItem<K, D>>,
        mut rect_of: impl FnMut(ZoneId) -> Option<VisibleRect>,
    ) -> Resolution {
        let mut resolution = Resolution::Miss;
        let probe = position.zip(item);
        for entry in &mut self.entries {
            if resolution == Resolution::Miss {
                if let Some((pos, item)) = probe {
                    let hit = entry
                        .zone
                        .accepts(item)
                        .then(|| rect_of(entry.id))
                        .flatten()
                        .filter(|rect| rect.contains(pos));
                    if let Some(rect) = hit {
                        let local = rect.to_local(pos);
                        if dropped {
                            tracing::debug!(zone = ?entry.id, ?local, "dropped on zone");
                            entry.zone.target.on_drop(DropEvent {
                                item,
                                position: local,
                            });
                            entry.set_over(false);
                            resolution = Resolution::Dropped(entry.id);
                        } else {
                            if !entry.over {
                                tracing::trace!(zone = ?entry.id, "entered zone");
                            }
                            if entry.last_position != Some(local) {
                                entry.last_position = Some(local);
                                entry.zone.target.on_drag_over(DragOver {
                                    item: Some(item),
                                    position: Some(local),
                                });
                            }
                            entry.set_over(true);
                            resolution = Resolution::Over(entry.id);
                        }
                        continue;
                    }
                }
            }
            if entry.over {
                tracing::trace!(zone = ?entry.id, "left zone");
            }
            entry.set_over(false);
        }
        resolution
    }
}
