// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drop target callbacks.

use alloc::boxed::Box;
use core::fmt;

use dropwise_session::DragItem;
use kurbo::Point;

/// Hover notification for a drop zone.
///
/// While the dragged element is over the zone, `item` and `position` are both
/// present and `position` is relative to the zone's natural top-left corner.
/// When the element leaves, the zone receives one notification with both set
/// to `None`.
#[derive(Debug, PartialEq)]
pub struct DragOver<'a, K, D> {
    /// The dragged item, or `None` on leave.
    pub item: Option<&'a DragItem<K, D>>,
    /// Zone-local position of the element centre, or `None` on leave.
    pub position: Option<Point>,
}

impl<K, D> DragOver<'_, K, D> {
    /// Returns `true` for the leave notification.
    pub fn is_leave(&self) -> bool {
        self.item.is_none() && self.position.is_none()
    }
}

impl<K, D> Clone for DragOver<'_, K, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, D> Copy for DragOver<'_, K, D> {}

/// Drop notification for the zone under the element when the drag ends.
#[derive(Debug, PartialEq)]
pub struct DropEvent<'a, K, D> {
    /// The dropped item.
    pub item: &'a DragItem<K, D>,
    /// Zone-local position of the element centre.
    pub position: Point,
}

impl<K, D> Clone for DropEvent<'_, K, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, D> Copy for DropEvent<'_, K, D> {}

/// Receives a zone's drag notifications. Every method defaults to doing
/// nothing.
pub trait DropTarget<K, D> {
    /// The element moved over the zone, or left it.
    fn on_drag_over(&mut self, event: DragOver<'_, K, D>) {
        let _ = event;
    }

    /// The element was dropped on the zone.
    fn on_drop(&mut self, event: DropEvent<'_, K, D>) {
        let _ = event;
    }

    /// The zone's over flag flipped.
    fn on_over_changed(&mut self, over: bool) {
        let _ = over;
    }
}

type OverFn<K, D> = Box<dyn FnMut(DragOver<'_, K, D>)>;
type DropFn<K, D> = Box<dyn FnMut(DropEvent<'_, K, D>)>;
type FlagFn = Box<dyn FnMut(bool)>;

/// A [`DropTarget`] assembled from closures.
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use kurbo::Point;
/// use dropwise_session::{DragItem, DragKind};
/// use dropwise_zones::{DropCallbacks, DropEvent, DropTarget};
///
/// let dropped = Rc::new(Cell::new(None));
/// let sink = dropped.clone();
/// let mut target = DropCallbacks::<u32, ()>::new()
///     .on_drop(move |ev| sink.set(Some((ev.item.id, ev.position))));
///
/// let item = DragItem::new(7, DragKind("card"), ());
/// // The builder methods shadow the trait methods, so call through the trait.
/// DropTarget::on_drop(&mut target, DropEvent { item: &item, position: Point::new(4.0, 2.0) });
/// assert_eq!(dropped.get(), Some((7, Point::new(4.0, 2.0))));
/// ```
pub struct DropCallbacks<K, D> {
    drag_over: Option<OverFn<K, D>>,
    drop: Option<DropFn<K, D>>,
    over_changed: Option<FlagFn>,
}

impl<K, D> fmt::Debug for DropCallbacks<K, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropCallbacks")
            .field("drag_over", &self.drag_over.is_some())
            .field("drop", &self.drop.is_some())
            .field("over_changed", &self.over_changed.is_some())
            .finish()
    }
}

impl<K, D> Default for DropCallbacks<K, D> {
    fn default() -> Self {
        Self {
            drag_over: None,
            drop: None,
            over_changed: None,
        }
    }
}

impl<K, D> DropCallbacks<K, D> {
    /// A target that ignores everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hover callback.
    #[must_use]
    pub fn on_drag_over(mut self, f: impl FnMut(DragOver<'_, K, D>) + 'static) -> Self {
        self.drag_over = Some(Box::new(f));
        self
    }

    /// Sets the drop callback.
    #[must_use]
    pub fn on_drop(mut self, f: impl FnMut(DropEvent<'_, K, D>) + 'static) -> Self {
        self.drop = Some(Box::new(f));
        self
    }

    /// Sets the over-flag callback.
    #[must_use]
    pub fn on_over_changed(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.over_changed = Some(Box::new(f));
        self
    }
}

impl<K, D> DropTarget<K, D> for DropCallbacks<K, D> {
    fn on_drag_over(&mut self, event: DragOver<'_, K, D>) {
        if let Some(f) = self.drag_over.as_mut() {
            f(event);
        }
    }

    fn on_drop(&mut self, event: DropEvent<'_, K, D>) {
        if let Some(f) = self.drop.as_mut() {
            f(event);
        }
    }

    fn on_over_changed(&mut self, over: bool) {
        if let Some(f) = self.over_changed.as_mut() {
            f(over);
        }
    }
}
