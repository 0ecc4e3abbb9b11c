// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binding a drag gesture to an item.

use core::fmt;
use core::hash::Hash;

use dropwise_gesture::{DragGesture, GestureConfig, PointerPress, PressResponse};
use dropwise_session::{DragItem, DragKind, LayerKey};
use kurbo::Point;

use crate::engine::DragEngine;
use crate::error::DragError;
use crate::host::DragHost;

/// A draggable node: the item it stands for plus its press-to-drag gesture.
///
/// Pointer input on the node goes to the draggable until the gesture crosses
/// the threshold; from then on the drag belongs to the [`DragEngine`] and
/// the host routes document-level input there.
#[derive(Debug)]
pub struct Draggable<N, K, D> {
    node: N,
    id: K,
    kind: DragKind,
    layer: Option<LayerKey>,
    data: D,
    gesture: DragGesture,
}

impl<N, K, D> Draggable<N, K, D>
where
    N: Copy + Eq + Hash + fmt::Debug,
    K: Clone + PartialEq,
    D: Clone,
{
    /// Creates a root-layer draggable.
    pub fn new(node: N, id: K, kind: DragKind, data: D, config: GestureConfig) -> Self {
        Self {
            node,
            id,
            kind,
            layer: None,
            data,
            gesture: DragGesture::new(config),
        }
    }

    /// Moves the draggable into `layer`.
    #[must_use]
    pub fn with_layer(mut self, layer: Option<LayerKey>) -> Self {
        self.layer = layer;
        self
    }

    /// The node that is grabbed.
    pub fn node(&self) -> N {
        self.node
    }

    /// Item identity.
    pub fn id(&self) -> &K {
        &self.id
    }

    /// Replaces the payload handed to drop zones by future drags.
    pub fn set_data(&mut self, data: D) {
        self.data = data;
    }

    /// The recognizer state.
    pub fn gesture(&self) -> &DragGesture {
        &self.gesture
    }

    /// Enables or disables dragging. Disabling abandons a pending press.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.gesture.set_disabled(disabled);
    }

    /// A press on the node. See [`DragGesture::on_pointer_down`].
    pub fn on_pointer_down(&mut self, press: &PointerPress) -> PressResponse {
        self.gesture.on_pointer_down(press)
    }

    /// A pointer move while a press is pending.
    ///
    /// Returns `Ok(true)` if this move started a drag. The node is measured
    /// at that moment; a node the host cannot measure fails the start.
    pub fn on_pointer_move<H: DragHost<N>>(
        &mut self,
        engine: &mut DragEngine<N, K, D>,
        host: &mut H,
        position: Point,
    ) -> Result<bool, DragError> {
        let Some(start) = self.gesture.on_pointer_move(position) else {
            return Ok(false);
        };
        let Some(element) = host.bounding_rect(self.node) else {
            tracing::error!(node = ?self.node, "cannot start a drag on an unmeasured node");
            return Err(DragError::Unmeasurable);
        };
        let item = DragItem::new(self.id.clone(), self.kind, self.data.clone())
            .with_layer(self.layer);
        engine.begin_drag(
            host,
            item,
            start.start_pos,
            start.current_pos,
            element,
            start.is_touch,
        )?;
        Ok(true)
    }

    /// A release before the drag started.
    pub fn on_pointer_up(&mut self) {
        self.gesture.on_pointer_up();
    }

    /// Returns `true` if the engine is dragging this item.
    pub fn is_dragging(&self, engine: &DragEngine<N, K, D>) -> bool {
        engine
            .session()
            .is_dragging_item(self.kind, self.layer, &self.id)
    }

    /// Cancels the drag if it is this item's, as when the node goes away
    /// mid-drag. Returns `true` if a drag was cancelled.
    pub fn cancel_if_dragging<H: DragHost<N>>(
        &mut self,
        engine: &mut DragEngine<N, K, D>,
        host: &mut H,
    ) -> bool {
        self.gesture.reset();
        self.is_dragging(engine) && engine.cancel(host)
    }
}

impl<N, K, D> DragEngine<N, K, D>
where
    N: Copy + Eq + Hash + fmt::Debug,
    K: Clone + PartialEq,
    D: Clone,
{
    /// Creates a [`Draggable`] using this engine's gesture configuration.
    pub fn draggable(&self, node: N, id: K, kind: DragKind, data: D) -> Draggable<N, K, D> {
        Draggable::new(node, id, kind, data, self.config().gesture)
    }
}
