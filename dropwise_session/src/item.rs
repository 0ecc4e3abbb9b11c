// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What is being dragged and where it currently is.

use kurbo::{Point, Rect, Size, Vec2};

/// Partitions independent drag domains.
///
/// Drop zones and controllers only react to items of their own kind, so a
/// card list and a file tree can share one engine without seeing each other's
/// drags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DragKind(pub &'static str);

/// Scopes drags to an independently layered context, such as a modal.
///
/// Items of the same [`DragKind`] in different layers never match each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerKey(pub u32);

/// Identity and payload of the dragged item.
#[derive(Clone, Debug, PartialEq)]
pub struct DragItem<K, D> {
    /// Application identifier of the item.
    pub id: K,
    /// Drag domain.
    pub kind: DragKind,
    /// Application payload handed to drop targets.
    pub data: D,
    /// Layer the drag started in; `None` is the root layer.
    pub layer: Option<LayerKey>,
}

impl<K, D> DragItem<K, D> {
    /// Creates an item in the root layer.
    pub fn new(id: K, kind: DragKind, data: D) -> Self {
        Self {
            id,
            kind,
            data,
            layer: None,
        }
    }

    /// Moves the item into `layer`.
    #[must_use]
    pub fn with_layer(mut self, layer: Option<LayerKey>) -> Self {
        self.layer = layer;
        self
    }

    /// Returns `true` if the item belongs to `kind` within `layer`.
    pub fn matches(&self, kind: DragKind, layer: Option<LayerKey>) -> bool {
        self.kind == kind && self.layer == layer
    }
}

/// Live position of the dragged element.
///
/// Positions are expressed in element-centre space: `current_pos` is where the
/// centre of the dragged element is, not where the pointer is. The fixed
/// `mouse_offset` (pointer → centre at grab time) converts between the two.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragInfo {
    /// Element centre when the drag started.
    pub start_pos: Point,
    /// Element centre now.
    pub current_pos: Point,
    /// Vector from the raw pointer to the element centre; constant per drag.
    pub mouse_offset: Vec2,
    /// Size of the grabbed element.
    pub dimensions: Size,
    /// Whether the drag is driven by touch input.
    pub is_touch: bool,
}

impl DragInfo {
    /// Builds the drag info for a grab.
    ///
    /// `raw_start` is the pointer-down point and `raw_current` the move that
    /// crossed the drag threshold; `element` is the grabbed node's bounding
    /// rectangle measured at that moment.
    pub fn from_grab(raw_start: Point, raw_current: Point, element: Rect, is_touch: bool) -> Self {
        let mouse_offset = element.center() - raw_current;
        Self {
            start_pos: raw_start + mouse_offset,
            current_pos: raw_current + mouse_offset,
            mouse_offset,
            dimensions: element.size(),
            is_touch,
        }
    }

    /// Moves the element so it follows a new raw pointer sample.
    pub fn follow_pointer(&mut self, raw: Point) {
        self.current_pos = raw + self.mouse_offset;
    }

    /// The raw pointer position behind `current_pos`.
    pub fn raw_pointer(&self) -> Point {
        self.current_pos - self.mouse_offset
    }

    /// Displacement of the element since the drag started.
    pub fn displacement(&self) -> Vec2 {
        self.current_pos - self.start_pos
    }
}
