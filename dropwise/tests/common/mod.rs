// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory page for engine integration tests.

#![allow(
    missing_docs,
    reason = "Integration-test helper module; not part of the public API."
)]
#![allow(
    dead_code,
    reason = "Each test binary uses a different subset of the helpers."
)]

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::rc::Rc;

use dropwise::{
    DragKind, DragOver, DropEvent, DropTarget, FrameRequest, FrameScheduler, GeometrySource,
    Overflow, ScrollContainer, ScrollHost, ScrollMetrics, StackingOrder,
};
use kurbo::{Point, Rect, Size, Vec2};

pub(crate) const CARD: DragKind = DragKind("card");

pub(crate) type Engine = dropwise::DragEngine<u32, u32, &'static str>;

#[derive(Clone, Copy, Debug)]
struct Node {
    parent: Option<u32>,
    /// Layout rect in unscrolled page coordinates.
    layout: Rect,
    overflow: Overflow,
    z: i32,
}

#[derive(Clone, Copy, Debug)]
struct Scroll {
    offset: f64,
    content: f64,
}

/// A node tree laid out in page coordinates, with scrollable nodes, a
/// scrollable viewport and a frame queue.
#[derive(Debug)]
pub(crate) struct Page {
    nodes: HashMap<u32, Node>,
    scroll: HashMap<ScrollContainer<u32>, Scroll>,
    viewport: Size,
    next_frame: u64,
    pub(crate) pending: Vec<FrameRequest>,
    pub(crate) cancelled: Vec<FrameRequest>,
}

impl Page {
    /// A page whose viewport does not scroll.
    pub(crate) fn new(width: f64, height: f64) -> Self {
        let mut scroll = HashMap::new();
        scroll.insert(
            ScrollContainer::Viewport,
            Scroll {
                offset: 0.0,
                content: height,
            },
        );
        Self {
            nodes: HashMap::new(),
            scroll,
            viewport: Size::new(width, height),
            next_frame: 0,
            pending: Vec::new(),
            cancelled: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, id: u32, parent: Option<u32>, layout: Rect, z: i32) -> &mut Self {
        self.nodes.insert(
            id,
            Node {
                parent,
                layout,
                overflow: Overflow::Visible,
                z,
            },
        );
        self
    }

    /// Adds a scroll container whose content is `content` pixels tall.
    pub(crate) fn add_scroller(&mut self, id: u32, parent: Option<u32>, layout: Rect, content: f64) -> &mut Self {
        self.nodes.insert(
            id,
            Node {
                parent,
                layout,
                overflow: Overflow::Auto,
                z: 0,
            },
        );
        self.scroll.insert(
            ScrollContainer::Node(id),
            Scroll {
                offset: 0.0,
                content,
            },
        );
        self
    }

    pub(crate) fn offset(&self, container: ScrollContainer<u32>) -> f64 {
        self.scroll.get(&container).map_or(0.0, |s| s.offset)
    }

    pub(crate) fn set_offset(&mut self, container: ScrollContainer<u32>, offset: f64) {
        if let Some(s) = self.scroll.get_mut(&container) {
            s.offset = offset;
        }
    }

    /// Takes the oldest pending frame, as the host's frame clock would.
    pub(crate) fn next_frame(&mut self) -> Option<FrameRequest> {
        (!self.pending.is_empty()).then(|| self.pending.remove(0))
    }

    fn extent(&self, container: ScrollContainer<u32>) -> f64 {
        match container {
            ScrollContainer::Viewport => self.viewport.height,
            ScrollContainer::Node(id) => self.nodes[&id].layout.height(),
        }
    }

    fn scrolled_by(&self, node: u32) -> Vec2 {
        let mut total = self.offset(ScrollContainer::Viewport);
        let mut current = self.nodes.get(&node).and_then(|n| n.parent);
        while let Some(ancestor) = current {
            total += self.offset(ScrollContainer::Node(ancestor));
            current = self.nodes[&ancestor].parent;
        }
        Vec2::new(0.0, total)
    }
}

impl GeometrySource for Page {
    type Node = u32;

    fn bounding_rect(&self, node: u32) -> Option<Rect> {
        let layout = self.nodes.get(&node)?.layout;
        Some(layout - self.scrolled_by(node))
    }

    fn parent(&self, node: u32) -> Option<u32> {
        self.nodes.get(&node)?.parent
    }

    fn overflow_y(&self, node: u32) -> Overflow {
        self.nodes.get(&node).map_or(Overflow::Visible, |n| n.overflow)
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }
}

impl ScrollHost for Page {
    fn scroll_metrics(&self, container: ScrollContainer<u32>) -> Option<ScrollMetrics> {
        let scroll = self.scroll.get(&container)?;
        Some(ScrollMetrics {
            offset: scroll.offset,
            viewport_extent: self.extent(container),
            content_extent: scroll.content,
        })
    }

    fn scroll_by(&mut self, container: ScrollContainer<u32>, delta: f64) {
        let max = self
            .scroll_metrics(container)
            .map_or(0.0, |m| (m.content_extent - m.viewport_extent).max(0.0));
        if let Some(s) = self.scroll.get_mut(&container) {
            s.offset = (s.offset + delta).clamp(0.0, max);
        }
    }
}

impl FrameScheduler for Page {
    fn request_frame(&mut self) -> FrameRequest {
        self.next_frame += 1;
        let request = FrameRequest::new(self.next_frame);
        self.pending.push(request);
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        self.pending.retain(|r| *r != request);
        self.cancelled.push(request);
    }
}

impl StackingOrder<u32> for Page {
    fn compare(&self, a: &u32, b: &u32) -> Ordering {
        let z = |n: &u32| self.nodes.get(n).map_or(0, |n| n.z);
        z(a).cmp(&z(b))
    }
}

/// A zone notification, reduced to what the tests compare.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Event {
    Over(Point),
    Leave,
    Drop(Point),
    Flag(bool),
}

/// A drop target that records every notification.
#[derive(Clone, Debug, Default)]
pub(crate) struct Recorder(pub(crate) Rc<RefCell<Vec<Event>>>);

impl Recorder {
    pub(crate) fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub(crate) fn take(&self) -> Vec<Event> {
        core::mem::take(&mut *self.0.borrow_mut())
    }

    pub(crate) fn count(&self, event: Event) -> usize {
        self.0.borrow().iter().filter(|e| **e == event).count()
    }
}

impl DropTarget<u32, &'static str> for Recorder {
    fn on_drag_over(&mut self, event: DragOver<'_, u32, &'static str>) {
        let event = match event.position {
            Some(position) => Event::Over(position),
            None => Event::Leave,
        };
        self.0.borrow_mut().push(event);
    }

    fn on_drop(&mut self, event: DropEvent<'_, u32, &'static str>) {
        self.0.borrow_mut().push(Event::Drop(event.position));
    }

    fn on_over_changed(&mut self, over: bool) {
        self.0.borrow_mut().push(Event::Flag(over));
    }
}
