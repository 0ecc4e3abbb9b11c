// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-provided node geometry and the scroll-ancestor chain.

use core::fmt::Debug;
use core::hash::Hash;

use kurbo::{Rect, Size};
use smallvec::SmallVec;

use crate::rect::VisibleRect;

/// Computed vertical overflow of a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Overflow {
    /// Content is not clipped.
    #[default]
    Visible,
    /// Content is clipped without scrolling.
    Hidden,
    /// Content is clipped without a scroll container.
    Clip,
    /// Scrolls when content overflows.
    Auto,
    /// Always scrolls.
    Scroll,
}

impl Overflow {
    /// Returns `true` for the overflow modes that make a node a scroll container.
    #[must_use]
    pub const fn is_scrollable(self) -> bool {
        matches!(self, Self::Auto | Self::Scroll)
    }
}

/// A scrollable ancestor: either an element or the root viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollContainer<N> {
    /// An element whose vertical overflow is `auto` or `scroll`.
    Node(N),
    /// The root viewport (the window).
    Viewport,
}

impl<N> ScrollContainer<N> {
    /// Returns the element node, or `None` for the viewport.
    pub fn node(&self) -> Option<&N> {
        match self {
            Self::Node(node) => Some(node),
            Self::Viewport => None,
        }
    }
}

/// Scroll ancestors of a node, innermost first.
pub type ScrollChain<N> = SmallVec<[ScrollContainer<N>; 4]>;

/// Geometry queries the host answers about its node tree.
///
/// Rectangles are screen-space (client) coordinates of the node's border box,
/// the equivalent of a DOM `getBoundingClientRect`.
pub trait GeometrySource {
    /// Host node handle.
    type Node: Copy + Eq + Hash + Debug;

    /// Current bounding rectangle of `node`, or `None` if it is not laid out.
    fn bounding_rect(&self, node: Self::Node) -> Option<Rect>;

    /// Parent of `node`, or `None` at the top of the tree.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Computed vertical overflow of `node`.
    fn overflow_y(&self, node: Self::Node) -> Overflow;

    /// Returns `true` if `node` is the document root, whose scrolling is the
    /// viewport's.
    fn is_document_root(&self, node: Self::Node) -> bool {
        let _ = node;
        false
    }

    /// Client size of the root viewport.
    fn viewport_size(&self) -> Size;
}

/// Screen rectangle of the root viewport.
pub fn viewport_rect<S: GeometrySource + ?Sized>(source: &S) -> Rect {
    Rect::from_origin_size((0.0, 0.0), source.viewport_size())
}

/// Collects the scroll containers above `node`, innermost first.
///
/// The walk starts at the parent, keeps every ancestor whose vertical overflow
/// is scrollable, and ends with [`ScrollContainer::Viewport`]; reaching the
/// document root stops the walk there.
pub fn scroll_parents<S: GeometrySource + ?Sized>(source: &S, node: S::Node) -> ScrollChain<S::Node> {
    let mut chain = ScrollChain::new();
    let mut current = source.parent(node);
    while let Some(ancestor) = current {
        if source.is_document_root(ancestor) {
            break;
        }
        if source.overflow_y(ancestor).is_scrollable() {
            chain.push(ScrollContainer::Node(ancestor));
        }
        current = source.parent(ancestor);
    }
    chain.push(ScrollContainer::Viewport);
    chain
}

/// Computes the clip-aware rectangle of `target`.
///
/// `chain` is the target's scroll ancestors as returned by [`scroll_parents`].
/// The viewport measures as its client rectangle. Ancestors that cannot be
/// measured are skipped; an unmeasurable target yields `None`.
pub fn measure<S: GeometrySource + ?Sized>(
    source: &S,
    target: ScrollContainer<S::Node>,
    chain: &[ScrollContainer<S::Node>],
) -> Option<VisibleRect> {
    let viewport = viewport_rect(source);
    let node = match target {
        ScrollContainer::Viewport => return Some(VisibleRect::unclipped(viewport)),
        ScrollContainer::Node(node) => node,
    };
    let mut rect = VisibleRect::unclipped(source.bounding_rect(node)?);
    for container in chain {
        let clip = match container {
            ScrollContainer::Viewport => viewport,
            ScrollContainer::Node(ancestor) => match source.bounding_rect(*ancestor) {
                Some(clip) => clip,
                None => continue,
            },
        };
        rect = rect.clipped_by(clip);
    }
    Some(rect)
}
