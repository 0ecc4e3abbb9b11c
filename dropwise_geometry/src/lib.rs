// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=dropwise_geometry --heading-base-level=0

//! Dropwise Geometry: clip-aware node rectangles for drag and drop.
//!
//! A drop target that lives inside scrolling containers is only partially
//! visible most of the time. Hit testing against its natural bounding box
//! would accept drops on parts the user cannot see, so this crate computes a
//! [`VisibleRect`]: the node's rectangle intersected with every
//! strictly-scrollable ancestor and the root viewport, plus how much of the
//! node is clipped above and to the left.
//!
//! ## Pieces
//!
//! - [`GeometrySource`]: the host's node tree (bounding rects, parents,
//!   overflow, viewport size). Nothing here talks to a real windowing system.
//! - [`scroll_parents`]: collects the scroll ancestors of a node, innermost
//!   first, ending with [`ScrollContainer::Viewport`].
//! - [`measure`]: intersects a node with its chain.
//! - [`GeometryTracker`]: owns one target and its chain, re-measures on
//!   [`GeometrySignal`]s (node resize, chain scroll, viewport resize) and pushes
//!   changes through a single-subscriber [`RectCell`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use dropwise_geometry::{GeometrySource, GeometryTracker, Overflow, ScrollContainer};
//!
//! // Node 1 scrolls and clips node 2, which starts 30px above its top edge.
//! struct Doc;
//! impl GeometrySource for Doc {
//!     type Node = u32;
//!     fn bounding_rect(&self, node: u32) -> Option<Rect> {
//!         match node {
//!             1 => Some(Rect::new(0.0, 100.0, 200.0, 300.0)),
//!             2 => Some(Rect::new(0.0, 70.0, 200.0, 170.0)),
//!             _ => None,
//!         }
//!     }
//!     fn parent(&self, node: u32) -> Option<u32> {
//!         (node > 1).then(|| node - 1)
//!     }
//!     fn overflow_y(&self, node: u32) -> Overflow {
//!         if node == 1 { Overflow::Scroll } else { Overflow::Visible }
//!     }
//!     fn viewport_size(&self) -> Size {
//!         Size::new(800.0, 600.0)
//!     }
//! }
//!
//! let tracker = GeometryTracker::attach(&Doc, ScrollContainer::Node(2));
//! let rect = tracker.rect().unwrap();
//! assert_eq!(rect.top(), 100.0);
//! assert_eq!(rect.invisible_top, 30.0);
//! // The visible top edge is 30px into the node's own content.
//! assert_eq!(rect.to_local(Point::new(10.0, 100.0)), Point::new(10.0, 30.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cell;
mod rect;
mod source;
mod tracker;

pub use cell::{RectCell, RectListener};
pub use rect::VisibleRect;
pub use source::{
    GeometrySource, Overflow, ScrollChain, ScrollContainer, measure, scroll_parents, viewport_rect,
};
pub use tracker::{GeometrySignal, GeometryTracker};
