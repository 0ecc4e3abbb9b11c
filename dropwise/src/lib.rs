// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=dropwise --heading-base-level=0

//! Dropwise: a framework-agnostic drag and drop engine.
//!
//! ## Overview
//!
//! Dropwise coordinates one drag at a time across any host node tree. The
//! host answers geometry questions, applies scroll steps and runs animation
//! frames (see [`DragHost`]); Dropwise decides when a press becomes a drag,
//! which drop zone is under the dragged element, and which scroll container
//! should scroll.
//!
//! The pieces live in their own crates and are re-exported here:
//!
//! - [`dropwise_gesture`]: press, threshold, drag start;
//! - [`dropwise_session`]: the session store, its selector subscriptions and
//!   the ref-counted scroll container registry;
//! - [`dropwise_geometry`]: clip-aware rectangles of nodes inside scroll
//!   containers;
//! - [`dropwise_zones`]: the stacking-ordered drop zone resolver;
//! - [`dropwise_autoscroll`]: hot bands, intensity and momentum.
//!
//! [`DragEngine`] wires them together. [`Draggable`] binds a gesture to an
//! item and opens the session when the threshold is crossed.
//!
//! ## Flow
//!
//! 1. The host routes presses and moves on a draggable node to its
//!    [`Draggable`] until a drag starts.
//! 2. From then on it routes document-level moves, releases and key presses
//!    to the [`DragEngine`].
//! 3. It forwards resize and scroll notifications to
//!    [`DragEngine::on_geometry_signal`] and the frames it was asked for to
//!    [`DragEngine::on_animation_frame`].
//!
//! ## Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::cmp::Ordering;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect, Size};
//! use dropwise::{
//!     DragEngine, DragKind, DropCallbacks, DropZone, EngineConfig, FrameRequest,
//!     FrameScheduler, GeometrySource, Overflow, PointerPress, Resolution,
//!     ScrollContainer, ScrollHost, ScrollMetrics, StackingOrder,
//! };
//!
//! const CARD: DragKind = DragKind("card");
//!
//! /// A flat page: node 1 is a card, node 2 a bin.
//! #[derive(Default)]
//! struct Page {
//!     frames: u64,
//! }
//!
//! impl GeometrySource for Page {
//!     type Node = u32;
//!     fn bounding_rect(&self, node: u32) -> Option<Rect> {
//!         match node {
//!             1 => Some(Rect::new(0.0, 0.0, 40.0, 20.0)),
//!             2 => Some(Rect::new(200.0, 0.0, 400.0, 300.0)),
//!             _ => None,
//!         }
//!     }
//!     fn parent(&self, _: u32) -> Option<u32> {
//!         None
//!     }
//!     fn overflow_y(&self, _: u32) -> Overflow {
//!         Overflow::Visible
//!     }
//!     fn viewport_size(&self) -> Size {
//!         Size::new(800.0, 600.0)
//!     }
//! }
//!
//! impl ScrollHost for Page {
//!     fn scroll_metrics(&self, _: ScrollContainer<u32>) -> Option<ScrollMetrics> {
//!         None
//!     }
//!     fn scroll_by(&mut self, _: ScrollContainer<u32>, _: f64) {}
//! }
//!
//! impl FrameScheduler for Page {
//!     fn request_frame(&mut self) -> FrameRequest {
//!         self.frames += 1;
//!         FrameRequest::new(self.frames)
//!     }
//!     fn cancel_frame(&mut self, _: FrameRequest) {}
//! }
//!
//! impl StackingOrder<u32> for Page {
//!     fn compare(&self, a: &u32, b: &u32) -> Ordering {
//!         a.cmp(b)
//!     }
//! }
//!
//! let mut page = Page::default();
//! let mut engine = DragEngine::<u32, &str, ()>::new(EngineConfig::default());
//!
//! let dropped = Rc::new(Cell::new(None));
//! let sink = dropped.clone();
//! let bin = engine.register_drop_zone(
//!     &mut page,
//!     DropZone::new(2, CARD, DropCallbacks::new().on_drop(move |ev| {
//!         sink.set(Some(ev.position));
//!     })),
//! );
//!
//! let mut card = engine.draggable(1, "card-1", CARD, ());
//! card.on_pointer_down(&PointerPress::primary(Point::new(10.0, 10.0)));
//! // Six pixels to the right crosses the threshold.
//! assert!(card.on_pointer_move(&mut engine, &mut page, Point::new(16.0, 10.0)).unwrap());
//! assert!(card.is_dragging(&engine));
//!
//! // The card's centre sits 4px right of the pointer.
//! engine.on_pointer_move(&mut page, Point::new(296.0, 150.0));
//! assert!(engine.is_over(bin));
//!
//! assert_eq!(engine.on_pointer_up(&mut page), Resolution::Dropped(bin));
//! assert_eq!(dropped.get(), Some(Point::new(100.0, 150.0)));
//! assert!(!engine.is_dragging());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod draggable;
mod engine;
mod error;
mod host;

pub use config::{CancelPolicy, EngineConfig, Key};
pub use draggable::Draggable;
pub use engine::DragEngine;
pub use error::DragError;
pub use host::DragHost;

pub use dropwise_autoscroll as autoscroll;
pub use dropwise_geometry as geometry;
pub use dropwise_gesture as gesture;
pub use dropwise_session as session;
pub use dropwise_zones as zones;

pub use dropwise_autoscroll::{
    Activation, AutoscrollConfig, FrameRequest, FrameScheduler, Intensity, ScrollHost,
    ScrollMetrics,
};
pub use dropwise_geometry::{
    GeometrySignal, GeometrySource, Overflow, RectListener, ScrollContainer, VisibleRect,
};
pub use dropwise_gesture::{GestureConfig, Modifiers, PointerButton, PointerKind, PointerPress, PressResponse};
pub use dropwise_session::{
    DragInfo, DragItem, DragKind, LayerKey, ScrollRegistration, SessionError, SessionState,
    SubscriptionId,
};
pub use dropwise_zones::{
    DragOver, DropCallbacks, DropEvent, DropTarget, DropZone, Resolution, StackingOrder, ZoneId,
};
