// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=dropwise_autoscroll --heading-base-level=0

//! Dropwise Autoscroll: scroll containers while a drag hovers their edges.
//!
//! ## Hot bands
//!
//! Every scroll container that matters to the current drag gets a band along
//! its visible top and bottom edges ([`ScrollNode`]). A band is
//! `min(100, max(h * 0.2, min(h * 0.5, 15)))` pixels tall for a container of
//! visible height `h`: at least 15px, at most 100px, never more than half the
//! container. The deeper the pointer sits in a band, the higher the
//! [`Intensity`] (1 to 6 by default, negative upwards).
//!
//! ## Selection
//!
//! [`select_activation`] scans nodes innermost first and picks the first one
//! whose band is under the pointer and which can still scroll that way. The
//! pointer here is the *raw* pointer, not the dragged element's centre: scroll
//! intent follows the user's cursor.
//!
//! ## Momentum
//!
//! While a container is active, every animation frame advances the
//! [`Momentum`]: `speed = clamp(|speed| ^ (1 + (|intensity| - 3) / 50), 2, 50)`,
//! signed by the direction. High intensities accelerate, low ones settle at
//! the minimum speed.
//!
//! [`Autoscroller`] ties it together with the host's [`FrameScheduler`]: it
//! holds at most one outstanding [`FrameRequest`], cancels it whenever the
//! activation changes, and ignores frames it no longer expects.
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use dropwise_autoscroll::{
//!     AutoscrollConfig, Autoscroller, FrameRequest, FrameScheduler, ScrollMetrics, ScrollNode,
//! };
//! use dropwise_geometry::VisibleRect;
//!
//! #[derive(Default)]
//! struct Frames(u64);
//! impl FrameScheduler for Frames {
//!     fn request_frame(&mut self) -> FrameRequest {
//!         self.0 += 1;
//!         FrameRequest::new(self.0)
//!     }
//!     fn cancel_frame(&mut self, _: FrameRequest) {}
//! }
//!
//! let config = AutoscrollConfig::default();
//! let list = VisibleRect::unclipped(Rect::new(0.0, 0.0, 200.0, 300.0));
//! let metrics = ScrollMetrics { offset: 0.0, viewport_extent: 300.0, content_extent: 900.0 };
//!
//! let mut frames = Frames::default();
//! let mut scroller = Autoscroller::new(config);
//! scroller.set_nodes(vec![ScrollNode::new("list", &list, metrics, &config).unwrap()]);
//!
//! // 3px above the bottom edge: full intensity downwards.
//! scroller.update(Some(Point::new(100.0, 297.0)), &mut frames);
//! let step = scroller.on_frame(FrameRequest::new(1), &mut frames).unwrap();
//! assert_eq!((step.container, step.delta), ("list", 2.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod host;
mod node;
mod scroller;

pub use config::AutoscrollConfig;
pub use host::{FrameRequest, FrameScheduler, ScrollHost, ScrollMetrics};
pub use node::{Activation, Intensity, ScrollNode, select_activation};
pub use scroller::{Autoscroller, Momentum, ScrollStep};
