// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=dropwise_zones --heading-base-level=0

//! Dropwise Zones: which drop target is under the dragged element.
//!
//! ## Overview
//!
//! Drop zones register with a [`ZoneRegistry`], which keeps them sorted
//! topmost first using a host-supplied [`StackingOrder`]. For every position
//! sample of the drag, [`ZoneRegistry::resolve`] walks the zones from the top
//! and picks the first one that accepts the dragged item and whose
//! clip-aware rectangle contains the element centre. Overlapping zones
//! therefore never both claim the element: the one painted above wins.
//!
//! ## Notifications
//!
//! Zones receive notifications through the [`DropTarget`] trait
//! ([`DropCallbacks`] builds one from closures):
//!
//! - [`DragOver`] with a zone-local position whenever the element moves
//!   within the zone;
//! - a single [`DragOver`] with no item and no position when the element
//!   leaves (or the drag ends elsewhere);
//! - [`DropEvent`] for the topmost zone under the element when the drag ends;
//! - `on_over_changed` whenever the zone's over flag flips.
//!
//! Positions are local to the zone's natural top-left corner, so a zone that
//! is partly scrolled out of view still reports positions in its own content
//! space.
//!
//! ## Hit point
//!
//! The resolver is fed the element *centre* (the projected position), not the
//! raw pointer: the ghost element may be offset from the pointer by the grab
//! offset and it is the ghost the user aims with.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod order;
mod registry;
mod target;

pub use order::StackingOrder;
pub use registry::{DropZone, Resolution, ZoneId, ZoneRegistry};
pub use target::{DragOver, DropCallbacks, DropEvent, DropTarget};
