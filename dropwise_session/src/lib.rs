// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=dropwise_session --heading-base-level=0

//! Dropwise Session: the shared record of the drag in flight.
//!
//! A pointer-driven drag involves many independent parties: the ghost element
//! following the pointer, placeholders, drop zones, and autoscrolling
//! containers. They coordinate through one [`SessionStore`] that holds at most
//! one active [`DragItem`] with its live [`DragInfo`], plus a reference-counted
//! [`ScrollRegistry`] of the scroll containers that currently matter.
//!
//! ## Positions
//!
//! [`DragInfo`] positions are the dragged element's *visual centre*. The
//! pointer-to-centre vector captured at grab time (`mouse_offset`) is added to
//! every raw pointer sample, so the ghost keeps the same visual relationship to
//! the point where the user grabbed it, and the displacement of the centre
//! always equals the displacement of the pointer.
//!
//! ## Notifications
//!
//! Consumers subscribe to a *selected slice* of the state. Every committed
//! write re-runs each selector synchronously, in subscription order, and calls
//! the listener only if the slice changed under the subscription's equality
//! ([`SessionStore::subscribe`] uses `PartialEq`,
//! [`SessionStore::subscribe_with`] takes a custom comparison such as
//! `Rc::ptr_eq`). Writes are never batched.
//!
//! The store is an ordinary value: each engine owns one, so independent engines
//! (tests, multiple windows) never share drag state.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod item;
mod registry;
mod store;

pub use error::SessionError;
pub use item::{DragInfo, DragItem, DragKind, LayerKey};
pub use registry::{ScrollRegistration, ScrollRegistry};
pub use store::{ActiveDrag, SessionState, SessionStore, SubscriptionId};
