// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=dropwise_gesture --heading-base-level=0

//! Dropwise Gesture: tell a click from the start of a drag.
//!
//! Every draggable element owns a [`DragGesture`]. It watches the element's
//! presses, and once the pointer has travelled the *sloppy-click threshold*
//! (5px on either axis by default) it reports a [`DragStart`] carrying the raw
//! press and current positions. What happens next (measuring the element,
//! opening a session) belongs to the engine; the gesture goes back to idle.
//!
//! A press only qualifies when it is a primary-button press with no modifier
//! keys held that no other handler has already claimed. A qualifying press
//! returns [`PressResponse::Pending`], telling the caller to suppress the
//! platform's default action (text selection, native drag and drop).
//!
//! ```rust
//! use kurbo::Point;
//! use dropwise_gesture::{DragGesture, Modifiers, PointerPress, PressResponse};
//!
//! let mut gesture = DragGesture::default();
//!
//! // Shift-click selects; it never drags.
//! let shifted = PointerPress::primary(Point::ZERO).with_modifiers(Modifiers::SHIFT);
//! assert_eq!(gesture.on_pointer_down(&shifted), PressResponse::Ignored);
//!
//! // A plain press followed by a short wiggle and a release is a click.
//! gesture.on_pointer_down(&PointerPress::primary(Point::ZERO));
//! assert!(gesture.on_pointer_move(Point::new(2.0, 3.0)).is_none());
//! gesture.on_pointer_up();
//! assert!(gesture.is_idle());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
mod pointer;

pub use drag::{DragGesture, DragStart, GestureConfig, GesturePhase, PressResponse};
pub use pointer::{Modifiers, PointerButton, PointerKind, PointerPress};
