// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-subscriber push channel for rectangle updates.
//!
//! Geometry changes arrive at scroll and resize frequency. Routing them through
//! the broadcast session store would wake every session subscriber, so each
//! tracker instead owns a [`RectCell`]: one slot, one listener, and a push only
//! when the value actually changes.

use alloc::boxed::Box;
use core::fmt;

use crate::rect::VisibleRect;

/// Listener invoked with each new rectangle; `None` means "no rect".
pub type RectListener = Box<dyn FnMut(Option<&VisibleRect>)>;

/// A value slot with at most one subscriber.
#[derive(Default)]
pub struct RectCell {
    value: Option<VisibleRect>,
    listener: Option<RectListener>,
}

impl fmt::Debug for RectCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RectCell")
            .field("value", &self.value)
            .field("subscribed", &self.listener.is_some())
            .finish()
    }
}

impl RectCell {
    /// Creates an empty cell with no subscriber.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> Option<VisibleRect> {
        self.value
    }

    /// Stores `value` and pushes it to the subscriber if it differs from the
    /// previous value. Returns `true` if the value changed.
    pub fn set(&mut self, value: Option<VisibleRect>) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        if let Some(listener) = self.listener.as_mut() {
            listener(self.value.as_ref());
        }
        true
    }

    /// Installs `listener`, returning the one it replaces.
    pub fn subscribe(&mut self, listener: RectListener) -> Option<RectListener> {
        self.listener.replace(listener)
    }

    /// Removes and returns the current listener.
    pub fn unsubscribe(&mut self) -> Option<RectListener> {
        self.listener.take()
    }

    /// Returns `true` if a listener is installed.
    #[must_use]
    pub fn has_subscriber(&self) -> bool {
        self.listener.is_some()
    }
}
