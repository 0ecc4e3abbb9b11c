// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration and keyboard input.

use dropwise_autoscroll::AutoscrollConfig;
use dropwise_gesture::GestureConfig;

/// Which key presses cancel an active drag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CancelPolicy {
    /// Only Escape cancels.
    #[default]
    EscapeOnly,
    /// Any key cancels.
    AnyKey,
    /// Keys never cancel; the host calls
    /// [`DragEngine::cancel`](crate::DragEngine::cancel) itself.
    Never,
}

impl CancelPolicy {
    /// Returns `true` if `key` cancels a drag under this policy.
    #[must_use]
    pub fn cancels(self, key: Key) -> bool {
        match self {
            Self::EscapeOnly => key == Key::Escape,
            Self::AnyKey => true,
            Self::Never => false,
        }
    }
}

/// A key press, reduced to what drag cancellation cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// The Escape key.
    Escape,
    /// Any other key.
    Other,
}

/// Tunables for a [`DragEngine`](crate::DragEngine).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Drag recognition for [`Draggable`](crate::Draggable)s created by the
    /// engine.
    pub gesture: GestureConfig,
    /// Hot bands and momentum.
    pub autoscroll: AutoscrollConfig,
    /// Keyboard cancellation.
    pub cancel_policy: CancelPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policies() {
        assert!(CancelPolicy::default().cancels(Key::Escape));
        assert!(!CancelPolicy::default().cancels(Key::Other));
        assert!(CancelPolicy::AnyKey.cancels(Key::Other));
        assert!(!CancelPolicy::Never.cancels(Key::Escape));
    }
}
