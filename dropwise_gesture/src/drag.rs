// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag gesture state: decide when a press becomes a drag.
//!
//! ## Usage
//!
//! 1) Feed presses on the draggable element to [`DragGesture::on_pointer_down`].
//!    A qualifying press returns [`PressResponse::Pending`]; suppress the
//!    press's default action (text selection, native drag) when it does.
//! 2) Feed pointer moves to [`DragGesture::on_pointer_move`]. Once the pointer
//!    has moved at least the sloppy-click threshold on either axis, it returns a
//!    [`DragStart`] and the gesture resets to idle: the drag now belongs to the
//!    session.
//! 3) Feed releases to [`DragGesture::on_pointer_up`]; a release before the
//!    threshold is an ordinary click and nothing starts.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use dropwise_gesture::{DragGesture, PointerPress, PressResponse};
//!
//! let mut gesture = DragGesture::default();
//!
//! assert_eq!(
//!     gesture.on_pointer_down(&PointerPress::primary(Point::new(10.0, 20.0))),
//!     PressResponse::Pending
//! );
//! // Within the threshold: still just a press.
//! assert!(gesture.on_pointer_move(Point::new(13.0, 22.0)).is_none());
//!
//! // 5px to the right: the drag starts.
//! let start = gesture.on_pointer_move(Point::new(15.0, 20.0)).unwrap();
//! assert_eq!(start.start_pos, Point::new(10.0, 20.0));
//! assert_eq!(start.current_pos, Point::new(15.0, 20.0));
//! assert!(gesture.is_idle());
//! ```

use kurbo::Point;

use crate::pointer::{PointerButton, PointerKind, PointerPress};

/// Tunables for drag recognition.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureConfig {
    /// Displacement on either axis (in pixels) at which a press becomes a
    /// drag (default: 5).
    pub sloppy_threshold: f64,
}

impl GestureConfig {
    /// Default sloppy-click threshold in pixels.
    pub const SLOPPY_CLICK_THRESHOLD: f64 = 5.0;

    /// Returns `true` once `current` is far enough from `origin` to drag.
    pub fn is_threshold_exceeded(&self, origin: Point, current: Point) -> bool {
        (current.x - origin.x).abs() >= self.sloppy_threshold
            || (current.y - origin.y).abs() >= self.sloppy_threshold
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            sloppy_threshold: Self::SLOPPY_CLICK_THRESHOLD,
        }
    }
}

/// Answer to a pointer press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressResponse {
    /// The press does not concern this gesture; leave it alone.
    Ignored,
    /// The press may become a drag; suppress its default action.
    Pending,
}

/// Emitted when a pending press crosses the drag threshold.
///
/// Positions are raw pointer positions; turning them into element-centre
/// positions needs the element's rectangle, which the caller measures now.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragStart {
    /// Where the press happened.
    pub start_pos: Point,
    /// The move that crossed the threshold.
    pub current_pos: Point,
    /// Whether the press came from a touch screen.
    pub is_touch: bool,
}

/// Where a gesture is.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GesturePhase {
    /// Waiting for a qualifying press.
    #[default]
    Idle,
    /// Pressed; waiting to see whether the pointer moves far enough.
    Pending {
        /// Press position.
        start_pos: Point,
        /// Device that pressed.
        kind: PointerKind,
    },
}

/// Per-draggable state machine: `Idle → Pending → (DragStart) → Idle`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragGesture {
    config: GestureConfig,
    phase: GesturePhase,
    disabled: bool,
}

impl DragGesture {
    /// Creates an idle gesture.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            phase: GesturePhase::Idle,
            disabled: false,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Returns `true` when no press is pending.
    pub fn is_idle(&self) -> bool {
        self.phase == GesturePhase::Idle
    }

    /// Returns `true` if presses are currently ignored.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enables or disables the gesture. Disabling abandons a pending press.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.reset();
        }
    }

    /// Returns to idle without starting anything.
    pub fn reset(&mut self) {
        self.phase = GesturePhase::Idle;
    }

    /// Handles a press on the draggable element.
    ///
    /// Only a primary-button press with no modifiers, not already claimed by
    /// another handler, qualifies. A press while pending (a second button or
    /// finger) cancels the pending gesture.
    pub fn on_pointer_down(&mut self, press: &PointerPress) -> PressResponse {
        match self.phase {
            GesturePhase::Pending { .. } => {
                self.reset();
                PressResponse::Ignored
            }
            GesturePhase::Idle => {
                if self.disabled
                    || press.default_prevented
                    || press.button != PointerButton::Primary
                    || !press.modifiers.is_empty()
                {
                    return PressResponse::Ignored;
                }
                self.phase = GesturePhase::Pending {
                    start_pos: press.position,
                    kind: press.kind,
                };
                PressResponse::Pending
            }
        }
    }

    /// Handles a pointer move. Returns the drag start once the threshold is
    /// reached, after which the gesture is idle again.
    pub fn on_pointer_move(&mut self, position: Point) -> Option<DragStart> {
        let GesturePhase::Pending { start_pos, kind } = self.phase else {
            return None;
        };
        if !self.config.is_threshold_exceeded(start_pos, position) {
            return None;
        }
        self.reset();
        tracing::trace!(?start_pos, current_pos = ?position, "press promoted to drag");
        Some(DragStart {
            start_pos,
            current_pos: position,
            is_touch: kind == PointerKind::Touch,
        })
    }

    /// Handles a release. A release while pending is a plain click.
    pub fn on_pointer_up(&mut self) {
        self.reset();
    }
}
