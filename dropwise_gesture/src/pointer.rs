// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal pointer event vocabulary consumed by the gesture machine.

use kurbo::Point;

bitflags::bitflags! {
    /// Keyboard modifiers held during a pointer event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0000_0001;
        /// Control.
        const CTRL  = 0b0000_0010;
        /// Alt / Option.
        const ALT   = 0b0000_0100;
        /// Meta / Command / Super.
        const META  = 0b0000_1000;
    }
}

/// Which pointer button an event refers to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Main button (usually left).
    #[default]
    Primary,
    /// Secondary button (usually right).
    Secondary,
    /// Auxiliary button (usually the wheel).
    Auxiliary,
    /// Any other button.
    Other(u16),
}

/// Input device behind a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Mouse or trackpad.
    #[default]
    Mouse,
    /// Touch screen.
    Touch,
    /// Stylus.
    Pen,
}

/// A pointer press as seen by a draggable element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPress {
    /// Screen position of the press.
    pub position: Point,
    /// Pressed button.
    pub button: PointerButton,
    /// Modifiers held at press time.
    pub modifiers: Modifiers,
    /// Input device.
    pub kind: PointerKind,
    /// Whether another handler already claimed the press.
    pub default_prevented: bool,
}

impl PointerPress {
    /// A plain primary-button mouse press at `position`.
    pub fn primary(position: Point) -> Self {
        Self {
            position,
            button: PointerButton::Primary,
            modifiers: Modifiers::empty(),
            kind: PointerKind::Mouse,
            default_prevented: false,
        }
    }

    /// Returns a copy with `modifiers` held.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Returns a copy pressed with `button`.
    #[must_use]
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    /// Returns a copy from input device `kind`.
    #[must_use]
    pub fn with_kind(mut self, kind: PointerKind) -> Self {
        self.kind = kind;
        self
    }
}
