// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The clip-aware rectangle produced by the geometry tracker.

use kurbo::{Point, Rect, Size, Vec2};

/// A node's screen rectangle after clipping by its scroll ancestors.
///
/// `bounds` is the part of the node that is visible through every
/// strictly-scrollable ancestor and the root viewport. `invisible_top` and
/// `invisible_left` record how much of the node's natural top/left edge is
/// currently clipped away, so a screen point can be mapped back into the
/// node's own content space with [`VisibleRect::to_local`].
///
/// When a node is scrolled completely out of view the clipped bounds are
/// inverted (`x1 < x0` or `y1 < y0`); such a rectangle is [empty](Self::is_empty)
/// and never [contains](Self::contains) a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleRect {
    /// Visible screen-space bounds.
    pub bounds: Rect,
    /// Amount of the node clipped above the visible region.
    pub invisible_top: f64,
    /// Amount of the node clipped left of the visible region.
    pub invisible_left: f64,
}

impl VisibleRect {
    /// A rectangle with nothing clipped away.
    #[must_use]
    pub const fn unclipped(bounds: Rect) -> Self {
        Self {
            bounds,
            invisible_top: 0.0,
            invisible_left: 0.0,
        }
    }

    /// Top edge of the visible region.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.bounds.y0
    }

    /// Left edge of the visible region.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.bounds.x0
    }

    /// Bottom edge of the visible region.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.bounds.y1
    }

    /// Right edge of the visible region.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.bounds.x1
    }

    /// Visible width; negative when the node is clipped out horizontally.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bounds.x1 - self.bounds.x0
    }

    /// Visible height; negative when the node is clipped out vertically.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.bounds.y1 - self.bounds.y0
    }

    /// Visible size, with clipped-out axes reported as zero.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width().max(0.0), self.height().max(0.0))
    }

    /// Returns `true` if no part of the node is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width() < 0.0 || self.height() < 0.0
    }

    /// Edge-inclusive containment test.
    ///
    /// Unlike [`Rect::contains`], points on the right and bottom edges count as
    /// inside, so adjacent zones sharing an edge both accept a point on it and
    /// stacking order decides the winner.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.bounds.x0
            && point.x <= self.bounds.x1
            && point.y >= self.bounds.y0
            && point.y <= self.bounds.y1
    }

    /// Translates a screen point into the node's content-local coordinates.
    ///
    /// The clipped amounts are added back so that `(0, 0)` is always the
    /// node's natural top-left corner, even while it is partially scrolled
    /// out of view.
    #[must_use]
    pub fn to_local(&self, point: Point) -> Point {
        Point::new(
            point.x - self.bounds.x0 + self.invisible_left,
            point.y - self.bounds.y0 + self.invisible_top,
        )
    }

    /// Clips this rectangle by `clip`, accumulating the clipped top/left amounts.
    #[must_use]
    pub fn clipped_by(self, clip: Rect) -> Self {
        let rect = self.bounds;
        let top = clip.y0.max(rect.y0);
        let left = clip.x0.max(rect.x0);
        let clipped = Vec2::new(left - rect.x0, top - rect.y0);
        Self {
            bounds: Rect::new(left, top, clip.x1.min(rect.x1), clip.y1.min(rect.y1)),
            invisible_top: self.invisible_top + clipped.y,
            invisible_left: self.invisible_left + clipped.x,
        }
    }
}

impl From<Rect> for VisibleRect {
    fn from(bounds: Rect) -> Self {
        Self::unclipped(bounds)
    }
}
