// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll containers with their hot bands, and picking the one to scroll.

use dropwise_geometry::VisibleRect;
use kurbo::{Point, Rect};

use crate::config::AutoscrollConfig;
use crate::host::ScrollMetrics;

/// Signed scroll intensity: negative scrolls up, positive scrolls down.
///
/// The magnitude grows from 1 at the inner edge of a hot band to
/// [`AutoscrollConfig::intensity_steps`] at the container edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Intensity(i8);

impl Intensity {
    /// Wraps a signed intensity.
    #[must_use]
    pub const fn new(value: i8) -> Self {
        Self(value)
    }

    /// Upward intensity of `magnitude`.
    #[must_use]
    pub fn up(magnitude: u8) -> Self {
        Self(-Self::saturate(magnitude))
    }

    /// Downward intensity of `magnitude`.
    #[must_use]
    pub fn down(magnitude: u8) -> Self {
        Self(Self::saturate(magnitude))
    }

    fn saturate(magnitude: u8) -> i8 {
        i8::try_from(magnitude).unwrap_or(i8::MAX)
    }

    /// The signed value.
    #[must_use]
    pub const fn get(self) -> i8 {
        self.0
    }

    /// Absolute value.
    #[must_use]
    pub const fn magnitude(self) -> u8 {
        self.0.unsigned_abs()
    }

    /// Returns `true` for upward scrolling.
    #[must_use]
    pub const fn is_up(self) -> bool {
        self.0 < 0
    }
}

/// A registered scroll container as autoscroll sees it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollNode<C> {
    /// The container.
    pub container: C,
    /// The container is scrolled away from its top.
    pub can_scroll_up: bool,
    /// Content remains below the visible area.
    pub can_scroll_down: bool,
    /// Band along the visible top edge.
    pub top_hot_zone: Rect,
    /// Band along the visible bottom edge.
    pub bottom_hot_zone: Rect,
}

impl<C> ScrollNode<C> {
    /// Derives the hot bands from the container's visible rectangle.
    ///
    /// Returns `None` for a container that is clipped out of view.
    pub fn new(
        container: C,
        rect: &VisibleRect,
        metrics: ScrollMetrics,
        config: &AutoscrollConfig,
    ) -> Option<Self> {
        if rect.is_empty() {
            return None;
        }
        let band = config.band_extent(rect.height());
        let b = rect.bounds;
        Some(Self {
            container,
            can_scroll_up: metrics.can_scroll_up(),
            can_scroll_down: metrics.can_scroll_down(),
            top_hot_zone: Rect::new(b.x0, b.y0, b.x1, b.y0 + band),
            bottom_hot_zone: Rect::new(b.x0, b.y1 - band, b.x1, b.y1),
        })
    }

    /// Intensity this node asks for with the pointer at `pointer`, if any.
    ///
    /// The top band is tested first. A pointer in the top band of a node that
    /// cannot scroll up yields nothing, even if the bands overlap.
    pub fn intensity_at(&self, pointer: Point, config: &AutoscrollConfig) -> Option<Intensity> {
        if within(pointer, self.top_hot_zone) {
            let zone = self.top_hot_zone;
            let depth = 1.0 - (pointer.y - zone.y0) / zone.height();
            return self
                .can_scroll_up
                .then(|| Intensity::up(config.intensity_for_depth(depth)));
        }
        if within(pointer, self.bottom_hot_zone) {
            let zone = self.bottom_hot_zone;
            let depth = 1.0 - (zone.y1 - pointer.y) / zone.height();
            return self
                .can_scroll_down
                .then(|| Intensity::down(config.intensity_for_depth(depth)));
        }
        None
    }
}

fn within(p: Point, r: Rect) -> bool {
    p.x >= r.x0 && p.x <= r.x1 && p.y >= r.y0 && p.y <= r.y1
}

/// The container being autoscrolled and how hard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Activation<C> {
    /// The container.
    pub container: C,
    /// Direction and strength.
    pub intensity: Intensity,
}

/// Picks the container to scroll for a raw pointer position.
///
/// `nodes` are scanned in order (innermost first); the first node with a hot
/// band under the pointer that can scroll in that direction wins.
pub fn select_activation<C: Copy>(
    pointer: Point,
    nodes: &[ScrollNode<C>],
    config: &AutoscrollConfig,
) -> Option<Activation<C>> {
    nodes.iter().find_map(|node| {
        node.intensity_at(pointer, config).map(|intensity| Activation {
            container: node.container,
            intensity,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(offset: f64) -> ScrollMetrics {
        ScrollMetrics {
            offset,
            viewport_extent: 300.0,
            content_extent: 1000.0,
        }
    }

    fn node(container: u8, offset: f64) -> ScrollNode<u8> {
        let rect = VisibleRect::unclipped(Rect::new(0.0, 100.0, 200.0, 400.0));
        ScrollNode::new(container, &rect, metrics(offset), &AutoscrollConfig::default()).unwrap()
    }

    #[test]
    fn bands_sit_on_the_visible_edges() {
        let n = node(0, 0.0);
        assert_eq!(n.top_hot_zone, Rect::new(0.0, 100.0, 200.0, 160.0));
        assert_eq!(n.bottom_hot_zone, Rect::new(0.0, 340.0, 200.0, 400.0));
    }

    #[test]
    fn intensity_grows_towards_the_edge() {
        let c = AutoscrollConfig::default();
        let n = node(0, 50.0);
        assert_eq!(n.intensity_at(Point::new(10.0, 400.0), &c), Some(Intensity::down(6)));
        assert_eq!(n.intensity_at(Point::new(10.0, 340.0), &c), Some(Intensity::down(1)));
        assert_eq!(n.intensity_at(Point::new(10.0, 100.0), &c), Some(Intensity::up(6)));
        assert_eq!(n.intensity_at(Point::new(10.0, 250.0), &c), None);
    }

    #[test]
    fn blocked_direction_is_not_eligible() {
        let c = AutoscrollConfig::default();
        // Scrolled to the top: the top band does nothing.
        let n = node(0, 0.0);
        assert_eq!(n.intensity_at(Point::new(10.0, 110.0), &c), None);
    }

    #[test]
    fn innermost_eligible_node_wins() {
        let c = AutoscrollConfig::default();
        let inner = node(1, 0.0);
        let outer = node(2, 100.0);
        // Top band: inner cannot scroll up, so outer takes it.
        let a = select_activation(Point::new(10.0, 105.0), &[inner, outer], &c).unwrap();
        assert_eq!(a.container, 2);
        assert!(a.intensity.is_up());
        // Bottom band: inner can scroll down and comes first.
        let a = select_activation(Point::new(10.0, 395.0), &[inner, outer], &c).unwrap();
        assert_eq!(a.container, 1);
    }

    #[test]
    fn clipped_out_containers_have_no_bands() {
        let gone = VisibleRect::unclipped(Rect::new(0.0, 50.0, 100.0, 40.0));
        let n = ScrollNode::new(0_u8, &gone, metrics(0.0), &AutoscrollConfig::default());
        assert!(n.is_none());
    }
}
