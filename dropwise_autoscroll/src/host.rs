// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What autoscroll needs from the host: scroll state and a frame clock.

use dropwise_geometry::{GeometrySource, ScrollContainer};

/// Handle for one scheduled animation frame.
///
/// The host allocates handles; the autoscroller only stores and compares
/// them, so a stale or cancelled frame is recognised when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameRequest(u64);

impl FrameRequest {
    /// Wraps a host frame id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The host frame id.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Schedules one-shot callbacks for the next animation frame.
pub trait FrameScheduler {
    /// Asks for a callback on the next frame.
    fn request_frame(&mut self) -> FrameRequest;

    /// Withdraws a pending request. Cancelling a request that already fired
    /// must be harmless.
    fn cancel_frame(&mut self, request: FrameRequest);
}

/// Vertical scroll state of a container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Current scroll offset (`scrollTop`).
    pub offset: f64,
    /// Visible height (`clientHeight`).
    pub viewport_extent: f64,
    /// Total content height (`scrollHeight`).
    pub content_extent: f64,
}

impl ScrollMetrics {
    /// Returns `true` if the container is scrolled away from its top.
    #[must_use]
    pub fn can_scroll_up(&self) -> bool {
        self.offset > 0.0
    }

    /// Returns `true` if content remains below the visible area.
    #[must_use]
    pub fn can_scroll_down(&self) -> bool {
        self.viewport_extent + self.offset < self.content_extent
    }
}

/// Reads and drives the host's scroll containers.
pub trait ScrollHost: GeometrySource {
    /// Scroll state of `container`, or `None` if it cannot be queried.
    fn scroll_metrics(&self, container: ScrollContainer<Self::Node>) -> Option<ScrollMetrics>;

    /// Scrolls `container` vertically by `delta` pixels.
    fn scroll_by(&mut self, container: ScrollContainer<Self::Node>, delta: f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_directions() {
        let top = ScrollMetrics {
            offset: 0.0,
            viewport_extent: 300.0,
            content_extent: 900.0,
        };
        assert!(!top.can_scroll_up());
        assert!(top.can_scroll_down());

        let bottom = ScrollMetrics { offset: 600.0, ..top };
        assert!(bottom.can_scroll_up());
        assert!(!bottom.can_scroll_down());

        let short = ScrollMetrics {
            offset: 0.0,
            viewport_extent: 300.0,
            content_extent: 300.0,
        };
        assert!(!short.can_scroll_up() && !short.can_scroll_down());
    }
}
