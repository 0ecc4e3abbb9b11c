// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Momentum and the cancellable frame loop.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Point;

use crate::config::AutoscrollConfig;
use crate::host::{FrameRequest, FrameScheduler};
use crate::node::{Activation, Intensity, ScrollNode, select_activation};

/// Signed per-frame scroll step that ramps while an activation holds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Momentum {
    velocity: f64,
}

impl Momentum {
    /// Current signed step in pixels per frame.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Advances one frame at `intensity` and returns the step to scroll by.
    pub fn step(&mut self, intensity: Intensity, config: &AutoscrollConfig) -> f64 {
        let speed = config.next_speed(self.velocity, intensity);
        self.velocity = if intensity.is_up() { -speed } else { speed };
        self.velocity
    }

    /// Back to rest.
    pub fn reset(&mut self) {
        self.velocity = 0.0;
    }
}

/// One frame's worth of scrolling for the host to apply.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollStep<C> {
    /// Container to scroll.
    pub container: C,
    /// Vertical delta in pixels.
    pub delta: f64,
}

/// Drives autoscroll for one drag engine.
///
/// Holds the scroll nodes (innermost first), the current [`Activation`], the
/// [`Momentum`] and at most one outstanding [`FrameRequest`]. Whenever the
/// activation changes, the outstanding frame is cancelled through the
/// scheduler and momentum restarts from rest; a new frame is requested only
/// while something is active.
#[derive(Debug)]
pub struct Autoscroller<C> {
    config: AutoscrollConfig,
    nodes: Vec<ScrollNode<C>>,
    active: Option<Activation<C>>,
    momentum: Momentum,
    frame: Option<FrameRequest>,
}

impl<C> Default for Autoscroller<C> {
    fn default() -> Self {
        Self::new(AutoscrollConfig::default())
    }
}

impl<C> Autoscroller<C> {
    /// Creates an idle autoscroller.
    #[must_use]
    pub fn new(config: AutoscrollConfig) -> Self {
        Self {
            config,
            nodes: Vec::new(),
            active: None,
            momentum: Momentum::default(),
            frame: None,
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &AutoscrollConfig {
        &self.config
    }

    /// Scroll nodes, innermost first.
    pub fn nodes(&self) -> &[ScrollNode<C>] {
        &self.nodes
    }

    /// Replaces the scroll nodes. Call [`update`](Self::update) afterwards to
    /// re-select.
    pub fn set_nodes(&mut self, nodes: Vec<ScrollNode<C>>) {
        self.nodes = nodes;
    }

    /// Current momentum.
    pub fn momentum(&self) -> Momentum {
        self.momentum
    }

    /// Outstanding frame request, if any.
    pub fn pending_frame(&self) -> Option<FrameRequest> {
        self.frame
    }
}

impl<C: Copy + Eq + Debug> Autoscroller<C> {
    /// The current activation.
    pub fn active(&self) -> Option<Activation<C>> {
        self.active
    }

    /// Re-selects for the raw pointer position, or deactivates when
    /// `pointer` is `None`. Returns `true` if the activation changed.
    pub fn update(&mut self, pointer: Option<Point>, scheduler: &mut impl FrameScheduler) -> bool {
        let next = pointer.and_then(|p| select_activation(p, &self.nodes, &self.config));
        self.activate(next, scheduler)
    }

    /// Deactivates and cancels the outstanding frame.
    pub fn stop(&mut self, scheduler: &mut impl FrameScheduler) -> bool {
        self.activate(None, scheduler)
    }

    fn activate(&mut self, next: Option<Activation<C>>, scheduler: &mut impl FrameScheduler) -> bool {
        if next == self.active {
            return false;
        }
        if let Some(frame) = self.frame.take() {
            scheduler.cancel_frame(frame);
        }
        self.momentum.reset();
        self.active = next;
        match next {
            Some(activation) => {
                tracing::debug!(
                    container = ?activation.container,
                    intensity = activation.intensity.get(),
                    "autoscroll activated"
                );
                self.frame = Some(scheduler.request_frame());
            }
            None => tracing::debug!("autoscroll stopped"),
        }
        true
    }

    /// Runs one frame.
    ///
    /// Frames other than the outstanding request are stale and ignored. For
    /// the outstanding one, momentum advances, the next frame is requested,
    /// and the step the host must apply is returned.
    pub fn on_frame(
        &mut self,
        request: FrameRequest,
        scheduler: &mut impl FrameScheduler,
    ) -> Option<ScrollStep<C>> {
        if self.frame != Some(request) {
            tracing::trace!(frame = request.id(), "ignoring stale autoscroll frame");
            return None;
        }
        self.frame = None;
        let activation = self.active?;
        let delta = self.momentum.step(activation.intensity, &self.config);
        self.frame = Some(scheduler.request_frame());
        tracing::trace!(container = ?activation.container, delta, "autoscroll step");
        Some(ScrollStep {
            container: activation.container,
            delta,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ScrollMetrics;
    use alloc::vec;
    use dropwise_geometry::VisibleRect;
    use kurbo::Rect;

    #[derive(Default)]
    struct Clock {
        next: u64,
        pending: Vec<FrameRequest>,
        cancelled: Vec<FrameRequest>,
    }

    impl FrameScheduler for Clock {
        fn request_frame(&mut self) -> FrameRequest {
            self.next += 1;
            let r = FrameRequest::new(self.next);
            self.pending.push(r);
            r
        }

        fn cancel_frame(&mut self, request: FrameRequest) {
            self.pending.retain(|r| *r != request);
            self.cancelled.push(request);
        }
    }

    fn scroller() -> Autoscroller<u8> {
        let mut s = Autoscroller::default();
        let rect = VisibleRect::unclipped(Rect::new(0.0, 0.0, 100.0, 300.0));
        let metrics = ScrollMetrics {
            offset: 100.0,
            viewport_extent: 300.0,
            content_extent: 1000.0,
        };
        let config = *s.config();
        s.set_nodes(vec![ScrollNode::new(7, &rect, metrics, &config).unwrap()]);
        s
    }

    #[test]
    fn momentum_ramps_and_is_signed() {
        let config = AutoscrollConfig::default();
        let mut m = Momentum::default();
        assert_eq!(m.step(Intensity::down(6), &config), 2.0);
        let second = m.step(Intensity::down(6), &config);
        assert!(second > 2.0);
        // Below the pivot the speed decays, but the sign follows the direction.
        let third = m.step(Intensity::up(1), &config);
        assert!(third < -2.0 && third > -second);
        m.reset();
        assert_eq!(m.velocity(), 0.0);
    }

    #[test]
    fn activation_requests_one_frame() {
        let mut clock = Clock::default();
        let mut s = scroller();
        assert!(s.update(Some(Point::new(50.0, 295.0)), &mut clock));
        assert_eq!(clock.pending.len(), 1);
        // Same node, same intensity: nothing restarts.
        assert!(!s.update(Some(Point::new(51.0, 295.0)), &mut clock));
        assert_eq!(clock.pending.len(), 1);
        assert!(clock.cancelled.is_empty());
    }

    #[test]
    fn frames_step_and_rearm() {
        let mut clock = Clock::default();
        let mut s = scroller();
        s.update(Some(Point::new(50.0, 299.0)), &mut clock);
        let first = clock.pending.remove(0);
        let step = s.on_frame(first, &mut clock).unwrap();
        assert_eq!(step.container, 7);
        assert_eq!(step.delta, 2.0);
        assert_eq!(clock.pending.len(), 1);
        // Replaying the consumed frame does nothing.
        assert!(s.on_frame(first, &mut clock).is_none());
    }

    #[test]
    fn changing_activation_cancels_and_resets() {
        let mut clock = Clock::default();
        let mut s = scroller();
        s.update(Some(Point::new(50.0, 299.0)), &mut clock);
        let frame = clock.pending.remove(0);
        s.on_frame(frame, &mut clock);
        assert!(s.momentum().velocity() > 0.0);

        let outstanding = s.pending_frame().unwrap();
        assert!(s.update(Some(Point::new(50.0, 1.0)), &mut clock));
        assert_eq!(clock.cancelled, [outstanding]);
        assert_eq!(s.momentum().velocity(), 0.0);
        assert!(s.active().unwrap().intensity.is_up());

        assert!(s.update(Some(Point::new(50.0, 150.0)), &mut clock));
        assert!(s.active().is_none());
        assert!(clock.pending.is_empty());
        assert!(s.pending_frame().is_none());
    }
}
