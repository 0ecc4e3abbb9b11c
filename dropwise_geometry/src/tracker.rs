// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reactive rectangle tracking for a single node.

use core::fmt::Debug;

use crate::cell::{RectCell, RectListener};
use crate::rect::VisibleRect;
use crate::source::{GeometrySource, ScrollChain, ScrollContainer, measure, scroll_parents};

/// A host notification that geometry may have changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometrySignal<N> {
    /// The node's box changed size or its content was mutated.
    Resized(N),
    /// A scroll container scrolled.
    Scrolled(ScrollContainer<N>),
    /// The root viewport was resized.
    ViewportResized,
}

/// Tracks the [`VisibleRect`] of one node (or of the viewport).
///
/// The scroll chain is collected once on [`attach`](Self::attach); the rect is
/// recomputed whenever a [`GeometrySignal`] touches the node or its chain.
/// Consumers that need every rect change subscribe through the tracker's
/// single-subscriber [`RectCell`].
#[derive(Debug)]
pub struct GeometryTracker<N> {
    target: ScrollContainer<N>,
    chain: ScrollChain<N>,
    cell: RectCell,
}

impl<N: Copy + Eq + Debug> GeometryTracker<N> {
    /// Starts tracking `target`, measuring it immediately.
    pub fn attach<S>(source: &S, target: ScrollContainer<N>) -> Self
    where
        S: GeometrySource<Node = N> + ?Sized,
    {
        Self::attach_with(source, target, None)
    }

    /// Starts tracking `target` with an initial subscriber.
    ///
    /// The subscriber receives the first measurement.
    pub fn attach_with<S>(
        source: &S,
        target: ScrollContainer<N>,
        listener: Option<RectListener>,
    ) -> Self
    where
        S: GeometrySource<Node = N> + ?Sized,
    {
        let chain = match target {
            ScrollContainer::Node(node) => scroll_parents(source, node),
            ScrollContainer::Viewport => ScrollChain::new(),
        };
        let mut cell = RectCell::new();
        if let Some(listener) = listener {
            cell.subscribe(listener);
        }
        let mut tracker = Self {
            target,
            chain,
            cell,
        };
        tracker.refresh(source);
        tracker
    }

    /// The tracked node or viewport.
    pub fn target(&self) -> ScrollContainer<N> {
        self.target
    }

    /// Scroll ancestors of the target, innermost first.
    pub fn scroll_parents(&self) -> &[ScrollContainer<N>] {
        &self.chain
    }

    /// Latest measured rectangle.
    pub fn rect(&self) -> Option<VisibleRect> {
        self.cell.get()
    }

    /// Returns `true` if `signal` can change this tracker's rectangle.
    pub fn is_affected_by(&self, signal: &GeometrySignal<N>) -> bool {
        match signal {
            GeometrySignal::ViewportResized => true,
            GeometrySignal::Resized(node) => {
                self.target == ScrollContainer::Node(*node)
                    || self.chain.contains(&ScrollContainer::Node(*node))
            }
            GeometrySignal::Scrolled(container) => self.chain.contains(container),
        }
    }

    /// Recomputes the rectangle if `signal` affects it. Returns `true` if the
    /// rectangle changed.
    pub fn on_signal<S>(&mut self, source: &S, signal: &GeometrySignal<N>) -> bool
    where
        S: GeometrySource<Node = N> + ?Sized,
    {
        self.is_affected_by(signal) && self.refresh(source)
    }

    /// Unconditionally re-measures. Returns `true` if the rectangle changed.
    pub fn refresh<S>(&mut self, source: &S) -> bool
    where
        S: GeometrySource<Node = N> + ?Sized,
    {
        let rect = measure(source, self.target, &self.chain);
        let changed = self.cell.set(rect);
        if changed {
            tracing::trace!(target_node = ?self.target, ?rect, "visible rect changed");
        }
        changed
    }

    /// Installs the rect subscriber, returning the one it replaces.
    pub fn subscribe(&mut self, listener: RectListener) -> Option<RectListener> {
        self.cell.subscribe(listener)
    }

    /// Removes the rect subscriber.
    pub fn unsubscribe(&mut self) -> Option<RectListener> {
        self.cell.unsubscribe()
    }

    /// Stops tracking. The subscriber receives a final `None` and is handed
    /// back to the caller.
    pub fn detach(mut self) -> Option<RectListener> {
        self.cell.set(None);
        self.cell.unsubscribe()
    }
}
