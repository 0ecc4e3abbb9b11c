// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Everything the engine asks of its host.

use dropwise_autoscroll::{FrameScheduler, ScrollHost};
use dropwise_zones::StackingOrder;

/// The host environment of a [`DragEngine`](crate::DragEngine).
///
/// This is only a name for the collaborator traits taken together:
///
/// - [`GeometrySource`](dropwise_geometry::GeometrySource): bounding
///   rectangles, parents, overflow and viewport size;
/// - [`ScrollHost`]: scroll metrics and applying scroll steps;
/// - [`FrameScheduler`]: one-shot animation frame callbacks;
/// - [`StackingOrder`]: which of two nodes paints above the other.
///
/// It is implemented automatically for any type providing all four.
pub trait DragHost<N>: ScrollHost<Node = N> + FrameScheduler + StackingOrder<N> {}

impl<N, T> DragHost<N> for T where T: ScrollHost<Node = N> + FrameScheduler + StackingOrder<N> {}
