// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hot-zone sizing and the momentum curve.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `ceil` and `powf`

use crate::Intensity;

/// Tunables for autoscroll.
///
/// The defaults reproduce the classic feel: bands of 15 to 100 pixels, six
/// intensity steps, and a speed that ramps from 2 to 50 pixels per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AutoscrollConfig {
    /// Band height floor, before the half-height cap (default: 15).
    pub min_band: f64,
    /// Band height ceiling (default: 100).
    pub max_band: f64,
    /// Preferred band height as a fraction of the container (default: 0.2).
    pub band_fraction: f64,
    /// Largest band height as a fraction of the container (default: 0.5).
    pub max_band_fraction: f64,
    /// Number of intensity steps across a band (default: 6).
    pub intensity_steps: u8,
    /// Slowest scroll step, in pixels per frame (default: 2).
    pub min_speed: f64,
    /// Fastest scroll step, in pixels per frame (default: 50).
    pub max_speed: f64,
    /// Intensity at which speed neither grows nor shrinks (default: 3).
    pub ramp_pivot: f64,
    /// Damping of the per-frame exponent (default: 50).
    pub ramp_divisor: f64,
}

impl Default for AutoscrollConfig {
    fn default() -> Self {
        Self {
            min_band: 15.0,
            max_band: 100.0,
            band_fraction: 0.2,
            max_band_fraction: 0.5,
            intensity_steps: 6,
            min_speed: 2.0,
            max_speed: 50.0,
            ramp_pivot: 3.0,
            ramp_divisor: 50.0,
        }
    }
}

impl AutoscrollConfig {
    /// Height of each hot band for a container `height` pixels tall.
    ///
    /// `min(max_band, max(height * band_fraction, min(height * max_band_fraction, min_band)))`
    #[must_use]
    pub fn band_extent(&self, height: f64) -> f64 {
        let floor = (height * self.max_band_fraction).min(self.min_band);
        (height * self.band_fraction).max(floor).min(self.max_band)
    }

    /// Intensity magnitude for a pointer `depth` into a band, where `depth` is
    /// 0 at the inner edge of the band and 1 at the container edge.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, reason = "level is clamped to 1..=steps")]
    pub fn intensity_for_depth(&self, depth: f64) -> u8 {
        let steps = f64::from(self.intensity_steps.max(1));
        let level = (depth * steps).ceil().max(1.0).min(steps);
        level as u8
    }

    /// Next speed magnitude after one frame at `intensity`.
    ///
    /// `clamp(|speed| ^ (1 + (|intensity| - pivot) / divisor), min_speed, max_speed)`
    #[must_use]
    pub fn next_speed(&self, speed: f64, intensity: Intensity) -> f64 {
        let power = 1.0 + (f64::from(intensity.magnitude()) - self.ramp_pivot) / self.ramp_divisor;
        speed
            .abs()
            .powf(power)
            .max(self.min_speed)
            .min(self.max_speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_extent_follows_the_clamp() {
        let c = AutoscrollConfig::default();
        // Small containers: half height caps the 15px floor.
        assert_eq!(c.band_extent(20.0), 10.0);
        // Medium: the 15px floor beats 20%.
        assert_eq!(c.band_extent(50.0), 15.0);
        // 20% once it exceeds the floor.
        assert!((c.band_extent(300.0) - 60.0).abs() < 1e-9);
        // Capped at 100.
        assert_eq!(c.band_extent(2000.0), 100.0);
    }

    #[test]
    fn depth_maps_onto_steps() {
        let c = AutoscrollConfig::default();
        assert_eq!(c.intensity_for_depth(0.0), 1);
        assert_eq!(c.intensity_for_depth(0.01), 1);
        assert_eq!(c.intensity_for_depth(0.5), 3);
        assert_eq!(c.intensity_for_depth(0.51), 4);
        assert_eq!(c.intensity_for_depth(1.0), 6);
    }

    #[test]
    fn speed_is_clamped_and_ramps_above_the_pivot() {
        let c = AutoscrollConfig::default();
        let fast = Intensity::new(6);
        let slow = Intensity::new(-1);
        assert_eq!(c.next_speed(0.0, fast), 2.0);
        assert_eq!(c.next_speed(-100.0, slow), 50.0);
        assert!(c.next_speed(10.0, fast) > 10.0);
        assert!(c.next_speed(10.0, slow) < 10.0);
        assert_eq!(c.next_speed(10.0, Intensity::new(3)), 10.0);
    }
}
