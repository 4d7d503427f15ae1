// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::FRAC_PI_2;

use kurbo::Size;
use serde::Deserialize;

/// Tuning constants for [`LayoutEngine`](crate::LayoutEngine).
///
/// All distances are in unscaled scene units (device pixels at camera scale
/// `1.0`). The defaults reproduce the stock navigator look; hosts can
/// deserialize partial overrides since every field falls back to its default.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Lower bound on the focus radius.
    pub focus_radius_floor: f64,
    /// Fraction of the container's shorter side used for the focus radius at
    /// depth 0, 1 and 2+ respectively.
    pub depth_factors: [f64; 3],
    /// Fraction of the container's shorter side used for the child base radius.
    pub child_base_factor: f64,
    /// Lower bound on the child base radius.
    pub child_base_min: f64,
    /// Upper bound on the child base radius.
    pub child_base_max: f64,
    /// Share of the child radius driven by relative weight.
    ///
    /// With the default `0.25`, the lightest child is drawn at `0.75` of the
    /// base and the heaviest at the full base.
    pub child_weight_share: f64,
    /// Gap between the focus circle and the largest child circle.
    pub ring_gap: f64,
    /// Margin added outside the ring when computing the scene radius.
    pub scene_margin: f64,
    /// How far connectors stop short of a child's boundary.
    pub connector_inset: f64,
    /// Perpendicular bow of each connector, as a fraction of its length.
    pub connector_bow: f64,
    /// Angle of the first child slot, in radians. `-π/2` is 12 o'clock.
    pub start_angle: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            focus_radius_floor: 120.0,
            depth_factors: [0.24, 0.22, 0.20],
            child_base_factor: 0.11,
            child_base_min: 70.0,
            child_base_max: 180.0,
            child_weight_share: 0.25,
            ring_gap: 64.0,
            scene_margin: 36.0,
            connector_inset: 6.0,
            connector_bow: 0.14,
            start_angle: -FRAC_PI_2,
        }
    }
}

impl LayoutConfig {
    /// Focus-radius factor for a focus `depth` hops below the root.
    #[must_use]
    pub fn depth_factor(&self, depth: u32) -> f64 {
        match depth {
            0 => self.depth_factors[0],
            1 => self.depth_factors[1],
            _ => self.depth_factors[2],
        }
    }

    /// Radius of the focus circle.
    #[must_use]
    pub fn focus_radius(&self, min_side: f64, depth: u32) -> f64 {
        (min_side * self.depth_factor(depth)).max(self.focus_radius_floor)
    }

    /// Base radius shared by all children before weighting.
    #[must_use]
    pub fn child_base(&self, min_side: f64) -> f64 {
        // Not `f64::clamp`: a misconfigured min > max must not panic.
        (min_side * self.child_base_factor)
            .max(self.child_base_min)
            .min(self.child_base_max)
    }

    /// Radius of a child of weight `weight` among siblings whose heaviest
    /// member weighs `max_weight`.
    #[must_use]
    pub fn child_radius(&self, base: f64, weight: f64, max_weight: f64) -> f64 {
        let max_weight = if max_weight > 0.0 { max_weight } else { 1.0 };
        let ratio = (weight / max_weight).max(0.0).min(1.0);
        base * ((1.0 - self.child_weight_share) + self.child_weight_share * ratio)
    }
}

/// Shorter side of `container`, sanitized to at least `1.0`.
///
/// Zero, negative and non-finite sizes collapse to `1.0`, so a layout over an
/// unmeasured container falls back to its radius floors instead of failing.
#[must_use]
pub fn min_side(container: Size) -> f64 {
    let side = container.width.min(container.height);
    if side.is_finite() { side.max(1.0) } else { 1.0 }
}
