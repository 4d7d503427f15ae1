// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::Deserialize;

/// Tuning constants for [`ViewportController`](crate::ViewportController).
///
/// Every field falls back to its default when deserializing, so hosts can
/// override just the values they care about.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Distance a pointer must travel from where it went down before a drag
    /// starts panning. Shorter gestures are clicks.
    pub drag_threshold: f64,
    /// Wheel delta to zoom exponent ratio: a wheel event zooms by
    /// `exp(-delta_y * wheel_sensitivity)`.
    pub wheel_sensitivity: f64,
    /// Upper scale bound.
    pub max_scale: f64,
    /// Fraction of the container's shorter side the scene fills after a fit.
    pub fit_fill: f64,
    /// Lowest scale a fit will apply.
    pub fit_scale_floor: f64,
    /// How far below the fit scale wheel zoom may go, as a factor of it.
    pub zoom_out_slack: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            drag_threshold: 4.0,
            wheel_sensitivity: 0.0015,
            max_scale: 6.0,
            fit_fill: 0.95,
            fit_scale_floor: 0.01,
            zoom_out_slack: 0.9,
        }
    }
}
