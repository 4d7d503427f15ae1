// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::Deserialize;
use understory_camera::ViewConfig;
use understory_radial_layout::LayoutConfig;

/// Combined tuning for a [`Navigator`](crate::Navigator).
///
/// Deserializes from a JSON object with optional `layout` and `view`
/// sections; anything omitted keeps its default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Layout tuning.
    pub layout: LayoutConfig,
    /// Camera tuning.
    pub view: ViewConfig,
}
