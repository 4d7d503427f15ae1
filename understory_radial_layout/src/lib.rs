// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Radial Layout: focus-centered ring layouts for drill-down navigators.
//!
//! Given a [`Hierarchy`](understory_hierarchy::Hierarchy), a focus node and a
//! container size, this crate computes:
//! - The focus radius, shrinking gradually with depth and never below a floor.
//! - One radius per child, weighted by fan-out within a narrow band so skewed
//!   data cannot blow up the picture.
//! - Child centers spaced evenly on a ring, starting at 12 o'clock and running
//!   clockwise.
//! - A scene radius bounding everything, used by a camera to fit the view.
//! - Bowed connector curves and scene-space hit testing.
//!
//! Output is in **focus-centered, unscaled scene coordinates**: the focus sits
//! at the origin and nothing here knows about pan or zoom. Pair it with
//! `understory_camera` to map the scene onto the screen.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_hierarchy::{Hierarchy, NodeSpec};
//! use understory_radial_layout::compute_layout;
//!
//! let h = Hierarchy::from_spec(NodeSpec::branch(
//!     "Countries",
//!     ["A", "B", "C", "D"].map(NodeSpec::leaf),
//! ))
//! .unwrap();
//!
//! let layout = compute_layout(&h, h.root(), Size::new(800.0, 600.0));
//! assert_eq!(layout.focus_radius, 144.0);
//! assert_eq!(layout.placements.len(), 4);
//!
//! for connector in layout.connectors() {
//!     let _svg = connector.svg_path();
//! }
//! ```
//!
//! ## Slots
//!
//! `N` children take `N` evenly spaced slots, except that exactly two children
//! take three slots (the third left empty) so their connectors do not line up
//! through the focus label. See [`slot_count`].
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod config;
mod connector;
mod engine;

pub use config::{LayoutConfig, min_side};
pub use connector::{Connector, bowed_curve, shrink_segment, unit_direction};
pub use engine::{
    LayoutEngine, LayoutHit, LayoutResult, PlacedChild, compute_layout, slot_angle, slot_count,
};
