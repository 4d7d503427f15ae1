// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Radial: a drill-down "circle packing" navigator.
//!
//! A [`Navigator`] shows one node of a [`Hierarchy`](understory_hierarchy::Hierarchy)
//! as a large circle at the scene origin with its direct children on a ring
//! around it. Clicking a child drills into it; back, home and breadcrumbs go up.
//! The view can be panned by dragging and zoomed with the wheel, and is
//! re-fitted to the container every time the focus or container changes.
//!
//! The navigator is headless: hosts forward pointer and wheel input, call
//! [`Navigator::frame`] and draw the returned [`RenderFrame`]. It composes:
//! - `understory_hierarchy` for the data tree and the focus path,
//! - `understory_radial_layout` for circle placement, connectors and hit testing,
//! - `understory_camera` for fit, drag pan and cursor-anchored zoom.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use overstory_radial::{Navigator, NavigatorConfig};
//! use understory_hierarchy::{Hierarchy, NodeSpec};
//!
//! let hierarchy = Hierarchy::from_spec(NodeSpec::branch(
//!     "Countries",
//!     [NodeSpec::leaf("Kazakhstan"), NodeSpec::leaf("Russia")],
//! ))
//! .unwrap();
//!
//! let mut nav = Navigator::new(hierarchy, NavigatorConfig::default());
//! nav.resize(Size::new(800.0, 600.0));
//!
//! // Click the first child through its on-screen position.
//! let kz = nav.hierarchy().find_path(["Kazakhstan"]).unwrap();
//! let at = nav.screen_center(kz).unwrap();
//! nav.pointer_down(1, at);
//! nav.pointer_up(at);
//!
//! let frame = nav.frame();
//! assert_eq!(frame.breadcrumbs, ["Countries", "Kazakhstan"]);
//! assert!(frame.empty);
//! assert!(frame.can_go_back);
//! ```

mod config;
mod frame;
mod navigator;

pub use config::NavigatorConfig;
pub use frame::{RenderFrame, RenderedChild};
pub use navigator::{MenuAction, NavigationIntent, Navigator, NavigatorEvent};
