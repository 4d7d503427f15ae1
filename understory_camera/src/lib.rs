// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Camera: a pan/zoom camera for focus-centered scenes.
//!
//! This crate provides a small, headless camera that maps a scene whose
//! content is centered on the origin (for example the output of
//! `understory_radial_layout`) onto a screen-space container. It covers:
//! - Fitting: center the scene and scale it so a bounding radius fills the
//!   container, recomputing the zoom-out limit each time.
//! - Drag panning with a dead-zone, so a press that barely moves is a click.
//! - Cursor-anchored wheel zoom with exponential response and clamping.
//! - Scene ↔ screen conversion and a ready-made CSS transform string.
//!
//! It does **not** own a scene, hit test, or animate. Callers feed it pointer
//! and wheel input and re-fit it whenever the content or container changes.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_camera::ViewportController;
//! use understory_camera::drag::DragEnd;
//!
//! let mut camera = ViewportController::default();
//! camera.reset_to_fit(Size::new(800.0, 600.0), 384.0);
//!
//! // Wheel up over a point zooms in around it.
//! let cursor = Point::new(200.0, 150.0);
//! let under_cursor = camera.view_to_world_point(cursor);
//! camera.zoom_at_point(cursor, -120.0);
//! let still_under = camera.view_to_world_point(cursor);
//! assert!((under_cursor - still_under).hypot() < 1e-9);
//!
//! // A press that does not travel is a click, not a pan.
//! camera.begin_drag(1, Point::new(10.0, 10.0));
//! camera.update_drag(Point::new(12.0, 11.0));
//! assert_eq!(camera.end_drag(), DragEnd::Click);
//! ```
//!
//! ## Design notes
//!
//! - The camera is axis-aligned with a **uniform** scale.
//! - The composed transform is `translate(pan) ∘ scale(scale)`: the pan is the
//!   screen position of the scene origin.
//! - Drag deltas are incremental, so replaying the same move sequence always
//!   produces the same camera state.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

pub mod drag;

mod config;
mod controller;

pub use config::ViewConfig;
pub use controller::{ViewportController, ViewportState};
