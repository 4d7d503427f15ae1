// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Hierarchy: immutable drill-down trees and focus paths.
//!
//! This crate models the data side of a radial drill-down navigator: a tree of
//! named entities (for example countries → people → sub-people) that the user
//! explores one level at a time. It provides:
//! - [`Hierarchy`]: an immutable node arena with an explicit parent table.
//! - Derived per-node data: [`HierarchyNode::weight`] (child fan-out, floored
//!   at `1`) and [`HierarchyNode::depth`].
//! - [`NodeSpec`]: the nested document form, loadable from JSON.
//! - [`FocusPath`]: the focus holder, an explicit root→focus path stack.
//!
//! It does **not** lay anything out; see `understory_radial_layout` for that.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_hierarchy::{FocusPath, Hierarchy};
//!
//! let h = Hierarchy::from_json_str(r#"{
//!     "name": "Countries",
//!     "children": [
//!         { "name": "Uzbekistan", "children": [
//!             { "name": "Paul", "email": "paul@example.org" }
//!         ] },
//!         { "name": "Russia" }
//!     ]
//! }"#)
//! .unwrap();
//!
//! assert_eq!(h.weight(h.root()), 2);
//! let uz = h.find_path(["Uzbekistan"]).unwrap();
//!
//! let mut focus = FocusPath::new(h.root());
//! focus.descend(&h, uz).unwrap();
//! assert_eq!(focus.breadcrumbs(&h), ["Countries", "Uzbekistan"]);
//! ```
//!
//! ## Identity
//!
//! Display names are labels, not keys. Two siblings may share a name; use
//! [`NodeId`] wherever a stable identity is needed, and
//! [`Hierarchy::sibling_name_collisions`] to detect ambiguous labels.

mod error;
mod focus;
mod tree;
mod types;

pub use error::HierarchyError;
pub use focus::FocusPath;
pub use tree::{Hierarchy, NameCollision, NodeSpec};
pub use types::{Contact, HierarchyNode, NodeId};
