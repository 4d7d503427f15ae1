// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame output handed to a renderer.

use kurbo::{Affine, Point};
use understory_hierarchy::{Contact, NodeId};
use understory_radial_layout::Connector;

/// Everything a renderer needs to draw one frame of the navigator.
///
/// Geometry is in scene coordinates; apply [`RenderFrame::transform`] (or
/// [`RenderFrame::css_transform`]) to the whole scene group.
#[derive(Clone, Debug)]
pub struct RenderFrame<'a> {
    /// The focused node.
    pub focus: NodeId,
    /// Label drawn inside the focus circle.
    pub focus_label: &'a str,
    /// Contact details of the focus, if any.
    pub focus_contact: Option<&'a Contact>,
    /// Radius of the focus circle, centered on the scene origin.
    pub focus_radius: f64,
    /// Depth of the focus below the root.
    pub depth: usize,
    /// Names along the root→focus path.
    pub breadcrumbs: Vec<&'a str>,
    /// Whether "back" would do anything.
    pub can_go_back: bool,
    /// Children on the ring, in data order.
    pub children: Vec<RenderedChild<'a>>,
    /// `true` when the focus has no children; draw the empty-state affordance.
    pub empty: bool,
    /// Scene → screen transform.
    pub transform: Affine,
    /// The same transform as a CSS `transform` value.
    pub css_transform: String,
    /// `true` while a drag is panning the view.
    pub panning: bool,
    /// Whether the menu is open.
    pub menu_open: bool,
}

/// One child as it should be drawn.
#[derive(Clone, Debug)]
pub struct RenderedChild<'a> {
    /// Stable key for the child.
    pub node: NodeId,
    /// Display label.
    pub name: &'a str,
    /// Contact details, if any.
    pub contact: Option<&'a Contact>,
    /// Center in scene coordinates.
    pub center: Point,
    /// Circle radius.
    pub radius: f64,
    /// Pointer is over this child.
    pub hovered: bool,
    /// This child was the last one clicked.
    pub selected: bool,
    /// Link from the focus circle to this child.
    pub connector: Connector,
    /// SVG path data for [`RenderedChild::connector`].
    pub connector_path: String,
}

impl RenderedChild<'_> {
    /// Whether to draw the child emphasized.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.hovered || self.selected
    }
}
