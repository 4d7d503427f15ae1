// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::f64::consts::TAU;

use kurbo::{Circle, Point, Rect, Size, Vec2};
use understory_hierarchy::{Hierarchy, NodeId};

use crate::config::{LayoutConfig, min_side};
use crate::connector::{Connector, bowed_curve, shrink_segment};

/// Number of angular slots used for `children` children.
///
/// Two children get three slots so they never sit diametrically opposite each
/// other across the focus label; the third slot stays empty. Zero children
/// still report one slot.
#[must_use]
pub fn slot_count(children: usize) -> usize {
    match children {
        0 => 1,
        2 => 3,
        n => n,
    }
}

/// Angle of slot `index` out of `slots`, starting at `start` and stepping
/// clockwise in screen space (y grows downward).
#[must_use]
pub fn slot_angle(start: f64, index: usize, slots: usize) -> f64 {
    let slots = slots.max(1);
    start + index as f64 * (TAU / slots as f64)
}

/// One child positioned on the ring around the focus.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedChild {
    /// The child node.
    pub node: NodeId,
    /// Center in focus-centered scene coordinates.
    pub center: Point,
    /// Circle radius.
    pub radius: f64,
    /// Angle of the slot, in radians.
    pub angle: f64,
    /// Slot index on the ring.
    pub slot: usize,
}

impl PlacedChild {
    /// The child's circle.
    #[must_use]
    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }
}

/// What a scene-space point landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutHit {
    /// The focus circle.
    Focus,
    /// A child circle.
    Child(NodeId),
}

/// Geometry of one focus level, in focus-centered, unscaled scene coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutResult {
    /// The focused node.
    pub focus: NodeId,
    /// Depth of the focus below the root.
    pub depth: u32,
    /// Sanitized shorter container side the radii were derived from.
    pub min_side: f64,
    /// Radius of the focus circle.
    pub focus_radius: f64,
    /// Child radius before weighting.
    pub child_base: f64,
    /// Largest child radius; `0` with no children.
    pub max_child_radius: f64,
    /// Distance from the focus center to each child center.
    pub ring_radius: f64,
    /// Bounding radius of everything drawn; feeds the camera fit.
    pub scene_radius: f64,
    /// Number of angular slots on the ring.
    pub slot_count: usize,
    /// Children in data order.
    pub placements: Vec<PlacedChild>,
    connector_inset: f64,
    connector_bow: f64,
}

impl LayoutResult {
    /// Returns `true` if the focus has no children to show.
    ///
    /// Renderers draw an explicit empty-state affordance in this case.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Placement for `node`, if it is a child of the focus.
    #[must_use]
    pub fn placement(&self, node: NodeId) -> Option<&PlacedChild> {
        self.placements.iter().find(|p| p.node == node)
    }

    /// The focus circle, centered on the origin.
    #[must_use]
    pub fn focus_circle(&self) -> Circle {
        Circle::new(Point::ORIGIN, self.focus_radius)
    }

    /// Square bounding the whole scene.
    #[must_use]
    pub fn scene_bounds(&self) -> Rect {
        let r = self.scene_radius;
        Rect::new(-r, -r, r, r)
    }

    /// Connector for a single placement.
    ///
    /// Runs from the focus boundary toward the child, stopping
    /// `radius + connector_inset` short of the child center, bowed sideways.
    #[must_use]
    pub fn connector(&self, child: &PlacedChild) -> Connector {
        let segment = shrink_segment(
            Point::ORIGIN,
            child.center,
            self.focus_radius,
            child.radius + self.connector_inset,
        );
        Connector {
            child: child.node,
            curve: bowed_curve(segment, self.connector_bow),
        }
    }

    /// Connectors for every placement, in data order.
    pub fn connectors(&self) -> impl Iterator<Item = Connector> + '_ {
        self.placements.iter().map(|p| self.connector(p))
    }

    /// Finds what lies under a scene-space point.
    ///
    /// Children are tested last-placed first, matching paint order, before the
    /// focus circle. Points on a boundary count as inside.
    #[must_use]
    pub fn hit_test(&self, scene_pt: Point) -> Option<LayoutHit> {
        if let Some(child) = self
            .placements
            .iter()
            .rev()
            .find(|p| (scene_pt - p.center).hypot() <= p.radius)
        {
            return Some(LayoutHit::Child(child.node));
        }
        (scene_pt.to_vec2().hypot() <= self.focus_radius).then_some(LayoutHit::Focus)
    }
}

/// Computes [`LayoutResult`]s from a hierarchy, a focus and a container size.
#[derive(Clone, Debug, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Creates an engine with custom tuning.
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Current tuning.
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lays out `focus` and its children for a container of `container` size.
    ///
    /// This never fails: degenerate containers fall back to the radius floors,
    /// and an id outside `hierarchy` is laid out as a childless root.
    #[must_use]
    pub fn compute(&self, hierarchy: &Hierarchy, focus: NodeId, container: Size) -> LayoutResult {
        let cfg = &self.config;
        let side = min_side(container);
        let depth = hierarchy.depth(focus);
        let children = hierarchy.children(focus);

        let focus_radius = cfg.focus_radius(side, depth);
        let child_base = cfg.child_base(side);
        let max_weight = children
            .iter()
            .map(|&c| hierarchy.weight(c))
            .max()
            .unwrap_or(1)
            .max(1);
        let radii: Vec<f64> = children
            .iter()
            .map(|&c| {
                cfg.child_radius(
                    child_base,
                    f64::from(hierarchy.weight(c)),
                    f64::from(max_weight),
                )
            })
            .collect();
        let max_child_radius = radii.iter().copied().fold(0.0, f64::max);
        let ring_radius = focus_radius + max_child_radius + cfg.ring_gap;
        let scene_radius = ring_radius + max_child_radius + cfg.scene_margin;

        let slots = slot_count(children.len());
        let placements = children
            .iter()
            .zip(radii)
            .enumerate()
            .map(|(slot, (&node, radius))| {
                let angle = slot_angle(cfg.start_angle, slot, slots);
                PlacedChild {
                    node,
                    center: Point::ORIGIN + Vec2::from_angle(angle) * ring_radius,
                    radius,
                    angle,
                    slot,
                }
            })
            .collect();

        log::trace!(
            "layout {focus:?}: depth {depth}, {} children, focus r {focus_radius}, scene r {scene_radius}",
            children.len()
        );

        LayoutResult {
            focus,
            depth,
            min_side: side,
            focus_radius,
            child_base,
            max_child_radius,
            ring_radius,
            scene_radius,
            slot_count: slots,
            placements,
            connector_inset: cfg.connector_inset,
            connector_bow: cfg.connector_bow,
        }
    }
}

/// Lays out `focus` with the default [`LayoutConfig`].
#[must_use]
pub fn compute_layout(hierarchy: &Hierarchy, focus: NodeId, container: Size) -> LayoutResult {
    LayoutEngine::default().compute(hierarchy, focus, container)
}
