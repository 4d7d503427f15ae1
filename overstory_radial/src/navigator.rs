// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};
use understory_camera::ViewportController;
use understory_camera::drag::{DragEnd, DragPhase, PointerId};
use understory_hierarchy::{FocusPath, Hierarchy, HierarchyError, NodeId};
use understory_radial_layout::{LayoutEngine, LayoutHit, LayoutResult};

use crate::config::NavigatorConfig;
use crate::frame::{RenderFrame, RenderedChild};

/// Entries of the navigator's menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    /// Show the user's profile. Handled in place; raises no intent.
    Profile,
    /// Go to the mission page.
    Mission,
}

/// Requests for the host to leave the navigator. The navigator never routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Open the mission page.
    Mission,
}

/// Notable state changes reported back to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigatorEvent {
    /// The focus moved; layout and camera have already been refreshed.
    FocusChanged {
        /// Previous focus.
        from: NodeId,
        /// New focus.
        to: NodeId,
    },
}

/// Radial drill-down navigator.
///
/// Owns the hierarchy, the focus path and the camera, and keeps a layout
/// for the current focus and container. Every focus change or resize
/// re-lays out and re-fits the camera before returning, so a frame taken
/// afterward is never stale.
#[derive(Clone, Debug)]
pub struct Navigator {
    hierarchy: Hierarchy,
    focus: FocusPath,
    engine: LayoutEngine,
    camera: ViewportController,
    container: Size,
    layout: LayoutResult,
    hovered: Option<NodeId>,
    selected: Option<NodeId>,
    menu_open: bool,
}

impl Navigator {
    /// Creates a navigator focused on the hierarchy root.
    ///
    /// The container starts empty; call [`Navigator::resize`] once it is measured.
    #[must_use]
    pub fn new(hierarchy: Hierarchy, config: NavigatorConfig) -> Self {
        let focus = FocusPath::new(hierarchy.root());
        let engine = LayoutEngine::new(config.layout);
        let layout = engine.compute(&hierarchy, focus.focus(), Size::ZERO);
        Self {
            hierarchy,
            focus,
            engine,
            camera: ViewportController::new(config.view),
            container: Size::ZERO,
            layout,
            hovered: None,
            selected: None,
            menu_open: false,
        }
    }

    /// The data being navigated.
    #[must_use]
    pub fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    /// The focused node.
    #[must_use]
    pub fn focus(&self) -> NodeId {
        self.focus.focus()
    }

    /// The root→focus path.
    #[must_use]
    pub fn focus_path(&self) -> &FocusPath {
        &self.focus
    }

    /// Layout of the current focus.
    #[must_use]
    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &ViewportController {
        &self.camera
    }

    /// Last measured container size.
    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    /// Child under the pointer, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    /// Last clicked node, if any.
    #[must_use]
    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// Whether the menu is open.
    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Screen-space center of a child of the focus.
    #[must_use]
    pub fn screen_center(&self, node: NodeId) -> Option<Point> {
        self.layout
            .placement(node)
            .map(|p| self.camera.world_to_view_point(p.center))
    }

    /// Records a new container size, re-laying out and re-fitting when it changed.
    pub fn resize(&mut self, size: Size) {
        if size == self.container {
            return;
        }
        self.container = size;
        self.refresh();
    }

    /// Pointer pressed: starts a provisional drag.
    pub fn pointer_down(&mut self, pointer: PointerId, pos: Point) {
        self.camera.begin_drag(pointer, pos);
    }

    /// Pointer moved: pans while dragging, otherwise tracks hover.
    pub fn pointer_move(&mut self, pos: Point) {
        if self.camera.drag_phase() == DragPhase::Idle {
            self.hovered = match self.hit_test(pos) {
                Some(LayoutHit::Child(id)) => Some(id),
                _ => None,
            };
        } else {
            self.camera.update_drag(pos);
        }
    }

    /// Pointer released. A press that never left the dead-zone is a click.
    pub fn pointer_up(&mut self, pos: Point) -> Option<NavigatorEvent> {
        match self.camera.end_drag() {
            DragEnd::Click => self.click_at(pos),
            DragEnd::Pan | DragEnd::None => None,
        }
    }

    /// Pointer cancelled: the gesture ends with no click.
    pub fn pointer_cancel(&mut self) {
        self.camera.cancel_drag();
    }

    /// Handles a click at a screen position.
    ///
    /// Clicking a child selects it and drills into it; anything else is ignored.
    pub fn click_at(&mut self, pos: Point) -> Option<NavigatorEvent> {
        let Some(LayoutHit::Child(id)) = self.hit_test(pos) else {
            return None;
        };
        match self.focus_child(id) {
            Ok(event) => {
                self.selected = Some(id);
                Some(event)
            }
            Err(err) => {
                log::warn!("click on {id:?} did not change focus: {err}");
                None
            }
        }
    }

    /// Wheel over the scene: zooms around the cursor.
    pub fn wheel(&mut self, pos: Point, delta_y: f64) {
        self.camera.zoom_at_point(pos, delta_y);
    }

    /// Double click anywhere: re-fits the view.
    pub fn double_click(&mut self) {
        self.fit();
    }

    /// Re-centers and re-fits the view without changing focus.
    pub fn fit(&mut self) {
        self.camera
            .reset_to_fit(self.container, self.layout.scene_radius);
    }

    /// Drills into `child`, which must be a child of the focus.
    pub fn focus_child(&mut self, child: NodeId) -> Result<NavigatorEvent, HierarchyError> {
        let from = self.focus();
        self.focus.descend(&self.hierarchy, child)?;
        Ok(self.focus_changed(from))
    }

    /// Goes up one level. No-op at the root.
    pub fn back(&mut self) -> Option<NavigatorEvent> {
        let from = self.focus();
        self.focus.ascend()?;
        self.selected = None;
        Some(self.focus_changed(from))
    }

    /// Returns to the root.
    ///
    /// Clears the selection and re-fits the view even when already at the root.
    pub fn home(&mut self) -> Option<NavigatorEvent> {
        let from = self.focus();
        self.selected = None;
        if self.focus.home() {
            Some(self.focus_changed(from))
        } else {
            self.fit();
            None
        }
    }

    /// Jumps to the breadcrumb at `depth`. Depths at or below the focus are no-ops.
    pub fn jump_to_crumb(&mut self, depth: usize) -> Option<NavigatorEvent> {
        let from = self.focus();
        if !self.focus.truncate_to(depth) {
            return None;
        }
        self.selected = None;
        Some(self.focus_changed(from))
    }

    /// Opens or closes the menu.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Activates a menu entry, closing the menu.
    ///
    /// Returns the navigation the host should perform, if any.
    pub fn menu_action(&mut self, action: MenuAction) -> Option<NavigationIntent> {
        self.menu_open = false;
        let intent = match action {
            MenuAction::Profile => None,
            MenuAction::Mission => Some(NavigationIntent::Mission),
        };
        log::debug!("menu {action:?} -> {intent:?}");
        intent
    }

    /// Builds the render descriptor for the current state.
    #[must_use]
    pub fn frame(&self) -> RenderFrame<'_> {
        let focus = self.focus();
        let node = self.hierarchy.get(focus);
        let children = self
            .layout
            .placements
            .iter()
            .map(|p| {
                let connector = self.layout.connector(p);
                let child = self.hierarchy.get(p.node);
                RenderedChild {
                    node: p.node,
                    name: self.hierarchy.name(p.node),
                    contact: child.and_then(|c| c.contact()),
                    center: p.center,
                    radius: p.radius,
                    hovered: self.hovered == Some(p.node),
                    selected: self.selected == Some(p.node),
                    connector_path: connector.svg_path(),
                    connector,
                }
            })
            .collect();
        RenderFrame {
            focus,
            focus_label: self.hierarchy.name(focus),
            focus_contact: node.and_then(|n| n.contact()),
            focus_radius: self.layout.focus_radius,
            depth: self.focus.depth(),
            breadcrumbs: self.focus.breadcrumbs(&self.hierarchy),
            can_go_back: !self.focus.is_at_root(),
            children,
            empty: self.layout.is_empty(),
            transform: self.camera.transform(),
            css_transform: self.camera.css_transform(),
            panning: self.camera.drag_phase() == DragPhase::Active,
            menu_open: self.menu_open,
        }
    }

    fn hit_test(&self, pos: Point) -> Option<LayoutHit> {
        self.layout.hit_test(self.camera.view_to_world_point(pos))
    }

    fn focus_changed(&mut self, from: NodeId) -> NavigatorEvent {
        let to = self.focus();
        self.hovered = None;
        self.refresh();
        log::debug!(
            "focus {:?} -> {:?} ({})",
            self.hierarchy.name(from),
            self.hierarchy.name(to),
            self.focus.depth()
        );
        NavigatorEvent::FocusChanged { from, to }
    }

    fn refresh(&mut self) {
        self.layout = self
            .engine
            .compute(&self.hierarchy, self.focus.focus(), self.container);
        self.fit();
    }
}
