// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use core::f64::consts::E;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Size, Vec2};

use crate::config::ViewConfig;
use crate::drag::{DragEnd, DragPhase, PanGesture, PointerId};

/// Camera state: where the scene origin lands on screen and how much it is scaled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    /// Screen position of the scene origin.
    pub pan: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

/// Pan/zoom camera over a focus-centered scene.
///
/// `ViewportController` owns a [`ViewportState`] and changes it only through
/// three kinds of operation:
/// - [`ViewportController::reset_to_fit`], whenever the scene or container changes.
/// - Drag gestures ([`begin_drag`](Self::begin_drag) /
///   [`update_drag`](Self::update_drag) / [`end_drag`](Self::end_drag)).
/// - Wheel zoom ([`ViewportController::zoom_at_point`]).
///
/// The scale always stays within [`ViewportController::scale_range`]: from
/// `zoom_out_slack` times the last fit scale up to `max_scale`.
#[derive(Clone, Debug)]
pub struct ViewportController {
    config: ViewConfig,
    state: ViewportState,
    min_scale: f64,
    gesture: PanGesture,
    world_to_view: Affine,
    view_to_world: Affine,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

impl ViewportController {
    /// Creates a controller at scale `1.0` with the scene origin at the
    /// screen origin.
    ///
    /// Until the first fit, the fit scale is taken to be `1.0`.
    #[must_use]
    pub fn new(config: ViewConfig) -> Self {
        let mut vc = Self {
            config,
            state: ViewportState::default(),
            min_scale: 1.0,
            gesture: PanGesture::default(),
            world_to_view: Affine::IDENTITY,
            view_to_world: Affine::IDENTITY,
        };
        vc.rebuild_transforms();
        vc
    }

    /// Current tuning.
    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Current camera state.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// Screen position of the scene origin.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.state.pan
    }

    /// Current scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    /// Scale computed by the last fit.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Inclusive `(low, high)` bounds the scale is kept within.
    #[must_use]
    pub fn scale_range(&self) -> (f64, f64) {
        let high = self.config.max_scale;
        let low = (self.min_scale * self.config.zoom_out_slack).min(high);
        (low, high)
    }

    /// Scale at which a scene of `scene_radius` fills the container.
    ///
    /// Returns `None` for empty or non-finite containers. A non-positive
    /// scene radius is treated as `1`.
    #[must_use]
    pub fn fit_scale(&self, container: Size, scene_radius: f64) -> Option<f64> {
        let side = container.width.min(container.height);
        if !(side.is_finite() && side > 0.0) {
            return None;
        }
        let scene_radius = if scene_radius > 0.0 && scene_radius.is_finite() {
            scene_radius
        } else {
            1.0
        };
        Some(side / (2.0 * scene_radius) * self.config.fit_fill)
    }

    /// Centers the scene in the container and scales it to fit.
    ///
    /// Also records the fit scale as the new zoom-out reference. Empty
    /// containers leave the camera untouched; returns whether a fit was applied.
    pub fn reset_to_fit(&mut self, container: Size, scene_radius: f64) -> bool {
        let Some(fit) = self.fit_scale(container, scene_radius) else {
            log::trace!("skipping fit for empty container {container:?}");
            return false;
        };
        self.min_scale = fit;
        let (low, high) = self.scale_range();
        self.state = ViewportState {
            pan: Vec2::new(container.width * 0.5, container.height * 0.5),
            scale: fit.max(self.config.fit_scale_floor).max(low).min(high),
        };
        self.rebuild_transforms();
        log::debug!(
            "fit scene radius {scene_radius} into {container:?}: scale {}",
            self.state.scale
        );
        true
    }

    /// Records a provisional drag anchor. Nothing pans until the pointer
    /// leaves the dead-zone.
    pub fn begin_drag(&mut self, pointer: PointerId, pos: Point) {
        self.gesture.begin(pointer, pos);
    }

    /// Feeds a pointer move, panning once the drag is active.
    ///
    /// Returns the delta applied to the pan, if any.
    pub fn update_drag(&mut self, pos: Point) -> Option<Vec2> {
        let delta = self.gesture.update(pos, self.config.drag_threshold)?;
        self.pan_by(delta);
        Some(delta)
    }

    /// Finishes the drag. [`DragEnd::Click`] means the pointer never left the
    /// dead-zone and the host's click handling applies.
    pub fn end_drag(&mut self) -> DragEnd {
        self.gesture.end()
    }

    /// Abandons the drag; the pan applied so far is kept.
    pub fn cancel_drag(&mut self) {
        self.gesture.cancel();
    }

    /// Current drag phase.
    #[must_use]
    pub fn drag_phase(&self) -> DragPhase {
        self.gesture.phase()
    }

    /// Pointer driving the current drag, if any.
    #[must_use]
    pub fn drag_pointer(&self) -> Option<PointerId> {
        self.gesture.pointer()
    }

    /// Pans by a delta in screen space.
    pub fn pan_by(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO || !delta.is_finite() {
            return;
        }
        self.state.pan += delta;
        self.rebuild_transforms();
        log::trace!("pan by {delta:?} -> {:?}", self.state.pan);
    }

    /// Zooms for a wheel event at `cursor`.
    ///
    /// The factor is `exp(-delta_y * wheel_sensitivity)`, so scrolling down
    /// (positive `delta_y`) zooms out. The scene point under the cursor stays
    /// under the cursor.
    pub fn zoom_at_point(&mut self, cursor: Point, delta_y: f64) {
        if !delta_y.is_finite() {
            return;
        }
        self.zoom_about_view_point(cursor, E.powf(-delta_y * self.config.wheel_sensitivity));
    }

    /// Multiplies the scale by `factor` around a screen-space anchor,
    /// clamping into [`ViewportController::scale_range`].
    pub fn zoom_about_view_point(&mut self, anchor: Point, factor: f64) {
        if !(factor > 0.0 && factor.is_finite()) || !anchor.is_finite() {
            return;
        }
        let (low, high) = self.scale_range();
        let old = self.state.scale;
        let new = (old * factor).max(low).min(high);
        if (new - old).abs() < f64::EPSILON {
            return;
        }
        let world = self.view_to_world_point(anchor);
        self.state.scale = new;
        self.state.pan = anchor.to_vec2() - world.to_vec2() * new;
        self.rebuild_transforms();
        log::trace!("zoom x{factor} at {anchor:?} -> scale {new}");
    }

    /// Scene → screen transform: `translate(pan) ∘ scale(scale)`.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.world_to_view
    }

    /// Maps a scene point to the screen.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        self.world_to_view * pt
    }

    /// Maps a screen point into the scene.
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point) -> Point {
        self.view_to_world * pt
    }

    /// CSS `transform` value for the scene group, e.g.
    /// `translate(400px, 300px) scale(0.5)`.
    #[must_use]
    pub fn css_transform(&self) -> String {
        let ViewportState { pan, scale } = self.state;
        format!("translate({}px, {}px) scale({scale})", pan.x, pan.y)
    }

    fn rebuild_transforms(&mut self) {
        self.world_to_view = Affine::translate(self.state.pan) * Affine::scale(self.state.scale);
        self.view_to_world = self.world_to_view.inverse();
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{ViewportController, ViewportState};
    use crate::drag::{DragEnd, DragPhase};

    fn fitted() -> ViewportController {
        let mut vc = ViewportController::default();
        assert!(vc.reset_to_fit(Size::new(800.0, 600.0), 384.0));
        vc
    }

    #[test]
    fn starts_at_identity() {
        let vc = ViewportController::default();
        assert_eq!(vc.state(), ViewportState::default());
        assert_eq!(vc.scale_range(), (0.9, 6.0));
        assert_eq!(vc.world_to_view_point(Point::new(3.0, 4.0)), Point::new(3.0, 4.0));
    }

    #[test]
    fn fit_centers_and_scales() {
        let vc = fitted();
        let expected = 600.0 / (2.0 * 384.0) * 0.95;
        assert_eq!(vc.pan(), Vec2::new(400.0, 300.0));
        assert!((vc.scale() - expected).abs() < 1e-12);
        assert_eq!(vc.min_scale(), vc.scale());
        assert_eq!(vc.world_to_view_point(Point::ORIGIN), Point::new(400.0, 300.0));
    }

    #[test]
    fn fit_is_idempotent() {
        let mut vc = fitted();
        let first = vc.state();
        vc.reset_to_fit(Size::new(800.0, 600.0), 384.0);
        assert_eq!(vc.state(), first);
    }

    #[test]
    fn fit_on_empty_container_is_noop() {
        let mut vc = fitted();
        let before = vc.state();
        assert!(!vc.reset_to_fit(Size::new(0.0, 600.0), 384.0));
        assert!(!vc.reset_to_fit(Size::new(f64::NAN, 600.0), 384.0));
        assert_eq!(vc.state(), before);
    }

    #[test]
    fn fit_scale_has_floor_and_ceiling() {
        let mut vc = ViewportController::default();
        vc.reset_to_fit(Size::new(10.0, 10.0), 1.0e6);
        assert_eq!(vc.scale(), 0.01);

        vc.reset_to_fit(Size::new(10_000.0, 10_000.0), 10.0);
        assert_eq!(vc.scale(), 6.0);
        let (low, high) = vc.scale_range();
        assert!(low <= high);
    }

    #[test]
    fn degenerate_scene_radius_uses_unit_radius() {
        let mut vc = ViewportController::default();
        vc.reset_to_fit(Size::new(4.0, 4.0), 0.0);
        assert!((vc.scale() - 4.0 / 2.0 * 0.95).abs() < 1e-12);
    }

    #[test]
    fn zoom_keeps_cursor_anchored() {
        let mut vc = fitted();
        vc.pan_by(Vec2::new(-37.0, 12.5));
        for (cursor, delta) in [
            (Point::new(100.0, 80.0), -120.0),
            (Point::new(640.0, 20.0), 300.0),
            (Point::new(400.0, 300.0), -53.0),
        ] {
            let before = vc.view_to_world_point(cursor);
            vc.zoom_at_point(cursor, delta);
            let after = vc.view_to_world_point(cursor);
            assert!((before.x - after.x).abs() < 1e-9);
            assert!((before.y - after.y).abs() < 1e-9);
        }
    }

    #[test]
    fn wheel_direction() {
        let mut vc = fitted();
        let s0 = vc.scale();
        vc.zoom_at_point(Point::new(400.0, 300.0), -100.0);
        assert!(vc.scale() > s0);
        assert!((vc.scale() - s0 * 0.15_f64.exp()).abs() < 1e-12);
        vc.zoom_at_point(Point::new(400.0, 300.0), 100.0);
        assert!((vc.scale() - s0).abs() < 1e-12);
    }

    #[test]
    fn extreme_wheel_deltas_stay_clamped() {
        let mut vc = fitted();
        let (low, high) = vc.scale_range();
        for _ in 0..50 {
            vc.zoom_at_point(Point::new(10.0, 10.0), -1.0e4);
            assert!(vc.scale() <= high);
        }
        assert_eq!(vc.scale(), 6.0);
        for _ in 0..50 {
            vc.zoom_at_point(Point::new(790.0, 590.0), 1.0e4);
            assert!(vc.scale() >= low);
        }
        assert!((vc.scale() - vc.min_scale() * 0.9).abs() < 1e-12);
        vc.zoom_at_point(Point::new(1.0, 1.0), f64::INFINITY);
        assert!(vc.scale().is_finite());
    }

    #[test]
    fn drag_inside_dead_zone_never_pans() {
        let mut vc = fitted();
        let pan = vc.pan();
        vc.begin_drag(1, Point::new(100.0, 100.0));
        for pt in [(101.0, 100.0), (103.0, 102.0), (100.0, 104.0), (97.0, 97.5)] {
            assert_eq!(vc.update_drag(pt.into()), None);
        }
        assert_eq!(vc.pan(), pan);
        assert_eq!(vc.drag_phase(), DragPhase::Pending);
        assert_eq!(vc.end_drag(), DragEnd::Click);
    }

    #[test]
    fn drag_pans_by_incremental_deltas() {
        let mut vc = fitted();
        let pan = vc.pan();
        vc.begin_drag(9, Point::new(100.0, 100.0));
        assert_eq!(vc.update_drag(Point::new(110.0, 100.0)), Some(Vec2::new(10.0, 0.0)));
        assert_eq!(vc.drag_pointer(), Some(9));
        vc.update_drag(Point::new(130.0, 90.0));
        assert_eq!(vc.pan(), pan + Vec2::new(30.0, -10.0));
        assert_eq!(vc.end_drag(), DragEnd::Pan);
        assert_eq!(vc.drag_phase(), DragPhase::Idle);
        // Moves after the gesture ended do nothing.
        assert_eq!(vc.update_drag(Point::new(500.0, 500.0)), None);
    }

    #[test]
    fn non_finite_pointer_moves_do_not_break_the_drag() {
        let mut vc = fitted();
        let pan = vc.pan();
        vc.begin_drag(1, Point::new(10.0, 10.0));
        assert_eq!(vc.update_drag(Point::new(f64::NAN, f64::NAN)), None);
        assert_eq!(vc.drag_phase(), DragPhase::Pending);
        assert_eq!(vc.pan(), pan);
        assert_eq!(vc.end_drag(), DragEnd::Click);

        vc.begin_drag(1, Point::new(10.0, 10.0));
        vc.update_drag(Point::new(f64::NAN, f64::NAN));
        assert_eq!(vc.update_drag(Point::new(40.0, 10.0)), Some(Vec2::new(30.0, 0.0)));
        assert_eq!(vc.pan(), pan + Vec2::new(30.0, 0.0));
        assert_eq!(vc.end_drag(), DragEnd::Pan);
    }

    #[test]
    fn replaying_a_drag_is_deterministic() {
        let moves = [(105.0, 100.0), (120.0, 95.0), (90.0, 140.0), (91.0, 141.0)];
        let run = || {
            let mut vc = fitted();
            vc.begin_drag(1, Point::new(100.0, 100.0));
            for m in moves {
                vc.update_drag(m.into());
            }
            vc.end_drag();
            vc.state()
        };
        assert_eq!(run(), run());
        assert_eq!(run().pan, fitted().pan() + Vec2::new(-9.0, 41.0));
    }

    #[test]
    fn cancel_drag_keeps_pan_and_goes_idle() {
        let mut vc = fitted();
        vc.begin_drag(1, Point::ORIGIN);
        vc.update_drag(Point::new(20.0, 0.0));
        let pan = vc.pan();
        vc.cancel_drag();
        assert_eq!(vc.drag_phase(), DragPhase::Idle);
        assert_eq!(vc.pan(), pan);
        assert_eq!(vc.end_drag(), DragEnd::None);
    }

    #[test]
    fn css_transform_format() {
        let mut vc = ViewportController::default();
        vc.reset_to_fit(Size::new(800.0, 600.0), 300.0);
        assert_eq!(vc.css_transform(), "translate(400px, 300px) scale(0.95)");
    }
}
