// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan gesture tracking: tell clicks from drags with a movement dead-zone.
//!
//! ## Usage
//!
//! 1) On pointer down, call [`PanGesture::begin`] with the pointer and position.
//!    The gesture is now [`DragPhase::Pending`]; nothing pans yet.
//! 2) On each move, call [`PanGesture::update`]. Once the pointer has moved
//!    farther than the threshold from where it went down, the gesture turns
//!    [`DragPhase::Active`] and every update returns the delta since the last
//!    applied position.
//! 3) On pointer up, call [`PanGesture::end`]. A gesture that never activated
//!    reports [`DragEnd::Click`].
//! 4) On pointer cancel, call [`PanGesture::cancel`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_camera::drag::{DragEnd, DragPhase, PanGesture};
//!
//! let mut gesture = PanGesture::default();
//! gesture.begin(1, Point::new(10.0, 10.0));
//!
//! // Jitter inside the dead-zone does not pan.
//! assert_eq!(gesture.update(Point::new(12.0, 11.0), 4.0), None);
//! assert_eq!(gesture.phase(), DragPhase::Pending);
//!
//! // Leaving it does, starting from the anchor.
//! assert_eq!(gesture.update(Point::new(20.0, 10.0), 4.0), Some(Vec2::new(10.0, 0.0)));
//! assert_eq!(gesture.update(Point::new(25.0, 12.0), 4.0), Some(Vec2::new(5.0, 2.0)));
//! assert_eq!(gesture.end(), DragEnd::Pan);
//! ```

use kurbo::{Point, Vec2};

/// Host-assigned pointer identifier.
pub type PointerId = u64;

/// Where a pan gesture is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    /// No pointer is down.
    #[default]
    Idle,
    /// A pointer is down but has not left the dead-zone.
    Pending,
    /// The pointer left the dead-zone; moves pan the view.
    Active,
}

/// How a gesture finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragEnd {
    /// No gesture was in progress.
    None,
    /// The pointer came up inside the dead-zone; treat it as a click.
    Click,
    /// The gesture panned.
    Pan,
}

/// Tracks one pan gesture.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanGesture {
    pointer: Option<PointerId>,
    start_pos: Option<Point>,
    last_pos: Option<Point>,
    active: bool,
}

impl PanGesture {
    /// Starts tracking from `pos`, replacing any gesture in progress.
    ///
    /// A non-finite `pos` leaves the gesture idle.
    pub fn begin(&mut self, pointer: PointerId, pos: Point) {
        if !pos.is_finite() {
            self.cancel();
            return;
        }
        self.pointer = Some(pointer);
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.active = false;
    }

    /// Feeds a pointer position, returning the pan delta to apply, if any.
    ///
    /// While pending, the gesture activates once the straight-line distance
    /// from the start exceeds `threshold`. The first active update returns the
    /// whole movement since the start; later ones return the movement since
    /// the previous update. Non-finite positions are ignored in every phase.
    pub fn update(&mut self, pos: Point, threshold: f64) -> Option<Vec2> {
        let start = self.start_pos?;
        if !pos.is_finite() {
            return None;
        }
        if !self.active {
            if (pos - start).hypot() <= threshold {
                return None;
            }
            self.active = true;
        }
        let last = self.last_pos.unwrap_or(start);
        self.last_pos = Some(pos);
        Some(pos - last)
    }

    /// Offset from the start position, if a gesture is in progress.
    #[must_use]
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current_pos - start)
    }

    /// Finishes the gesture and resets to idle.
    pub fn end(&mut self) -> DragEnd {
        let outcome = match self.phase() {
            DragPhase::Idle => DragEnd::None,
            DragPhase::Pending => DragEnd::Click,
            DragPhase::Active => DragEnd::Pan,
        };
        self.cancel();
        outcome
    }

    /// Abandons the gesture without click semantics.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        match (self.start_pos, self.active) {
            (None, _) => DragPhase::Idle,
            (Some(_), false) => DragPhase::Pending,
            (Some(_), true) => DragPhase::Active,
        }
    }

    /// Pointer driving the gesture, if any.
    ///
    /// Hosts typically capture this pointer once the gesture turns active.
    #[must_use]
    pub fn pointer(&self) -> Option<PointerId> {
        self.pointer
    }
}
