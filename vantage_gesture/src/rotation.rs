// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger rotation tracking: measure the turning of the line between two
//! touch points across consecutive samples.
//!
//! ## Usage
//!
//! 1) Feed finger-down events via [`RotationTracker::on_pointer_down`]; the
//!    gesture arms once two distinct pointers are held.
//! 2) On each batched move event, call [`RotationTracker::on_pointer_move`]
//!    with samples for all active pointers; while armed it returns a
//!    [`RotationStep`] with the incremental angle and the pivot.
//! 3) Feed finger-up events via [`RotationTracker::on_pointer_up`] and
//!    cancellation via [`RotationTracker::on_cancel`]; lifting either finger
//!    disarms the gesture, and the tracker resets once both are gone.

use kurbo::Point;

use crate::{PointerId, PointerSample};

/// One step of a two-finger rotation gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationStep {
    /// Angle swept since the previous step, in radians.
    pub delta_angle: f64,
    /// Angle swept since the second finger went down, in radians.
    pub delta_from_start: f64,
    /// Midpoint of the two fingers at this step, in view coordinates.
    pub pivot: Point,
}

#[derive(Clone, Copy, Debug)]
struct Tracked {
    id: PointerId,
    initial: Point,
    current: Point,
}

/// Tracks two touch-point identities and computes incremental rotation.
///
/// The tracker is a three-state machine (idle, one finger down, two fingers
/// down) held in two optional slots. It is not allocated per gesture: reuse
/// one instance and it resets itself whenever both fingers are lifted or the
/// gesture is cancelled.
///
/// The inter-finger angle is `atan2(y2 − y1, x2 − x1)`; it is not symmetric
/// in finger assignment, so which pointer lands in which slot (event-order
/// determined) matters for the absolute angle but not for the reported
/// deltas.
#[derive(Clone, Copy, Debug, Default)]
pub struct RotationTracker {
    first: Option<Tracked>,
    second: Option<Tracked>,
    initial_angle: f64,
    current_angle: f64,
}

impl RotationTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finger-down event.
    ///
    /// The first two distinct pointers are bound; further fingers are
    /// ignored. When the second pointer binds, both fingers' positions are
    /// snapshotted and the initial inter-finger angle is measured. Returns
    /// whether the event was consumed.
    pub fn on_pointer_down(&mut self, id: PointerId, pos: Point) -> bool {
        if self.id_of(&self.first) == Some(id) || self.id_of(&self.second) == Some(id) {
            return false;
        }
        let tracked = Tracked {
            id,
            initial: pos,
            current: pos,
        };
        if self.first.is_none() {
            self.first = Some(tracked);
        } else if self.second.is_none() {
            self.second = Some(tracked);
        } else {
            return false;
        }

        if let (Some(a), Some(b)) = (&mut self.first, &mut self.second) {
            // Arm the gesture: both initials are re-snapshotted from the
            // fingers' positions as of this event.
            a.initial = a.current;
            b.initial = b.current;
            self.initial_angle = (b.initial - a.initial).atan2();
            self.current_angle = self.initial_angle;
        }
        true
    }

    /// Processes a batched move event.
    ///
    /// While both fingers are bound and both appear in `samples`, updates
    /// the tracked positions and returns the rotation step. A batch missing
    /// either tracked pointer is a no-op. With a single finger bound, its
    /// position is kept fresh (so the initial snapshot taken when a second
    /// finger lands is current) but no step is reported.
    pub fn on_pointer_move(&mut self, samples: &[PointerSample]) -> Option<RotationStep> {
        match (self.first.as_mut(), self.second.as_mut()) {
            (Some(first), Some(second)) => {
                let p1 = samples.iter().find(|s| s.id == first.id)?.pos;
                let p2 = samples.iter().find(|s| s.id == second.id)?.pos;
                first.current = p1;
                second.current = p2;

                let new_angle = (p2 - p1).atan2();
                let step = RotationStep {
                    delta_angle: new_angle - self.current_angle,
                    delta_from_start: new_angle - self.initial_angle,
                    pivot: p1.midpoint(p2),
                };
                self.current_angle = new_angle;
                Some(step)
            }
            (only, rest) => {
                if let Some(tracked) = only.or(rest)
                    && let Some(sample) = samples.iter().find(|s| s.id == tracked.id)
                {
                    tracked.current = sample.pos;
                }
                None
            }
        }
    }

    /// Records a finger-up event, clearing that pointer's slot.
    ///
    /// Lifting one of the two tracked fingers disarms the gesture; the
    /// remaining finger stays bound and a new second finger re-arms it with
    /// fresh snapshots. Unknown ids are ignored.
    pub fn on_pointer_up(&mut self, id: PointerId) {
        if self.id_of(&self.first) == Some(id) {
            self.first = None;
        } else if self.id_of(&self.second) == Some(id) {
            self.second = None;
        }
    }

    /// Cancels the gesture, clearing both pointer slots unconditionally.
    pub fn on_cancel(&mut self) {
        self.first = None;
        self.second = None;
    }

    /// Returns `true` while two fingers are bound and rotation is measured.
    #[must_use]
    pub fn is_rotating(&self) -> bool {
        self.first.is_some() && self.second.is_some()
    }

    /// The current pivot (finger midpoint), while rotating.
    #[must_use]
    pub fn pivot(&self) -> Option<Point> {
        match (&self.first, &self.second) {
            (Some(a), Some(b)) => Some(a.current.midpoint(b.current)),
            _ => None,
        }
    }

    fn id_of(&self, slot: &Option<Tracked>) -> Option<PointerId> {
        slot.as_ref().map(|t| t.id)
    }
}
