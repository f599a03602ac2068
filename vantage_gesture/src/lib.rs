// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Gesture: stateful trackers for multi-touch interactions.
//!
//! This crate provides small, focused state machines that turn streams of
//! identified pointer samples into gesture measurements. It does not talk to
//! any platform event system: callers feed it `(pointer id, position)` pairs
//! from whatever input layer they use and consume the returned measurements.
//!
//! The main type is [`rotation::RotationTracker`], which tracks two active
//! touch points and reports the incremental rotation of the line between
//! them, together with the pivot (finger midpoint) the rotation should be
//! applied about.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::f64::consts::FRAC_PI_2;
//! use kurbo::Point;
//! use vantage_gesture::{PointerId, PointerSample, rotation::RotationTracker};
//!
//! let mut tracker = RotationTracker::default();
//! tracker.on_pointer_down(PointerId(1), Point::new(0.0, 0.0));
//! tracker.on_pointer_down(PointerId(2), Point::new(10.0, 0.0));
//!
//! // Second finger sweeps a quarter turn around the first.
//! let step = tracker
//!     .on_pointer_move(&[
//!         PointerSample::new(PointerId(1), Point::new(0.0, 0.0)),
//!         PointerSample::new(PointerId(2), Point::new(0.0, 10.0)),
//!     ])
//!     .unwrap();
//! assert!((step.delta_from_start - FRAC_PI_2).abs() < 1e-12);
//! ```
//!
//! Which finger is "first" and which is "second" is purely event-order
//! determined; swapping them offsets the measured angle by π, so trackers
//! report deltas rather than absolute angles.
//!
//! This crate is `no_std`.

#![no_std]

pub mod rotation;

use kurbo::Point;

/// Identity of a touch point, as assigned by the input source.
///
/// Ids are opaque: the tracker only compares them for equality and never
/// assumes anything about their values or ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// One pointer's position in a batched move event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Which pointer this sample belongs to.
    pub id: PointerId,
    /// The pointer's position in view coordinates.
    pub pos: Point,
}

impl PointerSample {
    /// Creates a sample for the given pointer.
    #[must_use]
    pub const fn new(id: PointerId, pos: Point) -> Self {
        Self { id, pos }
    }
}
