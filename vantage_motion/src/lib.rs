// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Motion: host-agnostic animated-value primitives.
//!
//! This crate holds the pure math and bookkeeping types behind animated
//! transform corrections. It never owns a clock or schedules anything: the
//! host drives time and delivers normalized progress in `[0, 1]`; the types
//! here turn that progress into values.
//!
//! - [`Easing`] maps raw progress onto a monotonic curve.
//! - [`Tween`] interpolates a scalar between two endpoints under an easing,
//!   with the guarantee that `sample(1.0)` returns the end value exactly.
//! - [`AnimationId`] / [`AnimationTicket`] identify one started animation,
//!   so that ticks for a cancelled or replaced animation can be recognized
//!   and dropped.
//! - [`AnimationKind`] names the kinds of transform animation a viewer runs;
//!   at most one animation per kind is in flight at a time.
//!
//! ## Minimal example
//!
//! ```rust
//! use vantage_motion::{Easing, Tween};
//!
//! let tween = Tween::new(1.0, 3.0, Easing::SmoothInOut);
//! assert_eq!(tween.sample(0.0), 1.0);
//! assert_eq!(tween.sample(0.5), 2.0);
//! assert_eq!(tween.sample(1.0), 3.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

/// An easing curve: a monotonic map of `[0, 1]` onto itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant-velocity interpolation.
    Linear,
    /// Smoothstep: accelerate in, decelerate out.
    #[default]
    SmoothInOut,
    /// Cubic ease-out: fast start, decelerating finish.
    EaseOut,
}

impl Easing {
    /// Applies the curve to a progress value.
    ///
    /// Input is clamped to `[0, 1]` first; all curves map `0 → 0` and
    /// `1 → 1` exactly.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothInOut => t * t * (3.0 - 2.0 * t),
            Self::EaseOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
        }
    }
}

/// A scalar interpolation between two endpoints under an easing curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    /// Value at progress 0.
    pub from: f64,
    /// Value at progress 1.
    pub to: f64,
    /// Curve shaping the interpolation.
    pub easing: Easing,
}

impl Tween {
    /// Creates a tween between `from` and `to`.
    #[must_use]
    pub const fn new(from: f64, to: f64, easing: Easing) -> Self {
        Self { from, to, easing }
    }

    /// Samples the tween at the given progress.
    ///
    /// Progress is clamped to `[0, 1]`. At progress `1.0` the end value is
    /// returned exactly (no floating-point residue), so a final tick lands
    /// on the target rather than near it.
    #[must_use]
    pub fn sample(&self, progress: f64) -> f64 {
        if progress >= 1.0 {
            return self.to;
        }
        let t = self.easing.apply(progress);
        self.from + (self.to - self.from) * t
    }
}

/// Identity of one started animation.
///
/// Ids are allocated by [`AnimationTicket`] and never reused within a
/// session, so a tick carrying a stale id (its animation was cancelled or
/// replaced) can be recognized and ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(pub u64);

/// Allocator for [`AnimationId`]s.
#[derive(Clone, Debug, Default)]
pub struct AnimationTicket(u64);

impl AnimationTicket {
    /// Creates an allocator starting at id 0.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Returns the next fresh id.
    pub fn next(&mut self) -> AnimationId {
        let id = AnimationId(self.0);
        self.0 += 1;
        id
    }
}

/// The kinds of transform animation a viewer runs.
///
/// At most one animation of each kind is in flight at a time; starting a new
/// one replaces any running animation of the same kind. Different kinds
/// compose freely through the shared transform state, since each touches
/// only the fields it owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// Animated scale correction about a pivot.
    Scale,
    /// Animated translation.
    Translate,
    /// Combined rotation-and-translation return to the origin pose.
    RotateTranslate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_are_exact() {
        for easing in [Easing::Linear, Easing::SmoothInOut, Easing::EaseOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            // Out-of-range input clamps.
            assert_eq!(easing.apply(-0.5), 0.0);
            assert_eq!(easing.apply(2.0), 1.0);
        }
    }

    #[test]
    fn easing_curves_are_monotonic() {
        for easing in [Easing::Linear, Easing::SmoothInOut, Easing::EaseOut] {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = easing.apply(f64::from(i) / 100.0);
                assert!(v >= prev, "{easing:?} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn smooth_in_out_is_symmetric() {
        let e = Easing::SmoothInOut;
        for i in 0..=50 {
            let t = f64::from(i) / 100.0;
            assert!((e.apply(t) - (1.0 - e.apply(1.0 - t))).abs() < 1e-12);
        }
    }

    #[test]
    fn tween_final_sample_is_exact() {
        let tween = Tween::new(0.3, 0.1 + 0.2, Easing::SmoothInOut);
        // 0.1 + 0.2 != 0.3 in floating point; the final sample must be the
        // stored end value bit-for-bit, not a recomputed interpolation.
        assert_eq!(tween.sample(1.0), 0.1 + 0.2);
        assert_eq!(tween.sample(7.5), 0.1 + 0.2);
    }

    #[test]
    fn tween_interpolates_between_endpoints() {
        let tween = Tween::new(-10.0, 10.0, Easing::Linear);
        assert_eq!(tween.sample(0.25), -5.0);
        assert_eq!(tween.sample(0.75), 5.0);
    }

    #[test]
    fn ticket_ids_are_fresh_and_ordered() {
        let mut ticket = AnimationTicket::new();
        let a = ticket.next();
        let b = ticket.next();
        let c = ticket.next();
        assert!(a < b && b < c);
        assert_ne!(a, b);
    }
}
