// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Bounds: scroll and scale boundary policy for a viewer.
//!
//! Given the on-screen bounding rectangle of the displayed content, a
//! viewport, and per-edge elastic margins, this crate decides how much of a
//! proposed scroll delta is allowed, which edge stops were hit, and what
//! correction to apply when a gesture ends:
//!
//! - [`limit_scroll`] implements the live-drag policy ("margin + bounce"):
//!   content that fit the viewport at gesture start is kept near-centered,
//!   content dragged back into range snaps to the nearest margin line, and
//!   content crossing a margin line stops exactly on it, reporting the edge
//!   via [`BoundFlags`].
//! - [`settle_delta`] computes the release-time snap-back: the hard
//!   (zero-margin) correction that re-centers fitting content and closes any
//!   gap left by elastic over-drag.
//! - [`limit_scale`] reports the bound to animate back to when a pinch ends
//!   outside the configured scale range.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Vec2};
//! use vantage_bounds::{BoundFlags, Margins, limit_scroll};
//!
//! let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//! // Content twice the viewport height, dragged down across the top margin.
//! let rect = Rect::new(0.0, -610.0, 800.0, 590.0);
//! let start = rect;
//! let limit = limit_scroll(rect, Vec2::new(0.0, 640.0), Margins::uniform(20.0), start, viewport);
//! assert_eq!(limit.allowed.y, 630.0); // stops exactly on the margin line
//! assert!(limit.reached.contains(BoundFlags::TOP));
//! ```
//!
//! The limiter is stateless and emits flags per call; callers forward each
//! set flag as a notification (no deduplication happens here).
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Rect, Vec2};

bitflags::bitflags! {
    /// Edges whose stop was hit by a scroll step.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct BoundFlags: u8 {
        /// The left margin line was reached.
        const LEFT = 1 << 0;
        /// The top margin line was reached.
        const TOP = 1 << 1;
        /// The right margin line was reached.
        const RIGHT = 1 << 2;
        /// The bottom margin line was reached.
        const BOTTOM = 1 << 3;
    }
}

/// Per-edge elastic margins, in viewport pixels.
///
/// A margin is how far past the corresponding viewport edge the content may
/// be dragged during a live gesture before the stop engages; the release
/// correction ([`settle_delta`]) later pulls it back to the hard limit.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Margins {
    /// Allowance past the left edge.
    pub left: f64,
    /// Allowance past the top edge.
    pub top: f64,
    /// Allowance past the right edge.
    pub right: f64,
    /// Allowance past the bottom edge.
    pub bottom: f64,
}

impl Margins {
    /// Zero margins: the hard-limit configuration.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Creates margins from the four per-edge allowances.
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates equal margins on all four edges.
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}

/// Outcome of [`limit_scroll`]: the delta to actually apply and the edge
/// stops hit while computing it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollLimit {
    /// The allowed (possibly clamped or redirected) translation delta.
    pub allowed: Vec2,
    /// Edge stops hit by this step.
    pub reached: BoundFlags,
}

/// Limits a proposed scroll delta against the viewport and elastic margins.
///
/// `rect` is the content's current on-screen bounding rectangle, `start_rect`
/// the same rectangle as snapshotted at gesture start (it decides whether the
/// content counts as "fitting" on each axis for the whole gesture), and
/// `delta` the proposed translation.
///
/// Margins are expected to be non-negative; the viewer's configuration
/// layer rejects anything else before it reaches this function.
///
/// Each axis is resolved independently:
/// - Content that fit within the margin range at gesture start is kept near
///   the viewport center: the delta is clamped so the content's center stays
///   within the margins of the viewport center.
/// - Content that did not fit but whose proposed position would lie fully
///   inside the margin range snaps to whichever margin line is closer.
/// - Otherwise the delta passes through, except on the step that crosses a
///   margin line from outside: that step is clamped to land exactly on the
///   line and the edge is reported in [`ScrollLimit::reached`]. Once on (or
///   past) the line, further movement in the same direction is elastic and
///   unclamped; [`settle_delta`] resolves it at release.
///
/// The fitting branches report no reached edges.
#[must_use]
pub fn limit_scroll(
    rect: Rect,
    delta: Vec2,
    margins: Margins,
    start_rect: Rect,
    viewport: Rect,
) -> ScrollLimit {
    let (dx, reached_left, reached_right) = limit_axis(AxisLimit {
        min: rect.x0,
        max: rect.x1,
        start_min: start_rect.x0,
        start_max: start_rect.x1,
        view_min: viewport.x0,
        view_max: viewport.x1,
        margin_near: margins.left,
        margin_far: margins.right,
        delta: delta.x,
    });
    let (dy, reached_top, reached_bottom) = limit_axis(AxisLimit {
        min: rect.y0,
        max: rect.y1,
        start_min: start_rect.y0,
        start_max: start_rect.y1,
        view_min: viewport.y0,
        view_max: viewport.y1,
        margin_near: margins.top,
        margin_far: margins.bottom,
        delta: delta.y,
    });

    let mut reached = BoundFlags::empty();
    reached.set(BoundFlags::LEFT, reached_left);
    reached.set(BoundFlags::RIGHT, reached_right);
    reached.set(BoundFlags::TOP, reached_top);
    reached.set(BoundFlags::BOTTOM, reached_bottom);
    ScrollLimit {
        allowed: Vec2::new(dx, dy),
        reached,
    }
}

struct AxisLimit {
    min: f64,
    max: f64,
    start_min: f64,
    start_max: f64,
    view_min: f64,
    view_max: f64,
    margin_near: f64,
    margin_far: f64,
    delta: f64,
}

/// One axis of [`limit_scroll`]. Returns `(allowed, reached_near,
/// reached_far)`.
fn limit_axis(axis: AxisLimit) -> (f64, bool, bool) {
    let near_line = axis.view_min + axis.margin_near;
    let far_line = axis.view_max - axis.margin_far;

    if axis.start_min >= near_line && axis.start_max <= far_line {
        // Fit at gesture start: keep the content near the viewport center
        // for the whole gesture, with the margins as elastic play.
        let view_center = (axis.view_min + axis.view_max) / 2.0;
        let center = (axis.min + axis.max) / 2.0;
        let d_center = view_center - center;
        let allowed = axis
            .delta
            .clamp(d_center - axis.margin_far, d_center + axis.margin_near);
        return (allowed, false, false);
    }

    let new_min = axis.min + axis.delta;
    let new_max = axis.max + axis.delta;
    if new_min >= near_line && new_max <= far_line {
        // Dragged from outside fully into range: snap to the nearer line.
        let allowed = if (new_min - near_line).abs() <= (new_max - far_line).abs() {
            near_line - axis.min
        } else {
            far_line - axis.max
        };
        return (allowed, false, false);
    }

    // The stop engages only on the step that crosses a margin line from
    // outside; sitting exactly on the line, movement past it is free.
    if axis.min < near_line && new_min >= near_line {
        (near_line - axis.min, true, false)
    } else if axis.max > far_line && new_max <= far_line {
        (far_line - axis.max, false, true)
    } else {
        (axis.delta, false, false)
    }
}

/// Computes the release-time snap-back correction for `rect`.
///
/// This is the hard-limit (zero-margin) resolution applied when a gesture
/// ends: content smaller than the viewport on an axis is centered on that
/// axis; larger content is shifted just enough to close any gap between its
/// edges and the viewport's. Returns zero when the content already satisfies
/// the hard limits.
#[must_use]
pub fn settle_delta(rect: Rect, viewport: Rect) -> Vec2 {
    Vec2::new(
        settle_axis(rect.x0, rect.x1, viewport.x0, viewport.x1),
        settle_axis(rect.y0, rect.y1, viewport.y0, viewport.y1),
    )
}

fn settle_axis(min: f64, max: f64, view_min: f64, view_max: f64) -> f64 {
    if max - min <= view_max - view_min {
        (view_min + view_max) / 2.0 - (min + max) / 2.0
    } else if min > view_min {
        view_min - min
    } else if max < view_max {
        view_max - max
    } else {
        0.0
    }
}

/// Reports the scale bound to correct to when a gesture ends.
///
/// Returns `Some(min)` when `current < min`, `Some(max)` when
/// `current > max`, and `None` when the scale is already in range (no
/// correction needed).
#[must_use]
pub fn limit_scale(current: f64, min: f64, max: f64) -> Option<f64> {
    if current < min {
        Some(min)
    } else if current > max {
        Some(max)
    } else {
        None
    }
}
