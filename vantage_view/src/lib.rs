// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage View: a headless image-viewer model.
//!
//! This crate ties the Vantage primitives together into a [`Viewer`]: a
//! fully synchronous, clockless model of an interactive image view. Feed it
//! recognized gesture primitives (drag scrolls, pinch steps, double taps,
//! identified pointer samples for two-finger rotation) and it maintains the
//! composed display transform:
//!
//! - A **base transform** fits the content into the viewport according to
//!   the [`DisplayMode`]; it changes only when content, viewport, or mode
//!   change.
//! - A **delta transform** accumulates the user's pan, zoom, and rotation in
//!   view space; it resets when new content is bound and is rewritten (not
//!   reset) across viewport and mode changes so the composed result is
//!   preserved.
//! - The **display transform** is always `delta ∘ base`, exposed as a
//!   [`kurbo::Affine`] for rendering.
//!
//! Elastic limits come from `vantage_bounds` (drag margins with bounce and
//! snap-back, scale overshoot during live pinches), pivot-preserving updates
//! from `vantage_transform`, rotation tracking from `vantage_gesture`, and
//! animated corrections from `vantage_motion`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use vantage_view::Viewer;
//!
//! let mut viewer = Viewer::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! viewer.set_content_size(Size::new(400.0, 300.0));
//!
//! // Pinch in about a focus point, then drag.
//! viewer.on_scale_begin(Point::new(400.0, 300.0));
//! viewer.on_scale(Point::new(400.0, 300.0), 1.5);
//! viewer.on_scroll(Vec2::new(-25.0, 10.0), 1);
//! viewer.on_gesture_end();
//!
//! // Render with the composed transform.
//! let matrix = viewer.display_transform();
//! # let _ = matrix;
//! ```
//!
//! ## Driving animations
//!
//! The viewer never owns a clock. Corrections (double-tap zoom, scale limit
//! enforcement, the release settle) are started as entries in the viewer's
//! animation table; the host schedules them and delivers eased progress:
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use vantage_view::Viewer;
//!
//! let mut viewer = Viewer::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! viewer.set_content_size(Size::new(400.0, 300.0));
//! viewer.on_double_tap(None);
//!
//! for anim in viewer.animations().collect::<Vec<_>>() {
//!     // A real host spreads ticks over `anim.duration_ms`.
//!     viewer.animation_tick(anim.id, 0.5);
//!     viewer.animation_tick(anim.id, 1.0);
//! }
//! ```
//!
//! Notifications (bound reached, scale limits, completions) accumulate in a
//! single [`ViewEvent`] log drained with [`Viewer::take_events`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod event;
mod snapshot;
mod viewer;

pub use config::{DisplayMode, ViewerConfig};
pub use event::ViewEvent;
pub use snapshot::{RestoreError, SnapshotValue};
pub use viewer::{ActiveAnimation, Viewer, ViewerDebugInfo};
