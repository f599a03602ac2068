// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Transform: 2D similarity transforms with pivot-preserving updates.
//!
//! This crate provides [`Similarity`], a small value type for the transform
//! family `P' = scale · R(angle) · P + translation` (uniform scale, rotation,
//! and translation — never shear or per-axis scale), together with:
//! - Conversion to and from a row-major 3×3 matrix and [`kurbo::Affine`],
//!   including validation that the matrix actually belongs to the similarity
//!   family ([`MatrixFormatError`]).
//! - Resolution of the `(scale, θ)` / `(−scale, θ+π)` decomposition
//!   ambiguity via an explicit caller-supplied sign choice.
//! - Pivot-preserving updates: change the scale or rotation so that a chosen
//!   point maps to the same position before and after the update — the core
//!   algebra behind pinch-to-zoom and rotate-about-fingers semantics.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use vantage_transform::Similarity;
//!
//! // Zoom in, keeping the point under the user's fingers fixed.
//! let pivot = Point::new(400.0, 300.0);
//! let t = Similarity::IDENTITY.with_scale(2.0, pivot);
//!
//! let before = Similarity::IDENTITY.apply(pivot);
//! let after = t.apply(pivot);
//! assert!((after - before).hypot() < 1e-12);
//! ```
//!
//! ## Matrix round trip
//!
//! ```rust
//! use vantage_transform::Similarity;
//!
//! let t = Similarity::new(1.5, 0.3, (10.0, -4.0).into());
//! let m = t.to_matrix();
//! let back = Similarity::from_matrix(&m, true).unwrap();
//! assert!((back.scale - t.scale).abs() < 1e-12);
//! ```
//!
//! Updates are pure: every operation takes a transform by value and returns a
//! new one. Callers own their copies; nothing here is shared or mutated in
//! place.
//!
//! This crate is `no_std`.

#![no_std]

mod codec;
mod similarity;

pub use codec::MatrixFormatError;
pub use similarity::Similarity;
