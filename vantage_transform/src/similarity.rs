// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// A 2D similarity transform: uniform scale, rotation, and translation.
///
/// Maps a point `P` to `scale · R(angle) · P + translation`. The family is
/// closed under composition and inversion and excludes shear and per-axis
/// scaling by construction.
///
/// `Similarity` is an immutable value type: updates return a new value and
/// leave the receiver untouched. By convention `scale` is positive; a
/// negative scale is the alternate decomposition of the same matrix (see
/// [`Similarity::from_matrix`](Self::from_matrix)).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Similarity {
    /// Uniform scale factor.
    pub scale: f64,
    /// Rotation angle in radians. Positive angles rotate +X toward +Y
    /// (clockwise in the usual Y-down view space).
    pub angle: f64,
    /// Translation applied after scale and rotation.
    pub translation: Vec2,
}

impl Similarity {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        angle: 0.0,
        translation: Vec2::ZERO,
    };

    /// Creates a similarity transform from its three components.
    #[must_use]
    pub const fn new(scale: f64, angle: f64, translation: Vec2) -> Self {
        Self {
            scale,
            angle,
            translation,
        }
    }

    /// Applies the transform to a point.
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        let r = Vec2::from_angle(self.angle);
        Point::new(
            self.scale * (r.x * p.x - r.y * p.y) + self.translation.x,
            self.scale * (r.y * p.x + r.x * p.y) + self.translation.y,
        )
    }

    /// Returns the transform equivalent to applying `self` first and `other`
    /// second.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        Self {
            scale: other.scale * self.scale,
            angle: other.angle + self.angle,
            translation: other.apply(self.translation.to_point()).to_vec2(),
        }
    }

    /// Returns the inverse transform.
    ///
    /// A zero scale has no inverse; the result is non-finite and propagates
    /// as such.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let inv = Self {
            scale: 1.0 / self.scale,
            angle: -self.angle,
            translation: Vec2::ZERO,
        };
        Self {
            translation: -inv.apply(self.translation.to_point()).to_vec2(),
            ..inv
        }
    }

    /// Returns `true` if all components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.scale.is_finite() && self.angle.is_finite() && self.translation.is_finite()
    }

    /// Replaces the scale, keeping `pivot` fixed.
    ///
    /// The returned transform maps `pivot` to the same point the receiver
    /// does; only the scale (and, consequently, the translation) changes.
    ///
    /// A receiver with `scale == 0` divides to non-finite components, which
    /// propagate silently until a finite transform is installed again.
    #[must_use]
    pub fn with_scale(&self, new_scale: f64, pivot: Point) -> Self {
        let k = new_scale / self.scale;
        let p = pivot.to_vec2();
        Self {
            scale: new_scale,
            angle: self.angle,
            translation: (self.translation - p) * k + p,
        }
    }

    /// Replaces the rotation angle, keeping `pivot` fixed.
    #[must_use]
    pub fn with_rotation(&self, new_angle: f64, pivot: Point) -> Self {
        let r = Vec2::from_angle(new_angle - self.angle);
        let d = self.translation - pivot.to_vec2();
        Self {
            scale: self.scale,
            angle: new_angle,
            translation: Vec2::new(
                r.x * d.x - r.y * d.y + pivot.x,
                r.y * d.x + r.x * d.y + pivot.y,
            ),
        }
    }

    /// Replaces the translation.
    #[must_use]
    pub fn with_translation(&self, translation: Vec2) -> Self {
        Self {
            translation,
            ..*self
        }
    }

    /// Replaces rotation and translation in one update.
    ///
    /// The rotation is applied pivot-preserving first; the translation then
    /// overwrites whatever the rotation produced, so the translation fields
    /// are always the last ones recomputed.
    #[must_use]
    pub fn with_rotation_and_translation(
        &self,
        new_angle: f64,
        pivot: Point,
        translation: Vec2,
    ) -> Self {
        self.with_rotation(new_angle, pivot)
            .with_translation(translation)
    }
}

impl Default for Similarity {
    fn default() -> Self {
        Self::IDENTITY
    }
}
