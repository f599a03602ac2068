// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Matrix form of [`Similarity`]: encoding, validated decoding, and the
//! scale-sign ambiguity.

use core::fmt;

use kurbo::{Affine, Vec2};

use crate::Similarity;

/// Error returned when a matrix is not a valid similarity-transform matrix.
///
/// Raised by [`Similarity::from_matrix`] and [`Similarity::from_affine`]
/// when the input lies outside the family `[[s·cosθ, −s·sinθ, tx],
/// [s·sinθ, s·cosθ, ty], [0, 0, 1]]`. Not recoverable at this layer: the
/// caller that supplied the matrix (for example, a persisted-state restore)
/// must handle it.
#[derive(Clone, Copy, PartialEq)]
pub enum MatrixFormatError {
    /// The homogeneous row carries a perspective term (`m6` or `m7` is
    /// nonzero). `index` is the offending coefficient index in row-major
    /// order.
    Perspective {
        /// Row-major index of the nonzero coefficient (6 or 7).
        index: usize,
        /// The offending value.
        value: f64,
    },
    /// The homogeneous scale `m8` is zero, so the matrix is degenerate.
    ZeroHomogeneous,
    /// The diagonal terms differ (`m0 ≠ m4`), implying per-axis scale.
    NonUniformDiagonal {
        /// The `m0` coefficient.
        m0: f64,
        /// The `m4` coefficient.
        m4: f64,
    },
    /// The off-diagonal terms are not antisymmetric (`m1 ≠ −m3`), implying
    /// shear.
    Shear {
        /// The `m1` coefficient.
        m1: f64,
        /// The `m3` coefficient.
        m3: f64,
    },
}

impl fmt::Debug for MatrixFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Perspective { index, value } => f
                .debug_struct("Perspective")
                .field("index", index)
                .field("value", value)
                .finish(),
            Self::ZeroHomogeneous => f.write_str("ZeroHomogeneous"),
            Self::NonUniformDiagonal { m0, m4 } => f
                .debug_struct("NonUniformDiagonal")
                .field("m0", m0)
                .field("m4", m4)
                .finish(),
            Self::Shear { m1, m3 } => f
                .debug_struct("Shear")
                .field("m1", m1)
                .field("m3", m3)
                .finish(),
        }
    }
}

impl fmt::Display for MatrixFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Perspective { index, value } => {
                write!(f, "matrix has a perspective term: m{index} = {value}")
            }
            Self::ZeroHomogeneous => write!(f, "matrix has a zero homogeneous scale (m8 = 0)"),
            Self::NonUniformDiagonal { m0, m4 } => {
                write!(f, "matrix scales axes unequally: m0 = {m0}, m4 = {m4}")
            }
            Self::Shear { m1, m3 } => {
                write!(f, "matrix has a shear component: m1 = {m1}, m3 = {m3}")
            }
        }
    }
}

impl core::error::Error for MatrixFormatError {}

impl Similarity {
    /// Encodes the transform as a row-major 3×3 matrix.
    ///
    /// The result is `[[s·cosθ, −s·sinθ, tx], [s·sinθ, s·cosθ, ty],
    /// [0, 0, 1]]` flattened row by row. Encoding is always well-formed.
    #[must_use]
    pub fn to_matrix(&self) -> [f64; 9] {
        let r = Vec2::from_angle(self.angle) * self.scale;
        [
            r.x,
            -r.y,
            self.translation.x,
            r.y,
            r.x,
            self.translation.y,
            0.0,
            0.0,
            1.0,
        ]
    }

    /// Decodes a row-major 3×3 matrix into a similarity transform.
    ///
    /// Any similarity matrix admits two decompositions, `(scale, θ)` and
    /// `(−scale, θ+π)`; `assume_positive_scale` selects which one is
    /// returned. Decoding then encoding round-trips the matrix exactly up
    /// to floating point either way.
    ///
    /// Comparisons are exact: a matrix that deviates from the family by any
    /// amount is rejected. A matrix whose linear part is all zero decodes to
    /// a NaN angle rather than an error; the non-finite transform propagates
    /// until replaced.
    pub fn from_matrix(
        m: &[f64; 9],
        assume_positive_scale: bool,
    ) -> Result<Self, MatrixFormatError> {
        if m[6] != 0.0 {
            return Err(MatrixFormatError::Perspective {
                index: 6,
                value: m[6],
            });
        }
        if m[7] != 0.0 {
            return Err(MatrixFormatError::Perspective {
                index: 7,
                value: m[7],
            });
        }
        if m[8] == 0.0 {
            return Err(MatrixFormatError::ZeroHomogeneous);
        }
        if m[0] != m[4] {
            return Err(MatrixFormatError::NonUniformDiagonal { m0: m[0], m4: m[4] });
        }
        if m[1] != -m[3] {
            return Err(MatrixFormatError::Shear { m1: m[1], m3: m[3] });
        }

        let a = m[0] / m[8];
        let b = m[3] / m[8];
        let sign = if assume_positive_scale { 1.0 } else { -1.0 };
        let scale = sign * Vec2::new(a, b).length();
        let angle = Vec2::new(a / scale, b / scale).atan2();
        Ok(Self {
            scale,
            angle,
            translation: Vec2::new(m[2] / m[8], m[5] / m[8]),
        })
    }

    /// Converts the transform to a [`kurbo::Affine`].
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        let r = Vec2::from_angle(self.angle) * self.scale;
        Affine::new([
            r.x,
            r.y,
            -r.y,
            r.x,
            self.translation.x,
            self.translation.y,
        ])
    }

    /// Decodes a [`kurbo::Affine`] into a similarity transform.
    ///
    /// The affine must already be a similarity (equal diagonal, antisymmetric
    /// off-diagonal); otherwise the corresponding [`MatrixFormatError`] is
    /// returned. The sign convention matches
    /// [`from_matrix`](Self::from_matrix).
    pub fn from_affine(
        affine: Affine,
        assume_positive_scale: bool,
    ) -> Result<Self, MatrixFormatError> {
        let [a, b, c, d, e, f] = affine.as_coeffs();
        Self::from_matrix(&[a, c, e, b, d, f, 0.0, 0.0, 1.0], assume_positive_scale)
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::PI;

    use kurbo::{Point, Vec2};

    use super::MatrixFormatError;
    use crate::Similarity;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn encode_decode_round_trip() {
        let t = Similarity::new(2.5, 0.8, Vec2::new(17.0, -42.0));
        let m = t.to_matrix();
        let back = Similarity::from_matrix(&m, true).unwrap();
        assert_close(back.scale, t.scale);
        assert_close(back.angle, t.angle);
        assert_close(back.translation.x, t.translation.x);
        assert_close(back.translation.y, t.translation.y);
    }

    #[test]
    fn negative_scale_round_trip() {
        let t = Similarity::new(-1.5, 0.2, Vec2::new(3.0, 4.0));
        let back = Similarity::from_matrix(&t.to_matrix(), false).unwrap();
        assert_close(back.scale, t.scale);
        assert_close(back.angle, t.angle);
    }

    #[test]
    fn decode_ambiguity_flips_scale_and_angle() {
        let t = Similarity::new(2.0, 0.5, Vec2::new(9.0, -1.0));
        let m = t.to_matrix();
        let alt = Similarity::from_matrix(&m, false).unwrap();

        assert_close(alt.scale, -2.0);
        // atan2 lands the flipped angle in (−π, π].
        assert_close(alt.angle, 0.5 - PI);
        assert_close(alt.translation.x, t.translation.x);
        assert_close(alt.translation.y, t.translation.y);

        // Both decompositions encode the same matrix.
        let m_alt = alt.to_matrix();
        for (x, y) in m.iter().zip(m_alt.iter()) {
            assert_close(*x, *y);
        }
    }

    #[test]
    fn homogeneous_scale_divides_through() {
        let t = Similarity::new(3.0, -0.6, Vec2::new(-8.0, 2.0));
        let mut m = t.to_matrix();
        for v in &mut m {
            *v *= 2.0;
        }
        // m8 is now 2; decode must normalize by it.
        let back = Similarity::from_matrix(&m, true).unwrap();
        assert_close(back.scale, t.scale);
        assert_close(back.angle, t.angle);
        assert_close(back.translation.x, t.translation.x);
    }

    #[test]
    fn rejects_perspective_terms() {
        let mut m = Similarity::IDENTITY.to_matrix();
        m[6] = 1.0;
        assert_eq!(
            Similarity::from_matrix(&m, true),
            Err(MatrixFormatError::Perspective {
                index: 6,
                value: 1.0
            })
        );

        let mut m = Similarity::IDENTITY.to_matrix();
        m[7] = -0.5;
        assert!(matches!(
            Similarity::from_matrix(&m, true),
            Err(MatrixFormatError::Perspective { index: 7, .. })
        ));
    }

    #[test]
    fn rejects_zero_homogeneous_scale() {
        let mut m = Similarity::IDENTITY.to_matrix();
        m[8] = 0.0;
        assert_eq!(
            Similarity::from_matrix(&m, true),
            Err(MatrixFormatError::ZeroHomogeneous)
        );
    }

    #[test]
    fn rejects_non_uniform_diagonal() {
        let mut m = Similarity::IDENTITY.to_matrix();
        m[0] = 2.0;
        assert!(matches!(
            Similarity::from_matrix(&m, true),
            Err(MatrixFormatError::NonUniformDiagonal { .. })
        ));
    }

    #[test]
    fn rejects_shear() {
        let mut m = Similarity::IDENTITY.to_matrix();
        m[1] = 0.25;
        assert!(matches!(
            Similarity::from_matrix(&m, true),
            Err(MatrixFormatError::Shear { .. })
        ));
    }

    #[test]
    fn affine_round_trip_agrees_with_apply() {
        let t = Similarity::new(1.75, 2.1, Vec2::new(-6.0, 13.0));
        let affine = t.to_affine();

        let p = Point::new(5.0, -9.0);
        assert!(((affine * p) - t.apply(p)).hypot() < 1e-9);

        let back = Similarity::from_affine(affine, true).unwrap();
        assert_close(back.scale, t.scale);
        assert_close(back.angle, t.angle);
    }

    #[test]
    fn zero_linear_part_decodes_to_nan_angle() {
        let m = [0.0, 0.0, 5.0, 0.0, 0.0, 5.0, 0.0, 0.0, 1.0];
        let t = Similarity::from_matrix(&m, true).unwrap();
        assert_eq!(t.scale, 0.0);
        assert!(t.angle.is_nan());
    }
}
