//! Row-major 4×4 matrices.
//!
//! A [`Matrix`] is four [`Vec4`] rows and follows the row-vector convention:
//! points are multiplied on the left (`p * M`) and the translation sits in the
//! last row. Two consequences are worth keeping in mind:
//!
//! - `a * b` applies `a` first and `b` second.
//! - [`Matrix::trs`] builds `scale * rotation * translation`, which scales a
//!   local point, rotates it, and then moves it into place.
//!
//! ```
//! use hoplite_spatial::{Matrix, Quat, Vec3};
//! use approx::assert_abs_diff_eq;
//!
//! let m = Matrix::trs(Vec3::new(1.0, 0.0, 0.0), Quat::IDENTITY, Vec3::splat(2.0));
//! let p = m.transform_point(Vec3::new(0.0, 1.0, 0.0));
//! assert_abs_diff_eq!(p, Vec3::new(1.0, 2.0, 0.0), epsilon = 1e-6);
//! ```
//!
//! # Inversion
//!
//! [`Matrix::inverse`] returns [`MathError::SingularMatrix`] instead of
//! producing garbage when the determinant is zero or lost to rounding.
//!
//! The heavy lifting (rotation, composition, inversion, projection) is done by
//! [`glam`] through the conversions in this crate.

use std::ops::Mul;

use crate::error::{MathError, Result};
use crate::quat::Quat;
use crate::vector::{Vec3, Vec4};

/// A 4×4 matrix stored as four rows.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    pub row: [Vec4; 4],
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix::from_rows(
        Vec4::new(1.0, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 1.0, 0.0, 0.0),
        Vec4::new(0.0, 0.0, 1.0, 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    );

    /// Every element NaN. Stands in for the inverse of a singular matrix where
    /// an infallible result is required.
    pub const NAN: Matrix = Matrix::from_rows(
        Vec4::splat(f32::NAN),
        Vec4::splat(f32::NAN),
        Vec4::splat(f32::NAN),
        Vec4::splat(f32::NAN),
    );

    #[inline]
    pub const fn from_rows(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Self {
        Self {
            row: [r0, r1, r2, r3],
        }
    }

    /// The elements as `[row][column]`.
    pub fn to_rows_array(&self) -> [[f32; 4]; 4] {
        self.row.map(|r| [r.x, r.y, r.z, r.w])
    }

    fn from_rows_array(m: [[f32; 4]; 4]) -> Self {
        Self {
            row: m.map(Vec4::from),
        }
    }

    /// Pure translation.
    pub fn translation(position: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.row[3] = position.extend(1.0);
        m
    }

    /// Pure (possibly non-uniform) scale.
    pub fn from_scale(scale: Vec3) -> Self {
        Self::from_rows(
            Vec4::new(scale.x, 0.0, 0.0, 0.0),
            Vec4::new(0.0, scale.y, 0.0, 0.0),
            Vec4::new(0.0, 0.0, scale.z, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// Pure rotation. Row `n` is the rotated `n`th basis axis.
    pub fn from_rotation(q: Quat) -> Self {
        glam::Mat4::from_quat(q.into()).into()
    }

    /// Affine transform that scales, then rotates, then translates.
    ///
    /// Equivalent to `from_scale(scale) * from_rotation(rotation) * translation(position)`
    /// but built directly.
    pub fn trs(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        glam::Mat4::from_scale_rotation_translation(scale.into(), rotation.into(), position.into())
            .into()
    }

    /// Right-handed perspective projection with depth mapped to `[0, 1]`.
    ///
    /// `fov_y` is the vertical field of view in radians and `aspect` is
    /// width / height.
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        glam::Mat4::perspective_rh(fov_y, aspect, near, far).into()
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        let m = self.to_rows_array();
        Self::from_rows_array(std::array::from_fn(|r| std::array::from_fn(|c| m[c][r])))
    }

    /// Matrix product. With row vectors the result applies `self` first.
    pub fn mul_matrix(&self, rhs: &Matrix) -> Matrix {
        let row = |r: Vec4| rhs.transform_vec4(r);
        Self::from_rows(row(self.row[0]), row(self.row[1]), row(self.row[2]), row(self.row[3]))
    }

    /// Multiplies a full homogeneous vector.
    #[inline]
    pub fn transform_vec4(&self, v: Vec4) -> Vec4 {
        v.x * self.row[0] + v.y * self.row[1] + v.z * self.row[2] + v.w * self.row[3]
    }

    /// Transforms a point (`w = 1`).
    ///
    /// For projective matrices the result is divided by the resulting `w`.
    /// Affine matrices leave `w` at 1, so nothing is divided; a `w` of exactly 0
    /// (a point at infinity) is also returned undivided.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        let v = self.transform_vec4(point.extend(1.0));
        if v.w != 1.0 && v.w != 0.0 {
            v.xyz() / v.w
        } else {
            v.xyz()
        }
    }

    /// Transforms a direction (`w = 0`), ignoring translation.
    #[inline]
    pub fn transform_direction(&self, direction: Vec3) -> Vec3 {
        (direction.x * self.row[0] + direction.y * self.row[1] + direction.z * self.row[2]).xyz()
    }

    /// The translation part of an affine matrix.
    #[inline]
    pub fn translation_part(&self) -> Vec3 {
        self.row[3].xyz()
    }

    /// The determinant. Its sign tells whether the matrix mirrors space.
    pub fn determinant(&self) -> f32 {
        glam::Mat4::from(*self).determinant()
    }

    /// General 4×4 inverse.
    ///
    /// Works for any invertible matrix, including affine transforms with
    /// non-uniform scale and projections. Returns
    /// [`MathError::SingularMatrix`] when the determinant is not finite or is
    /// negligible next to the product of the row lengths, the largest value
    /// it could have for rows of those lengths.
    pub fn inverse(&self) -> Result<Matrix> {
        let m = glam::Mat4::from(*self);
        let det = m.determinant();
        let bound = self.row.iter().map(|r| r.magnitude()).product::<f32>();
        if !det.is_finite() || det.abs() <= f32::EPSILON * bound {
            return Err(MathError::SingularMatrix { determinant: det });
        }
        Ok(m.inverse().into())
    }
}

impl Mul for Matrix {
    type Output = Matrix;
    #[inline]
    fn mul(self, rhs: Matrix) -> Matrix {
        self.mul_matrix(&rhs)
    }
}

impl Mul<Vec4> for Matrix {
    type Output = Vec4;
    /// Same as [`Matrix::transform_vec4`], spelled as a product.
    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.transform_vec4(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-5;

    fn sample() -> Matrix {
        Matrix::from_rows(
            Vec4::new(2.0, 0.5, -1.0, 0.0),
            Vec4::new(0.0, 3.0, 1.0, 0.0),
            Vec4::new(1.0, -2.0, 4.0, 0.0),
            Vec4::new(5.0, 6.0, 7.0, 1.0),
        )
    }

    fn sample_trs() -> Matrix {
        Matrix::trs(
            Vec3::new(3.0, -2.0, 8.0),
            Quat::from_euler(Vec3::new(25.0, -60.0, 40.0)),
            Vec3::new(2.0, 0.5, 3.0),
        )
    }

    #[test]
    fn identity_is_two_sided() {
        for m in [sample(), sample_trs(), Matrix::perspective(1.2, 1.5, 0.1, 100.0)] {
            assert_eq!(Matrix::IDENTITY * m, m);
            assert_eq!(m * Matrix::IDENTITY, m);
        }
    }

    #[test]
    fn product_applies_left_operand_first() {
        let a = Matrix::translation(Vec3::new(1.0, 0.0, 0.0));
        let b = Matrix::from_scale(Vec3::splat(2.0));
        let p = Vec3::new(1.0, 1.0, 1.0);

        assert_eq!((a * b).transform_point(p), Vec3::new(4.0, 2.0, 2.0));
        assert_eq!((b * a).transform_point(p), Vec3::new(3.0, 2.0, 2.0));
        assert_eq!((a * b).transform_point(p), b.transform_point(a.transform_point(p)));
    }

    #[test]
    fn inverse_of_general_matrix() {
        let m = sample();
        let inv = m.inverse().unwrap();
        assert_abs_diff_eq!(inv * m, Matrix::IDENTITY, epsilon = EPSILON);
        assert_abs_diff_eq!(m * inv, Matrix::IDENTITY, epsilon = EPSILON);
    }

    #[test]
    fn inverse_of_trs_undoes_transform() {
        let m = sample_trs();
        let inv = m.inverse().unwrap();
        assert_abs_diff_eq!(inv * m, Matrix::IDENTITY, epsilon = EPSILON);

        let p = Vec3::new(-1.0, 4.0, 0.25);
        assert_abs_diff_eq!(inv.transform_point(m.transform_point(p)), p, epsilon = 1e-4);
    }

    #[test]
    fn inverse_of_projection() {
        let m = Matrix::perspective(1.0, 16.0 / 9.0, 0.1, 50.0);
        let inv = m.inverse().unwrap();
        assert_abs_diff_eq!(inv * m, Matrix::IDENTITY, epsilon = 1e-4);
    }

    #[test]
    fn singular_matrix_is_reported() {
        let flat = Matrix::from_scale(Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(
            flat.inverse(),
            Err(MathError::SingularMatrix { determinant: 0.0 })
        );
        assert!(Matrix::NAN.inverse().is_err());
    }

    #[test]
    fn rank_deficient_matrix_is_singular_despite_rounding() {
        let r0 = Vec4::new(0.1, 0.7, 0.3, 0.0);
        let r1 = Vec4::new(0.3, 0.2, 0.9, 0.0);
        let blended = Matrix::from_rows(r0, r1, r0 * 0.3 + r1 * 0.7, Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert!(matches!(blended.inverse(), Err(MathError::SingularMatrix { .. })));
    }

    #[test]
    fn tiny_uniform_scale_is_still_invertible() {
        let m = Matrix::from_scale(Vec3::splat(1e-3));
        let inv = m.inverse().unwrap();
        assert_abs_diff_eq!(inv, Matrix::from_scale(Vec3::splat(1e3)), epsilon = 1e-1);
    }

    #[test]
    fn determinant_of_scale_is_product() {
        assert_abs_diff_eq!(
            Matrix::from_scale(Vec3::new(2.0, 3.0, 4.0)).determinant(),
            24.0,
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(sample_trs().determinant(), 3.0, epsilon = 1e-4);
    }

    #[test]
    fn trs_matches_composed_parts() {
        let position = Vec3::new(1.0, 2.0, 3.0);
        let rotation = Quat::from_euler(Vec3::new(10.0, 20.0, 30.0));
        let scale = Vec3::new(2.0, 3.0, 4.0);

        let composed = Matrix::from_scale(scale)
            * Matrix::from_rotation(rotation)
            * Matrix::translation(position);
        assert_abs_diff_eq!(Matrix::trs(position, rotation, scale), composed, epsilon = EPSILON);
    }

    #[test]
    fn trs_point_is_scaled_rotated_then_translated() {
        let position = Vec3::new(1.0, 2.0, 3.0);
        let rotation = Quat::from_euler(Vec3::new(0.0, 90.0, 0.0));
        let scale = Vec3::new(2.0, 1.0, 1.0);
        let p = Vec3::new(1.0, 0.0, 0.0);

        let expected = rotation * (p * scale) + position;
        let m = Matrix::trs(position, rotation, scale);
        assert_abs_diff_eq!(m.transform_point(p), expected, epsilon = EPSILON);
    }

    #[test]
    fn direction_ignores_translation() {
        let m = Matrix::translation(Vec3::new(10.0, 20.0, 30.0));
        assert_eq!(m.transform_direction(Vec3::UP), Vec3::UP);
        assert_eq!(m.transform_point(Vec3::UP), Vec3::new(10.0, 21.0, 30.0));
    }

    #[test]
    fn projective_point_is_divided_by_w() {
        let proj = Matrix::perspective(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 10.0);
        let near = proj.transform_point(Vec3::new(0.0, 0.0, -1.0));
        let far = proj.transform_point(Vec3::new(0.0, 0.0, -10.0));
        assert_abs_diff_eq!(near.z, 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(far.z, 1.0, epsilon = EPSILON);

        let edge = proj.transform_point(Vec3::new(2.0, 0.0, -2.0));
        assert_abs_diff_eq!(edge.x, 1.0, epsilon = EPSILON);
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let m = sample();
        let t = m.transpose();
        assert_eq!(t.row[3], Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(t.row[0], Vec4::new(2.0, 0.0, 1.0, 5.0));
        assert_eq!(t.transpose(), m);
    }
}
