//! Unit quaternions for 3D rotation.
//!
//! Components are named `i`, `j`, `k` (the vector part, in x/y/z order) and `a`
//! (the scalar part). Every rotation helper assumes unit magnitude; after many
//! compositions or interpolations, call [`Quat::normalize`] to remove drift.
//!
//! # Composition order
//!
//! `a * b` is the Hamilton product. Rotating a vector by `a * b` rotates it by
//! `b` first and then by `a`:
//!
//! ```
//! use hoplite_spatial::{Quat, Vec3};
//! use approx::assert_abs_diff_eq;
//!
//! let yaw = Quat::from_euler(Vec3::new(0.0, 90.0, 0.0));
//! let pitch = Quat::from_euler(Vec3::new(90.0, 0.0, 0.0));
//! let v = Vec3::FORWARD;
//!
//! assert_abs_diff_eq!((yaw * pitch) * v, yaw * (pitch * v), epsilon = 1e-5);
//! ```

use std::ops::{Mul, Neg};

use crate::matrix::Matrix;
use crate::units::DEG2RAD;
use crate::vector::Vec3;

/// A rotation stored as a quaternion `(i, j, k, a)`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    pub i: f32,
    pub j: f32,
    pub k: f32,
    pub a: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    /// No rotation.
    pub const IDENTITY: Quat = Quat::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from raw components. The result is not normalized.
    #[inline]
    pub const fn new(i: f32, j: f32, k: f32, a: f32) -> Self {
        Self { i, j, k, a }
    }

    /// Rotation of `radians` around `axis`. The axis does not need to be unit length.
    pub fn from_axis_angle(axis: Vec3, radians: f32) -> Self {
        let axis = axis.normalize();
        let (sin, cos) = (radians * 0.5).sin_cos();
        Self::new(axis.x * sin, axis.y * sin, axis.z * sin, cos)
    }

    /// Rotation from Euler angles in degrees: `x` is pitch, `y` is yaw, `z` is roll.
    ///
    /// Roll is applied first, then pitch, then yaw (`yaw * pitch * roll`). With
    /// this order a yaw of 90° turns [`Vec3::FORWARD`] towards `-X`:
    ///
    /// ```
    /// use hoplite_spatial::{Quat, Vec3};
    /// use approx::assert_abs_diff_eq;
    ///
    /// let turned = Quat::from_euler(Vec3::new(0.0, 90.0, 0.0)) * Vec3::FORWARD;
    /// assert_abs_diff_eq!(turned, Vec3::new(-1.0, 0.0, 0.0), epsilon = 1e-6);
    /// ```
    pub fn from_euler(degrees: Vec3) -> Self {
        let radians = degrees * DEG2RAD;
        let pitch = Self::from_axis_angle(Vec3::RIGHT, radians.x);
        let yaw = Self::from_axis_angle(Vec3::UP, radians.y);
        let roll = Self::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), radians.z);
        yaw * pitch * roll
    }

    /// Orientation whose forward axis ([`Vec3::FORWARD`]) points from `from` towards `at`.
    ///
    /// The result keeps its up axis as close to [`Vec3::UP`] as possible. When
    /// looking straight up or down, [`Vec3::FORWARD`] is used as the up reference
    /// instead. If `from` and `at` coincide there is no direction to look in and
    /// the identity rotation is returned.
    pub fn look_at(from: Vec3, at: Vec3) -> Self {
        let direction = at - from;
        let length_sq = direction.magnitude_sq();
        if length_sq <= f32::EPSILON * f32::EPSILON {
            return Self::IDENTITY;
        }
        let forward = direction / length_sq.sqrt();
        let back = -forward;

        let reference = if forward.dot(Vec3::UP).abs() > 1.0 - 1e-6 {
            Vec3::FORWARD
        } else {
            Vec3::UP
        };
        let right = reference.cross(back).normalize();
        let up = back.cross(right);

        Self::from_basis(right, up, back)
    }

    /// Builds the rotation that maps the X, Y and Z axes onto the given
    /// orthonormal, right-handed basis.
    pub(crate) fn from_basis(x: Vec3, y: Vec3, z: Vec3) -> Self {
        let basis = glam::Mat3::from_cols(x.into(), y.into(), z.into());
        Self::from(glam::Quat::from_mat3(&basis)).normalize()
    }

    /// Four-component dot product. Near ±1 for two unit quaternions describing
    /// almost the same rotation.
    #[inline]
    pub fn dot(self, rhs: Quat) -> f32 {
        self.i * rhs.i + self.j * rhs.j + self.k * rhs.k + self.a * rhs.a
    }

    /// Squared length.
    #[inline]
    pub fn magnitude_sq(self) -> f32 {
        self.dot(self)
    }

    /// Length. 1 for a valid rotation.
    #[inline]
    pub fn magnitude(self) -> f32 {
        self.magnitude_sq().sqrt()
    }

    /// Rescales to unit magnitude. A zero quaternion produces NaN components.
    #[inline]
    pub fn normalize(self) -> Quat {
        let inv = 1.0 / self.magnitude();
        Self::new(self.i * inv, self.j * inv, self.k * inv, self.a * inv)
    }

    /// Negated vector part. Equal to [`Quat::inverse`] for unit quaternions.
    #[inline]
    pub fn conjugate(self) -> Quat {
        Self::new(-self.i, -self.j, -self.k, self.a)
    }

    /// The opposite rotation. Works for non-unit input as well.
    #[inline]
    pub fn inverse(self) -> Quat {
        let inv = 1.0 / self.magnitude_sq();
        let c = self.conjugate();
        Self::new(c.i * inv, c.j * inv, c.k * inv, c.a * inv)
    }

    /// Hamilton product. The result applies `rhs` first, then `self`.
    pub fn mul_quat(self, rhs: Quat) -> Quat {
        let Quat { i: x1, j: y1, k: z1, a: w1 } = self;
        let Quat { i: x2, j: y2, k: z2, a: w2 } = rhs;
        Self::new(
            w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
            w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
            w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
        )
    }

    /// Rotates `v` by this quaternion.
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let u = Vec3::new(self.i, self.j, self.k);
        let t = u.cross(v) * 2.0;
        v + t * self.a + u.cross(t)
    }

    /// The rotation that takes `self` to `to`: `self.difference(to) * self ≈ to`.
    #[inline]
    pub fn difference(self, to: Quat) -> Quat {
        to * self.inverse()
    }

    /// Normalized linear interpolation towards `other`.
    ///
    /// Cheaper than a spherical interpolation and close to it for nearby
    /// rotations. `other` is negated when needed so the blend follows the
    /// shorter arc.
    ///
    /// Because of that flip, `lerp(a, b, 1.0)` may come back as `-b` rather
    /// than `b`. Both describe the same rotation and rotate vectors
    /// identically; compare components only up to sign.
    pub fn lerp(self, other: Quat, t: f32) -> Quat {
        let other = if self.dot(other) < 0.0 { -other } else { other };
        Self::new(
            self.i + (other.i - self.i) * t,
            self.j + (other.j - self.j) * t,
            self.k + (other.k - self.k) * t,
            self.a + (other.a - self.a) * t,
        )
        .normalize()
    }

    /// The equivalent rotation matrix.
    #[inline]
    pub fn to_matrix(self) -> Matrix {
        Matrix::from_rotation(self)
    }
}

impl Mul for Quat {
    type Output = Quat;
    #[inline]
    fn mul(self, rhs: Quat) -> Quat {
        self.mul_quat(rhs)
    }
}

impl Mul<Vec3> for Quat {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.rotate(rhs)
    }
}

impl Neg for Quat {
    type Output = Quat;
    #[inline]
    fn neg(self) -> Quat {
        Self::new(-self.i, -self.j, -self.k, -self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    fn sample_rotations() -> [Quat; 4] {
        [
            Quat::IDENTITY,
            Quat::from_axis_angle(Vec3::new(1.0, 2.0, 3.0), 0.7),
            Quat::from_euler(Vec3::new(30.0, -45.0, 10.0)),
            Quat::from_axis_angle(Vec3::UP, 2.5),
        ]
    }

    #[test]
    fn normalize_keeps_unit_quaternions_unit() {
        for q in sample_rotations() {
            assert_abs_diff_eq!(q.normalize().magnitude(), 1.0, epsilon = EPSILON);
        }
        let scaled = Quat::new(0.0, 2.0, 0.0, 2.0).normalize();
        assert_abs_diff_eq!(scaled.magnitude(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn axis_angle_rotates_about_axis() {
        let q = Quat::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), FRAC_PI_2);
        assert_abs_diff_eq!(q * Vec3::RIGHT, Vec3::UP, epsilon = EPSILON);
    }

    #[test]
    fn multiply_applies_right_operand_first() {
        let a = Quat::from_axis_angle(Vec3::UP, FRAC_PI_2);
        let b = Quat::from_axis_angle(Vec3::RIGHT, FRAC_PI_2);
        let v = Vec3::new(0.3, -1.0, 2.0);

        assert_abs_diff_eq!((a * b) * v, a * (b * v), epsilon = EPSILON);
        assert!(((b * a) * v - (a * b) * v).magnitude() > 0.1);
    }

    #[test]
    fn identity_is_neutral() {
        let q = Quat::from_euler(Vec3::new(10.0, 20.0, 30.0));
        assert_abs_diff_eq!(q * Quat::IDENTITY, q, epsilon = EPSILON);
        assert_abs_diff_eq!(Quat::IDENTITY * q, q, epsilon = EPSILON);
        assert_eq!(Quat::IDENTITY * Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn inverse_undoes_rotation() {
        for q in sample_rotations() {
            let v = Vec3::new(1.0, -2.0, 0.5);
            assert_abs_diff_eq!(q.inverse() * (q * v), v, epsilon = EPSILON);
            assert_abs_diff_eq!(q.inverse(), q.conjugate(), epsilon = EPSILON);
        }
    }

    #[test]
    fn difference_composes_back_to_target() {
        let rotations = sample_rotations();
        for a in rotations {
            for b in rotations {
                let v = Vec3::new(0.2, 0.4, -1.0);
                assert_abs_diff_eq!(a.difference(b) * a * v, b * v, epsilon = EPSILON);
            }
        }
    }

    #[test]
    fn euler_yaw_turns_forward_towards_negative_x() {
        let q = Quat::from_euler(Vec3::new(0.0, 90.0, 0.0));
        assert_abs_diff_eq!(q * Vec3::FORWARD, Vec3::new(-1.0, 0.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn euler_pitch_raises_forward() {
        let q = Quat::from_euler(Vec3::new(90.0, 0.0, 0.0));
        assert_abs_diff_eq!(q * Vec3::FORWARD, Vec3::UP, epsilon = EPSILON);
    }

    #[test]
    fn euler_applies_roll_then_pitch_then_yaw() {
        let degrees = Vec3::new(20.0, 35.0, -50.0);
        let expected = Quat::from_axis_angle(Vec3::UP, degrees.y * DEG2RAD)
            * Quat::from_axis_angle(Vec3::RIGHT, degrees.x * DEG2RAD)
            * Quat::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), degrees.z * DEG2RAD);
        assert_abs_diff_eq!(Quat::from_euler(degrees), expected, epsilon = EPSILON);
    }

    #[test]
    fn look_at_points_forward_at_target() {
        let from = Vec3::new(1.0, 2.0, 3.0);
        let targets = [
            Vec3::new(4.0, 2.0, 3.0),
            Vec3::new(-3.0, 0.0, 8.0),
            Vec3::new(1.0, 2.0, -10.0),
            Vec3::new(1.0, 2.0, 10.0),
        ];
        for at in targets {
            let q = Quat::look_at(from, at);
            assert_abs_diff_eq!(q.magnitude(), 1.0, epsilon = EPSILON);
            assert_abs_diff_eq!(q * Vec3::FORWARD, (at - from).normalize(), epsilon = EPSILON);
        }
    }

    #[test]
    fn look_at_keeps_up_vertical_when_level() {
        let q = Quat::look_at(Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0));
        assert_abs_diff_eq!(q * Vec3::UP, Vec3::UP, epsilon = EPSILON);
    }

    #[test]
    fn look_at_straight_up_and_down() {
        for at in [Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -5.0, 0.0)] {
            let q = Quat::look_at(Vec3::ZERO, at);
            assert_abs_diff_eq!(q * Vec3::FORWARD, at.normalize(), epsilon = EPSILON);
        }
    }

    #[test]
    fn look_at_same_point_is_identity() {
        let p = Vec3::new(3.0, 3.0, 3.0);
        assert_eq!(Quat::look_at(p, p), Quat::IDENTITY);
    }

    #[test]
    fn lerp_endpoints() {
        let a = Quat::from_euler(Vec3::new(0.0, 10.0, 0.0));
        let b = Quat::from_euler(Vec3::new(0.0, 80.0, 0.0));
        assert_abs_diff_eq!(a.lerp(b, 0.0), a, epsilon = EPSILON);
        assert_abs_diff_eq!(a.lerp(b, 1.0), b, epsilon = EPSILON);
    }

    #[test]
    fn lerp_midpoint_is_halfway_rotation() {
        let a = Quat::IDENTITY;
        let b = Quat::from_axis_angle(Vec3::UP, FRAC_PI_2);
        let mid = a.lerp(b, 0.5);
        let expected = Quat::from_axis_angle(Vec3::UP, FRAC_PI_2 * 0.5);
        assert_abs_diff_eq!(mid, expected, epsilon = EPSILON);
    }

    #[test]
    fn lerp_takes_shorter_arc() {
        let a = Quat::from_axis_angle(Vec3::UP, 0.1);
        let b = -Quat::from_axis_angle(Vec3::UP, 0.3);
        let mid = a.lerp(b, 0.5);
        // Negated `b` is the same rotation, so the midpoint stays near 0.2 rad.
        assert!(mid.dot(Quat::from_axis_angle(Vec3::UP, 0.2)).abs() > 0.999);
        assert_abs_diff_eq!(mid.magnitude(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn lerp_end_matches_target_up_to_sign() {
        let a = Quat::from_axis_angle(Vec3::UP, 0.1);
        let b = -Quat::from_axis_angle(Vec3::UP, 0.3);
        assert!(a.dot(b) < 0.0);

        let end = a.lerp(b, 1.0);
        assert_abs_diff_eq!(end, -b, epsilon = EPSILON);
        assert_abs_diff_eq!(end.dot(b).abs(), 1.0, epsilon = EPSILON);

        let v = Vec3::new(1.0, 0.5, -2.0);
        assert_abs_diff_eq!(end * v, b * v, epsilon = EPSILON);
    }

    #[test]
    fn basis_of_rotation_recovers_it() {
        let q = Quat::from_euler(Vec3::new(-35.0, 120.0, 15.0));
        let rebuilt = Quat::from_basis(q * Vec3::RIGHT, q * Vec3::UP, q * Vec3::new(0.0, 0.0, 1.0));
        assert_abs_diff_eq!(rebuilt.dot(q).abs(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn matrix_agrees_with_rotate() {
        let q = Quat::from_euler(Vec3::new(15.0, 70.0, -30.0));
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_abs_diff_eq!(q.to_matrix().transform_direction(v), q * v, epsilon = EPSILON);
    }
}
