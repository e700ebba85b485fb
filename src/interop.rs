//! Conversions to and from [`glam`] types.
//!
//! Vectors and quaternions map field for field. Matrices need a transpose in
//! spirit: [`Matrix`] uses row vectors while glam multiplies column vectors, so
//! row `n` of a `Matrix` becomes column `n` of a [`glam::Mat4`]. After the
//! conversion both libraries transform points the same way.
//!
//! [`Matrix`] and [`Quat`] lean on these conversions internally: rotation
//! matrices, composition, inversion and projection are computed by glam.

use crate::matrix::Matrix;
use crate::quat::Quat;
use crate::vector::{Vec2, Vec3, Vec4};

impl From<glam::Vec2> for Vec2 {
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vec2> for glam::Vec2 {
    fn from(v: Vec2) -> Self {
        glam::Vec2::new(v.x, v.y)
    }
}

impl From<glam::Vec3> for Vec3 {
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for glam::Vec3 {
    fn from(v: Vec3) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

impl From<glam::Vec4> for Vec4 {
    fn from(v: glam::Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vec4> for glam::Vec4 {
    fn from(v: Vec4) -> Self {
        glam::Vec4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<glam::Quat> for Quat {
    fn from(q: glam::Quat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

impl From<Quat> for glam::Quat {
    fn from(q: Quat) -> Self {
        glam::Quat::from_xyzw(q.i, q.j, q.k, q.a)
    }
}

impl From<glam::Mat4> for Matrix {
    fn from(m: glam::Mat4) -> Self {
        Self::from_rows(
            m.x_axis.into(),
            m.y_axis.into(),
            m.z_axis.into(),
            m.w_axis.into(),
        )
    }
}

impl From<Matrix> for glam::Mat4 {
    fn from(m: Matrix) -> Self {
        glam::Mat4::from_cols(
            m.row[0].into(),
            m.row[1].into(),
            m.row[2].into(),
            m.row[3].into(),
        )
    }
}
