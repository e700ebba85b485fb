//! Rays and the intersection queries built on them.
//!
//! - [`Ray::intersect_plane`]: infinite plane given by a point and a normal
//! - [`Ray::intersect_sphere`]: sphere given by center and radius
//! - [`Ray::intersect_aabb`]: axis-aligned box given by its corners
//!
//! Every query returns the ray parameter `t` of the hit, measured in units of
//! the ray's direction. Turn it into a point with [`Ray::at`].
//!
//! # Example
//!
//! ```
//! use hoplite_spatial::{Ray, Vec3};
//!
//! let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::FORWARD);
//! let t = ray.intersect_plane(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0)).unwrap();
//! assert_eq!(t, 5.0);
//! assert_eq!(ray.at(t), Vec3::ZERO);
//! ```

use crate::error::{MathError, Result};
use crate::matrix::Matrix;
use crate::vector::Vec3;

/// A half-line with an origin and a direction.
///
/// The direction is stored as given. It does not need to be unit length, but
/// its length sets the units of every `t` the queries return.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    #[inline]
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Creates a picking ray from a screen position.
    ///
    /// `screen_x`/`screen_y` are pixels from the top-left corner and
    /// `view_projection` is `view * projection` (see
    /// [`Camera::view_projection`](crate::Camera::view_projection)). The ray
    /// starts on the near plane and has a unit direction.
    ///
    /// # Errors
    ///
    /// [`MathError::DegenerateViewport`] for a viewport without area and
    /// [`MathError::SingularMatrix`] if `view_projection` cannot be inverted.
    pub fn from_screen(
        screen_x: f32,
        screen_y: f32,
        screen_width: f32,
        screen_height: f32,
        view_projection: Matrix,
    ) -> Result<Self> {
        if !(screen_width > 0.0 && screen_height > 0.0) {
            return Err(MathError::DegenerateViewport {
                width: screen_width,
                height: screen_height,
            });
        }

        // Screen to normalized device coordinates, Y flipped.
        let ndc_x = (2.0 * screen_x / screen_width) - 1.0;
        let ndc_y = 1.0 - (2.0 * screen_y / screen_height);

        let inv_view_proj = view_projection.inverse()?;
        let near = inv_view_proj.transform_point(Vec3::new(ndc_x, ndc_y, 0.0));
        let far = inv_view_proj.transform_point(Vec3::new(ndc_x, ndc_y, 1.0));

        Ok(Self {
            origin: near,
            direction: (far - near).normalize_or_zero(),
        })
    }

    /// The point `origin + direction * t`.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Intersects the infinite plane through `plane_point` with normal `plane_normal`.
    ///
    /// Returns `None` when the ray runs parallel to the plane. Parallelism is
    /// judged relative to the lengths of the direction and the normal, so a
    /// short direction or normal still hits. Hits behind the origin are
    /// reported with a negative `t`; check the sign if only forward hits count.
    pub fn intersect_plane(&self, plane_point: Vec3, plane_normal: Vec3) -> Option<f32> {
        let denom = self.direction.dot(plane_normal);
        let tolerance = f32::EPSILON * self.direction.magnitude() * plane_normal.magnitude();
        if denom.abs() <= tolerance {
            return None;
        }
        Some((plane_point - self.origin).dot(plane_normal) / denom)
    }

    /// Like [`Ray::intersect_plane`], returning the hit point instead of `t`.
    pub fn intersect_plane_point(&self, plane_point: Vec3, plane_normal: Vec3) -> Option<Vec3> {
        self.intersect_plane(plane_point, plane_normal).map(|t| self.at(t))
    }

    /// Intersects a sphere.
    ///
    /// Returns the nearest hit in front of the origin. If the origin is inside
    /// the sphere that is the exit point.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let a = self.direction.magnitude_sq();
        let half_b = oc.dot(self.direction);
        let c = oc.magnitude_sq() - radius * radius;
        let discriminant = half_b * half_b - a * c;

        if a == 0.0 || discriminant < 0.0 {
            return None;
        }

        let sqrt_disc = discriminant.sqrt();
        let near = (-half_b - sqrt_disc) / a;
        let far = (-half_b + sqrt_disc) / a;

        if near > 0.0 {
            Some(near)
        } else if far > 0.0 {
            Some(far)
        } else {
            None
        }
    }

    /// Intersects the axis-aligned box spanning `min` to `max` (slab test).
    ///
    /// Returns the nearest hit in front of the origin, or `None`.
    pub fn intersect_aabb(&self, min: Vec3, max: Vec3) -> Option<f32> {
        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;

        let axes = [
            (self.origin.x, self.direction.x, min.x, max.x),
            (self.origin.y, self.direction.y, min.y, max.y),
            (self.origin.z, self.direction.z, min.z, max.z),
        ];
        for (origin, dir, lo, hi) in axes {
            if dir.abs() < f32::EPSILON {
                if origin < lo || origin > hi {
                    return None;
                }
                continue;
            }
            let inv_dir = 1.0 / dir;
            let (t1, t2) = ((lo - origin) * inv_dir, (hi - origin) * inv_dir);
            t_min = t_min.max(t1.min(t2));
            t_max = t_max.min(t1.max(t2));
            if t_min > t_max {
                return None;
            }
        }

        if t_min > 0.0 {
            Some(t_min)
        } else if t_max > 0.0 {
            Some(t_max)
        } else {
            None
        }
    }
}
