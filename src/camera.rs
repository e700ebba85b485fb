use crate::error::Result;
use crate::matrix::Matrix;
use crate::transform::CachedTransform;

/// Lens settings for a perspective camera.
///
/// Where the camera sits is not part of this type; that is a
/// [`CachedTransform`] owned by whoever drives the camera. Rendering combines
/// the two through [`Camera::view`] and [`Camera::projection`].
///
/// # Example
///
/// ```
/// use hoplite_spatial::{CachedTransform, Camera, Vec3};
///
/// let camera = Camera::new(60.0, 0.1, 100.0);
/// let mut eye = CachedTransform::new().with_position(Vec3::new(0.0, 1.5, 3.0));
/// eye.look_at(Vec3::ZERO);
///
/// let view_proj = camera.view_projection(&mut eye, 16.0 / 9.0).unwrap();
/// ```
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Camera {
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Distance to the near clip plane, in meters.
    pub clip_near: f32,
    /// Distance to the far clip plane, in meters.
    pub clip_far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov: 90.0,
            clip_near: 0.01,
            clip_far: 50.0,
        }
    }
}

impl Camera {
    /// Creates a camera with a vertical field of view in degrees and the
    /// given clip distances.
    pub fn new(fov_degrees: f32, clip_near: f32, clip_far: f32) -> Self {
        Self {
            fov: fov_degrees,
            clip_near,
            clip_far,
        }
    }

    /// Sets the vertical field of view in degrees.
    pub fn with_fov(mut self, fov_degrees: f32) -> Self {
        self.fov = fov_degrees;
        self
    }

    /// Sets the near and far clip distances.
    ///
    /// Keep `clip_near` above zero; depth precision drops as it shrinks.
    pub fn with_clip(mut self, clip_near: f32, clip_far: f32) -> Self {
        self.clip_near = clip_near;
        self.clip_far = clip_far;
        self
    }

    /// World-to-camera matrix for a camera placed by `transform`.
    ///
    /// This is the transform's inverse, so it fails only for a transform with
    /// zero scale.
    pub fn view(transform: &mut CachedTransform) -> Result<Matrix> {
        transform.inverse_matrix()
    }

    /// Perspective projection for a viewport with the given width / height ratio.
    pub fn projection(&self, aspect: f32) -> Matrix {
        Matrix::perspective(self.fov.to_radians(), aspect, self.clip_near, self.clip_far)
    }

    /// `view * projection`, ready for [`Ray::from_screen`](crate::Ray::from_screen).
    pub fn view_projection(&self, transform: &mut CachedTransform, aspect: f32) -> Result<Matrix> {
        Ok(Self::view(transform)? * self.projection(aspect))
    }
}
