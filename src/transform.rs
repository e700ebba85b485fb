//! Position, scale and rotation with a lazily rebuilt world matrix.
//!
//! [`CachedTransform`] is the placement type that renderables, solids and
//! cameras carry around. Setters only record the new value and mark the
//! transform dirty; the matrix is rebuilt the next time something asks for it.
//! Reading the matrix several times in a frame therefore costs one rebuild.
//!
//! ```
//! use hoplite_spatial::{CachedTransform, Vec3};
//! use approx::assert_abs_diff_eq;
//!
//! let mut transform = CachedTransform::new()
//!     .with_position(Vec3::new(1.0, 0.0, 0.0))
//!     .with_scale(Vec3::splat(2.0));
//!
//! let world = transform.local_to_world(Vec3::new(0.0, 1.0, 0.0));
//! assert_abs_diff_eq!(world, Vec3::new(1.0, 2.0, 0.0), epsilon = 1e-6);
//! assert_abs_diff_eq!(transform.world_to_local(world), Vec3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
//! ```
//!
//! The transform is flat: position, scale and rotation are relative to the
//! world, never to a parent.

use crate::error::Result;
use crate::matrix::Matrix;
use crate::pose::Pose;
use crate::quat::Quat;
use crate::vector::Vec3;

/// Position, scale and rotation plus a memoized world matrix.
///
/// # Invariant
///
/// While [`CachedTransform::is_dirty`] is `false`, the cached matrix equals
/// `Matrix::trs(position, rotation, scale)`. Every setter raises the flag and
/// every accessor that needs the matrix clears it by rebuilding first. The
/// inverse used by the `world_to_local*` family is cached too and is dropped
/// whenever the matrix is rebuilt.
///
/// Accessors that may rebuild take `&mut self`; share a transform across
/// threads only behind your own synchronization.
///
/// Equality compares position, scale and rotation only. Whether the matrix
/// has been built yet does not matter.
#[derive(Clone, Copy, Debug)]
pub struct CachedTransform {
    position: Vec3,
    scale: Vec3,
    rotation: Quat,
    dirty: bool,
    matrix: Matrix,
    // `None` until requested after the last rebuild.
    inverse: Option<Result<Matrix>>,
}

impl Default for CachedTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            rotation: Quat::IDENTITY,
            dirty: true,
            matrix: Matrix::IDENTITY,
            inverse: None,
        }
    }
}

impl CachedTransform {
    /// Creates an identity transform (origin, no rotation, unit scale).
    ///
    /// The transform starts dirty, so the first matrix read builds it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transform from all three components at once.
    pub fn from_parts(position: Vec3, scale: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            scale,
            rotation,
            ..Self::default()
        }
    }

    /// Resets to the identity transform and marks it dirty.
    pub fn initialize(&mut self) {
        *self = Self::default();
    }

    /// Builder form of [`CachedTransform::set_position`].
    ///
    /// # Example
    ///
    /// ```
    /// use hoplite_spatial::{CachedTransform, Quat, Vec3};
    ///
    /// let transform = CachedTransform::new()
    ///     .with_position(Vec3::new(0.0, 2.0, -5.0))
    ///     .with_rotation(Quat::from_euler(Vec3::new(0.0, 45.0, 0.0)))
    ///     .with_scale(Vec3::splat(2.0));
    /// assert!(transform.is_dirty());
    /// ```
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.set_position(position);
        self
    }

    /// Builder form of [`CachedTransform::set_scale`].
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.set_scale(scale);
        self
    }

    /// Builder form of [`CachedTransform::set_rotation`].
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.set_rotation(rotation);
        self
    }

    /// Replaces position, scale and rotation together.
    pub fn set(&mut self, position: Vec3, scale: Vec3, rotation: Quat) {
        self.position = position;
        self.scale = scale;
        self.rotation = rotation;
        self.dirty = true;
    }

    /// Moves the transform. The matrix is rebuilt on the next read.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.dirty = true;
    }

    /// Sets the per-axis scale. A zero component makes the transform
    /// non-invertible.
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
        self.dirty = true;
    }

    /// Sets the orientation.
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
        self.dirty = true;
    }

    /// Copies a rigid pose in, keeping the current scale.
    ///
    /// Physics bridging calls this once per step with the body's pose.
    pub fn set_pose(&mut self, pose: Pose) {
        self.position = pose.position;
        self.rotation = pose.orientation;
        self.dirty = true;
    }

    /// World-space position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Per-axis scale.
    #[inline]
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Current orientation, exactly as last set.
    #[inline]
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// The position and rotation as a [`Pose`], dropping scale.
    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.rotation)
    }

    /// `true` when a component changed since the matrix was last built.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Turns the transform so its forward axis points at `at`.
    ///
    /// If `at` equals the current position the rotation becomes identity.
    pub fn look_at(&mut self, at: Vec3) {
        self.set_rotation(Quat::look_at(self.position, at));
    }

    /// The world-space direction this transform faces.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::FORWARD
    }

    /// Rebuilds the matrix if a component changed since the last rebuild.
    pub fn update(&mut self) {
        if !self.dirty {
            return;
        }
        self.matrix = Matrix::trs(self.position, self.rotation, self.scale);
        self.inverse = None;
        self.dirty = false;
        tracing::trace!(position = ?self.position, scale = ?self.scale, "rebuilt transform matrix");
    }

    /// The local-to-world matrix, rebuilt first if needed.
    pub fn matrix(&mut self) -> Matrix {
        self.update();
        self.matrix
    }

    /// The world-to-local matrix.
    ///
    /// Fails with [`MathError::SingularMatrix`](crate::MathError::SingularMatrix)
    /// when a scale component is zero.
    pub fn inverse_matrix(&mut self) -> Result<Matrix> {
        self.update();
        if let Some(inverse) = self.inverse {
            return inverse;
        }
        let inverse = self.matrix.inverse();
        if let Err(err) = &inverse {
            tracing::warn!(scale = ?self.scale, %err, "transform has no inverse");
        }
        self.inverse = Some(inverse);
        inverse
    }

    // Singular transforms yield NaN.
    fn inverse_or_nan(&mut self) -> Matrix {
        self.inverse_matrix().unwrap_or(Matrix::NAN)
    }

    /// Local point to world space.
    pub fn local_to_world(&mut self, local: Vec3) -> Vec3 {
        self.matrix().transform_point(local)
    }

    /// World point to local space.
    ///
    /// A transform with zero scale has no inverse; the result is then NaN.
    /// Use [`CachedTransform::try_world_to_local`] to get the error instead.
    pub fn world_to_local(&mut self, world: Vec3) -> Vec3 {
        self.inverse_or_nan().transform_point(world)
    }

    /// Like [`CachedTransform::world_to_local`], but reports a singular transform.
    pub fn try_world_to_local(&mut self, world: Vec3) -> Result<Vec3> {
        Ok(self.inverse_matrix()?.transform_point(world))
    }

    /// Local direction to world space. Translation is ignored; scale is not.
    pub fn local_to_world_dir(&mut self, local: Vec3) -> Vec3 {
        self.matrix().transform_direction(local)
    }

    /// World direction to local space. Translation is ignored; scale is not.
    pub fn world_to_local_dir(&mut self, world: Vec3) -> Vec3 {
        self.inverse_or_nan().transform_direction(world)
    }
}

impl PartialEq for CachedTransform {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
            && self.scale == other.scale
            && self.rotation == other.rotation
    }
}

impl From<Pose> for CachedTransform {
    fn from(pose: Pose) -> Self {
        Self::from_parts(pose.position, Vec3::ONE, pose.orientation)
    }
}
