use crate::matrix::Matrix;
use crate::quat::Quat;
use crate::vector::Vec3;

/// A rigid pose: a position and an orientation, with no scale.
///
/// Hand joints, pointers and simulated bodies report their placement as a
/// `Pose`. Convert it with [`Pose::to_matrix`] to draw something there, or
/// copy it into a [`CachedTransform`](crate::CachedTransform) with
/// [`CachedTransform::set_pose`](crate::CachedTransform::set_pose).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Pose {
    /// At the origin, facing [`Vec3::FORWARD`].
    pub const IDENTITY: Pose = Pose::new(Vec3::ZERO, Quat::IDENTITY);

    /// Creates a pose. `orientation` should be a unit quaternion.
    #[inline]
    pub const fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// The affine matrix for this pose, `trs(position, orientation, ONE)`.
    #[inline]
    pub fn to_matrix(&self) -> Matrix {
        Matrix::trs(self.position, self.orientation, Vec3::ONE)
    }

    /// Direction the pose is facing.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::FORWARD
    }
}
