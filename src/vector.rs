//! 2D, 3D and 4D vectors.
//!
//! All three types are plain `#[repr(C)]` values that derive [`bytemuck::Pod`],
//! so slices of them can be uploaded to the GPU without conversion.
//!
//! Arithmetic follows the usual componentwise rules:
//!
//! ```
//! use hoplite_spatial::Vec3;
//!
//! let a = Vec3::new(1.0, 2.0, 3.0);
//! let b = Vec3::new(4.0, 5.0, 6.0);
//!
//! assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
//! assert_eq!(b * 2.0, Vec3::new(8.0, 10.0, 12.0));
//! assert_eq!(a.lerp(b, 0.5), Vec3::new(2.5, 3.5, 4.5));
//! ```
//!
//! # Degenerate input
//!
//! [`Vec3::normalize`] (and the 2D/4D versions) divide by the magnitude without
//! checking it, so a zero-length vector comes back as NaN. Use
//! `normalize_or_zero` when the input may be zero.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2D vector, mostly used for screen and texture coordinates.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// A 3D vector used for positions, directions and scale factors.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A 4D vector. Rows of a [`Matrix`](crate::Matrix) and homogeneous coordinates.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

macro_rules! impl_vector {
    ($t:ident { $($f:ident),+ }) => {
        impl $t {
            /// All components set to zero.
            pub const ZERO: $t = $t { $($f: 0.0),+ };
            /// All components set to one.
            pub const ONE: $t = $t { $($f: 1.0),+ };

            /// Creates a vector with every component set to `v`.
            #[inline]
            pub const fn splat(v: f32) -> Self {
                Self { $($f: v),+ }
            }

            /// Dot product. Zero for perpendicular vectors.
            #[inline]
            pub fn dot(self, rhs: Self) -> f32 {
                0.0 $(+ self.$f * rhs.$f)+
            }

            /// Squared length. Cheaper than [`Self::magnitude`] for comparisons.
            #[inline]
            pub fn magnitude_sq(self) -> f32 {
                self.dot(self)
            }

            /// Euclidean length.
            #[inline]
            pub fn magnitude(self) -> f32 {
                self.magnitude_sq().sqrt()
            }

            /// Scales the vector to unit length.
            ///
            /// Not guarded: a zero-length vector produces NaN components.
            #[inline]
            pub fn normalize(self) -> Self {
                self / self.magnitude()
            }

            /// Like [`Self::normalize`], but returns zero for zero-length input.
            pub fn normalize_or_zero(self) -> Self {
                let magnitude = self.magnitude();
                if magnitude > 0.0 {
                    self / magnitude
                } else {
                    Self::ZERO
                }
            }

            /// Linear interpolation `self + (other - self) * t`.
            ///
            /// `t` is not clamped, so values outside `[0, 1]` extrapolate.
            #[inline]
            pub fn lerp(self, other: Self, t: f32) -> Self {
                self + (other - self) * t
            }
        }

        impl Add for $t {
            type Output = $t;
            #[inline]
            fn add(self, rhs: $t) -> $t {
                $t { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl Sub for $t {
            type Output = $t;
            #[inline]
            fn sub(self, rhs: $t) -> $t {
                $t { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl Mul for $t {
            type Output = $t;
            #[inline]
            fn mul(self, rhs: $t) -> $t {
                $t { $($f: self.$f * rhs.$f),+ }
            }
        }

        impl Div for $t {
            type Output = $t;
            #[inline]
            fn div(self, rhs: $t) -> $t {
                $t { $($f: self.$f / rhs.$f),+ }
            }
        }

        impl Mul<f32> for $t {
            type Output = $t;
            #[inline]
            fn mul(self, rhs: f32) -> $t {
                $t { $($f: self.$f * rhs),+ }
            }
        }

        impl Mul<$t> for f32 {
            type Output = $t;
            #[inline]
            fn mul(self, rhs: $t) -> $t {
                rhs * self
            }
        }

        impl Div<f32> for $t {
            type Output = $t;
            #[inline]
            fn div(self, rhs: f32) -> $t {
                $t { $($f: self.$f / rhs),+ }
            }
        }

        impl Neg for $t {
            type Output = $t;
            #[inline]
            fn neg(self) -> $t {
                $t { $($f: -self.$f),+ }
            }
        }

        impl AddAssign for $t {
            #[inline]
            fn add_assign(&mut self, rhs: $t) {
                *self = *self + rhs;
            }
        }

        impl SubAssign for $t {
            #[inline]
            fn sub_assign(&mut self, rhs: $t) {
                *self = *self - rhs;
            }
        }

        impl MulAssign<f32> for $t {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                *self = *self * rhs;
            }
        }

        impl DivAssign<f32> for $t {
            #[inline]
            fn div_assign(&mut self, rhs: f32) {
                *self = *self / rhs;
            }
        }
    };
}

impl_vector!(Vec2 { x, y });
impl_vector!(Vec3 { x, y, z });
impl_vector!(Vec4 { x, y, z, w });

impl Vec2 {
    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Vec3 {
    /// World up, `+Y`.
    pub const UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    /// World forward, `-Z` (right-handed).
    pub const FORWARD: Vec3 = Vec3::new(0.0, 0.0, -1.0);
    /// World right, `+X`.
    pub const RIGHT: Vec3 = Vec3::new(1.0, 0.0, 0.0);

    /// Creates a vector from its components.
    ///
    /// # Example
    ///
    /// ```
    /// use hoplite_spatial::Vec3;
    ///
    /// const SPAWN: Vec3 = Vec3::new(0.0, 1.5, -4.0);
    /// assert_eq!(SPAWN.magnitude_sq(), 18.25);
    /// ```
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Right-handed cross product: `RIGHT.cross(UP)` points back along `+Z`.
    #[inline]
    pub fn cross(self, rhs: Vec3) -> Vec3 {
        Vec3::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    #[inline]
    pub fn distance(self, other: Vec3) -> f32 {
        (other - self).magnitude()
    }

    #[inline]
    pub fn distance_sq(self, other: Vec3) -> f32 {
        (other - self).magnitude_sq()
    }

    /// Appends a `w` component, e.g. `1.0` for points and `0.0` for directions.
    #[inline]
    pub const fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Vec4 {
    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Drops the `w` component.
    #[inline]
    pub const fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}
