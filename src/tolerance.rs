//! [`approx`] comparisons for the kernel's value types.
//!
//! Each type compares component by component, so
//! `assert_abs_diff_eq!(a, b, epsilon = 1e-5)` passes when every component of
//! `a` is within `1e-5` of the matching component of `b`.

use approx::{AbsDiffEq, RelativeEq};

use crate::matrix::Matrix;
use crate::quat::Quat;
use crate::vector::{Vec2, Vec3, Vec4};

macro_rules! impl_approx {
    ($t:ty { $($f:ident),+ }) => {
        impl AbsDiffEq for $t {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                f32::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                $(self.$f.abs_diff_eq(&other.$f, epsilon))&&+
            }
        }

        impl RelativeEq for $t {
            fn default_max_relative() -> f32 {
                f32::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                $(self.$f.relative_eq(&other.$f, epsilon, max_relative))&&+
            }
        }
    };
}

impl_approx!(Vec2 { x, y });
impl_approx!(Vec3 { x, y, z });
impl_approx!(Vec4 { x, y, z, w });
impl_approx!(Quat { i, j, k, a });

impl AbsDiffEq for Matrix {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.row
            .iter()
            .zip(&other.row)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Matrix {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.row
            .iter()
            .zip(&other.row)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
