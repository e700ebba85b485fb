//! Angle and length conversion factors.
//!
//! Lengths in the kernel are meters and angles passed to trigonometric helpers
//! are radians, except where a function says otherwise (e.g.
//! [`Quat::from_euler`](crate::Quat::from_euler) takes degrees).

pub const DEG2RAD: f32 = std::f32::consts::PI / 180.0;
pub const RAD2DEG: f32 = 180.0 / std::f32::consts::PI;

pub const CM2M: f32 = 0.01;
pub const MM2M: f32 = 0.001;
pub const M2CM: f32 = 100.0;
pub const M2MM: f32 = 1000.0;

/// Centimeters to meters.
#[inline]
pub fn cm(centimeters: f32) -> f32 {
    centimeters * CM2M
}

/// Millimeters to meters.
#[inline]
pub fn mm(millimeters: f32) -> f32 {
    millimeters * MM2M
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn angle_factors_cancel() {
        assert_abs_diff_eq!(180.0 * DEG2RAD, std::f32::consts::PI, epsilon = 1e-6);
        assert_abs_diff_eq!(90.0 * DEG2RAD * RAD2DEG, 90.0, epsilon = 1e-4);
    }

    #[test]
    fn length_helpers() {
        assert_abs_diff_eq!(cm(150.0), 1.5, epsilon = 1e-6);
        assert_abs_diff_eq!(mm(25.0), 0.025, epsilon = 1e-6);
        assert_abs_diff_eq!(cm(1.0) * M2CM, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(mm(1.0) * M2MM, 1.0, epsilon = 1e-6);
    }
}
