//! # Hoplite Spatial
//!
//! **The spatial math every frame runs on.**
//!
//! Vectors, quaternions and matrices, rigid poses, a world transform that only
//! rebuilds its matrix when something changed, and the ray queries used for
//! picking. Renderers, physics bridges and input code place and query objects
//! through these types; this crate does no I/O and holds no global state.
//!
//! ## Quick Start
//!
//! ```
//! use hoplite_spatial::*;
//! use approx::assert_abs_diff_eq;
//!
//! let mut cube = CachedTransform::new()
//!     .with_position(Vec3::new(0.0, 0.0, -5.0))
//!     .with_rotation(Quat::from_euler(Vec3::new(0.0, 45.0, 0.0)));
//!
//! // Built once, then served from the cache until the next setter call.
//! let model = cube.matrix();
//! assert_eq!(model, cube.matrix());
//!
//! // Where does a ray from the origin hit the cube's front plane?
//! let ray = Ray::new(Vec3::ZERO, Vec3::FORWARD);
//! let hit = ray.intersect_plane(cube.position(), cube.forward()).unwrap();
//! assert_abs_diff_eq!(ray.at(hit), Vec3::new(0.0, 0.0, -5.0), epsilon = 1e-5);
//! ```
//!
//! ## Conventions
//!
//! - **Right-handed**, with [`Vec3::UP`] = `+Y`, [`Vec3::RIGHT`] = `+X` and
//!   [`Vec3::FORWARD`] = `-Z`.
//! - **Row vectors.** [`Matrix`] is row-major, points multiply on the left and
//!   `a * b` applies `a` first. [`Matrix::trs`] scales, then rotates, then
//!   translates.
//! - **Quaternions** compose right to left: `a * b` rotates by `b`, then `a`.
//! - **Euler angles** are degrees `(pitch, yaw, roll)`, applied roll → pitch → yaw.
//! - **Projection** depth runs from 0 at the near plane to 1 at the far plane.
//!
//! ## Failure
//!
//! Normalizing a zero vector yields NaN, as plain float math would. Matrix
//! inversion and screen-ray construction return [`MathError`]; ray queries
//! return `Option`.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the value types.
//!
//! All value types are `#[repr(C)]` and [`bytemuck::Pod`] (except
//! [`CachedTransform`]), convert to and from [`glam`], and implement
//! [`approx`] comparisons.

mod camera;
mod error;
mod interop;
mod matrix;
mod pose;
mod quat;
mod ray;
mod tolerance;
mod transform;
pub mod units;
mod vector;

pub use camera::Camera;
pub use error::{MathError, Result};
pub use matrix::Matrix;
pub use pose::Pose;
pub use quat::Quat;
pub use ray::Ray;
pub use transform::CachedTransform;
pub use vector::{Vec2, Vec3, Vec4};

// Re-exported so callers can convert without adding glam themselves
pub use glam;
