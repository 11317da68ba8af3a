//! 3D homogeneous transforms on top of GLSL-style vectors and matrices.
//!
//! This crate re-exports everything from [`transform_linalg`], and adds functions that build
//! 4x4 homogeneous transformation matrices: translations, rotations, scaling, shearing, camera
//! and Euler transforms.
//!
//! Transforms operate on column vectors, so the transform that is applied first goes on the
//! right: `translate(t) * rotate_y(a) * scale_uniform(s)` scales first, then rotates, then
//! translates.
//!
//! ```
//! use std::f32::consts::FRAC_PI_2;
//! use approx::assert_relative_eq;
//! use transform::*;
//!
//! let m = translate(vec3(0.0, 0.0, -5.0)) * rotate_y(FRAC_PI_2) * scale_uniform(2.0);
//! assert_relative_eq!(transform_point(&m, Vec3f::X), vec3(0.0, 0.0, -7.0), epsilon = 1e-6);
//! assert_relative_eq!(transform_vector(&m, Vec3f::X), vec3(0.0, 0.0, -2.0), epsilon = 1e-6);
//! ```

use log::LevelFilter;

mod basic;
mod special;

pub use basic::*;
pub use special::*;
pub use transform_linalg::*;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .filter(Some("transform_linalg"), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and the `transform` crates will log at *debug* level. The `RUST_LOG`
/// environment variable can be used to override this.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
