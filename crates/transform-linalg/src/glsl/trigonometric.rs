//! Angle and trigonometry functions (GLSL 4.60 section 8.1).
//!
//! All angles are in radians.

use crate::{Float, Trig, Vector};

use super::Broadcast;

/// Converts every element from degrees to radians.
///
/// ```
/// # use transform_linalg::{*, glsl::radians};
/// use std::f32::consts::{FRAC_PI_2, PI};
/// approx::assert_relative_eq!(radians(vec2(180.0f32, 90.0)), vec2(PI, FRAC_PI_2), epsilon = 1e-6);
/// ```
pub fn radians<T: Float, const N: usize>(degrees: Vector<T, N>) -> Vector<T, N> {
    degrees * (T::PI / T::cast_from(180.0))
}

/// Converts every element from radians to degrees.
pub fn degrees<T: Float, const N: usize>(radians: Vector<T, N>) -> Vector<T, N> {
    radians * (T::cast_from(180.0) / T::PI)
}

macro_rules! elementwise {
    ($($(#[$attr:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$attr])*
            pub fn $name<T: Trig, const N: usize>(x: Vector<T, N>) -> Vector<T, N> {
                x.map(T::$name)
            }
        )+
    };
}

elementwise!(
    /// Element-wise sine.
    sin,
    /// Element-wise cosine.
    cos,
    /// Element-wise tangent.
    tan,
    /// Element-wise arc sine. Results are in range `-π/2..=π/2`.
    asin,
    /// Element-wise arc cosine. Results are in range `0..=π`.
    acos,
    /// Element-wise arc tangent. Results are in range `-π/2..=π/2`.
    atan,
    sinh,
    cosh,
    tanh,
    asinh,
    acosh,
    atanh,
);

/// Element-wise arc tangent of `y / x`, GLSL's 2-argument `atan`.
///
/// The signs of `x` and `y` determine the quadrant, so results are in range `-π..=π`.
pub fn atan2<T, const N: usize>(y: Vector<T, N>, x: impl Broadcast<T, N>) -> Vector<T, N>
where
    T: Trig + Copy,
{
    y.zip(x.broadcast()).map(|(y, x)| y.atan2(x))
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use approx::assert_relative_eq;

    use crate::{vec2, vec3, vec4, Vec3f};

    use super::*;

    #[test]
    fn angle_conversion() {
        let deg = vec4(0.0f32, 45.0, -90.0, 360.0);
        let rad = radians(deg);
        assert_relative_eq!(rad, vec4(0.0, FRAC_PI_4, -FRAC_PI_2, 2.0 * PI), epsilon = 1e-6);
        assert_relative_eq!(degrees(rad), deg, epsilon = 1e-4);
    }

    #[test]
    fn trig() {
        let x = vec3(0.0f32, FRAC_PI_2, PI);
        assert_relative_eq!(sin(x), vec3(0.0, 1.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(cos(x), vec3(1.0, 0.0, -1.0), epsilon = 1e-6);
        assert_relative_eq!(asin(sin(vec2(0.25f32, -0.5))), vec2(0.25, -0.5), epsilon = 1e-6);
        assert_relative_eq!(atan(tan(vec2(0.25f32, -0.5))), vec2(0.25, -0.5), epsilon = 1e-6);
        assert_relative_eq!(tanh(Vec3f::ZERO), Vec3f::ZERO);
        assert_relative_eq!(acosh(cosh(vec2(0.5f32, 2.0))), vec2(0.5, 2.0), epsilon = 1e-5);
    }

    #[test]
    fn quadrants() {
        let y = vec4(1.0f32, 1.0, -1.0, -1.0);
        let x = vec4(1.0f32, -1.0, -1.0, 1.0);
        assert_relative_eq!(
            atan2(y, x),
            vec4(FRAC_PI_4, 3.0 * FRAC_PI_4, -3.0 * FRAC_PI_4, -FRAC_PI_4),
            epsilon = 1e-6
        );
        assert_relative_eq!(atan2(vec2(1.0f32, 0.0), 0.0), vec2(FRAC_PI_2, 0.0));
    }
}
