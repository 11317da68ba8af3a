//! Exponential functions (GLSL 4.60 section 8.2).

use crate::{Float, Sqrt, Vector};

use super::Broadcast;

/// Raises every element of `x` to the power `y`.
///
/// Results are undefined (`NaN`) for negative `x`.
pub fn pow<T: Float, const N: usize>(x: Vector<T, N>, y: impl Broadcast<T, N>) -> Vector<T, N> {
    x.zip(y.broadcast()).map(|(x, y)| x.powf(y))
}

/// Element-wise natural exponentiation, *e<sup>x</sup>*.
pub fn exp<T: Float, const N: usize>(x: Vector<T, N>) -> Vector<T, N> {
    x.map(T::exp)
}

/// Element-wise natural logarithm.
pub fn log<T: Float, const N: usize>(x: Vector<T, N>) -> Vector<T, N> {
    x.map(T::ln)
}

/// Element-wise *2<sup>x</sup>*.
pub fn exp2<T: Float, const N: usize>(x: Vector<T, N>) -> Vector<T, N> {
    x.map(T::exp2)
}

/// Element-wise base 2 logarithm.
pub fn log2<T: Float, const N: usize>(x: Vector<T, N>) -> Vector<T, N> {
    x.map(T::log2)
}

/// Element-wise square root.
pub fn sqrt<T: Sqrt, const N: usize>(x: Vector<T, N>) -> Vector<T, N> {
    x.map(T::sqrt)
}

/// Element-wise reciprocal square root, `1 / sqrt(x)`.
///
/// ```
/// # use transform_linalg::{*, glsl::inversesqrt};
/// assert_eq!(inversesqrt(vec2(4.0, 0.25)), vec2(0.5, 2.0));
/// ```
pub fn inversesqrt<T: Float, const N: usize>(x: Vector<T, N>) -> Vector<T, N> {
    x.map(|x| T::ONE / x.sqrt())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{vec2, vec3, Vec3f};

    use super::*;

    #[test]
    fn exponentials() {
        let x = vec3(0.0f32, 1.0, 3.0);
        assert_relative_eq!(exp2(x), vec3(1.0, 2.0, 8.0));
        assert_relative_eq!(log2(exp2(x)), x);
        assert_relative_eq!(exp(x), vec3(1.0, std::f32::consts::E, 20.085537), epsilon = 1e-5);
        assert_relative_eq!(log(exp(x)), x, epsilon = 1e-6);
        assert_relative_eq!(pow(x, 2.0), vec3(0.0, 1.0, 9.0));
        assert_relative_eq!(pow(vec2(2.0f32, 9.0), vec2(3.0, 0.5)), vec2(8.0, 3.0));
    }

    #[test]
    fn roots() {
        assert_eq!(sqrt(vec3(0.0f64, 4.0, 2.25)), vec3(0.0, 2.0, 1.5));
        assert_eq!(sqrt(vec2(17u32, 16)), vec2(4, 4));
        assert_relative_eq!(inversesqrt(Vec3f::splat(16.0)), Vec3f::splat(0.25));
        assert!(inversesqrt(vec2(0.0f32, -1.0)).iter().all(|x| !x.is_finite()));
    }
}
