//! Geometric functions (GLSL 4.60 section 8.5).
//!
//! These forward to the methods of the same name on [`Vector`].

use crate::{Arithmetic, Number, Sqrt, Vector};

/// Returns the length of `x`.
pub fn length<T: Arithmetic + Sqrt, const N: usize>(x: Vector<T, N>) -> T {
    x.length()
}

/// Returns the distance between the points `p0` and `p1`.
pub fn distance<T: Arithmetic + Sqrt, const N: usize>(p0: Vector<T, N>, p1: Vector<T, N>) -> T {
    p0.distance(p1)
}

/// Returns the dot product of `x` and `y`.
pub fn dot<T: Arithmetic, const N: usize>(x: Vector<T, N>, y: Vector<T, N>) -> T {
    x.dot(y)
}

/// Returns the cross product of `x` and `y`.
pub fn cross<T: Arithmetic>(x: Vector<T, 3>, y: Vector<T, 3>) -> Vector<T, 3> {
    x.cross(y)
}

/// Returns a vector in the same direction as `x`, with length 1.
pub fn normalize<T: Arithmetic + Sqrt, const N: usize>(x: Vector<T, N>) -> Vector<T, N> {
    x.normalize()
}

/// Returns `n` if `nref` and `i` point in opposite directions, `-n` otherwise.
pub fn faceforward<T, const N: usize>(
    n: Vector<T, N>,
    i: Vector<T, N>,
    nref: Vector<T, N>,
) -> Vector<T, N>
where
    T: Number + PartialOrd,
{
    n.faceforward(i, nref)
}

/// Returns the reflection of the incident vector `i` at a surface with normal `n`.
pub fn reflect<T: Arithmetic, const N: usize>(i: Vector<T, N>, n: Vector<T, N>) -> Vector<T, N> {
    i.reflect(n)
}

/// Returns the refraction of the incident vector `i` at a surface with normal `n`, with the ratio
/// of indices of refraction `eta`.
///
/// `i` and `n` should be normalized. Total internal reflection results in a zero vector.
pub fn refract<T, const N: usize>(i: Vector<T, N>, n: Vector<T, N>, eta: T) -> Vector<T, N>
where
    T: Arithmetic + Sqrt + PartialOrd,
{
    i.refract(n, eta)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{vec2, vec3, Vec2f, Vec3f};

    use super::*;

    #[test]
    fn metrics() {
        assert_eq!(length(vec2(3.0, 4.0)), 5.0);
        assert_eq!(distance(vec3(1, 1, 1), vec3(1, 4, 5)), 5);
        assert_eq!(dot(vec3(1, 2, 3), vec3(4, 5, 6)), 32);
        assert_eq!(cross(Vec3f::X, Vec3f::Y), Vec3f::Z);
        assert_eq!(cross(Vec3f::Y, Vec3f::X), -Vec3f::Z);
        assert_relative_eq!(length(normalize(vec3(1.0f32, -2.0, 7.5))), 1.0);
    }

    #[test]
    fn cross_is_orthogonal() {
        let mut rng = fastrand::Rng::with_seed(0x7e57);
        for _ in 0..100 {
            let a = Vec3f::from_fn(|_| rng.f32() * 2.0 - 1.0);
            let b = Vec3f::from_fn(|_| rng.f32() * 2.0 - 1.0);
            let c = cross(a, b);
            assert_relative_eq!(dot(a, c), 0.0, epsilon = 1e-5);
            assert_relative_eq!(dot(b, c), 0.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn reflection_refraction() {
        let i = vec2(1.0f32, -1.0).normalize();
        assert_relative_eq!(reflect(i, Vec2f::Y), vec2(1.0, 1.0).normalize());
        assert_eq!(faceforward(Vec2f::Y, i, Vec2f::Y), Vec2f::Y);
        assert_eq!(faceforward(Vec2f::Y, -i, Vec2f::Y), -Vec2f::Y);

        // Entering a denser medium bends towards the normal.
        let r = refract(i, Vec2f::Y, 0.5);
        assert_relative_eq!(r.length(), 1.0, epsilon = 1e-6);
        assert!(r.x.abs() < i.x.abs());
        // Grazing angle from a denser medium: total internal reflection.
        let grazing = vec2(1.0f32, -0.1).normalize();
        assert_eq!(refract(grazing, Vec2f::Y, 1.5), Vec2f::ZERO);
    }
}
