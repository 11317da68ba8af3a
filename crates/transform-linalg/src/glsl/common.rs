//! Common functions (GLSL 4.60 section 8.3).

use crate::{Arithmetic, Float, MinMax, Modulo, Sign, Vector};

use super::Broadcast;

/// Element-wise absolute value.
pub fn abs<T: Sign, const N: usize>(x: Vector<T, N>) -> Vector<T, N> {
    x.map(T::abs)
}

/// Element-wise sign: `1` for positive elements, `-1` for negative elements, `0` for zero.
///
/// ```
/// # use transform_linalg::{*, glsl::sign};
/// assert_eq!(sign(vec3(-2.5, 0.0, 7.0)), vec3(-1.0, 0.0, 1.0));
/// assert_eq!(sign(vec2(0u8, 9)), vec2(0, 1));
/// ```
pub fn sign<T: Sign, const N: usize>(x: Vector<T, N>) -> Vector<T, N> {
    x.map(T::sign)
}

/// Rounds every element towards negative infinity.
pub fn floor<T: Float, const N: usize>(x: Vector<T, N>) -> Vector<T, N> {
    x.map(T::floor)
}

/// Rounds every element towards zero.
pub fn trunc<T: Float, const N: usize>(x: Vector<T, N>) -> Vector<T, N> {
    x.map(T::trunc)
}

/// Rounds every element to the nearest integer, rounding half-way cases away from zero.
pub fn round<T: Float, const N: usize>(x: Vector<T, N>) -> Vector<T, N> {
    x.map(T::round)
}

/// Rounds every element to the nearest integer, rounding half-way cases to the nearest even
/// integer.
///
/// ```
/// # use transform_linalg::{*, glsl::round_even};
/// assert_eq!(round_even(vec4(0.5, 1.5, 2.5, -2.5)), vec4(0.0, 2.0, 2.0, -2.0));
/// ```
pub fn round_even<T: Float, const N: usize>(x: Vector<T, N>) -> Vector<T, N> {
    x.map(T::round_even)
}

/// Rounds every element towards positive infinity.
pub fn ceil<T: Float, const N: usize>(x: Vector<T, N>) -> Vector<T, N> {
    x.map(T::ceil)
}

/// Returns the fractional part `x - floor(x)` of every element.
pub fn fract<T: Float, const N: usize>(x: Vector<T, N>) -> Vector<T, N> {
    x.map(T::fract)
}

/// Element-wise modulus, GLSL's `mod`.
///
/// For floating-point types, this computes `x - y * floor(x / y)`, so the result has the sign of
/// `y`. Integers use the `%` operator.
///
/// ```
/// # use transform_linalg::{*, glsl::modulo};
/// assert_eq!(modulo(vec2(5.5f32, -1.0), 2.0), vec2(1.5, 1.0));
/// assert_eq!(modulo(vec2(7, 9), vec2(4, 3)), vec2(3, 0));
/// ```
pub fn modulo<T, const N: usize>(x: Vector<T, N>, y: impl Broadcast<T, N>) -> Vector<T, N>
where
    T: Modulo + Copy,
{
    x.zip(y.broadcast()).map(|(x, y)| x.modulo(y))
}

/// Element-wise minimum.
pub fn min<T, const N: usize>(x: Vector<T, N>, y: impl Broadcast<T, N>) -> Vector<T, N>
where
    T: MinMax + Copy,
{
    x.min(y.broadcast())
}

/// Element-wise maximum.
pub fn max<T, const N: usize>(x: Vector<T, N>, y: impl Broadcast<T, N>) -> Vector<T, N>
where
    T: MinMax + Copy,
{
    x.max(y.broadcast())
}

/// Clamps every element of `x` to the range `min_val..=max_val`.
pub fn clamp<T, const N: usize>(
    x: Vector<T, N>,
    min_val: impl Broadcast<T, N>,
    max_val: impl Broadcast<T, N>,
) -> Vector<T, N>
where
    T: MinMax + Copy,
{
    x.clamp(min_val.broadcast(), max_val.broadcast())
}

/// Linear blend of `x` and `y`, computed as `x * (1 - a) + y * a`.
///
/// Every element of `a` is expected to lie in `0..=1`; this is checked in debug builds only.
///
/// ```
/// # use transform_linalg::{*, glsl::mix};
/// let x = vec2(0.0f32, 10.0);
/// let y = vec2(1.0f32, 20.0);
/// assert_eq!(mix(x, y, 0.5), vec2(0.5, 15.0));
/// assert_eq!(mix(x, y, vec2(0.0, 1.0)), vec2(0.0, 20.0));
/// ```
#[track_caller]
pub fn mix<T, const N: usize>(
    x: Vector<T, N>,
    y: Vector<T, N>,
    a: impl Broadcast<T, N>,
) -> Vector<T, N>
where
    T: Arithmetic + PartialOrd,
{
    let a = a.broadcast();
    debug_assert!(
        a.iter().all(|a| *a >= T::ZERO && *a <= T::ONE),
        "`mix` blend factor must be in range 0..=1"
    );
    x * (Vector::splat(T::ONE) - a) + y * a
}

/// Returns `0` for every element of `x` that is less than `edge`, and `1` otherwise.
pub fn step<T, const N: usize>(edge: impl Broadcast<T, N>, x: impl Broadcast<T, N>) -> Vector<T, N>
where
    T: Arithmetic + PartialOrd,
{
    edge.broadcast()
        .zip(x.broadcast())
        .map(|(edge, x)| if x < edge { T::ZERO } else { T::ONE })
}

/// Hermite interpolation between `0` and `1` for elements of `x` between `edge0` and `edge1`.
///
/// Elements at or below `edge0` result in `0`, elements at or above `edge1` result in `1`.
///
/// ```
/// # use transform_linalg::{*, glsl::smoothstep};
/// let x = vec4(-1.0f32, 0.0, 0.5, 2.0);
/// assert_eq!(smoothstep(0.0, 1.0, x), vec4(0.0, 0.0, 0.5, 1.0));
/// ```
pub fn smoothstep<T, const N: usize>(
    edge0: impl Broadcast<T, N>,
    edge1: impl Broadcast<T, N>,
    x: impl Broadcast<T, N>,
) -> Vector<T, N>
where
    T: Float,
{
    let (edge0, edge1, x) = (edge0.broadcast(), edge1.broadcast(), x.broadcast());
    let three = T::ONE + T::ONE + T::ONE;
    Vector::from_fn(|i| {
        let t = ((x[i] - edge0[i]) / (edge1[i] - edge0[i])).clamp(T::ZERO, T::ONE);
        t * t * (three - (T::ONE + T::ONE) * t)
    })
}
