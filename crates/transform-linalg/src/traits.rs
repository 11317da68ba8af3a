//! Scalar traits that the vector and matrix types are generic over.
//!
//! Every elementwise function of this crate is first defined on scalars through one of these
//! traits, then lifted to [`Vector`][crate::Vector] componentwise.

use std::ops;

/// Additive identity.
pub trait Zero {
    /// `x + ZERO == x` for every `x`.
    const ZERO: Self;
}

/// Multiplicative identity.
pub trait One {
    /// `x * ONE == x` for every `x`.
    const ONE: Self;
}

/// Types that support the four basic arithmetic operations, including unsigned integers.
pub trait Arithmetic:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Arithmetic for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// A trait for signed numeric types that support basic arithmetic operations.
///
/// Cofactors and determinants require negation, so they are only available for [`Number`]s.
pub trait Number: Arithmetic + ops::Neg<Output = Self> {}
impl<T> Number for T where T: Arithmetic + ops::Neg<Output = Self> {}

/// Smaller and larger of two values.
///
/// Floats forward to their inherent `min`/`max`, which ignore a `NaN` operand. Integers use
/// [`Ord`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Circular and hyperbolic functions. Angles are in radians.
pub trait Trig {
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    /// Computes the arc tangent of `self / other`, using the signs of both to pick the quadrant.
    fn atan2(self, other: Self) -> Self;
    fn sinh(self) -> Self;
    fn cosh(self) -> Self;
    fn tanh(self) -> Self;
    fn asinh(self) -> Self;
    fn acosh(self) -> Self;
    fn atanh(self) -> Self;
}

/// Square root.
///
/// Integers take the root in [`f64`] and truncate it.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Absolute value and sign extraction.
pub trait Sign {
    /// Returns `self` if it is non-negative, `-self` otherwise.
    fn abs(self) -> Self;
    /// Returns 1 if `self > 0`, 0 if `self == 0`, and -1 if `self < 0`.
    ///
    /// Unlike [`f32::signum`], zero maps to zero.
    fn sign(self) -> Self;
}

/// The GLSL `mod` operation.
///
/// For floating-point types, this is `x - y * floor(x / y)`, so the result takes the sign of the
/// divisor. Integer types use the `%` operator.
pub trait Modulo {
    fn modulo(self, divisor: Self) -> Self;
}

/// Floating-point types.
pub trait Float:
    Number + MinMax + Trig + Sqrt + Sign + Modulo + PartialOrd + CastFrom<f64>
{
    /// Archimedes' constant (π).
    const PI: Self;

    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn trunc(self) -> Self;
    /// Rounds half-way cases away from zero.
    fn round(self) -> Self;
    /// Rounds half-way cases to the nearest even integer.
    fn round_even(self) -> Self;
    /// Returns `self - self.floor()`.
    ///
    /// This differs from [`f32::fract`] for negative numbers.
    fn fract(self) -> Self;
    fn powf(self, exp: Self) -> Self;
    fn exp(self) -> Self;
    fn exp2(self) -> Self;
    /// Natural logarithm.
    fn ln(self) -> Self;
    fn log2(self) -> Self;
}

/// Lossy conversion between primitive types, analogous to an `as` cast.
///
/// Conversions to [`bool`] compare against zero, conversions from [`bool`] produce 0 or 1.
pub trait CastFrom<T> {
    fn cast_from(value: T) -> Self;
}

macro_rules! impl_zero_one {
    ($zero:literal, $one:literal; $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }
            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
impl_zero_one!(0, 1; u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_zero_one!(0.0, 1.0; f32, f64);

macro_rules! impl_int {
    (unsigned: $($types:ty),+) => {
        $(
            impl Sign for $types {
                #[inline]
                fn abs(self) -> Self {
                    self
                }

                #[inline]
                fn sign(self) -> Self {
                    (self > 0) as Self
                }
            }
        )+
        impl_int!($($types),+);
    };
    (signed: $($types:ty),+) => {
        $(
            impl Sign for $types {
                #[inline]
                fn abs(self) -> Self {
                    self.abs()
                }

                #[inline]
                fn sign(self) -> Self {
                    self.signum()
                }
            }
        )+
        impl_int!($($types),+);
    };
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                #[inline]
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                #[inline]
                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }

            impl Sqrt for $types {
                #[inline]
                fn sqrt(self) -> Self {
                    (self as f64).sqrt() as Self
                }
            }

            impl Modulo for $types {
                #[inline]
                fn modulo(self, divisor: Self) -> Self {
                    self % divisor
                }
            }
        )+
    };
}
impl_int!(unsigned: u8, u16, u32, u64, u128, usize);
impl_int!(signed: i8, i16, i32, i64, i128, isize);

macro_rules! forward {
    ($($method:ident),+) => {
        $(
            #[inline]
            fn $method(self) -> Self {
                self.$method()
            }
        )+
    };
}

macro_rules! impl_float {
    ($($types:ident),+) => {
        $(
            impl MinMax for $types {
                #[inline]
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                #[inline]
                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }

            impl Trig for $types {
                forward!(sin, cos, tan, asin, acos, atan, sinh, cosh, tanh, asinh, acosh, atanh);

                #[inline]
                fn atan2(self, other: Self) -> Self {
                    self.atan2(other)
                }
            }

            impl Sqrt for $types {
                forward!(sqrt);
            }

            impl Sign for $types {
                forward!(abs);

                #[inline]
                fn sign(self) -> Self {
                    if self > 0.0 {
                        1.0
                    } else if self < 0.0 {
                        -1.0
                    } else {
                        self
                    }
                }
            }

            impl Modulo for $types {
                #[inline]
                fn modulo(self, divisor: Self) -> Self {
                    self - divisor * (self / divisor).floor()
                }
            }

            impl Float for $types {
                const PI: Self = std::$types::consts::PI;

                forward!(floor, ceil, trunc, round, exp, exp2, log2);

                fn round_even(self) -> Self {
                    if (self - self.trunc()).abs() == 0.5 {
                        2.0 * (self / 2.0).round()
                    } else {
                        self.round()
                    }
                }

                #[inline]
                fn fract(self) -> Self {
                    self - self.floor()
                }

                #[inline]
                fn powf(self, exp: Self) -> Self {
                    self.powf(exp)
                }

                #[inline]
                fn ln(self) -> Self {
                    self.ln()
                }
            }
        )+
    };
}
impl_float!(f32, f64);

macro_rules! impl_cast {
    (@from $from:ty => $($to:ty),+) => {
        $(
            impl CastFrom<$from> for $to {
                #[inline]
                fn cast_from(value: $from) -> Self {
                    value as $to
                }
            }
        )+
    };
    ($($from:ty),+) => {
        $(
            impl_cast!(@from $from => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

            impl CastFrom<$from> for bool {
                #[inline]
                fn cast_from(value: $from) -> Self {
                    value != <$from as Zero>::ZERO
                }
            }

            impl CastFrom<bool> for $from {
                #[inline]
                fn cast_from(value: bool) -> Self {
                    u8::from(value) as $from
                }
            }
        )+
    };
}
impl_cast!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl CastFrom<bool> for bool {
    #[inline]
    fn cast_from(value: bool) -> Self {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign() {
        assert_eq!(Sign::sign(-4i32), -1);
        assert_eq!(Sign::sign(0i32), 0);
        assert_eq!(Sign::sign(9u8), 1);
        assert_eq!(Sign::sign(0u8), 0);
        assert_eq!(Sign::sign(-0.5f32), -1.0);
        assert_eq!(Sign::sign(0.0f32), 0.0);
        assert_eq!(Sign::sign(2.0f64), 1.0);
        assert_eq!(Sign::abs(-3i64), 3);
    }

    #[test]
    fn modulo() {
        assert_eq!(7i32.modulo(3), 1);
        assert_eq!(5.5f32.modulo(2.0), 1.5);
        // Takes the sign of the divisor, unlike `%`.
        assert_eq!((-1.0f32).modulo(3.0), 2.0);
        assert_eq!(1.0f64.modulo(-3.0), -2.0);
    }

    #[test]
    fn rounding() {
        assert_eq!(Float::round_even(2.5f32), 2.0);
        assert_eq!(Float::round_even(3.5f32), 4.0);
        assert_eq!(Float::round_even(-2.5f64), -2.0);
        assert_eq!(Float::round_even(2.4f64), 2.0);
        assert_eq!(Float::round(2.5f32), 3.0);
        assert_eq!(Float::fract(-1.25f32), 0.75);
        assert_eq!(Float::fract(1.25f64), 0.25);
    }

    #[test]
    fn integer_sqrt() {
        assert_eq!(Sqrt::sqrt(16i32), 4);
        assert_eq!(Sqrt::sqrt(15u32), 3);
        assert_eq!(Sqrt::sqrt(25usize), 5);
    }

    #[test]
    fn cast() {
        assert_eq!(i32::cast_from(2.9f32), 2);
        assert_eq!(f64::cast_from(-3i8), -3.0);
        assert_eq!(u8::cast_from(300i32), 44);
        assert!(bool::cast_from(0.5f32));
        assert!(!bool::cast_from(0u16));
        assert_eq!(f32::cast_from(true), 1.0);
        assert_eq!(i64::cast_from(false), 0);
    }
}
