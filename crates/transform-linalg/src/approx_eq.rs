//! [`approx`] trait implementations for [`Vector`] and [`Matrix`].
//!
//! Two vectors or matrices are approximately equal if every pair of corresponding elements is. This
//! allows using [`approx::assert_relative_eq!`] and friends directly on them:
//!
//! ```
//! # use transform_linalg::*;
//! use approx::assert_relative_eq;
//!
//! let one_third = Vec3f::splat(1.0) / 3.0;
//! assert_relative_eq!(one_third * 3.0, Vec3f::splat(1.0));
//! assert_relative_eq!(Mat2f::identity() * 0.1 * 10.0, Mat2f::identity());
//! ```

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Matrix, Vector};

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.iter()
            .zip(other)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.iter()
            .zip(other)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Vector<T, N>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.iter()
            .zip(other)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

// Matrices compare column by column, delegating to the impls above.

impl<T, const C: usize, const R: usize> AbsDiffEq for Matrix<T, C, R>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.columns()
            .iter()
            .zip(other.columns())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const C: usize, const R: usize> RelativeEq for Matrix<T, C, R>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.columns()
            .iter()
            .zip(other.columns())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const C: usize, const R: usize> UlpsEq for Matrix<T, C, R>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.columns()
            .iter()
            .zip(other.columns())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_ulps_eq};

    use crate::{vec2, vec3, Mat2f, Matrix};

    #[test]
    fn vectors() {
        let sum = (0..10).fold(vec2(0.0f32, 0.0), |acc, _| acc + 0.1);
        assert_relative_eq!(sum, vec2(1.0, 1.0));
        assert_ulps_eq!(vec3(1.0f64, 2.0, 3.0), vec3(1.0, 2.0, 3.0 + f64::EPSILON));
        assert_abs_diff_eq!(vec2(1.0f32, 2.0), vec2(1.5, 2.0), epsilon = 0.5);
        assert_abs_diff_ne!(vec2(1.0f32, 2.0), vec2(1.0, 2.1), epsilon = 0.05);
    }

    #[test]
    fn matrices() {
        let m = Matrix::from_columns([[1.0f32, 2.0], [3.0, 4.0]]);
        assert_relative_eq!(m / 3.0 * 3.0, m);
        assert_abs_diff_ne!(m, Mat2f::identity());
        assert_abs_diff_eq!(m, m + 0.01, epsilon = 0.02);
    }
}
