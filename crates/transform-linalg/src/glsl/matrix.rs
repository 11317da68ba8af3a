//! Matrix functions (GLSL 4.60 section 8.6).
//!
//! `transpose`, `determinant` and `inverse` are provided by the crate root.

use std::ops::Mul;

use crate::{Matrix, Vector};

/// Multiplies `x` and `y` component-wise.
///
/// Use the `*` operator for the linear algebraic matrix product.
///
/// ```
/// # use transform_linalg::{*, glsl::matrix_comp_mult};
/// let a = Mat2::from_rows([[1, 2], [3, 4]]);
/// let b = Mat2::from_rows([[5, 6], [7, 8]]);
/// assert_eq!(matrix_comp_mult(a, b), Mat2::from_rows([[5, 12], [21, 32]]));
/// ```
pub fn matrix_comp_mult<T, const C: usize, const R: usize>(
    x: Matrix<T, C, R>,
    y: Matrix<T, C, R>,
) -> Matrix<T, C, R>
where
    T: Mul<Output = T> + Copy,
{
    Matrix::from_fn(|col, row| x[col][row] * y[col][row])
}

/// Computes the outer product of the column vector `c` and the row vector `r`.
///
/// The result has as many rows as `c` has elements, and as many columns as `r` has.
pub fn outer_product<T, const C: usize, const R: usize>(
    c: Vector<T, R>,
    r: Vector<T, C>,
) -> Matrix<T, C, R>
where
    T: Mul<Output = T> + Copy,
{
    Matrix::from_fn(|col, row| c[row] * r[col])
}
