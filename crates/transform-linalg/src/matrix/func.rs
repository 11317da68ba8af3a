//! Determinants, cofactors and inversion.
//!
//! The determinant is computed by *Laplace expansion* along the first row, recursing into the
//! minors of the matrix until a 1x1 matrix is reached. This needs `N - 1`-sized matrices, so the
//! [`SquareMatrix`] trait is implemented for every size from 1x1 to 8x8.
//!
//! Inversion uses the adjugate: `inverse(m) = transpose(cofactor_matrix(m)) / determinant(m)`.

use crate::{traits::Number, Matrix};

/// Removal of a single column.
pub trait CutCol {
    /// The matrix type with one column less.
    type Output;

    /// Returns a copy of `self` with the column at index `col` removed.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    fn cut_col(&self, col: usize) -> Self::Output;
}

/// Removal of a single row.
pub trait CutRow {
    /// The matrix type with one row less.
    type Output;

    /// Returns a copy of `self` with the row at index `row` removed.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    fn cut_row(&self, row: usize) -> Self::Output;
}

/// Operations on square matrices that depend on their [determinant].
///
/// [determinant]: https://en.wikipedia.org/wiki/Determinant
pub trait SquareMatrix: Sized {
    /// The element type.
    type Scalar: Number;

    /// Returns the determinant of `self` with column `col` and row `row` removed.
    ///
    /// The minor of a 1x1 matrix is the determinant of the empty matrix, 1.
    fn minor(&self, col: usize, row: usize) -> Self::Scalar;

    /// Returns the minor at `(col, row)`, negated if `col + row` is odd.
    fn cofactor(&self, col: usize, row: usize) -> Self::Scalar {
        let minor = self.minor(col, row);
        if (col + row) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    /// Returns the determinant of the matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use transform_linalg::*;
    /// #[rustfmt::skip]
    /// let mat = Matrix::from_rows([
    ///     [-2, -1,  2],
    ///     [ 2,  1,  4],
    ///     [-3,  3, -1],
    /// ]);
    /// assert_eq!(mat.determinant(), 54);
    /// ```
    fn determinant(&self) -> Self::Scalar;

    /// Returns the matrix containing the cofactor of each element.
    fn cofactor_matrix(&self) -> Self;

    /// Returns the adjugate of the matrix (the transposed cofactor matrix).
    fn adjugate(&self) -> Self;

    /// Inverts the matrix.
    ///
    /// If the matrix is not invertible (its determinant is zero), the result is whatever dividing
    /// by zero produces for `Scalar`: infinities or NaN for floats, a panic for integers. Use
    /// [`SquareMatrix::try_inverse`] if that isn't acceptable.
    ///
    /// # Examples
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [2.0, 0.0],
    ///     [0.0, 4.0],
    /// ]);
    /// assert_eq!(mat.inverse(), Matrix::from_rows([
    ///     [0.5, 0.0],
    ///     [0.0, 0.25],
    /// ]));
    /// ```
    fn inverse(&self) -> Self;

    /// Inverts the matrix, returning [`None`] if it is not invertible.
    ///
    /// # Examples
    ///
    /// ```
    /// # use transform_linalg::*;
    /// assert_eq!(Mat2f::ZERO.try_inverse(), None);
    /// assert_eq!(Mat2f::identity().try_inverse(), Some(Mat2f::identity()));
    /// ```
    fn try_inverse(&self) -> Option<Self>;
}

impl<T: Number> SquareMatrix for Matrix<T, 1, 1> {
    type Scalar = T;

    #[track_caller]
    fn minor(&self, col: usize, row: usize) -> T {
        assert!(col == 0 && row == 0, "minor ({col}, {row}) out of bounds for a 1x1 matrix");
        T::ONE
    }

    #[inline]
    fn determinant(&self) -> T {
        self[0][0]
    }

    fn cofactor_matrix(&self) -> Self {
        Matrix::splat(T::ONE)
    }

    fn adjugate(&self) -> Self {
        Matrix::splat(T::ONE)
    }

    fn inverse(&self) -> Self {
        Matrix::splat(T::ONE / self.determinant())
    }

    fn try_inverse(&self) -> Option<Self> {
        if self.determinant() == T::ZERO {
            log::debug!("attempted to invert a singular 1x1 matrix");
            return None;
        }
        Some(self.inverse())
    }
}

macro_rules! impl_square {
    ($($n:literal),+) => {
        $(
            impl<T: Number> SquareMatrix for Matrix<T, $n, $n> {
                type Scalar = T;

                #[track_caller]
                fn minor(&self, col: usize, row: usize) -> T {
                    cut_down(self, col, row).determinant()
                }

                fn determinant(&self) -> T {
                    (0..$n).fold(T::ZERO, |acc, col| acc + self[col][0] * self.cofactor(col, 0))
                }

                fn cofactor_matrix(&self) -> Self {
                    Matrix::from_fn(|col, row| self.cofactor(col, row))
                }

                fn adjugate(&self) -> Self {
                    self.cofactor_matrix().transpose()
                }

                fn inverse(&self) -> Self {
                    self.adjugate() * (T::ONE / self.determinant())
                }

                fn try_inverse(&self) -> Option<Self> {
                    let det = self.determinant();
                    if det == T::ZERO {
                        log::debug!("attempted to invert a singular {}x{} matrix", $n, $n);
                        return None;
                    }
                    Some(self.adjugate() * (T::ONE / det))
                }
            }
        )+
    };
}

impl_square!(2, 3, 4, 5, 6, 7, 8);

/// Returns a copy of `m` with the column at index `col` removed.
///
/// # Examples
///
/// ```
/// # use transform_linalg::*;
/// let m = Matrix::from_rows([
///     [1, 2, 3],
///     [4, 5, 6],
/// ]);
/// assert_eq!(cut_col(&m, 1), Matrix::from_rows([
///     [1, 3],
///     [4, 6],
/// ]));
/// ```
#[track_caller]
pub fn cut_col<M: CutCol>(m: &M, col: usize) -> M::Output {
    m.cut_col(col)
}

/// Returns a copy of `m` with the row at index `row` removed.
#[track_caller]
pub fn cut_row<M: CutRow>(m: &M, row: usize) -> M::Output {
    m.cut_row(row)
}

/// Returns a copy of `m` with column `col` and row `row` removed.
///
/// # Examples
///
/// ```
/// # use transform_linalg::*;
/// let m = Matrix::from_rows([
///     [1, 2, 3],
///     [4, 5, 6],
///     [7, 8, 9],
/// ]);
/// assert_eq!(cut_down(&m, 0, 1), Matrix::from_rows([
///     [2, 3],
///     [8, 9],
/// ]));
/// ```
#[track_caller]
pub fn cut_down<M>(m: &M, col: usize, row: usize) -> <M::Output as CutRow>::Output
where
    M: CutCol,
    M::Output: CutRow,
{
    m.cut_col(col).cut_row(row)
}

/// Returns the determinant of `m` with column `col` and row `row` removed.
#[track_caller]
pub fn minor<M: SquareMatrix>(m: &M, col: usize, row: usize) -> M::Scalar {
    m.minor(col, row)
}

/// Returns the cofactor of the element in column `col` and row `row` of `m`.
#[track_caller]
pub fn cofactor<M: SquareMatrix>(m: &M, col: usize, row: usize) -> M::Scalar {
    m.cofactor(col, row)
}

/// Returns the determinant of `m`.
pub fn determinant<M: SquareMatrix>(m: &M) -> M::Scalar {
    m.determinant()
}

/// Returns the matrix of cofactors of `m`.
pub fn cofactor_matrix<M: SquareMatrix>(m: &M) -> M {
    m.cofactor_matrix()
}

/// Returns the inverse of `m`.
///
/// See [`SquareMatrix::inverse`] for what happens if `m` is not invertible.
pub fn inverse<M: SquareMatrix>(m: &M) -> M {
    m.inverse()
}

/// Returns the inverse of `m`, or [`None`] if `m` is not invertible.
pub fn try_inverse<M: SquareMatrix>(m: &M) -> Option<M> {
    m.try_inverse()
}

/// Swaps the rows and columns of `m`.
pub fn transpose<T: Copy, const C: usize, const R: usize>(m: &Matrix<T, C, R>) -> Matrix<T, R, C> {
    m.transpose()
}
