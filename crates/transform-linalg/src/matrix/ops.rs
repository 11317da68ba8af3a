//! Operator overloads for matrices.
//!
//! Addition and subtraction work element-wise with another matrix of the same size, a scalar, or a
//! 1x1 matrix (which acts like a scalar). Multiplication is the matrix product when both sides are
//! matrices or vectors, and element-wise otherwise.

use std::{
    array,
    ops::{
        Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
    },
};

use super::Matrix;
use crate::{traits::Arithmetic, Vector};

impl<T, const C: usize, const R: usize> Index<usize> for Matrix<T, C, R> {
    type Output = Vector<T, R>;

    #[inline]
    fn index(&self, col: usize) -> &Self::Output {
        &self.0[col]
    }
}

impl<T, const C: usize, const R: usize> IndexMut<usize> for Matrix<T, C, R> {
    #[inline]
    fn index_mut(&mut self, col: usize) -> &mut Self::Output {
        &mut self.0[col]
    }
}

// Allows comparing across element types, which `derive` can't express.
impl<T, U, const C: usize, const R: usize> PartialEq<Matrix<U, C, R>> for Matrix<T, C, R>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, C, R>) -> bool {
        self.0 == other.0
    }
}

impl<T, const C: usize, const R: usize> Eq for Matrix<T, C, R> where T: Eq {}

impl<T, const C: usize, const R: usize> Neg for Matrix<T, C, R>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

macro_rules! elementwise {
    ($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident) => {
        impl<T, const C: usize, const R: usize> $Op for Matrix<T, C, R>
        where
            T: $Op<Output = T> + Copy,
        {
            type Output = Self;

            fn $op(self, rhs: Self) -> Self::Output {
                Matrix::from_fn(|col, row| $Op::$op(self.0[col][row], rhs.0[col][row]))
            }
        }

        impl<T, const C: usize, const R: usize> $Op<T> for Matrix<T, C, R>
        where
            T: $Op<Output = T> + Copy,
        {
            type Output = Self;

            fn $op(self, rhs: T) -> Self::Output {
                self.map(|elem| $Op::$op(elem, rhs))
            }
        }

        impl<T, const C: usize, const R: usize> $OpAssign for Matrix<T, C, R>
        where
            T: $Op<Output = T> + Copy,
        {
            fn $op_assign(&mut self, rhs: Self) {
                *self = $Op::$op(*self, rhs);
            }
        }

        impl<T, const C: usize, const R: usize> $OpAssign<T> for Matrix<T, C, R>
        where
            T: $Op<Output = T> + Copy,
        {
            fn $op_assign(&mut self, rhs: T) {
                *self = $Op::$op(*self, rhs);
            }
        }

        elementwise!(@broadcast $Op::$op; 2 3 4 5 6 7 8);
    };
    // A 1x1 matrix on either side is broadcast. Implementing this for all sizes would overlap with
    // the impls above (and with the matrix product), so these only exist for sizes other than 1x1.
    (@broadcast $Op:ident::$op:ident; $($n:literal)+) => {
        $(
            impl<T, const R: usize> $Op<Matrix<T, 1, 1>> for Matrix<T, $n, R>
            where
                T: $Op<Output = T> + Copy,
            {
                type Output = Self;

                fn $op(self, rhs: Matrix<T, 1, 1>) -> Self::Output {
                    $Op::$op(self, rhs.0[0][0])
                }
            }

            impl<T> $Op<Matrix<T, 1, 1>> for Matrix<T, 1, $n>
            where
                T: $Op<Output = T> + Copy,
            {
                type Output = Self;

                fn $op(self, rhs: Matrix<T, 1, 1>) -> Self::Output {
                    $Op::$op(self, rhs.0[0][0])
                }
            }

            impl<T, const R: usize> $Op<Matrix<T, $n, R>> for Matrix<T, 1, 1>
            where
                T: $Op<Output = T> + Copy,
            {
                type Output = Matrix<T, $n, R>;

                fn $op(self, rhs: Matrix<T, $n, R>) -> Self::Output {
                    let lhs = self.0[0][0];
                    rhs.map(|elem| $Op::$op(lhs, elem))
                }
            }

            impl<T> $Op<Matrix<T, 1, $n>> for Matrix<T, 1, 1>
            where
                T: $Op<Output = T> + Copy,
            {
                type Output = Matrix<T, 1, $n>;

                fn $op(self, rhs: Matrix<T, 1, $n>) -> Self::Output {
                    let lhs = self.0[0][0];
                    rhs.map(|elem| $Op::$op(lhs, elem))
                }
            }
        )+
    };
}

elementwise!(Add::add, AddAssign::add_assign);
elementwise!(Sub::sub, SubAssign::sub_assign);

/// Matrix * Scalar.
impl<T, const C: usize, const R: usize> Mul<T> for Matrix<T, C, R>
where
    T: Mul<Output = T> + Copy,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

impl<T, const C: usize, const R: usize> MulAssign<T> for Matrix<T, C, R>
where
    T: Mul<Output = T> + Copy,
{
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

/// Matrix / Scalar.
impl<T, const C: usize, const R: usize> Div<T> for Matrix<T, C, R>
where
    T: Div<Output = T> + Copy,
{
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

impl<T, const C: usize, const R: usize> DivAssign<T> for Matrix<T, C, R>
where
    T: Div<Output = T> + Copy,
{
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

/// Matrix / 1x1 Matrix.
impl<T, const C: usize, const R: usize> Div<Matrix<T, 1, 1>> for Matrix<T, C, R>
where
    T: Div<Output = T> + Copy,
{
    type Output = Self;

    fn div(self, rhs: Matrix<T, 1, 1>) -> Self::Output {
        self / rhs.0[0][0]
    }
}

/// Linear map applied to a column vector.
impl<T, const C: usize, const R: usize> Mul<Vector<T, C>> for Matrix<T, C, R>
where
    T: Arithmetic,
{
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        Vector::from_fn(|row| self.row(row).dot(rhs))
    }
}

/// Row Vector * Matrix.
impl<T, const C: usize, const R: usize> Mul<Matrix<T, C, R>> for Vector<T, R>
where
    T: Arithmetic,
{
    type Output = Vector<T, C>;

    fn mul(self, rhs: Matrix<T, C, R>) -> Self::Output {
        Vector::from_fn(|col| self.dot(rhs.0[col]))
    }
}

/// Matrix * Matrix.
impl<T, const K: usize, const C: usize, const R: usize> Mul<Matrix<T, K, C>> for Matrix<T, C, R>
where
    T: Arithmetic,
{
    type Output = Matrix<T, K, R>;

    fn mul(self, rhs: Matrix<T, K, C>) -> Self::Output {
        Matrix(rhs.0.map(|column| self * column))
    }
}

/// `m *= rhs` is `m = m * rhs`, so `rhs` has to be square.
impl<T, const C: usize, const R: usize> MulAssign<Matrix<T, C, C>> for Matrix<T, C, R>
where
    T: Arithmetic,
{
    fn mul_assign(&mut self, rhs: Matrix<T, C, C>) {
        *self = *self * rhs;
    }
}

// A 1x1 matrix multiplied with a matrix that has more than one column (on the left) or more than
// one row (on the right) scales it. In the remaining cases, the matrix product does the same.
macro_rules! scale_by_1x1 {
    ($($n:literal)+) => {
        $(
            impl<T, const R: usize> Mul<Matrix<T, 1, 1>> for Matrix<T, $n, R>
            where
                T: Mul<Output = T> + Copy,
            {
                type Output = Self;

                fn mul(self, rhs: Matrix<T, 1, 1>) -> Self::Output {
                    self * rhs.0[0][0]
                }
            }

            impl<T, const C: usize> Mul<Matrix<T, C, $n>> for Matrix<T, 1, 1>
            where
                T: Mul<Output = T> + Copy,
            {
                type Output = Matrix<T, C, $n>;

                fn mul(self, rhs: Matrix<T, C, $n>) -> Self::Output {
                    rhs * self.0[0][0]
                }
            }
        )+
    };
}

scale_by_1x1!(2 3 4 5 6 7 8);

// NB: a blanket `impl<T> Mul<Matrix<T, C, R>> for T` is rejected by coherence, so scalar-matrix
// operators are implemented for each primitive type.
macro_rules! scalar_lhs {
    ($($t:ty),+) => {
        $(
            impl<const C: usize, const R: usize> Add<Matrix<$t, C, R>> for $t {
                type Output = Matrix<$t, C, R>;

                fn add(self, rhs: Matrix<$t, C, R>) -> Self::Output {
                    rhs.map(|elem| self + elem)
                }
            }

            impl<const C: usize, const R: usize> Sub<Matrix<$t, C, R>> for $t {
                type Output = Matrix<$t, C, R>;

                fn sub(self, rhs: Matrix<$t, C, R>) -> Self::Output {
                    rhs.map(|elem| self - elem)
                }
            }

            impl<const C: usize, const R: usize> Mul<Matrix<$t, C, R>> for $t {
                type Output = Matrix<$t, C, R>;

                fn mul(self, rhs: Matrix<$t, C, R>) -> Self::Output {
                    rhs * self
                }
            }

            impl<const C: usize, const R: usize> Div<Matrix<$t, C, R>> for $t {
                type Output = Matrix<$t, C, R>;

                fn div(self, rhs: Matrix<$t, C, R>) -> Self::Output {
                    rhs.map(|elem| self / elem)
                }
            }
        )+
    };
}

scalar_lhs!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl<T, const C: usize, const R: usize> IntoIterator for Matrix<T, C, R> {
    type Item = Vector<T, R>;
    type IntoIter = array::IntoIter<Vector<T, R>, C>;

    /// Iterates over the columns of the matrix.
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, Mat1, Mat2, Mat2x3, Mat3, Mat3f, Matrix};

    #[rustfmt::skip]
    fn mat2x3() -> Mat2x3<i32> {
        Matrix::from_rows([
            [1, 2],
            [3, 4],
            [5, 6],
        ])
    }

    #[test]
    fn add_sub() {
        let m = mat2x3();
        assert_eq!(m + m, m * 2);
        assert_eq!(m - m, Mat2x3::ZERO);
        assert_eq!(m + 1, Matrix::from_rows([[2, 3], [4, 5], [6, 7]]));
        assert_eq!(1 + m, m + 1);
        assert_eq!(10 - m, Matrix::from_rows([[9, 8], [7, 6], [5, 4]]));
        assert_eq!(m - 1, -(1 - m));

        let one = Mat1::splat(1);
        assert_eq!(m + one, m + 1);
        assert_eq!(one + m, m + 1);
        assert_eq!(m - one, m - 1);
        assert_eq!(one - m, 1 - m);
        assert_eq!(one + one, Mat1::splat(2));

        let column: Matrix<i32, 1, 3> = Matrix::from_columns([[1, 2, 3]]);
        assert_eq!(column + one, column + 1);
        assert_eq!(one - column, 1 - column);
    }

    #[test]
    fn scalar_mul_div() {
        let m = mat2x3();
        assert_eq!(m * 2, 2 * m);
        assert_eq!(m * 2 / 2, m);
        assert_eq!(60 / m, Matrix::from_rows([[60, 30], [20, 15], [12, 10]]));
        assert_eq!(m * Mat1::splat(3), m * 3);
        assert_eq!(Mat1::splat(3) * m, m * 3);
        assert_eq!(m * 4 / Mat1::splat(2), m * 2);
    }

    #[test]
    fn assign() {
        let mut m = mat2x3();
        m += mat2x3();
        assert_eq!(m, mat2x3() * 2);
        m -= 1;
        m += 1;
        m -= mat2x3();
        assert_eq!(m, mat2x3());
        m *= 3;
        m /= 3;
        assert_eq!(m, mat2x3());

        let mut sq = Mat2::from_rows([[1, 2], [3, 4]]);
        sq *= Mat2::identity();
        assert_eq!(sq, Matrix::from_rows([[1, 2], [3, 4]]));
        sq *= Matrix::from_rows([[0, 1], [1, 0]]);
        assert_eq!(sq, Matrix::from_rows([[2, 1], [4, 3]]));
    }

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        let vec = vec2(4, 5);
        assert_eq!(mat * vec, [4 * 0 + 5 * 1, 4 * 2 + 5 * 3]);
        assert_eq!(vec * mat, [4 * 0 + 5 * 2, 4 * 1 + 5 * 3]);
        assert_eq!(vec * mat, mat.transpose() * vec);

        let m = mat2x3();
        assert_eq!(m * vec2(1, 1), vec3(3, 7, 11));
        assert_eq!(vec3(1, 1, 1) * m, vec2(9, 12));
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1, 2],
            [3, 4],
            [5, 6],
            [7, 8],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [9, 10, 11],
            [12, 13, 14],
        ]);
        let c = a * b;
        assert_eq!(c[1][0], a[0][0] * b[1][0] + a[1][0] * b[1][1]);
        assert_eq!(c[2][2], a[0][2] * b[2][0] + a[1][2] * b[2][1]);
        assert_eq!(c.columns().len(), 3);
        assert_eq!(c[0].as_slice().len(), 4);

        let m: Mat3<i32> = Matrix::from_fn(|col, row| (col * 3 + row) as i32);
        assert_eq!(m * Mat3::identity(), m);
        assert_eq!(Mat3::<i32>::identity() * m, m);
    }

    #[test]
    fn identity_laws() {
        let m: Mat3f = Matrix::from_fn(|col, row| col as f32 - row as f32 * 0.5);
        assert_eq!(m + Mat3f::ZERO, m);
        assert_eq!(m * 1.0, m);
        assert_eq!(m - m, Mat3f::ZERO);
        assert_eq!(m * Mat3f::identity(), m);
        assert_eq!(-(-m), m);
    }

    #[test]
    fn columns() {
        let cols: Vec<_> = mat2x3().into_iter().collect();
        assert_eq!(cols, [vec3(1, 3, 5), vec3(2, 4, 6)]);
    }
}
