use std::{
    array, fmt,
    ops::{AddAssign, SubAssign},
};

use crate::{
    traits::{Arithmetic, CastFrom},
    One, Vector, Zero,
};

mod dim;
mod func;
mod ops;

pub use func::*;

macro_rules! aliases {
    ($($name:ident = $c:literal x $r:literal $(, $short:ident)?;)+) => {
        $(
            #[doc = concat!("A matrix with ", $c, " column(s) and ", $r, " row(s).")]
            pub type $name<T> = Matrix<T, $c, $r>;
            $(
                #[doc = concat!("A [`", stringify!($name), "`] of [`f32`]s.")]
                pub type $short = $name<f32>;
            )?
        )+
    };
}

aliases! {
    Mat1 = 1 x 1, Mat1f;
    Mat2 = 2 x 2, Mat2f;
    Mat3 = 3 x 3, Mat3f;
    Mat4 = 4 x 4, Mat4f;
    Mat2x3 = 2 x 3;
    Mat2x4 = 2 x 4;
    Mat3x2 = 3 x 2;
    Mat3x4 = 3 x 4;
    Mat4x2 = 4 x 2;
    Mat4x3 = 4 x 3;
}

/// `C` column vectors of `R` elements each.
///
/// Like in GLSL, the column count is named first. A [`Mat3x2`] maps 3-element vectors to
/// 2-element vectors, and `m[c][r]` is the element in column `c`, row `r`.
///
/// # Creating matrices
///
/// - [`Matrix::from_rows`] reads like the written-down matrix and is the most convenient for
///   literals. [`Matrix::from_columns`] takes the columns in storage order. Both accept arrays as
///   well as vectors.
/// - [`Matrix::from_fn`] asks a closure for each `(col, row)` position.
/// - [`matrix!`][crate::matrix] fills the matrix column by column from a list of scalars,
///   vectors and matrices.
/// - [`Matrix::splat`] repeats a single value and [`Matrix::ZERO`] is all zeroes.
/// - [`Matrix::identity`] puts ones on the main diagonal, [`Matrix::from_diagonal`] any values.
/// - [`Matrix::resize`] pads with zeroes and [`Matrix::embed`] pads with the identity.
///
/// # Columns, rows and elements
///
/// `m[c]` is a column [`Vector`], so `m[c][r]` reaches a single element. Both levels panic on
/// out-of-range indices.
///
/// ```
/// # use transform_linalg::*;
/// let mut m = Matrix::from_rows([
///     [1, 2, 3],
///     [4, 5, 6],
/// ]);
/// assert_eq!(m[2], vec2(3, 6));
/// m[2][1] = -6;
/// assert_eq!(m.row(1), vec3(4, 5, -6));
/// ```
///
/// [`Matrix::get`] and [`Matrix::get_mut`] check the position and return [`None`] instead:
///
/// ```
/// # use transform_linalg::*;
/// let m = Mat2::<u8>::identity();
/// assert_eq!(m.get(1, 1), Some(&1));
/// assert!(m.get(1, 2).is_none());
/// ```
///
/// [`Matrix::head`] and `tail` split off the first column, [`Matrix::headr`] and `tailr` the first
/// row.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const C: usize, const R: usize>([Vector<T, R>; C]);

unsafe impl<T: bytemuck::Zeroable, const C: usize, const R: usize> bytemuck::Zeroable
    for Matrix<T, C, R>
{
}
unsafe impl<T: bytemuck::Pod, const C: usize, const R: usize> bytemuck::Pod for Matrix<T, C, R> {}

impl<T: Zero, const C: usize, const R: usize> Matrix<T, C, R> {
    /// All elements set to [`T::ZERO`][Zero::ZERO].
    pub const ZERO: Self = Self([Vector::<T, R>::ZERO; C]);
}

impl<T, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Builds a matrix from its columns, left to right.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let m = Matrix::from_columns([vec3(1, 0, 0), vec3(7, 1, 0)]);
    /// assert_eq!(m * vec2(0, 1), vec3(7, 1, 0));
    /// ```
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(columns.map(Into::into))
    }

    /// Builds a matrix from its rows, top to bottom.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let m = Matrix::from_rows([
    ///     [1, -1],
    ///     [0, 2],
    /// ]);
    /// assert_eq!(m, Matrix::from_columns([[1, 0], [-1, 2]]));
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self
    where
        T: Copy,
    {
        Matrix::<T, R, C>::from_columns(rows).transpose()
    }

    /// Builds a matrix by calling `f(col, row)` for every position, column by column.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let checkers: Mat3<bool> = Matrix::from_fn(|col, row| (col + row) % 2 == 0);
    /// assert_eq!(checkers.row(1), vec3(false, true, false));
    /// ```
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| Vector::from_fn(|row| f(col, row))))
    }

    /// Returns a matrix in which every element is a copy of `elem`.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let m = Mat3x2::splat(0.5);
    /// assert_eq!(m.row(0), vec3(0.5, 0.5, 0.5));
    /// ```
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([Vector::splat(elem); C])
    }

    /// Transforms every element with `f`.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let m = Mat2::from_rows([[1, -2], [-3, 4]]).map(|x| x < 0);
    /// assert_eq!(m, Matrix::from_rows([[false, true], [true, false]]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, C, R>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Converts the elements to `U` using `as` semantics.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let m = Mat2::from_diagonal([2.9, -0.1]).cast::<i8>();
    /// assert_eq!(m, Matrix::from_diagonal([2i8, 0]));
    /// ```
    pub fn cast<U>(self) -> Matrix<U, C, R>
    where
        U: CastFrom<T>,
    {
        self.map(U::cast_from)
    }

    /// Borrows the column array.
    #[inline]
    pub fn columns(&self) -> &[Vector<T, R>; C] {
        &self.0
    }

    /// Mutably borrows the column array.
    #[inline]
    pub fn columns_mut(&mut self) -> &mut [Vector<T, R>; C] {
        &mut self.0
    }

    /// Unwraps the matrix into its column array.
    #[inline]
    pub fn into_columns(self) -> [Vector<T, R>; C] {
        self.0
    }

    /// Copy of column `col`, same as `self[col]`.
    ///
    /// # Panics
    ///
    /// Panics if `col >= C`.
    #[inline]
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        self.0[col]
    }

    /// Gathers row `row` from all columns.
    ///
    /// # Panics
    ///
    /// Panics if `row >= R`.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let m = Mat3::from_diagonal([4, 5, 6]);
    /// assert_eq!(m.row(2), vec3(0, 0, 6));
    /// ```
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        Vector::from_fn(|col| self.0[col][row])
    }

    /// Overwrites row `row` with `values`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= R`.
    pub fn set_row(&mut self, row: usize, values: Vector<T, C>) {
        self.0
            .iter_mut()
            .zip(values)
            .for_each(|(column, value)| column[row] = value);
    }

    /// Column 0.
    #[inline]
    pub fn head(&self) -> Vector<T, R>
    where
        T: Copy,
    {
        self.0[0]
    }

    /// Overwrites column 0.
    #[inline]
    pub fn set_head(&mut self, head: Vector<T, R>) {
        self.0[0] = head;
    }

    /// Row 0.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let m = Matrix::from_rows([
    ///     [9, 8],
    ///     [7, 6],
    ///     [5, 4],
    /// ]);
    /// assert_eq!(m.headr(), vec2(9, 8));
    /// assert_eq!(m.head(), vec3(9, 7, 5));
    /// ```
    #[inline]
    pub fn headr(&self) -> Vector<T, C>
    where
        T: Copy,
    {
        self.row(0)
    }

    /// Overwrites row 0.
    #[inline]
    pub fn set_headr(&mut self, headr: Vector<T, C>) {
        self.set_row(0, headr);
    }

    /// Mirrors the matrix along its main diagonal, turning columns into rows.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let tall = Matrix::from_columns([[1, 2, 3]]);
    /// assert_eq!(tall.transpose(), Matrix::from_rows([[1, 2, 3]]));
    /// ```
    pub fn transpose(self) -> Matrix<T, R, C>
    where
        T: Copy,
    {
        Matrix::from_fn(|col, row| self.0[row][col])
    }

    /// Returns the element at column `col` and row `row`, if both are in range.
    pub fn get(&self, col: usize, row: usize) -> Option<&T> {
        self.0.get(col)?.get(row)
    }

    /// Mutable variant of [`Matrix::get`].
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let mut m = Mat2::<i32>::ZERO;
    /// *m.get_mut(1, 0).unwrap() = 3;
    /// assert!(m.get_mut(2, 0).is_none());
    /// assert_eq!(m.row(0), vec2(0, 3));
    /// ```
    pub fn get_mut(&mut self, col: usize, row: usize) -> Option<&mut T> {
        self.0.get_mut(col)?.get_mut(row)
    }

    /// Copies the upper left corner into a `C2`x`R2` matrix.
    ///
    /// Positions outside of `self` are filled with [`T::ZERO`][Zero::ZERO].
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let m = Mat2::splat(1).resize::<3, 1>();
    /// assert_eq!(m, Matrix::from_rows([[1, 1, 0]]));
    /// ```
    pub fn resize<const C2: usize, const R2: usize>(self) -> Matrix<T, C2, R2>
    where
        T: Zero + Copy,
    {
        Matrix::from_fn(|col, row| match self.get(col, row) {
            Some(elem) => *elem,
            None => T::ZERO,
        })
    }

    /// Like [`Matrix::resize`], but positions outside of `self` are taken from the identity
    /// matrix.
    ///
    /// Growing a 3x3 linear map this way yields the equivalent 4x4 homogeneous transform.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let flip = Mat2::from_rows([
    ///     [0, 1],
    ///     [1, 0],
    /// ]);
    /// assert_eq!(flip.embed::<3, 3>(), Matrix::from_rows([
    ///     [0, 1, 0],
    ///     [1, 0, 0],
    ///     [0, 0, 1],
    /// ]));
    /// ```
    pub fn embed<const C2: usize, const R2: usize>(self) -> Matrix<T, C2, R2>
    where
        T: Zero + One + Copy,
    {
        Matrix::from_fn(|col, row| match self.get(col, row) {
            Some(elem) => *elem,
            None if col == row => T::ONE,
            None => T::ZERO,
        })
    }

    /// Prefix `++` on every element.
    pub fn inc(&mut self) -> &mut Self
    where
        T: AddAssign + One,
    {
        self.0.iter_mut().for_each(|column| {
            column.inc();
        });
        self
    }

    /// Prefix `--` on every element.
    pub fn dec(&mut self) -> &mut Self
    where
        T: SubAssign + One,
    {
        self.0.iter_mut().for_each(|column| {
            column.dec();
        });
        self
    }

    /// Postfix `++`: increments every element and returns the old matrix.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let mut m = Mat2::from_diagonal([1u32, 2]);
    /// let before = m.post_inc();
    /// assert_eq!(m - before, Matrix::splat(1));
    /// ```
    pub fn post_inc(&mut self) -> Self
    where
        T: AddAssign + One + Copy,
    {
        let before = *self;
        self.inc();
        before
    }

    /// Postfix `--`.
    pub fn post_dec(&mut self) -> Self
    where
        T: SubAssign + One + Copy,
    {
        let before = *self;
        self.dec();
        before
    }
}

impl<T: Zero + One, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Ones on the main diagonal, zeroes elsewhere.
    ///
    /// Non-square shapes get the diagonal that starts in the top left corner.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// assert_eq!(Mat3x2::<u8>::identity(), Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 1, 0],
    /// ]));
    /// let v = vec4(0.5, -1.0, 2.0, 1.0);
    /// assert_eq!(Mat4::<f64>::identity() * v, v);
    /// ```
    pub fn identity() -> Self {
        Self::from_fn(|col, row| match col == row {
            true => T::ONE,
            false => T::ZERO,
        })
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Collects the main diagonal.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let m = Matrix::from_fn(|col, row| 10 * col + row);
    /// assert_eq!(Mat3::into_diagonal(m), vec3(0, 11, 22));
    /// ```
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// A square matrix with `diag` on its main diagonal and zeroes elsewhere.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let m = Mat2::from_diagonal(vec2(3, -3));
    /// assert_eq!(m * vec2(1, 1), vec2(3, -3));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::from_fn(|col, row| if col == row { diag[col] } else { T::ZERO })
    }

    /// Sum of the main diagonal.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// assert_eq!(Mat4::<i32>::identity().trace(), 4);
    /// assert_eq!(Mat2::from_rows([[0.5, 9.0], [9.0, 0.25]]).trace(), 0.75);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Arithmetic,
    {
        self.into_diagonal().sum()
    }
}

impl<T: Default, const C: usize, const R: usize> Default for Matrix<T, C, R> {
    fn default() -> Self {
        Self(array::from_fn(|_| Vector::default()))
    }
}

impl<T, const C: usize, const R: usize> From<[Vector<T, R>; C]> for Matrix<T, C, R> {
    #[inline]
    fn from(columns: [Vector<T, R>; C]) -> Self {
        Self(columns)
    }
}

impl<T: fmt::Debug, const C: usize, const R: usize> fmt::Debug for Matrix<T, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Row by row, the way the matrix is written down. `{:#?}` breaks lines between rows only.
        let mut list = f.debug_list();
        for row in 0..R {
            let elems: [&T; C] = array::from_fn(|col| &self.0[col][row]);
            list.entry(&format_args!("{elems:?}"));
        }
        list.finish()
    }
}
