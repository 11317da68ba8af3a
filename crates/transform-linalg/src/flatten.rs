//! Flattening constructors.
//!
//! The [`vector!`][crate::vector] and [`matrix!`][crate::matrix] macros accept any mixture of
//! scalars, vectors and matrices. Every argument is decomposed into its scalar elements (matrices
//! in column-major order), and the elements are written into the output from left to right.
//! Surplus trailing elements are dropped, while too few elements cause a panic.

use crate::{Matrix, Vector};

/// Types that can be decomposed into a sequence of scalars of type `T`.
pub trait Flatten<T> {
    /// Invokes `f` with every scalar element of `self`, in order.
    fn flatten<F: FnMut(T)>(self, f: F);
}

impl<T, const N: usize> Flatten<T> for Vector<T, N> {
    fn flatten<F: FnMut(T)>(self, f: F) {
        self.into_iter().for_each(f);
    }
}

impl<T, const C: usize, const R: usize> Flatten<T> for Matrix<T, C, R> {
    fn flatten<F: FnMut(T)>(self, mut f: F) {
        for column in self.into_columns() {
            column.flatten(&mut f);
        }
    }
}

macro_rules! flatten_scalars {
    ($($types:ty),+) => {
        $(
            impl Flatten<$types> for $types {
                #[inline]
                fn flatten<F: FnMut($types)>(self, mut f: F) {
                    f(self)
                }
            }
        )+
    };
}

flatten_scalars!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool);

/// Fixed-size containers that can be filled one scalar at a time.
pub trait Components: Default {
    /// The scalar element type.
    type Elem;

    /// The number of scalar elements.
    const LEN: usize;

    /// Returns a mutable reference to the element at flat position `index`.
    fn component_mut(&mut self, index: usize) -> &mut Self::Elem;
}

impl<T: Default, const N: usize> Components for Vector<T, N> {
    type Elem = T;
    const LEN: usize = N;

    fn component_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }
}

impl<T: Default, const C: usize, const R: usize> Components for Matrix<T, C, R> {
    type Elem = T;
    const LEN: usize = C * R;

    fn component_mut(&mut self, index: usize) -> &mut T {
        &mut self[index / R][index % R]
    }
}

/// macro-use only, not part of public API.
#[doc(hidden)]
pub struct Builder<O: Components> {
    out: O,
    len: usize,
}

impl<O: Components> Builder<O> {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            out: O::default(),
            len: 0,
        }
    }

    pub fn push<A: Flatten<O::Elem>>(&mut self, arg: A) {
        arg.flatten(|elem| {
            if self.len < O::LEN {
                *self.out.component_mut(self.len) = elem;
            }
            self.len += 1;
        });
    }

    #[track_caller]
    pub fn finish(self) -> O {
        assert!(
            self.len >= O::LEN,
            "expected at least {} elements, got {}",
            O::LEN,
            self.len
        );
        self.out
    }
}

/// macro-use only, not part of public API.
#[doc(hidden)]
#[track_caller]
pub fn into_vector<T: Default, const N: usize>(builder: Builder<Vector<T, N>>) -> Vector<T, N> {
    builder.finish()
}

/// macro-use only, not part of public API.
#[doc(hidden)]
#[track_caller]
pub fn into_matrix<T: Default, const C: usize, const R: usize>(
    builder: Builder<Matrix<T, C, R>>,
) -> Matrix<T, C, R> {
    builder.finish()
}

/// Creates a [`Vector`] from any mixture of scalars, vectors and matrices.
///
/// The length of the resulting vector has to be known from context. Arguments are flattened into
/// their elements (matrices column by column) and consumed from left to right. Elements beyond the
/// vector's length are dropped.
///
/// All arguments must have the same element type; use [`Vector::cast`] or [`Matrix::cast`] to
/// convert them first.
///
/// # Panics
///
/// Panics if the arguments have fewer elements in total than the vector.
///
/// # Examples
///
/// ```
/// # use transform_linalg::*;
/// let v: Vec4<i32> = vector![1, vec2(2, 3), 4];
/// assert_eq!(v, vec4(1, 2, 3, 4));
///
/// let point: Vec4f = vector![vec3(0.5, 1.0, 2.0), 1.0];
/// assert_eq!(point.w, 1.0);
///
/// // Surplus elements are dropped.
/// let v: Vec2<i32> = vector![vec4(1, 2, 3, 4)];
/// assert_eq!(v, vec2(1, 2));
/// ```
#[macro_export]
macro_rules! vector {
    ($($arg:expr),+ $(,)?) => {{
        let mut builder = $crate::flatten::Builder::new();
        $( builder.push($arg); )+
        $crate::flatten::into_vector(builder)
    }};
}

/// Creates a [`Matrix`] from any mixture of scalars, vectors and matrices.
///
/// Works like [`vector!`][crate::vector], filling the matrix in column-major order: the first `R`
/// elements become the first column.
///
/// # Panics
///
/// Panics if the arguments have fewer elements in total than the matrix.
///
/// # Examples
///
/// ```
/// # use transform_linalg::*;
/// let m: Mat2<i32> = matrix![vec2(1, 2), 3, 4];
/// assert_eq!(m, Matrix::from_columns([[1, 2], [3, 4]]));
///
/// // A 3x2 matrix from the 6 elements of a 2x3 matrix.
/// let m: Mat2x3<i32> = Matrix::from_columns([[1, 2, 3], [4, 5, 6]]);
/// let m: Mat3x2<i32> = matrix![m];
/// assert_eq!(m, Matrix::from_columns([[1, 2], [3, 4], [5, 6]]));
/// ```
#[macro_export]
macro_rules! matrix {
    ($($arg:expr),+ $(,)?) => {{
        let mut builder = $crate::flatten::Builder::new();
        $( builder.push($arg); )+
        $crate::flatten::into_matrix(builder)
    }};
}
