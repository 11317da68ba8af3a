//! GLSL-style vectors and matrices whose dimensions are known at compile time.
//!
//! # Overview
//!
//! - [`Vector<T, N>`] is an array of `N` elements of type `T`. Small vectors can be accessed with
//!   named fields (`v.x`, `v.g`, `v.s`, ...).
//! - [`Matrix<T, C, R>`] has `C` columns and `R` rows and is stored as an array of column vectors.
//!   Like in GLSL, the column count comes first, so a [`Mat2x3`] has 2 columns and 3 rows, and
//!   `m[col][row]` addresses a single element.
//! - Arithmetic operators work element-wise, except for the `*` operator between matrices and
//!   vectors, which is the linear algebraic product. Scalars, as well as 1-element vectors and 1x1
//!   matrices, are broadcast when combined with a larger operand.
//! - The [`glsl`] module mirrors GLSL's built-in function library.
//!
//! The element type can be any primitive number type, or anything implementing the traits in
//! this crate. Operations that need more than the basic arithmetic operators (like
//! [`Vector::length`] or [`determinant`]) state that in their trait bounds.
//!
//! # Dimensions
//!
//! Operations that change a vector or matrix dimension by one ([`Vector::tail`],
//! [`Vector::cut`], [`Matrix::tailr`], [`cut_col`], [`minor`], ...) are only available for
//! concrete dimensions: vectors with up to 16 elements and matrices with up to 8 columns and rows.
//! Determinants and inverses are available for square matrices up to 8x8.
//!
//! # Constructing values
//!
//! ```
//! use transform_linalg::*;
//!
//! let v = vec3(1.0, 2.0, 3.0);
//! let m = Mat3::from_rows([
//!     [1.0, 0.0, 0.0],
//!     [0.0, 2.0, 0.0],
//!     [0.0, 0.0, 3.0],
//! ]);
//! assert_eq!(m * v, vec3(1.0, 4.0, 9.0));
//!
//! // Scalars, vectors and matrices can be flattened into a larger vector or matrix.
//! let v4: Vec4<f64> = vector![v, 1.0];
//! assert_eq!(v4, vec4(1.0, 2.0, 3.0, 1.0));
//! let m2: Mat2<f64> = matrix![v.truncate(), 0.5, 0.25];
//! assert_eq!(m2.column(1), vec2(0.5, 0.25));
//! ```

mod approx_eq;
pub mod flatten;
pub mod glsl;
mod matrix;
mod traits;
mod vector;

pub use flatten::{Components, Flatten};
pub use matrix::*;
pub use traits::*;
pub use vector::*;
