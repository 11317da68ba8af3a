//! Vector relational functions (GLSL 4.60 section 8.7).
//!
//! The comparison operators of [`Vector`] compare whole vectors; these compare element by element
//! and return a `Vector<bool, N>`.

use crate::Vector;

macro_rules! compare {
    ($($(#[$attr:meta])* $name:ident: $bound:ident, $op:tt;)+) => {
        $(
            $(#[$attr])*
            pub fn $name<T: $bound, const N: usize>(x: Vector<T, N>, y: Vector<T, N>) -> Vector<bool, N> {
                Vector::from_fn(|i| x[i] $op y[i])
            }
        )+
    };
}

compare! {
    /// Element-wise `x < y`.
    ///
    /// ```
    /// # use transform_linalg::{*, glsl::less_than};
    /// assert_eq!(less_than(vec3(1, 5, 3), vec3(2, 4, 3)), vec3(true, false, false));
    /// ```
    less_than: PartialOrd, <;
    /// Element-wise `x <= y`.
    less_than_equal: PartialOrd, <=;
    /// Element-wise `x > y`.
    greater_than: PartialOrd, >;
    /// Element-wise `x >= y`.
    greater_than_equal: PartialOrd, >=;
    /// Element-wise `x == y`.
    equal: PartialEq, ==;
    /// Element-wise `x != y`.
    not_equal: PartialEq, !=;
}

/// Returns `true` if any element of `x` is `true`.
pub fn any<const N: usize>(x: Vector<bool, N>) -> bool {
    x.any()
}

/// Returns `true` if all elements of `x` are `true`.
pub fn all<const N: usize>(x: Vector<bool, N>) -> bool {
    x.all()
}

/// Element-wise logical complement.
pub fn not<const N: usize>(x: Vector<bool, N>) -> Vector<bool, N> {
    !x
}
