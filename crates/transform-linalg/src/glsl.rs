//! Free functions mirroring the GLSL built-in function library.
//!
//! Functions are named after their GLSL counterparts, in `snake_case` (`inversesqrt`,
//! `less_than_equal`, `matrix_comp_mult`). GLSL's `mod` is called [`modulo`] and the 2-argument
//! form of `atan` is called [`atan2`].
//!
//! All functions operate element-wise on [`Vector`]s. Wherever GLSL accepts either a scalar or a
//! vector, these functions take any [`Broadcast`] type: a scalar, a vector of the right length, or
//! a 1-element vector.
//!
//! ```
//! # use transform_linalg::{*, glsl::*};
//! let x = vec3(0.0f32, 0.5, 1.0);
//! assert_eq!(step(0.5, x), vec3(0.0, 1.0, 1.0));
//! assert_eq!(step(vec1(0.5), x), step(Vec3f::splat(0.5), x));
//! assert_eq!(clamp(x * 2.0, 0.25, 1.0), vec3(0.25, 1.0, 1.0));
//! ```

mod common;
mod exponential;
mod geometric;
mod matrix;
mod trigonometric;
mod vector_relational;

pub use common::*;
pub use exponential::*;
pub use geometric::*;
pub use matrix::*;
pub use trigonometric::*;
pub use vector_relational::*;

use crate::Vector;

/// Values that can be used wherever an `N`-element vector with element type `T` is expected.
///
/// This is implemented for:
///
/// - `Vector<T, N>` itself.
/// - Primitive scalars, which are copied into every element.
/// - `Vector<T, 1>`, whose element is copied into every element.
pub trait Broadcast<T, const N: usize> {
    /// Converts `self` to an `N`-element vector.
    fn broadcast(self) -> Vector<T, N>;
}

impl<T, const N: usize> Broadcast<T, N> for Vector<T, N> {
    #[inline]
    fn broadcast(self) -> Vector<T, N> {
        self
    }
}

macro_rules! broadcast_vec1 {
    ($($n:literal)+) => {
        $(
            impl<T: Copy> Broadcast<T, $n> for Vector<T, 1> {
                #[inline]
                fn broadcast(self) -> Vector<T, $n> {
                    Vector::splat(self[0])
                }
            }
        )+
    };
}

broadcast_vec1!(2 3 4 5 6 7 8 9 10 11 12 13 14 15 16);

macro_rules! broadcast_scalar {
    ($($types:ty),+) => {
        $(
            impl<const N: usize> Broadcast<$types, N> for $types {
                #[inline]
                fn broadcast(self) -> Vector<$types, N> {
                    Vector::splat(self)
                }
            }
        )+
    };
}

broadcast_scalar!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool);

#[cfg(test)]
mod tests {
    use crate::{vec1, vec3, Vec3, Vector};

    use super::Broadcast;

    #[test]
    fn broadcast() {
        let v: Vec3<i32> = 4.broadcast();
        assert_eq!(v, vec3(4, 4, 4));
        let v: Vec3<i32> = vec1(4).broadcast();
        assert_eq!(v, vec3(4, 4, 4));
        assert_eq!(vec3(1, 2, 3).broadcast(), vec3(1, 2, 3));
        let v: Vector<bool, 5> = true.broadcast();
        assert!(v.all());
    }
}
