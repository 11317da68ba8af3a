//! Operations that change the length of a vector.
//!
//! Stable const generics can't express `N - 1` or `N + 1`, so these are implemented for every
//! concrete length up to 16. Vectors always keep at least one element:
//!
//! ```compile_fail
//! # use transform_linalg::*;
//! let _empty = vec1(1).truncate();
//! ```

use super::Vector;

macro_rules! impl_dims {
    ($($n:literal => $m:literal),+ $(,)?) => {
        $(
            impl<T: Copy> Vector<T, $n> {
                /// Creates a vector from its first element and a vector containing the rest.
                ///
                /// # Examples
                ///
                /// ```
                /// # use transform_linalg::*;
                /// let v = Vec3::from_head_tail(1, vec2(2, 3));
                /// assert_eq!(v, vec3(1, 2, 3));
                /// ```
                pub fn from_head_tail(head: T, tail: Vector<T, $m>) -> Self {
                    Self::from_fn(|i| if i == 0 { head } else { tail.0[i - 1] })
                }

                /// Returns every element except the first one.
                ///
                /// # Examples
                ///
                /// ```
                /// # use transform_linalg::*;
                /// assert_eq!(vec3(1, 2, 3).tail(), vec2(2, 3));
                /// ```
                pub fn tail(&self) -> Vector<T, $m> {
                    Vector::from_fn(|i| self.0[i + 1])
                }

                /// Overwrites every element except the first one.
                ///
                /// # Examples
                ///
                /// ```
                /// # use transform_linalg::*;
                /// let mut v = vec3(1, 2, 3);
                /// v.set_tail(vec2(8, 9));
                /// assert_eq!(v, vec3(1, 8, 9));
                /// ```
                pub fn set_tail(&mut self, tail: Vector<T, $m>) {
                    self.0[1..].copy_from_slice(tail.as_slice());
                }

                /// Removes the last element of this vector.
                pub fn truncate(self) -> Vector<T, $m> {
                    Vector::from_fn(|i| self.0[i])
                }

                /// Removes the element at `index`, shifting all following elements down.
                ///
                /// # Panics
                ///
                /// Panics if `index` is out of bounds.
                ///
                /// # Examples
                ///
                /// ```
                /// # use transform_linalg::*;
                /// assert_eq!(vec4(1, 2, 3, 4).cut(1), vec3(1, 3, 4));
                /// assert_eq!(vec2(1, 2).cut(1), vec1(1));
                /// ```
                #[track_caller]
                pub fn cut(self, index: usize) -> Vector<T, $m> {
                    assert!(
                        index < $n,
                        "cannot remove element {index} from a vector of length {}",
                        $n
                    );
                    Vector::from_fn(|i| if i < index { self.0[i] } else { self.0[i + 1] })
                }
            }

            impl<T: Copy> Vector<T, $m> {
                /// Appends another value to the vector.
                ///
                /// # Examples
                ///
                /// ```
                /// # use transform_linalg::*;
                /// assert_eq!(vec3(-1.0, 2.0, 3.5).extend(99.0), vec4(-1.0, 2.0, 3.5, 99.0));
                /// ```
                pub fn extend(self, value: T) -> Vector<T, $n> {
                    Vector::from_fn(|i| if i < $m { self.0[i] } else { value })
                }
            }
        )+
    };
}

impl_dims!(
    2 => 1,
    3 => 2,
    4 => 3,
    5 => 4,
    6 => 5,
    7 => 6,
    8 => 7,
    9 => 8,
    10 => 9,
    11 => 10,
    12 => 11,
    13 => 12,
    14 => 13,
    15 => 14,
    16 => 15,
);
