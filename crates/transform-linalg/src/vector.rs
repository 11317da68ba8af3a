use std::{
    array, fmt,
    ops::{AddAssign, SubAssign},
};

use crate::{
    traits::{Arithmetic, CastFrom, Number, Sqrt},
    MinMax, One, Zero,
};

mod dim;
mod ops;
mod view;

macro_rules! aliases {
    ($($n:literal: $name:ident $(, $elem:ident $short:ident)*;)+) => {
        $(
            #[doc = concat!("A vector with ", $n, " element(s).")]
            pub type $name<T> = Vector<T, $n>;
            $(
                #[doc = concat!("A [`", stringify!($name), "`] of [`", stringify!($elem), "`]s.")]
                pub type $short = $name<$elem>;
            )*
        )+
    };
}

aliases! {
    1: Vec1, f32 Vec1f;
    2: Vec2, f32 Vec2f, i32 Vec2i;
    3: Vec3, f32 Vec3f, i32 Vec3i;
    4: Vec4, f32 Vec4f, i32 Vec4i;
}

/// Column vector of `N` values of type `T`, laid out like `[T; N]`.
///
/// # Creating vectors
///
/// - [`vec1`] through [`vec4`] take every element as an argument.
/// - [`vector!`][crate::vector] concatenates scalars, vectors and matrices and keeps as many
///   leading elements as the target vector has.
/// - [`Vector::splat`] repeats one value, [`Vector::from_fn`] computes each element from its
///   index and [`Vector::from_head_tail`] puts an element in front of a shorter vector.
/// - `[T; N]` converts into a vector via [`From`], and [`Default`] fills every slot with
///   `T::default()`.
/// - [`Vector::ZERO`] holds only zeroes. Vectors of up to 4 elements also have the axis constants
///   `X`, `Y`, `Z` and `W`.
/// - [`Vector::cast`] performs an `as` conversion on every element.
///
/// # Reading and writing elements
///
/// Up to 4 elements have names: `x y z w`, the color names `r g b a` and the texture coordinate
/// names `s t p q` all refer to the same slots. Indexing works like on an array and panics when
/// out of range, while [`Vector::get`] returns an [`Option`]. [`Vector::head`] and `tail` split
/// off the first element.
///
/// The underlying array is reachable through [`Vector::as_array`], [`Vector::as_slice`],
/// [`Vector::into_array`], and the [`AsRef`], [`AsMut`] and [`From`] impls. If `T` is
/// [`bytemuck::Pod`], so is the vector. The [`approx`] traits compare vectors element by element.
///
/// # Operators
///
/// `+ - * / %` and `& | ^ << >>` are applied per element. The right-hand side may be a vector of
/// the same length, a scalar, or a [`Vec1`], which behaves like the scalar it contains. The
/// `op=` forms accept the same operands.
///
/// ```
/// # use transform_linalg::*;
/// let v = vec3(5i32, -1, 8) - vec3(1, 1, 2);
/// assert_eq!(v, vec3(4, -2, 6));
/// assert_eq!(v / 2, vec3(2, -1, 3));
/// assert_eq!(10 - v, vec1(10) - v);
/// ```
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// All elements set to [`T::ZERO`][Zero::ZERO].
    pub const ZERO: Self = Self([T::ZERO; N]);
}

macro_rules! axes {
    ($($n:literal => { $($axis:ident: [$($e:ident),+])+ })+) => {
        $(
            impl<T: Zero + One> Vector<T, $n> {
                $(
                    #[doc = concat!("Unit length along the ", stringify!($axis), " axis.")]
                    pub const $axis: Self = Self([$(T::$e),+]);
                )+
            }
        )+
    };
}

axes! {
    1 => { X: [ONE] }
    2 => { X: [ONE, ZERO] Y: [ZERO, ONE] }
    3 => { X: [ONE, ZERO, ZERO] Y: [ZERO, ONE, ZERO] Z: [ZERO, ZERO, ONE] }
    4 => {
        X: [ONE, ZERO, ZERO, ZERO]
        Y: [ZERO, ONE, ZERO, ZERO]
        Z: [ZERO, ZERO, ONE, ZERO]
        W: [ZERO, ZERO, ZERO, ONE]
    }
}

impl<T, const N: usize> Vector<T, N> {
    /// Element count of this vector type.
    pub const LEN: usize = N;

    /// Returns a vector in which every element is a copy of `elem`.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// assert_eq!(Vec4::splat(-1), vec4(-1, -1, -1, -1));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Builds a vector by calling `f` with each index in `0..N`, in order.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let squares: Vec4<usize> = Vector::from_fn(|i| i * i);
    /// assert_eq!(squares, vec4(0, 1, 4, 9));
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(f))
    }

    /// Transforms every element with `f`.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// assert_eq!(vec2(-3, 4).map(i32::abs), vec2(3, 4));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Pairs up the elements of `self` and `other` at equal positions.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let pairs = vec2('a', 'b').zip(vec2(true, false));
    /// assert_eq!(pairs, vec2(('a', true), ('b', false)));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut rhs = other.0.into_iter();
        self.map(|lhs| match rhs.next() {
            Some(rhs) => (lhs, rhs),
            None => unreachable!("vectors of equal length"),
        })
    }

    /// Converts the elements to `U` using `as` semantics.
    ///
    /// Float to integer conversions truncate and saturate, and integer to `bool` conversions
    /// compare against zero.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// assert_eq!(vec3(-0.5, 2.75, 300.0).cast::<u8>(), vec3(0, 2, 255));
    /// assert_eq!(vec2(-4, 0).cast::<bool>(), vec2(true, false));
    /// ```
    pub fn cast<U>(self) -> Vector<U, N>
    where
        U: CastFrom<T>,
    {
        self.map(U::cast_from)
    }

    /// Copies the leading elements into a vector of length `M`.
    ///
    /// Elements past `M` are lost, and slots past `N` are filled with [`T::ZERO`][Zero::ZERO].
    ///
    /// ```
    /// # use transform_linalg::*;
    /// assert_eq!(vec3(7, 8, 9).resize::<2>(), vec2(7, 8));
    /// assert_eq!(vec1(7).resize::<3>(), vec3(7, 0, 0));
    /// ```
    pub fn resize<const M: usize>(self) -> Vector<T, M>
    where
        T: Zero + Copy,
    {
        Vector::from_fn(|i| if i < N { self.0[i] } else { T::ZERO })
    }

    /// Returns the element at `index` if it is in range.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let v = vec3('x', 'y', 'z');
    /// assert_eq!(v.get(2), Some(&'z'));
    /// assert!(v.get(3).is_none());
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Mutable variant of [`Vector::get`].
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Returns element 0.
    ///
    /// # Panics
    ///
    /// Panics for zero-length vectors.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// assert_eq!(vec2(-2, 5).head(), -2);
    /// ```
    #[inline]
    pub fn head(&self) -> T
    where
        T: Copy,
    {
        self.0[0]
    }

    /// Overwrites element 0.
    #[inline]
    pub fn set_head(&mut self, head: T) {
        self.0[0] = head;
    }

    /// Borrows the elements as `[T; N]`.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let [x, y] = *vec2(4, 2).as_array();
    /// assert_eq!(x - y, 2);
    /// ```
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Mutably borrows the elements as `[T; N]`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Borrows the elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Borrows the elements as a mutable slice.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let mut v = vec4(4, 3, 2, 1);
    /// v.as_mut_slice().sort();
    /// assert_eq!(v, vec4(1, 2, 3, 4));
    /// ```
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Unwraps the vector into its element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Iterates over references to the elements, in index order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Adds up the elements, starting from [`T::ZERO`][Zero::ZERO].
    ///
    /// ```
    /// # use transform_linalg::*;
    /// assert_eq!(vec3(0.5, 0.25, 0.25).sum(), 1.0);
    /// ```
    pub fn sum(self) -> T
    where
        T: Arithmetic,
    {
        self.0.into_iter().fold(T::ZERO, |acc, elem| acc + elem)
    }

    /// Sum of the products of corresponding elements.
    ///
    /// For unit vectors this is the cosine of the angle between them: positive when they point
    /// into the same half-space, zero when perpendicular.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// assert_eq!(vec3(2, 0, -1).dot(vec3(3, 9, 4)), 2);
    /// assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Arithmetic,
    {
        self.zip(other).map(|(a, b)| a * b).sum()
    }

    /// Squared Euclidean length, which avoids the square root.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// assert_eq!(vec3(1, -2, 2).length2(), 9);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Arithmetic,
    {
        self.dot(*self)
    }

    /// Euclidean length.
    ///
    /// Integer vectors get the square root rounded towards zero.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// assert_eq!(vec2(2, 2).length(), 2);
    /// ```
    pub fn length(&self) -> T
    where
        T: Arithmetic + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Euclidean distance between two points.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// assert_eq!(vec2(1, 1).distance(vec2(7, 9)), 10);
    /// ```
    pub fn distance(self, other: Self) -> T
    where
        T: Arithmetic + Sqrt,
    {
        (other - self).length()
    }

    /// Scales the vector to length 1.
    ///
    /// Zero vectors are divided by zero, which yields `NaN`s for floats and panics for integers.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// assert_eq!(vec2(-3.0, 4.0).normalize(), vec2(-0.6, 0.8));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Arithmetic + Sqrt,
    {
        self / self.length()
    }

    /// Flips `self` unless `incident` and `nref` point against each other.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let n = vec2(0.0, 1.0);
    /// let down = vec2(0.5, -1.0);
    /// assert_eq!(n.faceforward(down, n), n);
    /// assert_eq!(n.faceforward(-down, n), -n);
    /// ```
    pub fn faceforward(self, incident: Self, nref: Self) -> Self
    where
        T: Number + PartialOrd,
    {
        match nref.dot(incident) < T::ZERO {
            true => self,
            false => -self,
        }
    }

    /// Mirrors the direction `self` at a surface with the unit normal `normal`.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// assert_eq!(vec3(2.0, 0.0, 3.0).reflect(-Vec3f::X), vec3(-2.0, 0.0, 3.0));
    /// ```
    pub fn reflect(self, normal: Self) -> Self
    where
        T: Arithmetic,
    {
        let twice = normal.dot(self) + normal.dot(self);
        self - normal * twice
    }

    /// Bends the unit direction `self` as it passes through a surface with unit normal `normal`,
    /// where `eta` is the ratio of refractive indices.
    ///
    /// Total internal reflection produces the zero vector.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let straight_down = -Vec3f::Y;
    /// assert_eq!(straight_down.refract(Vec3f::Y, 0.75), straight_down);
    /// ```
    pub fn refract(self, normal: Self, eta: T) -> Self
    where
        T: Arithmetic + Sqrt + PartialOrd,
    {
        let cos_i = normal.dot(self);
        let k = T::ONE - eta * eta * (T::ONE - cos_i * cos_i);
        if k < T::ZERO {
            return Self::ZERO;
        }
        self * eta - normal * (eta * cos_i + k.sqrt())
    }

    /// Per-element minimum. A `NaN` loses against any number.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let v = vec3(f32::NAN, 4.0, -1.0).min(vec3(2.0, 0.5, f32::INFINITY));
    /// assert_eq!(v, vec3(2.0, 0.5, -1.0));
    /// ```
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        self.zip(other).map(|(a, b)| a.min(b))
    }

    /// Per-element maximum. A `NaN` loses against any number.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let v = vec3(f32::NAN, 4.0, -1.0).max(vec3(2.0, 0.5, f32::INFINITY));
    /// assert_eq!(v, vec3(2.0, 4.0, f32::INFINITY));
    /// ```
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        self.zip(other).map(|(a, b)| a.max(b))
    }

    /// Restricts each element to the range given by the matching elements of `min` and `max`.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let v = vec4(-8, 0, 3, 9).clamp(vec4(0, 1, 0, 0), Vector::splat(5));
    /// assert_eq!(v, vec4(0, 1, 3, 5));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].clamp(min[i], max[i]))
    }

    /// Adds one to each element and returns the updated vector, like prefix `++`.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let mut counters = vec3(0u8, 9, 1);
    /// counters.inc();
    /// assert_eq!(counters, vec3(1, 10, 2));
    /// ```
    pub fn inc(&mut self) -> &mut Self
    where
        T: AddAssign + One,
    {
        self.0.iter_mut().for_each(|elem| *elem += T::ONE);
        self
    }

    /// Subtracts one from each element, like prefix `--`.
    pub fn dec(&mut self) -> &mut Self
    where
        T: SubAssign + One,
    {
        self.0.iter_mut().for_each(|elem| *elem -= T::ONE);
        self
    }

    /// Like [`Vector::inc`], but returns the value from before the increment (postfix `++`).
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let mut v = vec2(-1.0, 0.5);
    /// let before = v.post_inc();
    /// assert_eq!((before, v), (vec2(-1.0, 0.5), vec2(0.0, 1.5)));
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

impl<const N: usize> Vector<bool, N> {
    /// `&&` applied per element.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let mask = vec3(true, true, false).and(vec3(false, true, true));
    /// assert_eq!(mask, vec3(false, true, false));
    /// ```
    pub fn and(self, other: Self) -> Self {
        self.zip(other).map(|(a, b)| a && b)
    }

    /// `||` applied per element.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// let mask = vec3(true, false, false).or(vec3(false, false, true));
    /// assert_eq!(mask, vec3(true, false, true));
    /// ```
    pub fn or(self, other: Self) -> Self {
        self.zip(other).map(|(a, b)| a || b)
    }

    /// Whether at least one element is set.
    pub fn any(self) -> bool {
        self.0.contains(&true)
    }

    /// Whether every element is set.
    pub fn all(self) -> bool {
        !self.0.contains(&false)
    }
}

impl<T> Vector<T, 3> {
    /// Returns the vector perpendicular to `self` and `other` that completes a right-handed
    /// system. Its length is the area of the parallelogram spanned by both inputs.
    ///
    /// The product is anti-commutative: `a.cross(b) == -b.cross(a)`.
    ///
    /// ```
    /// # use transform_linalg::*;
    /// assert_eq!(Vec3i::Y.cross(Vec3i::Z), Vec3i::X);
    /// assert_eq!(vec3(2, 0, 0).cross(vec3(0, 0, 3)), vec3(0, -6, 0));
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Arithmetic,
    {
        // Each element is the 2x2 determinant of the other two axes.
        let det = |i: usize, j: usize| self[i] * other[j] - self[j] * other[i];
        vec3(det(1, 2), det(2, 0), det(0, 1))
    }
}

impl<T: Default, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(elems: [T; N]) -> Self {
        Self(elems)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Writes `(a, b, c)`, forwarding the formatter's flags to every element.
fn write_elems<T>(
    f: &mut fmt::Formatter<'_>,
    elems: &[T],
    write: impl Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result {
    f.write_str("(")?;
    for (i, elem) in elems.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write(elem, f)?;
    }
    f.write_str(")")
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elems(f, &self.0, fmt::Debug::fmt)
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elems(f, &self.0, fmt::Display::fmt)
    }
}

macro_rules! borrow_impls {
    ($($target:ty),+) => {
        $(
            impl<T, const N: usize> AsRef<$target> for Vector<T, N> {
                fn as_ref(&self) -> &$target {
                    &self.0
                }
            }

            impl<T, const N: usize> AsMut<$target> for Vector<T, N> {
                fn as_mut(&mut self) -> &mut $target {
                    &mut self.0
                }
            }
        )+
    };
}

borrow_impls!([T], [T; N]);

macro_rules! constructors {
    ($($name:ident: $alias:ident($($arg:ident),+);)+) => {
        $(
            #[doc = concat!("Builds a [`", stringify!($alias), "`] from its elements.")]
            #[inline]
            pub const fn $name<T>($($arg: T),+) -> $alias<T> {
                Vector([$($arg),+])
            }
        )+
    };
}

constructors! {
    vec1: Vec1(x);
    vec2: Vec2(x, y);
    vec3: Vec3(x, y, z);
    vec4: Vec4(x, y, z, w);
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn named_elements() {
        assert_eq!(Vec3f::Z.z, 1.0);
        assert_eq!(Vec3f::Z.truncate(), Vec2f::ZERO);
        assert_eq!(Vec4i::W.as_array(), &[0, 0, 0, 1]);
        assert_eq!(Vec2i::Y[1], 1);

        let mut color = vec4(0.1f32, 0.2, 0.3, 1.0);
        assert_eq!((color.r, color.g, color.b, color.a), (color.x, color.y, color.z, color.w));
        color.a = 0.5;
        color.p = 0.0;
        assert_eq!(color.w, 0.5);
        assert_eq!(color[2], 0.0);

        let mut uv = vec2(3, 7);
        assert_eq!((uv.s, uv.t), (3, 7));
        uv.s += 10;
        uv[1] *= 2;
        assert_eq!(uv, [13, 14]);
        assert_eq!((uv.r, uv.g), (13, 14));
    }

    #[test]
    fn larger_vectors() {
        let v: Vector<u16, 9> = Vector::from_fn(|i| 10 * i as u16);
        assert_eq!(v[8], 80);
        assert_eq!(v.iter().copied().max(), Some(80));
        assert!(v.get(9).is_none());
        assert_eq!(Vector::<f64, 7>::LEN, 7);
        assert_eq!(Vector::<i8, 12>::default(), Vector::<i8, 12>::ZERO);
        assert_eq!(<[u16; 9]>::from(v)[3], 30);
    }

    #[test]
    #[should_panic]
    fn index_past_end() {
        let v = vec2(0.0, 1.0);
        let idx = v.as_slice().len();
        let _ = v[idx];
    }

    #[test]
    fn formatting() {
        assert_eq!(format!("{}", vec3(1.5, -2.0, 0.0)), "(1.5, -2, 0)");
        assert_eq!(format!("{:?}", vec2(-1.0f32, 0.5)), "(-1.0, 0.5)");
        assert_eq!(format!("{:.2}", vec2(1.0f64, 0.126)), "(1.00, 0.13)");
        assert_eq!(format!("{:?}", vec1('q')), "('q')");
    }

    #[test]
    fn products() {
        assert_eq!(vec4(1, 0, -2, 3).dot(vec4(5, 5, 1, -1)), 0);
        assert_eq!(vec2(-4, 3).length2(), 25);
        assert_eq!(vec3(1u64, 2, 3).dot(vec3(3, 2, 1)), 10);
        assert_eq!(Vec3f::Y.dot(-Vec3f::Y), -1.0);

        let a = vec3(3, -1, 2);
        let b = vec3(0, 4, 1);
        let c = a.cross(b);
        assert_eq!(c, vec3(-9, -3, 12));
        assert_eq!(c.dot(a), 0);
        assert_eq!(c.dot(b), 0);
        assert_eq!(b.cross(a), -c);
    }

    #[test]
    fn geometric() {
        assert_eq!(vec3(0, 0, -6).length(), 6);
        assert_eq!(vec2(5, 1).distance(vec2(-1, 9)), 10);

        let v = vec3(-2.5f32, 0.25, 8.0);
        assert_relative_eq!(v.normalize().length(), 1.0);
        assert_relative_eq!(v.normalize() * v.length(), v, epsilon = 1e-5);
        assert_eq!(v.distance(Vec3f::X), Vec3f::X.distance(v));
    }

    #[test]
    fn reflect_refract() {
        let floor = Vec2f::Y;
        assert_eq!(vec2(3.0f32, -2.0).reflect(floor), vec2(3.0, 2.0));
        assert_eq!(vec2(3.0f32, 2.0).reflect(floor).reflect(floor), vec2(3.0, 2.0));

        // Leaving glass at a shallow angle stays inside.
        let shallow = vec2(1.0f32, -0.2).normalize();
        assert_eq!(shallow.refract(floor, 1.5), Vec2f::ZERO);

        // Without a change in medium, the ray keeps its direction.
        let ray = vec2(0.6f32, -0.8);
        assert_abs_diff_eq!(ray.refract(floor, 1.0), ray, epsilon = 1e-6);
    }

    #[test]
    fn increment() {
        let mut v = vec2(-1i64, 10);
        assert_eq!(*v.dec().dec(), vec2(-3, 8));
        assert_eq!(v.post_inc(), vec2(-3, 8));
        assert_eq!(v.post_dec(), vec2(-2, 9));
        assert_eq!(v, vec2(-3, 8));
    }

    #[test]
    fn bool_logic() {
        let a = vec4(true, true, false, false);
        let b = vec4(true, false, true, false);
        assert_eq!(a.and(b), vec4(true, false, false, false));
        assert_eq!(a.or(b), vec4(true, true, true, false));
        assert!(a.any() && !a.all());
        assert!(vec2(true, true).all());
        assert!(!Vector::<bool, 3>::default().any());
        assert!(!Vector::<bool, 1>::default().all());
        assert!(Vector::<bool, 1>::splat(true).all());
        assert_eq!(!a, vec4(false, false, true, true));
    }

    #[test]
    fn conversions() {
        assert_eq!(vec2(-7.9f32, 7.9).cast::<i16>(), vec2(-7, 7));
        assert_eq!(vec3(255u8, 0, 1).cast::<f64>(), vec3(255.0, 0.0, 1.0));
        assert_eq!(vec4(4, 3, 2, 1).resize::<1>(), vec1(4));
        assert_eq!(vec2(0.5, -0.5).resize::<4>(), vec4(0.5, -0.5, 0.0, 0.0));
    }
}
