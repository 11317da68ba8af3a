//! Operator overloads.
//!
//! Every binary operator comes in three shapes: vector-vector (element-wise), vector-scalar
//! and scalar-vector (the scalar is applied to every element), and vector-[`Vec1`] / [`Vec1`]-vector
//! (the single element is broadcast like a scalar).
//!
//! [`Vec1`]: crate::Vec1

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// Allows comparing across element types, which `derive` can't express.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.0.eq(other)
    }
}

impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise logical or bitwise negation.
impl<T, const N: usize> Not for Vector<T, N>
where
    T: Not,
{
    type Output = Vector<T::Output, N>;

    fn not(self) -> Self::Output {
        self.map(T::not)
    }
}

macro_rules! binop {
    ($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident, $desc:literal) => {
        #[doc = concat!("Element-wise ", $desc, ".")]
        impl<T, const N: usize> $Op<Vector<T, N>> for Vector<T, N>
        where
            T: $Op,
        {
            type Output = Vector<T::Output, N>;

            fn $op(self, rhs: Vector<T, N>) -> Self::Output {
                self.zip(rhs).map(|(l, r)| $Op::$op(l, r))
            }
        }

        #[doc = concat!("Element-wise ", $desc, ".")]
        impl<T, const N: usize> $OpAssign<Vector<T, N>> for Vector<T, N>
        where
            T: $OpAssign,
        {
            fn $op_assign(&mut self, rhs: Vector<T, N>) {
                self.as_mut_slice()
                    .iter_mut()
                    .zip(rhs.into_array())
                    .for_each(|(lhs, rhs)| $OpAssign::$op_assign(lhs, rhs));
            }
        }

        #[doc = concat!("Vector-Scalar ", $desc, ".")]
        impl<T, const N: usize> $Op<T> for Vector<T, N>
        where
            T: $Op + Copy,
        {
            type Output = Vector<T::Output, N>;

            fn $op(self, rhs: T) -> Self::Output {
                self.map(|lhs| $Op::$op(lhs, rhs))
            }
        }

        #[doc = concat!("Vector-Scalar ", $desc, ".")]
        impl<T, const N: usize> $OpAssign<T> for Vector<T, N>
        where
            T: $OpAssign + Copy,
        {
            fn $op_assign(&mut self, rhs: T) {
                self.as_mut_slice()
                    .iter_mut()
                    .for_each(|lhs| $OpAssign::$op_assign(lhs, rhs));
            }
        }

        binop!(@broadcast $Op::$op, $OpAssign::$op_assign, $desc; 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16);
    };
    // `Vector<T, 1>` on either side is broadcast. `N == 1` is already covered by the element-wise
    // impls above, so these are only implemented for concrete `N >= 2`.
    (@broadcast $Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident, $desc:literal; $($n:literal)+) => {
        $(
            #[doc = concat!("Broadcasting ", $desc, " with a 1-element vector.")]
            impl<T> $Op<Vector<T, 1>> for Vector<T, $n>
            where
                T: $Op + Copy,
            {
                type Output = Vector<T::Output, $n>;

                fn $op(self, rhs: Vector<T, 1>) -> Self::Output {
                    let [rhs] = rhs.0;
                    self.map(|lhs| $Op::$op(lhs, rhs))
                }
            }

            #[doc = concat!("Broadcasting ", $desc, " with a 1-element vector.")]
            impl<T> $Op<Vector<T, $n>> for Vector<T, 1>
            where
                T: $Op + Copy,
            {
                type Output = Vector<T::Output, $n>;

                fn $op(self, rhs: Vector<T, $n>) -> Self::Output {
                    let [lhs] = self.0;
                    rhs.map(|rhs| $Op::$op(lhs, rhs))
                }
            }

            #[doc = concat!("Broadcasting ", $desc, " with a 1-element vector.")]
            impl<T> $OpAssign<Vector<T, 1>> for Vector<T, $n>
            where
                T: $OpAssign + Copy,
            {
                fn $op_assign(&mut self, rhs: Vector<T, 1>) {
                    $OpAssign::$op_assign(self, rhs.0[0]);
                }
            }
        )+
    };
}

binop!(Add::add, AddAssign::add_assign, "addition");
binop!(Sub::sub, SubAssign::sub_assign, "subtraction");
binop!(Mul::mul, MulAssign::mul_assign, "multiplication");
binop!(Div::div, DivAssign::div_assign, "division");
binop!(Rem::rem, RemAssign::rem_assign, "remainder");
binop!(BitAnd::bitand, BitAndAssign::bitand_assign, "bitwise and");
binop!(BitOr::bitor, BitOrAssign::bitor_assign, "bitwise or");
binop!(BitXor::bitxor, BitXorAssign::bitxor_assign, "bitwise xor");
binop!(Shl::shl, ShlAssign::shl_assign, "left shift");
binop!(Shr::shr, ShrAssign::shr_assign, "right shift");

// NB: a blanket `impl<T> Add<Vector<T, N>> for T` is rejected by coherence, so scalar-vector
// operators are implemented for each primitive type.
macro_rules! scalar_lhs {
    (@type $t:ty: [$($Op:ident::$op:ident),+]) => {
        $(
            impl<const N: usize> $Op<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn $op(self, rhs: Vector<$t, N>) -> Self::Output {
                    rhs.map(|rhs| $Op::$op(self, rhs))
                }
            }
        )+
    };
    ($ops:tt for $($types:ty),+) => {
        $(
            scalar_lhs!(@type $types: $ops);
        )+
    };
}

scalar_lhs!(
    [Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem]
    for u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64
);
scalar_lhs!(
    [BitAnd::bitand, BitOr::bitor, BitXor::bitxor, Shl::shl, Shr::shr]
    for u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize
);
scalar_lhs!([BitAnd::bitand, BitOr::bitor, BitXor::bitxor] for bool);

#[cfg(test)]
mod tests {
    use crate::{vec1, vec2, vec3, Vector};

    fn vec6(v: [i32; 6]) -> Vector<i32, 6> {
        v.into()
    }

    #[test]
    fn vector_vector() {
        assert_eq!(vec3(1, 2, 4) + vec3(2, 4, 8), vec3(3, 6, 12));
        assert_eq!(vec3(3, 6, 12) * vec3(2, 4, 8), vec3(6, 24, 96));

        let a = vec6([10, 20, 30, 40, 50, 60]);
        let b = vec6([1, 2, 3, 4, 5, 7]);
        assert_eq!(a - b, [9, 18, 27, 36, 45, 53]);
        assert_eq!(a / b, [10, 10, 10, 10, 10, 8]);
        assert_eq!(a % b, [0, 0, 0, 0, 0, 4]);
        assert_eq!(a & b, [10 & 1, 20 & 2, 30 & 3, 40 & 4, 50 & 5, 60 & 7]);
        assert_eq!(a | b, [10 | 1, 20 | 2, 30 | 3, 40 | 4, 50 | 5, 60 | 7]);
        assert_eq!(a ^ b, [10 ^ 1, 20 ^ 2, 30 ^ 3, 40 ^ 4, 50 ^ 5, 60 ^ 7]);
        assert_eq!(b << b, [2, 8, 24, 64, 160, 896]);
        assert_eq!(a >> b, [5, 5, 3, 2, 1, 0]);
    }

    #[test]
    fn scalar_and_broadcast() {
        let a = vec6([1, 2, 3, 4, 5, 6]);
        let expected = vec6([3, 4, 5, 6, 7, 8]);
        assert_eq!(a + 2, expected);
        assert_eq!(2 + a, expected);
        assert_eq!(a + vec1(2), expected);
        assert_eq!(vec1(2) + a, expected);

        assert_eq!(10 - a, vec6([9, 8, 7, 6, 5, 4]));
        assert_eq!(vec1(10) - a, 10 - a);
        assert_eq!(a - vec1(1), a - 1);
        assert_eq!(a * vec1(3), 3 * a);
        assert_eq!(a / vec1(2), a / 2);
        assert_eq!(12 / a, vec6([12, 6, 4, 3, 2, 2]));
        assert_eq!(a % 4, vec6([1, 2, 3, 0, 1, 2]));
        assert_eq!(vec1(7) % a, 7 % a);
        assert_eq!(a << 1, a * 2);
        assert_eq!(1 << a, vec6([2, 4, 8, 16, 32, 64]));
        assert_eq!(a >> vec1(1), vec6([0, 1, 1, 2, 2, 3]));
        assert_eq!(a & 1, vec6([1, 0, 1, 0, 1, 0]));
        assert_eq!(a | vec1(1), vec6([1, 3, 3, 5, 5, 7]));
        assert_eq!(6 ^ a, vec6([7, 4, 5, 2, 3, 0]));

        assert_eq!(2.0f32 * vec2(1.5, -1.0), vec2(3.0, -2.0));
        assert_eq!(vec2(1.5f32, -1.0) / vec1(0.5), vec2(3.0, -2.0));
    }

    #[test]
    fn assign() {
        let mut v = vec6([1, 2, 3, 4, 5, 6]);
        v += 1;
        assert_eq!(v, [2, 3, 4, 5, 6, 7]);
        v -= vec1(2);
        assert_eq!(v, [0, 1, 2, 3, 4, 5]);
        v *= vec6([2, 2, 2, 2, 2, 2]);
        assert_eq!(v, [0, 2, 4, 6, 8, 10]);
        v /= 2;
        assert_eq!(v, [0, 1, 2, 3, 4, 5]);
        v %= vec1(3);
        assert_eq!(v, [0, 1, 2, 0, 1, 2]);
        v <<= 2;
        assert_eq!(v, [0, 4, 8, 0, 4, 8]);
        v >>= vec1(1);
        assert_eq!(v, [0, 2, 4, 0, 2, 4]);
        v |= 1;
        assert_eq!(v, [1, 3, 5, 1, 3, 5]);
        v &= vec1(6);
        assert_eq!(v, [0, 2, 4, 0, 2, 4]);
        v ^= vec6([1, 1, 1, 1, 1, 1]);
        assert_eq!(v, [1, 3, 5, 1, 3, 5]);

        let mut one = vec1(4);
        one += vec1(1);
        one *= 2;
        assert_eq!(one, vec1(10));
    }

    #[test]
    fn unary() {
        assert_eq!(-vec3(1, -2, 0), vec3(-1, 2, 0));
        assert_eq!(!vec2(0u8, 0xf0), vec2(0xff, 0x0f));
        assert_eq!(!vec2(true, false), vec2(false, true));
    }

    #[test]
    fn bool_vectors() {
        let a = vec3(true, false, true);
        let b = vec3(false, false, true);
        assert_eq!(a & b, a.and(b));
        assert_eq!(a | b, a.or(b));
        assert_eq!(a ^ b, vec3(true, false, false));
        assert_eq!(true & a, a);
    }

    #[test]
    fn equality() {
        assert_eq!(vec3(1, 2, 3), vec3(1, 2, 3));
        assert_ne!(vec3(1, 2, 3), vec3(1, 2, 4));
        assert_eq!(vec3(1, 2, 3), [1, 2, 3]);
        assert_eq!([1, 2, 3], vec3(1, 2, 3));
        assert_eq!(vec3(1, 2, 3), [1, 2, 3][..]);
        // Floating-point comparison is exact.
        assert_ne!(vec2(0.1 + 0.2, 0.0), vec2(0.3, 0.0));
    }
}
