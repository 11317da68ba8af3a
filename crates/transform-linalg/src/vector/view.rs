//! Named element access for vectors with up to 4 elements.
//!
//! `Vector<T, N>` derefs to a `#[repr(C)]` struct with `x`/`y`/`z`/`w` fields, which derefs to one
//! with `r`/`g`/`b`/`a` fields, which in turn derefs to one with `s`/`t`/`p`/`q` fields. All of
//! them alias the same storage.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

macro_rules! views {
    ($($name:ident { $($field:ident),+ })+) => {
        $(
            #[repr(C)]
            pub struct $name<T> {
                $(pub $field: T,)+
                _priv: (), // prevent external construction
            }
        )+
    };
}

views! {
    X { x }
    XY { x, y }
    XYZ { x, y, z }
    XYZW { x, y, z, w }

    R { r }
    RG { r, g }
    RGB { r, g, b }
    RGBA { r, g, b, a }

    S { s }
    ST { s, t }
    STP { s, t, p }
    STPQ { s, t, p, q }
}

macro_rules! deref {
    ($($from:ty => $to:ident,)+) => {
        $(
            impl<T> Deref for $from {
                type Target = $to<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    // Safety: both types are `#[repr(C)]`/`#[repr(transparent)]` sequences of the
                    // same number of `T`s, and the trailing `()` field has size 0.
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T> DerefMut for $from {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }
        )+
    };
}

deref! {
    Vector<T, 1> => X,
    Vector<T, 2> => XY,
    Vector<T, 3> => XYZ,
    Vector<T, 4> => XYZW,

    X<T> => R,
    XY<T> => RG,
    XYZ<T> => RGB,
    XYZW<T> => RGBA,

    R<T> => S,
    RG<T> => ST,
    RGB<T> => STP,
    RGBA<T> => STPQ,
}
