//! Truthiness of element values.
//!
//! [`SequenceExt::first_truthy`](crate::SequenceExt::first_truthy) treats a falsy first
//! element the same way as an empty sequence. This module defines which values count
//! as falsy: numeric zero, NaN, `false`, the empty string and `None`.

/// Reports whether a value is "truthy".
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

macro_rules! impl_truthy_int {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Truthy for f32 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}
