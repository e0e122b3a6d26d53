use alloc::boxed::Box;

use crate::Reflect;
use crate::info::{ReflectKind, TypeInfo, Typed};
use crate::ops::{ReflectMut, ReflectRef};

// `Box<T>` has the shape and wire form of `T`; it only adds the
// indirection recursive types need.

impl<T: Reflect + Typed> Typed for Box<T> {
    #[inline]
    fn type_info() -> &'static TypeInfo {
        T::type_info()
    }
}

impl<T: Reflect + Typed> Reflect for Box<T> {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        (**self).reflect_kind()
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        (**self).reflect_ref()
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        (**self).reflect_mut()
    }
}
