use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{ReflectKind, ScalarInfo, ScalarKind, TypeInfo, Typed};
use crate::ops::{ReflectMut, ReflectRef, ScalarMut, ScalarRef};

macro_rules! impl_reflect_scalar {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Scalar(ScalarInfo::new::<$ty>(ScalarKind::$kind)))
            }
        }

        impl Reflect for $ty {
            #[inline]
            fn reflect_kind(&self) -> ReflectKind {
                ReflectKind::Scalar
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Scalar(ScalarRef::$kind(*self))
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Scalar(ScalarMut::$kind(self))
            }
        }
    )*};
}

impl_reflect_scalar! {
    bool => Bool,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{ScalarKind, Typed};
    use crate::ops::{ReflectMut, ReflectRef, ScalarMut, ScalarRef};

    #[test]
    fn scalar_views() {
        assert!(matches!((-3_i16).reflect_ref(), ReflectRef::Scalar(ScalarRef::I16(-3))));

        let mut x = 1_u64;
        if let ReflectMut::Scalar(ScalarMut::U64(v)) = x.reflect_mut() {
            *v = 42;
        }
        assert_eq!(x, 42);

        let info = u128::type_info().as_scalar().unwrap();
        assert_eq!(info.kind(), ScalarKind::U128);
        assert_eq!(info.kind().width(), 16);
    }
}
