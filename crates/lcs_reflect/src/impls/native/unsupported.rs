//! Types without a canonical wire form.
//!
//! They are reflected so that the codec can name them when it rejects a
//! descriptor, instead of failing at compile time deep inside a derive.

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, Typed};
use crate::reflection::impl_reflect_cast_fn;

macro_rules! impl_reflect_opaque {
    ($($ty:ty),* $(,)?) => {$(
        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<$ty>()))
            }
        }

        impl Reflect for $ty {
            impl_reflect_cast_fn!(Opaque);
        }
    )*};
}

impl_reflect_opaque!(f32, f64, usize, isize, char);
