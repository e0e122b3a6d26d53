use alloc::string::String;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, ReflectKind, TypeInfo, Typed};
use crate::ops::{ReflectMut, ReflectRef};

impl Typed for String {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Text(OpaqueInfo::new::<String>()))
    }
}

impl Reflect for String {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Text
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Text(self.as_str())
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Text(self)
    }
}
