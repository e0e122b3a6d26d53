use core::{error, fmt};

use crate::info::{ArrayInfo, ListInfo, MapInfo, OpaqueInfo};
use crate::info::{OptionalInfo, ScalarInfo, StructInfo, Type, VariantInfo};

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" of a reflected type.
///
/// Each kind corresponds to a shape of the wire format, and (except for
/// `Scalar`, `Text` and `Opaque`) to a shape trait in [`ops`](crate::ops).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Scalar,
    Text,
    Array,
    List,
    Map,
    Optional,
    Struct,
    Variant,
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => f.pad("Scalar"),
            Self::Text => f.pad("Text"),
            Self::Array => f.pad("Array"),
            Self::List => f.pad("List"),
            Self::Map => f.pad("Map"),
            Self::Optional => f.pad("Optional"),
            Self::Struct => f.pad("Struct"),
            Self::Variant => f.pad("Variant"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Error returned when a `TypeInfo` value is not the expected `ReflectKind`.
#[derive(Debug)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information for reflected types.
///
/// Obtained through [`Typed::type_info`](crate::info::Typed::type_info),
/// or [`DynamicTyped::reflect_type_info`](crate::info::DynamicTyped::reflect_type_info)
/// when only a `dyn Reflect` is at hand.
///
/// `Box<T>` reports the info of `T`.
///
/// # Examples
///
/// ```
/// use lcs_reflect::info::{ReflectKind, Typed};
///
/// assert_eq!(u32::type_info().kind(), ReflectKind::Scalar);
/// assert_eq!(<Vec<String>>::type_info().kind(), ReflectKind::List);
/// assert_eq!(f64::type_info().kind(), ReflectKind::Opaque);
/// ```
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Scalar(ScalarInfo),
    Text(OpaqueInfo),
    Array(ArrayInfo),
    List(ListInfo),
    Map(MapInfo),
    Optional(OptionalInfo),
    Struct(StructInfo),
    Variant(VariantInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to the specific type information.
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_scalar: Scalar => ScalarInfo);
    impl_cast_method!(as_array: Array => ArrayInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_optional: Optional => OptionalInfo);
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_variant: Variant => VariantInfo);

    /// Returns the underlying [`Type`].
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Scalar(info) => info.ty(),
            Self::Text(info) => info.ty(),
            Self::Array(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Optional(info) => info.ty(),
            Self::Struct(info) => info.ty(),
            Self::Variant(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    /// Returns the full type name.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.ty().name()
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn type_is<T: ?Sized + 'static>(&self) -> bool {
        self.ty().is::<T>()
    }

    /// Returns the [`ReflectKind`] for this `TypeInfo`.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Scalar(_) => ReflectKind::Scalar,
            Self::Text(_) => ReflectKind::Text,
            Self::Array(_) => ReflectKind::Array,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Optional(_) => ReflectKind::Optional,
            Self::Struct(_) => ReflectKind::Struct,
            Self::Variant(_) => ReflectKind::Variant,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::info::{ReflectKind, Typed};
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    #[test]
    fn kinds_of_native_types() {
        assert_eq!(bool::type_info().kind(), ReflectKind::Scalar);
        assert_eq!(i128::type_info().kind(), ReflectKind::Scalar);
        assert_eq!(String::type_info().kind(), ReflectKind::Text);
        assert_eq!(<[u8; 4]>::type_info().kind(), ReflectKind::Array);
        assert_eq!(<Option<u8>>::type_info().kind(), ReflectKind::Optional);
        assert_eq!(<BTreeMap<u8, u8>>::type_info().kind(), ReflectKind::Map);
        assert_eq!(usize::type_info().kind(), ReflectKind::Opaque);
    }

    #[test]
    fn box_is_transparent() {
        assert!(<Box<Vec<u8>>>::type_info().type_is::<Vec<u8>>());
    }

    #[test]
    fn cast_reports_kinds() {
        let err = u8::type_info().as_struct().unwrap_err();
        assert_eq!(err.expected, ReflectKind::Struct);
        assert_eq!(err.received, ReflectKind::Scalar);
        assert!(<Vec<u16>>::type_info().as_list().is_ok());
    }
}
