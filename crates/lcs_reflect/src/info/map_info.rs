use crate::info::{Type, TypeInfo, Typed};

/// Type information of key/value collections such as `BTreeMap<K, V>`.
#[derive(Debug, Clone)]
pub struct MapInfo {
    ty: Type,
    key_ty: Type,
    key_info: fn() -> &'static TypeInfo,
    value_ty: Type,
    value_info: fn() -> &'static TypeInfo,
}

impl MapInfo {
    /// Creates a new [`MapInfo`].
    #[inline]
    pub fn new<TMap: 'static, TKey: Typed, TValue: Typed>() -> Self {
        Self {
            ty: Type::of::<TMap>(),
            key_ty: Type::of::<TKey>(),
            key_info: TKey::type_info,
            value_ty: Type::of::<TValue>(),
            value_info: TValue::type_info,
        }
    }

    /// Returns the underlying [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the key [`Type`].
    #[inline]
    pub const fn key_ty(&self) -> &Type {
        &self.key_ty
    }

    /// Returns the key [`TypeInfo`].
    #[inline]
    pub fn key_info(&self) -> &'static TypeInfo {
        (self.key_info)()
    }

    /// Returns the value [`Type`].
    #[inline]
    pub const fn value_ty(&self) -> &Type {
        &self.value_ty
    }

    /// Returns the value [`TypeInfo`].
    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }
}
