use crate::info::{Type, TypeInfo, Typed};

/// Type information of variable-length lists such as `Vec<T>`.
#[derive(Debug, Clone)]
pub struct ListInfo {
    ty: Type,
    item_ty: Type,
    item_info: fn() -> &'static TypeInfo,
}

impl ListInfo {
    /// Creates a new [`ListInfo`].
    #[inline]
    pub fn new<TList: 'static, TItem: Typed>() -> Self {
        Self {
            ty: Type::of::<TList>(),
            item_ty: Type::of::<TItem>(),
            item_info: TItem::type_info,
        }
    }

    /// Returns the underlying [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the item [`Type`].
    #[inline]
    pub const fn item_ty(&self) -> &Type {
        &self.item_ty
    }

    /// Returns the item [`TypeInfo`].
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }
}
