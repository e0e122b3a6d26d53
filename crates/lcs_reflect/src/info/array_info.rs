use crate::info::{Type, TypeInfo, Typed};

/// Type information of fixed-length arrays such as `[T; N]`.
#[derive(Debug, Clone)]
pub struct ArrayInfo {
    ty: Type,
    item_ty: Type,
    // Created on first access.
    item_info: fn() -> &'static TypeInfo,
    len: usize,
}

impl ArrayInfo {
    /// Creates a new [`ArrayInfo`] for the array `TArray` of `len` items of `TItem`.
    #[inline]
    pub fn new<TArray: 'static, TItem: Typed>(len: usize) -> Self {
        Self {
            ty: Type::of::<TArray>(),
            item_ty: Type::of::<TItem>(),
            item_info: TItem::type_info,
            len,
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

    /// Returns the fixed number of items.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }
}
