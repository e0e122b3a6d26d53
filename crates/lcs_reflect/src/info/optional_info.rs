use crate::info::{Type, TypeInfo, Typed};

/// Type information of `Option<T>`.
#[derive(Debug, Clone)]
pub struct OptionalInfo {
    ty: Type,
    some_ty: Type,
    some_info: fn() -> &'static TypeInfo,
}

impl OptionalInfo {
    /// Creates a new [`OptionalInfo`].
    #[inline]
    pub fn new<TOption: 'static, TSome: Typed>() -> Self {
        Self {
            ty: Type::of::<TOption>(),
            some_ty: Type::of::<TSome>(),
            some_info: TSome::type_info,
        }
    }

    /// Returns the underlying [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the [`Type`] of the present value.
    #[inline]
    pub const fn some_ty(&self) -> &Type {
        &self.some_ty
    }

    /// Returns the [`TypeInfo`] of the present value.
    #[inline]
    pub fn some_info(&self) -> &'static TypeInfo {
        (self.some_info)()
    }
}
