use crate::info::Type;

/// Type information of [`Variant<G>`](crate::ops::Variant).
///
/// Records the group marker `G`, which must agree with the marker of every
/// Enum Registry entry of the group the field names.
#[derive(Debug, Clone)]
pub struct VariantInfo {
    ty: Type,
    group: Type,
}

impl VariantInfo {
    /// Creates a new [`VariantInfo`].
    #[inline]
    pub fn new<TVariant: 'static, G: ?Sized + 'static>() -> Self {
        Self {
            ty: Type::of::<TVariant>(),
            group: Type::of::<G>(),
        }
    }

    /// Returns the underlying [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the group marker [`Type`].
    #[inline]
    pub const fn group(&self) -> &Type {
        &self.group
    }
}
