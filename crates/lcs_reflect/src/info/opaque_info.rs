use crate::info::Type;

/// Type information carrying only the type identity.
///
/// Used for text (`String`) and for opaque types the codec cannot encode
/// canonically, such as floating point numbers or `usize`.
#[derive(Debug, Clone)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    /// Creates a new [`OpaqueInfo`].
    #[inline]
    pub fn new<T: 'static>() -> Self {
        Self { ty: Type::of::<T>() }
    }

    /// Returns the underlying [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }
}
