use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

/// Identity and name of a reflected type.
///
/// Equality and hashing only consider the [`TypeId`].
///
/// # Examples
///
/// ```
/// use lcs_reflect::info::Type;
///
/// let ty = Type::of::<Vec<u8>>();
/// assert!(ty.is::<Vec<u8>>());
/// assert!(ty.name().ends_with("Vec<u8>"));
/// ```
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    name: &'static str,
}

impl Type {
    /// Creates the [`Type`] of `T`.
    #[inline]
    pub fn of<T: ?Sized + Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: core::any::type_name::<T>(),
        }
    }

    /// Returns the [`TypeId`].
    #[inline]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the full type name, as given by [`core::any::type_name`].
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn is<T: ?Sized + Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
