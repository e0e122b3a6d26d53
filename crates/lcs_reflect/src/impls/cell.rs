//! Containers for static storage of type information.
//!
//! Used to implement [`Typed`](crate::info::Typed).
//!
//! - [`NonGenericTypeInfoCell`]: an [`OnceLock`], for non-generic types.
//! - [`GenericTypeInfoCell`]: for generic types. A `static CELL` inside a
//!   generic function is shared by every instantiation, so the cell keeps
//!   a [`TypeIdMap`] behind a [`RwLock`].
//!
//! Neither cell holds a lock while the info closure runs, so building the
//! info of one type may ask for the info of another.

use alloc::boxed::Box;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use lcs_utils::TypeIdMap;

use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// NonGenericTypeInfoCell

/// Container for static storage of non-generic type information.
///
/// # Examples
///
/// ```
/// use lcs_reflect::impls::NonGenericTypeInfoCell;
/// use lcs_reflect::info::{OpaqueInfo, TypeInfo};
///
/// struct Marker;
///
/// fn info() -> &'static TypeInfo {
///     static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///     CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Marker>()))
/// }
///
/// assert!(core::ptr::eq(info(), info()));
/// ```
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    /// Create an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored info, initializing it with `f` on first access.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &TypeInfo
    where
        F: FnOnce() -> TypeInfo,
    {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// GenericTypeInfoCell

/// Container for static storage of type information with generics.
///
/// # Examples
///
/// ```
/// use lcs_reflect::impls::GenericTypeInfoCell;
/// use lcs_reflect::info::{OpaqueInfo, TypeInfo};
///
/// struct Wrapper<T>(T);
///
/// fn info<T: 'static>() -> &'static TypeInfo {
///     static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///     CELL.get_or_insert::<Wrapper<T>>(|| TypeInfo::Opaque(OpaqueInfo::new::<Wrapper<T>>()))
/// }
///
/// assert!(info::<u8>().type_is::<Wrapper<u8>>());
/// assert!(info::<u16>().type_is::<Wrapper<u16>>());
/// ```
pub struct GenericTypeInfoCell(RwLock<TypeIdMap<&'static TypeInfo>>);

impl GenericTypeInfoCell {
    /// Create an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the info stored for `G`, inserting the result of `f` on
    /// first access.
    ///
    /// If two threads race on the first access, both run `f` and the first
    /// insertion wins.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> TypeInfo) -> &TypeInfo {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(
        &self,
        type_id: TypeId,
        f: impl FnOnce() -> TypeInfo,
    ) -> &TypeInfo {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: TypeInfo) -> &'static TypeInfo {
        self.0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}
