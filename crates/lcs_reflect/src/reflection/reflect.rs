use alloc::boxed::Box;
use core::any::{Any, TypeId};

use crate::info::{DynamicTyped, ReflectKind};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime reflection.
///
/// A `Reflect` value can report its [`TypeInfo`](crate::info::TypeInfo)
/// and be viewed as one of the shapes in [`ops`](crate::ops); the codec
/// walks values exclusively through these views.
///
/// Prefer [the derive macro](crate::derive::Reflect) over manual impls.
///
/// # Type Identification
///
/// [`Any::type_id`] on a `Box<dyn Reflect>` returns the id of the box;
/// use [`Reflect::ty_id`] instead:
///
/// ```
/// # use lcs_reflect::Reflect;
/// # use core::any::TypeId;
/// let x: Box<dyn Reflect> = Box::new(32_i32);
///
/// assert!(x.ty_id() == TypeId::of::<i32>());
/// assert!(x.is::<i32>());
/// ```
pub trait Reflect: DynamicTyped + Send + Sync + Any {
    /// Returns the [`TypeId`] of the underlying type.
    #[inline(always)]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the [`ReflectKind`] of this value.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable view of the value's shape.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable view of the value's shape.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// Returns `None` if the underlying value is not of type `T`.
    ///
    /// ```
    /// # use lcs_reflect::Reflect;
    /// let x: Box<dyn Reflect> = Box::new(10_u8);
    /// assert_eq!(x.take::<u8>(), Some(10));
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Option<T> {
        let any: Box<dyn Any> = self;
        any.downcast::<T>().ok().map(|value| *value)
    }
}

impl core::fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Reflect({})", self.reflect_type_info().type_name())
    }
}

// -----------------------------------------------------------------------------
// Helper

/// Implements `reflect_kind`, `reflect_ref` and `reflect_mut` for a
/// shape whose view holds `&dyn Shape`.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
