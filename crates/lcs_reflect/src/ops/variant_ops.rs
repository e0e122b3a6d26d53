use alloc::boxed::Box;
use core::any::Any;
use core::fmt;
use core::marker::PhantomData;

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{Type, TypeInfo, Typed, VariantInfo};
use crate::reflection::impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// VariantValue

/// A value that can be held by a [`Variant`].
///
/// Auto impl for every `Reflect + Clone + PartialEq + Debug` type.
pub trait VariantValue: Reflect + fmt::Debug {
    /// Clones the value into a new box.
    fn clone_value(&self) -> Box<dyn VariantValue>;

    /// Compares with another value of any type.
    fn eq_value(&self, other: &dyn VariantValue) -> bool;
}

impl<T: Reflect + Clone + PartialEq + fmt::Debug> VariantValue for T {
    #[inline]
    fn clone_value(&self) -> Box<dyn VariantValue> {
        Box::new(self.clone())
    }

    fn eq_value(&self, other: &dyn VariantValue) -> bool {
        let other: &dyn Any = other;
        other.downcast_ref::<T>().is_some_and(|other| self == other)
    }
}

/// Marks `Self` as an alternative of the group `G`.
///
/// Only types marked for `G` can be placed in a [`Variant<G>`]; the index
/// of each alternative comes from the Enum Registry of the containing
/// struct.
///
/// ```
/// use lcs_reflect::{derive::Reflect, ops::{Variant, VariantOf}};
///
/// pub enum Shape {}
///
/// #[derive(Reflect, Clone, Default, Debug, PartialEq)]
/// pub struct Circle(pub u32);
///
/// impl VariantOf<Shape> for Circle {}
///
/// let v: Variant<Shape> = Variant::new(Circle(3));
/// assert_eq!(v.downcast_ref::<Circle>(), Some(&Circle(3)));
/// ```
pub trait VariantOf<G: 'static>: VariantValue {}

// -----------------------------------------------------------------------------
// Union

/// A tagged union: one value out of the alternatives of a group.
pub trait Union: Reflect {
    /// Returns the group marker type.
    fn group(&self) -> Type;

    /// Returns the held value, `None` if the union is empty.
    fn value(&self) -> Option<&dyn Reflect>;

    /// Returns the held value mutably.
    fn value_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Replaces the held value.
    ///
    /// The caller is responsible for only storing alternatives of the group.
    fn set_value(&mut self, value: Box<dyn VariantValue>);
}

// -----------------------------------------------------------------------------
// Variant

/// A tagged-union field whose alternatives form the group `G`.
///
/// On the wire a variant is its registered `u32` index followed by the
/// held value. The field carrying it needs an `enum=<group>` directive and
/// the containing struct an Enum Registry for that group.
///
/// The default value is empty; encoding an empty variant fails.
pub struct Variant<G: 'static> {
    value: Option<Box<dyn VariantValue>>,
    marker: PhantomData<fn() -> G>,
}

impl<G: 'static> Variant<G> {
    /// Creates a variant holding `value`.
    #[inline]
    pub fn new<T: VariantOf<G>>(value: T) -> Self {
        Self {
            value: Some(Box::new(value)),
            marker: PhantomData,
        }
    }

    /// Creates an empty variant.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            value: None,
            marker: PhantomData,
        }
    }

    /// Replaces the held value.
    #[inline]
    pub fn set<T: VariantOf<G>>(&mut self, value: T) {
        self.value = Some(Box::new(value));
    }

    /// Returns the held value.
    #[inline]
    pub fn get(&self) -> Option<&dyn Reflect> {
        self.value.as_deref().map(|value| value as &dyn Reflect)
    }

    /// Returns `true` if no value is held.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Returns `true` if the held value is a `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.get().is_some_and(|value| value.is::<T>())
    }

    /// Downcasts the held value to `T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.get()?.downcast_ref::<T>()
    }
}

impl<G: 'static> Default for Variant<G> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<G: 'static> Clone for Variant<G> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.as_ref().map(|value| value.clone_value()),
            marker: PhantomData,
        }
    }
}

impl<G: 'static> PartialEq for Variant<G> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.value, &other.value) {
            (Some(a), Some(b)) => a.eq_value(&**b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<G: 'static> fmt::Debug for Variant<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => f.debug_tuple("Variant").field(value).finish(),
            None => f.write_str("Variant(<empty>)"),
        }
    }
}

impl<G: 'static> Typed for Variant<G> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Variant(VariantInfo::new::<Self, G>()))
    }
}

impl<G: 'static> Reflect for Variant<G> {
    impl_reflect_cast_fn!(Variant);
}

impl<G: 'static> Union for Variant<G> {
    #[inline]
    fn group(&self) -> Type {
        Type::of::<G>()
    }

    #[inline]
    fn value(&self) -> Option<&dyn Reflect> {
        self.get()
    }

    #[inline]
    fn value_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.value
            .as_deref_mut()
            .map(|value| value as &mut dyn Reflect)
    }

    #[inline]
    fn set_value(&mut self, value: Box<dyn VariantValue>) {
        self.value = Some(value);
    }
}
