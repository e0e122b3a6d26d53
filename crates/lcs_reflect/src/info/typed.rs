use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Automatically implemented by [`#[derive(Reflect)]`](crate::derive::Reflect).
///
/// # Manually Impl
///
/// Use [`NonGenericTypeInfoCell`] or [`GenericTypeInfoCell`] to store the info:
///
/// ```
/// use lcs_reflect::{
///     Reflect,
///     impls::NonGenericTypeInfoCell,
///     info::{NamedField, ReflectKind, StructInfo, TypeInfo, Typed},
///     ops::{ReflectMut, ReflectRef, Struct},
/// };
///
/// struct Pair {
///     a: u32,
///     b: bool,
/// }
///
/// impl Typed for Pair {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| {
///             TypeInfo::Struct(StructInfo::new::<Self>(&[
///                 NamedField::new::<u32>("a"),
///                 NamedField::new::<bool>("b"),
///             ]))
///         })
///     }
/// }
///
/// impl Reflect for Pair {
///     fn reflect_kind(&self) -> ReflectKind { ReflectKind::Struct }
///     fn reflect_ref(&self) -> ReflectRef<'_> { ReflectRef::Struct(self) }
///     fn reflect_mut(&mut self) -> ReflectMut<'_> { ReflectMut::Struct(self) }
/// }
///
/// impl Struct for Pair {
///     fn field_len(&self) -> usize { 2 }
///     fn name_at(&self, index: usize) -> Option<&'static str> {
///         ["a", "b"].get(index).copied()
///     }
///     fn field_at(&self, index: usize) -> Option<&dyn Reflect> {
///         match index { 0 => Some(&self.a), 1 => Some(&self.b), _ => None }
///     }
///     fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
///         match index { 0 => Some(&mut self.a), 1 => Some(&mut self.b), _ => None }
///     }
/// }
///
/// let bytes = lcs_reflect::codec::encode(&Pair { a: 7, b: true }).unwrap();
/// assert_eq!(bytes, [7, 0, 0, 0, 1]);
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: 'static {
    /// Returns the type information of `Self`.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`].
///
/// Auto impl for all types that implemented [`Typed`].
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        T::type_info()
    }
}
