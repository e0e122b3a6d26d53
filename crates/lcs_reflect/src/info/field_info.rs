use core::any::Any;

use crate::info::{Type, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// NamedField

/// Information for an exported (`pub`) struct field.
///
/// Tuple-struct fields are named by their index (`"0"`, `"1"`, ...).
///
/// # Examples
///
/// ```
/// use lcs_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Foo {
///     #[lcs = "optional"]
///     pub bar: Option<u32>,
/// }
///
/// let info = Foo::type_info().as_struct().unwrap();
/// let field = info.field_at(0).unwrap();
///
/// assert!(field.type_is::<Option<u32>>());
/// assert_eq!(field.name(), "bar");
/// assert_eq!(field.tag(), Some("optional"));
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    ty: Type,
    name: &'static str,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
    tag: Option<&'static str>,
}

impl NamedField {
    /// Creates a new [`NamedField`] for the given field `name` and type `T`.
    #[inline]
    pub fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            ty: Type::of::<T>(),
            name,
            type_info: T::type_info,
            tag: None,
        }
    }

    /// Attaches the raw directive string of the field.
    #[inline]
    pub const fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Returns the [`Type`] of the field.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty.is::<T>()
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the raw directive string, if any.
    #[inline]
    pub const fn tag(&self) -> Option<&'static str> {
        self.tag
    }

    /// Returns the field's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}

// -----------------------------------------------------------------------------
// HiddenField

/// A non-exported field.
///
/// Hidden fields never reach the wire and their types need not be reflected.
/// They are recorded so that a directive attached to one can be reported.
#[derive(Clone, Debug)]
pub struct HiddenField {
    name: &'static str,
    tag: Option<&'static str>,
}

impl HiddenField {
    /// Creates a new [`HiddenField`].
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self { name, tag: None }
    }

    /// Attaches the raw directive string of the field.
    #[inline]
    pub const fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the raw directive string, if any.
    #[inline]
    pub const fn tag(&self) -> Option<&'static str> {
        self.tag
    }
}
