use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::info::{HiddenField, NamedField, Type};
use crate::registry::EnumVariant;

/// Type information of structs (named, tuple and unit).
///
/// `fields` holds the exported fields in declaration order; this order is
/// the wire order.
///
/// # Examples
///
/// ```
/// use lcs_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Account {
///     pub id: u64,
///     cache: Vec<f32>,
///     pub name: String,
/// }
///
/// let info = Account::type_info().as_struct().unwrap();
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.field_at(1).unwrap().name(), "name");
/// assert_eq!(info.index_of("id"), Some(0));
/// assert_eq!(info.hidden_fields()[0].name(), "cache");
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    field_names: Box<[&'static str]>,
    hidden: Box<[HiddenField]>,
    enum_types: Option<fn() -> Vec<EnumVariant>>,
}

impl StructInfo {
    /// Creates a new [`StructInfo`] from its exported fields.
    pub fn new<T: 'static>(fields: &[NamedField]) -> Self {
        let field_names = fields.iter().map(NamedField::name).collect();

        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            field_names,
            hidden: Box::new([]),
            enum_types: None,
        }
    }

    /// Records the non-exported fields.
    pub fn with_hidden(mut self, hidden: &[HiddenField]) -> Self {
        self.hidden = hidden.into();
        self
    }

    /// Attaches the Enum Registry declaration of the struct.
    ///
    /// See [`EnumTypes`](crate::registry::EnumTypes).
    #[inline]
    pub fn with_enum_types(mut self, enum_types: fn() -> Vec<EnumVariant>) -> Self {
        self.enum_types = Some(enum_types);
        self
    }

    /// Returns the underlying [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the exported field names in declaration order.
    #[inline]
    pub fn field_names(&self) -> &[&'static str] {
        &self.field_names
    }

    /// Returns the exported field with the given name.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.index_of(name).map(|index| &self.fields[index])
    }

    /// Returns the exported field at the given index.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns the index of the exported field with the given name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_names.iter().position(|n| *n == name)
    }

    /// Returns an iterator over the exported fields.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, NamedField> {
        self.fields.iter()
    }

    /// Returns the number of exported fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the non-exported fields.
    #[inline]
    pub fn hidden_fields(&self) -> &[HiddenField] {
        &self.hidden
    }

    /// Evaluates the Enum Registry declaration, if the struct has one.
    #[inline]
    pub fn enum_types(&self) -> Option<Vec<EnumVariant>> {
        self.enum_types.map(|f| f())
    }
}
