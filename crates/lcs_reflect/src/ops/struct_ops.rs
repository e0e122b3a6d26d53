use crate::Reflect;

/// A struct viewed through its exported fields, in declaration order.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect).
/// Non-exported fields are not reachable through this trait.
///
/// # Examples
///
/// ```
/// use lcs_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo {
///     pub a: u32,
///     b: u64,
///     pub c: bool,
/// }
///
/// let foo = Foo { a: 1, b: 2, c: true };
/// assert_eq!(foo.field_len(), 2);
/// assert_eq!(foo.name_at(1), Some("c"));
/// assert_eq!(foo.field("a").unwrap().downcast_ref::<u32>(), Some(&1));
/// ```
pub trait Struct: Reflect {
    /// Returns the number of exported fields.
    fn field_len(&self) -> usize;

    /// Returns the name of the field at `index`.
    fn name_at(&self, index: usize) -> Option<&'static str>;

    /// Returns a reference to the field at `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the field at `index`.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns a reference to the field named `name`.
    fn field(&self, name: &str) -> Option<&dyn Reflect> {
        let index = (0..self.field_len()).find(|&i| self.name_at(i) == Some(name))?;
        self.field_at(index)
    }
}
