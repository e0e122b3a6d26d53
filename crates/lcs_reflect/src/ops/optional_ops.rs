use crate::Reflect;

/// A value that may be absent, such as `Option<T>`.
pub trait Optional: Reflect {
    /// Returns the present value.
    fn value(&self) -> Option<&dyn Reflect>;

    /// Returns the present value mutably.
    fn value_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Makes the value absent.
    fn set_none(&mut self);

    /// Makes the value present with its default and returns it.
    fn insert_default(&mut self) -> &mut dyn Reflect;
}
