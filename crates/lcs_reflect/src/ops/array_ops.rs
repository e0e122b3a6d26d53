use crate::Reflect;

/// A fixed-length array of reflected items, such as `[T; N]`.
pub trait Array: Reflect {
    /// Returns the number of items.
    fn len(&self) -> usize;

    /// Returns a reference to the item at `index`.
    fn item(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the item at `index`.
    fn item_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the items as raw bytes, if the items are `u8`.
    #[inline]
    fn as_bytes(&self) -> Option<&[u8]> {
        None
    }

    /// Returns the items as mutable raw bytes, if the items are `u8`.
    #[inline]
    fn as_bytes_mut(&mut self) -> Option<&mut [u8]> {
        None
    }
}
