use alloc::vec::Vec;

use crate::Reflect;

/// A variable-length list of reflected items, such as `Vec<T>`.
///
/// Decoding grows a list with [`List::push_default`] and fills the new
/// item in place.
pub trait List: Reflect {
    /// Returns the number of items.
    fn len(&self) -> usize;

    /// Returns `true` if the list holds no items.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the item at `index`.
    fn item(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the item at `index`.
    fn item_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Removes all items.
    fn clear(&mut self);

    /// Reserves capacity for at least `additional` more items.
    fn reserve(&mut self, additional: usize);

    /// Appends a default item and returns a mutable reference to it.
    fn push_default(&mut self) -> &mut dyn Reflect;

    /// Returns the items as raw bytes, if the list is a `Vec<u8>`.
    #[inline]
    fn as_bytes(&self) -> Option<&[u8]> {
        None
    }

    /// Returns the underlying byte vector, if the list is a `Vec<u8>`.
    #[inline]
    fn bytes_mut(&mut self) -> Option<&mut Vec<u8>> {
        None
    }
}
