use alloc::boxed::Box;
use core::{error, fmt};

use crate::Reflect;

/// A key/value collection, such as `BTreeMap<K, V>` or `HashMap<K, V>`.
///
/// Iteration order is unspecified; the codec imposes the canonical order.
pub trait Map: Reflect {
    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns an iterator over the entries.
    fn entries(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_>;

    /// Removes all entries.
    fn clear(&mut self);

    /// Creates a default key and value, to be filled in and then passed
    /// to [`Map::insert_boxed`].
    fn new_entry(&self) -> (Box<dyn Reflect>, Box<dyn Reflect>);

    /// Inserts an entry, replacing the value of an equal key.
    ///
    /// Fails if the key or the value has the wrong type.
    fn insert_boxed(
        &mut self,
        key: Box<dyn Reflect>,
        value: Box<dyn Reflect>,
    ) -> Result<(), MapInsertError>;
}

/// Error returned when [`Map::insert_boxed`] receives a value of the wrong type.
#[derive(Debug)]
pub struct MapInsertError {
    pub map: &'static str,
    pub received: &'static str,
}

impl fmt::Display for MapInsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot insert a `{}` into `{}`",
            self.received, self.map
        )
    }
}

impl error::Error for MapInsertError {}
