use alloc::boxed::Box;
use alloc::collections::BTreeMap;

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{MapInfo, TypeInfo, Typed};
use crate::ops::{Map, MapInsertError};
use crate::reflection::impl_reflect_cast_fn;

impl<K, V> Typed for BTreeMap<K, V>
where
    K: Reflect + Typed + Default + Ord,
    V: Reflect + Typed + Default,
{
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, K, V>()))
    }
}

impl<K, V> Reflect for BTreeMap<K, V>
where
    K: Reflect + Typed + Default + Ord,
    V: Reflect + Typed + Default,
{
    impl_reflect_cast_fn!(Map);
}

impl<K, V> Map for BTreeMap<K, V>
where
    K: Reflect + Typed + Default + Ord,
    V: Reflect + Typed + Default,
{
    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
        Box::new(
            self.iter()
                .map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect)),
        )
    }

    #[inline]
    fn clear(&mut self) {
        BTreeMap::clear(self);
    }

    fn new_entry(&self) -> (Box<dyn Reflect>, Box<dyn Reflect>) {
        (Box::new(K::default()), Box::new(V::default()))
    }

    fn insert_boxed(
        &mut self,
        key: Box<dyn Reflect>,
        value: Box<dyn Reflect>,
    ) -> Result<(), MapInsertError> {
        let map = core::any::type_name::<Self>();
        let key_name = key.reflect_type_info().type_name();
        let key = key.take::<K>().ok_or(MapInsertError {
            map,
            received: key_name,
        })?;
        let value_name = value.reflect_type_info().type_name();
        let value = value.take::<V>().ok_or(MapInsertError {
            map,
            received: value_name,
        })?;
        self.insert(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::ops::Map;
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;

    #[test]
    fn insert_boxed_checks_types() {
        let mut map: BTreeMap<u8, String> = BTreeMap::new();
        let (key, value) = map.new_entry();
        assert!(map.insert_boxed(key, value).is_ok());
        assert_eq!(map.get(&0).map(String::as_str), Some(""));

        let err = map
            .insert_boxed(Box::new(1_u16), Box::new(String::new()))
            .unwrap_err();
        assert_eq!(err.received, "u16");
        assert_eq!(Map::len(&map), 1);
    }
}
