use alloc::boxed::Box;
use core::hash::{BuildHasher, Hash};

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{MapInfo, TypeInfo, Typed};
use crate::ops::{Map, MapInsertError};
use crate::reflection::impl_reflect_cast_fn;

// Host iteration order of hash maps is arbitrary; the codec sorts the
// entries by their encoded keys.
macro_rules! impl_reflect_for_hashmap {
    ($map:ident) => {
        impl<K, V, S> Typed for $map<K, V, S>
        where
            K: Reflect + Typed + Default + Eq + Hash,
            V: Reflect + Typed + Default,
            S: BuildHasher + Default + Send + Sync + 'static,
        {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, K, V>()))
            }
        }

        impl<K, V, S> Reflect for $map<K, V, S>
        where
            K: Reflect + Typed + Default + Eq + Hash,
            V: Reflect + Typed + Default,
            S: BuildHasher + Default + Send + Sync + 'static,
        {
            impl_reflect_cast_fn!(Map);
        }

        impl<K, V, S> Map for $map<K, V, S>
        where
            K: Reflect + Typed + Default + Eq + Hash,
            V: Reflect + Typed + Default,
            S: BuildHasher + Default + Send + Sync + 'static,
        {
            #[inline]
            fn len(&self) -> usize {
                $map::len(self)
            }

            fn entries(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
                Box::new(
                    self.iter()
                        .map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect)),
                )
            }

            #[inline]
            fn clear(&mut self) {
                $map::clear(self);
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
    };
}

mod std_map {
    use super::*;
    use std::collections::HashMap;

    impl_reflect_for_hashmap!(HashMap);
}

mod hashbrown_map {
    use super::*;
    use lcs_utils::hash::hashbrown::HashMap;

    impl_reflect_for_hashmap!(HashMap);
}
