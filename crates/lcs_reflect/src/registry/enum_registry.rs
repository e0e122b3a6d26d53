use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::TypeId;
use core::fmt;

use lcs_utils::TypeIdMap;
use lcs_utils::hash::HashMap;

use crate::codec::ConfigError;
use crate::info::{Type, TypeInfo};
use crate::ops::VariantValue;
use crate::registry::EnumVariant;

// -----------------------------------------------------------------------------
// VariantEntry

/// A validated alternative of a [`VariantGroup`].
pub struct VariantEntry {
    index: u32,
    info: &'static TypeInfo,
    prototype: Box<dyn VariantValue>,
}

impl VariantEntry {
    /// Returns the wire index.
    #[inline]
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Returns the [`Type`] of the alternative.
    #[inline]
    pub const fn ty(&self) -> &Type {
        self.info.ty()
    }

    /// Returns the [`TypeInfo`] of the alternative.
    #[inline]
    pub const fn type_info(&self) -> &'static TypeInfo {
        self.info
    }

    /// Returns a fresh value to decode into.
    #[inline]
    pub fn fresh(&self) -> Box<dyn VariantValue> {
        self.prototype.clone_value()
    }
}

impl fmt::Debug for VariantEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantEntry")
            .field("index", &self.index)
            .field("ty", self.ty())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// VariantGroup

/// The alternatives of one named group, looked up in both directions.
#[derive(Debug)]
pub struct VariantGroup {
    name: &'static str,
    marker: Type,
    // Sorted by index.
    entries: Box<[VariantEntry]>,
    by_type: TypeIdMap<usize>,
}

impl VariantGroup {
    /// Returns the group name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the group marker type.
    #[inline]
    pub const fn marker(&self) -> &Type {
        &self.marker
    }

    /// Returns the entries, ordered by index.
    #[inline]
    pub fn entries(&self) -> &[VariantEntry] {
        &self.entries
    }

    /// Index → alternative, used when decoding.
    pub fn by_index(&self, index: u32) -> Option<&VariantEntry> {
        self.entries
            .binary_search_by_key(&index, VariantEntry::index)
            .ok()
            .map(|at| &self.entries[at])
    }

    /// Concrete type → alternative, used when encoding.
    pub fn by_type(&self, type_id: TypeId) -> Option<&VariantEntry> {
        self.by_type.get(&type_id).map(|&at| &self.entries[at])
    }
}

// -----------------------------------------------------------------------------
// EnumRegistry

/// The validated Enum Registry of one container type.
///
/// Built from the [`EnumTypes`](crate::registry::EnumTypes) declaration
/// when the container's descriptor is built.
#[derive(Debug, Default)]
pub struct EnumRegistry {
    groups: HashMap<&'static str, Arc<VariantGroup>>,
}

impl EnumRegistry {
    /// Validates and indexes the declared entries of `owner`.
    ///
    /// Fails if a group mixes marker types, or registers an index or a
    /// concrete type twice.
    pub fn new(owner: &Type, variants: Vec<EnumVariant>) -> Result<Self, ConfigError> {
        // The first entry of a group fixes its marker.
        let mut declared: BTreeMap<&'static str, (Type, Vec<EnumVariant>)> = BTreeMap::new();
        for variant in variants {
            declared
                .entry(variant.group_name())
                .or_insert_with(|| (*variant.marker(), Vec::new()))
                .1
                .push(variant);
        }

        let mut groups = HashMap::default();
        for (name, (marker, mut variants)) in declared {
            variants.sort_by_key(EnumVariant::index);
            let group = Self::build_group(owner, name, marker, variants)?;
            groups.insert(name, Arc::new(group));
        }

        Ok(Self { groups })
    }

    fn build_group(
        owner: &Type,
        name: &'static str,
        marker: Type,
        variants: Vec<EnumVariant>,
    ) -> Result<VariantGroup, ConfigError> {
        let mut entries = Vec::with_capacity(variants.len());
        let mut by_type = TypeIdMap::new();

        for variant in variants {
            if *variant.marker() != marker {
                return Err(ConfigError::GroupMismatch {
                    ty: owner.name(),
                    group: name,
                    expected: marker.name(),
                    found: variant.marker().name(),
                });
            }

            let index = variant.index();
            if entries.last().is_some_and(|last: &VariantEntry| last.index == index) {
                return Err(ConfigError::DuplicateIndex {
                    ty: owner.name(),
                    group: name,
                    index,
                });
            }

            let info = variant.prototype().reflect_type_info();
            if by_type.insert(variant.prototype().ty_id(), entries.len()).is_some() {
                return Err(ConfigError::DuplicateType {
                    ty: owner.name(),
                    group: name,
                    variant: info.type_name(),
                });
            }

            entries.push(VariantEntry {
                index,
                info,
                prototype: variant.into_prototype(),
            });
        }

        Ok(VariantGroup {
            name,
            marker,
            entries: entries.into_boxed_slice(),
            by_type,
        })
    }

    /// Returns the group named `name`.
    #[inline]
    pub fn group(&self, name: &str) -> Option<&Arc<VariantGroup>> {
        self.groups.get(name)
    }

    /// Returns the number of groups.
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }
}

#[cfg(test)]
mod tests {
    use super::EnumRegistry;
    use crate::codec::ConfigError;
    use crate::info::Type;
    use crate::ops::VariantOf;
    use crate::registry::EnumVariant;
    use alloc::string::String;
    use alloc::vec;
    use core::any::TypeId;

    struct Owner;
    enum Num {}
    enum Other {}

    impl VariantOf<Num> for u8 {}
    impl VariantOf<Num> for u64 {}
    impl VariantOf<Num> for String {}
    impl VariantOf<Other> for u16 {}

    #[test]
    fn lookups_in_both_directions() {
        let registry = EnumRegistry::new(
            &Type::of::<Owner>(),
            vec![
                EnumVariant::new::<Num, _>("num", 7, 0_u64),
                EnumVariant::new::<Num, _>("num", 2, 0_u8),
                EnumVariant::new::<Other, _>("other", 0, 0_u16),
            ],
        )
        .unwrap();

        assert_eq!(registry.len(), 2);
        let num = registry.group("num").unwrap();
        assert_eq!(num.by_type(TypeId::of::<u64>()).unwrap().index(), 7);
        assert!(num.by_index(2).unwrap().ty().is::<u8>());
        assert!(num.by_index(3).is_none());
        assert!(num.by_type(TypeId::of::<u16>()).is_none());
        let indices: alloc::vec::Vec<u32> = num.entries().iter().map(|e| e.index()).collect();
        assert_eq!(indices, [2, 7]);
    }

    #[test]
    fn duplicate_index_is_rejected() {
        let err = EnumRegistry::new(
            &Type::of::<Owner>(),
            vec![
                EnumVariant::new::<Num, _>("num", 1, 0_u8),
                EnumVariant::new::<Num, _>("num", 1, String::new()),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateIndex { index: 1, group: "num", .. }));
    }

    #[test]
    fn duplicate_type_is_rejected() {
        let err = EnumRegistry::new(
            &Type::of::<Owner>(),
            vec![
                EnumVariant::new::<Num, _>("num", 0, 0_u8),
                EnumVariant::new::<Num, _>("num", 1, 5_u8),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateType { group: "num", .. }));
    }

    #[test]
    fn mixed_markers_are_rejected() {
        let err = EnumRegistry::new(
            &Type::of::<Owner>(),
            vec![
                EnumVariant::new::<Num, _>("num", 0, 0_u8),
                EnumVariant::new::<Other, _>("num", 1, 0_u16),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::GroupMismatch { group: "num", .. }));
    }
}
