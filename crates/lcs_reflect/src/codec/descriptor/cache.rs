//! The process-wide descriptor cache.
//!
//! Each type owns a slot, found or inserted under the map lock. The lock
//! is released before the slot is initialized, so building one
//! descriptor never blocks lookups of other types, and concurrent first
//! uses of one type build it exactly once.

use alloc::boxed::Box;
use alloc::sync::Arc;
use std::sync::{OnceLock, PoisonError, RwLock};

use lcs_utils::TypeIdMap;

use super::{TypeDescriptor, build};
use crate::codec::ConfigError;
use crate::info::TypeInfo;

type Slot = Arc<OnceLock<Result<&'static TypeDescriptor, ConfigError>>>;

static CACHE: RwLock<TypeIdMap<Slot>> = RwLock::new(TypeIdMap::new());

/// Returns the descriptor of a type, building it on first use.
///
/// The descriptor is not validated; see [`validated`].
pub(crate) fn resolve(info: &'static TypeInfo) -> Result<&'static TypeDescriptor, ConfigError> {
    let type_id = info.ty().id();

    {
        let map = CACHE.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(built) = map.get(&type_id).and_then(|slot| slot.get()) {
            return built.clone();
        }
    }

    let slot = Arc::clone(
        CACHE
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, Slot::default),
    );

    slot.get_or_init(|| {
        build::build(info).map(|descriptor| &*Box::leak(Box::new(descriptor)))
    })
    .clone()
}

/// Returns the descriptor of a type once everything reachable from it
/// has been validated.
pub(crate) fn validated(info: &'static TypeInfo) -> Result<&'static TypeDescriptor, ConfigError> {
    let descriptor = resolve(info)?;
    descriptor
        .checked
        .get_or_init(|| build::check(descriptor))
        .clone()?;
    Ok(descriptor)
}
