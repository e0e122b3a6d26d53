use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::info::Type;
use crate::ops::{VariantOf, VariantValue};

/// One Enum Registry entry: `(group name, index, prototype)`.
///
/// The index is chosen by the author and is what goes on the wire. The
/// prototype is cloned to obtain a fresh value when decoding.
pub struct EnumVariant {
    group_name: &'static str,
    index: u32,
    marker: Type,
    prototype: Box<dyn VariantValue>,
}

impl EnumVariant {
    /// Creates an entry of the group `group_name`, whose marker type is `G`.
    #[inline]
    pub fn new<G: 'static, T: VariantOf<G>>(group_name: &'static str, index: u32, prototype: T) -> Self {
        Self {
            group_name,
            index,
            marker: Type::of::<G>(),
            prototype: Box::new(prototype),
        }
    }

    /// Returns the group name.
    #[inline]
    pub const fn group_name(&self) -> &'static str {
        self.group_name
    }

    /// Returns the wire index.
    #[inline]
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Returns the group marker type.
    #[inline]
    pub const fn marker(&self) -> &Type {
        &self.marker
    }

    /// Returns the prototype value.
    #[inline]
    pub fn prototype(&self) -> &dyn VariantValue {
        &*self.prototype
    }

    pub(crate) fn into_prototype(self) -> Box<dyn VariantValue> {
        self.prototype
    }
}

impl fmt::Debug for EnumVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumVariant")
            .field("group_name", &self.group_name)
            .field("index", &self.index)
            .field("prototype", &self.prototype)
            .finish()
    }
}

/// Declares the Enum Registry of a container type.
///
/// Enabled on a derived struct with `#[reflect(enum_types)]`.
/// The list is evaluated once, when the struct's descriptor is built.
pub trait EnumTypes {
    /// Returns every `(group, index, prototype)` entry of the container.
    fn enum_types() -> Vec<EnumVariant>;
}
