//! Type descriptors: the wire layout of a type, built once and cached.
//!
//! A descriptor is built from the type's [`TypeInfo`] on first use and
//! leaked, so that every later call shares it. Building is shallow: a
//! struct nested in another is referenced as [`Layout::Nested`] and
//! described by its own descriptor. Before a descriptor is used as the
//! root of a call, everything reachable from it is validated once.
//!
//! ```
//! use lcs_reflect::{codec, derive::Reflect};
//! use lcs_reflect::codec::Layout;
//!
//! #[derive(Reflect)]
//! struct Header {
//!     pub version: u8,
//!     #[lcs = "optional"]
//!     pub note: Option<String>,
//! }
//!
//! let descriptor = codec::descriptor_of::<Header>().unwrap();
//! let fields = descriptor.fields();
//! assert_eq!(fields[1].name(), "note");
//! assert!(matches!(fields[1].layout(), Layout::Optional(_)));
//! assert_eq!(descriptor.min_size(), Some(2));
//! ```

mod build;
mod cache;
mod layout;

pub use layout::{FieldLayout, Layout};

pub(crate) use cache::{resolve, validated};

use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use crate::codec::ConfigError;
use crate::info::{Type, TypeInfo};
use crate::registry::EnumRegistry;

const UNKNOWN_SIZE: usize = usize::MAX;

/// Returns the fewest bytes a value laid out as `layout` encodes to.
///
/// Every descriptor `layout` reaches must have been validated.
pub(crate) fn min_size_of(layout: &Layout) -> Result<usize, ConfigError> {
    build::layout_min_size(layout, &mut Vec::new())
}

/// The wire layout of one type.
#[derive(Debug)]
pub struct TypeDescriptor {
    info: &'static TypeInfo,
    layout: Layout,
    registry: Option<EnumRegistry>,
    // Fewest bytes a value of the type encodes to.
    min_size: AtomicUsize,
    checked: OnceLock<Result<(), ConfigError>>,
}

impl TypeDescriptor {
    fn new(info: &'static TypeInfo, layout: Layout, registry: Option<EnumRegistry>) -> Self {
        Self {
            info,
            layout,
            registry,
            min_size: AtomicUsize::new(UNKNOWN_SIZE),
            checked: OnceLock::new(),
        }
    }

    /// Returns the described type.
    #[inline]
    pub const fn ty(&self) -> &Type {
        self.info.ty()
    }

    #[inline]
    pub const fn type_info(&self) -> &'static TypeInfo {
        self.info
    }

    #[inline]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the exported fields in wire order; empty for non-structs.
    pub fn fields(&self) -> &[FieldLayout] {
        match &self.layout {
            Layout::Struct(fields) => &**fields,
            _ => &[],
        }
    }

    /// Returns the Enum Registry of a struct that declares one.
    #[inline]
    pub const fn registry(&self) -> Option<&EnumRegistry> {
        self.registry.as_ref()
    }

    /// Returns the fewest bytes a value of the type encodes to.
    ///
    /// Known once the descriptor has been validated.
    pub fn min_size(&self) -> Option<usize> {
        match self.min_size.load(Ordering::Relaxed) {
            UNKNOWN_SIZE => None,
            size => Some(size),
        }
    }

    fn set_min_size(&self, size: usize) {
        self.min_size
            .store(size.min(UNKNOWN_SIZE - 1), Ordering::Relaxed);
    }
}
