use alloc::boxed::Box;
use alloc::sync::Arc;

use crate::codec::DirectiveSet;
use crate::info::{ReflectKind, ScalarKind, TypeInfo};
use crate::registry::VariantGroup;

/// The wire shape of a value, with directives already applied.
#[derive(Debug)]
pub enum Layout {
    /// `bool` or a fixed-width integer.
    Scalar(ScalarKind),
    /// `u32` byte length, then UTF-8.
    Text,
    /// `Vec<u8>`: `u32` length, then the raw bytes.
    Bytes,
    /// `[u8; N]`: the raw bytes.
    ByteArray(usize),
    /// `len` items, no prefix.
    Array { len: usize, item: Box<Layout> },
    /// `u32` count, then the items.
    Sequence(Box<Layout>),
    /// `u32` count, then the entries ordered by encoded key.
    Map { key: Box<Layout>, value: Box<Layout> },
    /// Presence byte, then the value if present.
    Optional(Box<Layout>),
    /// `u32` index in the group, then the alternative.
    Variant(Arc<VariantGroup>),
    /// The fields of the described struct, in wire order.
    Struct(Box<[FieldLayout]>),
    /// Another struct, described by its own descriptor.
    Nested(&'static TypeInfo),
}

impl Layout {
    /// Returns the kind of value this layout expects.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Scalar(_) => ReflectKind::Scalar,
            Self::Text => ReflectKind::Text,
            Self::Bytes | Self::Sequence(_) => ReflectKind::List,
            Self::ByteArray(_) | Self::Array { .. } => ReflectKind::Array,
            Self::Map { .. } => ReflectKind::Map,
            Self::Optional(_) => ReflectKind::Optional,
            Self::Variant(_) => ReflectKind::Variant,
            Self::Struct(_) | Self::Nested(_) => ReflectKind::Struct,
        }
    }

    /// Visits this layout and every layout inside it, stopping at
    /// [`Layout::Nested`].
    pub(crate) fn try_walk<E>(&self, f: &mut impl FnMut(&Layout) -> Result<(), E>) -> Result<(), E> {
        f(self)?;
        match self {
            Self::Array { item, .. } | Self::Sequence(item) | Self::Optional(item) => item.try_walk(f),
            Self::Map { key, value } => {
                key.try_walk(f)?;
                value.try_walk(f)
            }
            Self::Struct(fields) => fields.iter().try_for_each(|field| field.layout.try_walk(f)),
            _ => Ok(()),
        }
    }
}

/// An exported field of a struct.
#[derive(Debug)]
pub struct FieldLayout {
    pub(crate) name: &'static str,
    pub(crate) directives: DirectiveSet,
    pub(crate) layout: Layout,
}

impl FieldLayout {
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the parsed directives of the field.
    #[inline]
    pub const fn directives(&self) -> &DirectiveSet {
        &self.directives
    }

    #[inline]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }
}
