use alloc::string::String;

use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{Array, List, Map, Optional, ScalarMut, ScalarRef, Struct, Union};

/// An immutable view of a reflected value's shape.
///
/// Obtained through [`Reflect::reflect_ref`].
pub enum ReflectRef<'a> {
    Scalar(ScalarRef),
    Text(&'a str),
    Array(&'a dyn Array),
    List(&'a dyn List),
    Map(&'a dyn Map),
    Optional(&'a dyn Optional),
    Struct(&'a dyn Struct),
    Variant(&'a dyn Union),
    Opaque(&'a dyn Reflect),
}

/// A mutable view of a reflected value's shape.
///
/// Obtained through [`Reflect::reflect_mut`].
pub enum ReflectMut<'a> {
    Scalar(ScalarMut<'a>),
    Text(&'a mut String),
    Array(&'a mut dyn Array),
    List(&'a mut dyn List),
    Map(&'a mut dyn Map),
    Optional(&'a mut dyn Optional),
    Struct(&'a mut dyn Struct),
    Variant(&'a mut dyn Union),
    Opaque(&'a mut dyn Reflect),
}

impl ReflectRef<'_> {
    /// Returns the [`ReflectKind`] of the view.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Scalar(_) => ReflectKind::Scalar,
            Self::Text(_) => ReflectKind::Text,
            Self::Array(_) => ReflectKind::Array,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Optional(_) => ReflectKind::Optional,
            Self::Struct(_) => ReflectKind::Struct,
            Self::Variant(_) => ReflectKind::Variant,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }
}

impl ReflectMut<'_> {
    /// Returns the [`ReflectKind`] of the view.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Scalar(_) => ReflectKind::Scalar,
            Self::Text(_) => ReflectKind::Text,
            Self::Array(_) => ReflectKind::Array,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Optional(_) => ReflectKind::Optional,
            Self::Struct(_) => ReflectKind::Struct,
            Self::Variant(_) => ReflectKind::Variant,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }
}
