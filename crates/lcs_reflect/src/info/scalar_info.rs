use core::fmt;

use crate::info::Type;

/// The fixed-width scalar shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    U8,
    U16,
    U32,
    U64,
    U128,
    I8,
    I16,
    I32,
    I64,
    I128,
}

impl ScalarKind {
    /// Encoded width in bytes.
    pub const fn width(self) -> usize {
        match self {
            Self::Bool | Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 => 4,
            Self::U64 | Self::I64 => 8,
            Self::U128 | Self::I128 => 16,
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
        };
        f.pad(name)
    }
}

/// Type information of booleans and fixed-width integers.
#[derive(Debug, Clone)]
pub struct ScalarInfo {
    ty: Type,
    kind: ScalarKind,
}

impl ScalarInfo {
    /// Creates a new [`ScalarInfo`].
    #[inline]
    pub fn new<T: 'static>(kind: ScalarKind) -> Self {
        Self {
            ty: Type::of::<T>(),
            kind,
        }
    }

    /// Returns the underlying [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the scalar shape.
    #[inline]
    pub const fn kind(&self) -> ScalarKind {
        self.kind
    }
}
