use crate::info::ScalarKind;

/// A copied scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarRef {
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
}

/// A mutable reference to a scalar value.
#[derive(Debug)]
pub enum ScalarMut<'a> {
    Bool(&'a mut bool),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    U128(&'a mut u128),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    I128(&'a mut i128),
}

macro_rules! impl_scalar_kind {
    ($ty:ty) => {
        impl $ty {
            /// Returns the [`ScalarKind`] of the value.
            pub const fn kind(&self) -> ScalarKind {
                match self {
                    Self::Bool(_) => ScalarKind::Bool,
                    Self::U8(_) => ScalarKind::U8,
                    Self::U16(_) => ScalarKind::U16,
                    Self::U32(_) => ScalarKind::U32,
                    Self::U64(_) => ScalarKind::U64,
                    Self::U128(_) => ScalarKind::U128,
                    Self::I8(_) => ScalarKind::I8,
                    Self::I16(_) => ScalarKind::I16,
                    Self::I32(_) => ScalarKind::I32,
                    Self::I64(_) => ScalarKind::I64,
                    Self::I128(_) => ScalarKind::I128,
                }
            }
        }
    };
}

impl_scalar_kind!(ScalarRef);
impl_scalar_kind!(ScalarMut<'_>);
