use core::fmt;

use crate::codec::TagError;
use crate::info::ReflectKind;

/// `Type.field`, or `Type` alone for a value outside any struct.
struct Place<'a>(&'a str, &'a str);

impl fmt::Display for Place<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.1 {
            "" => write!(f, "`{}`", self.0),
            field => write!(f, "`{}.{field}`", self.0),
        }
    }
}

#[inline]
fn place<'a>(ty: &'a str, field: &'a str) -> Place<'a> {
    Place(ty, field)
}

// -----------------------------------------------------------------------------
// ConfigError

/// A type cannot be described for the wire.
///
/// Raised while building a type descriptor. The result of a build is
/// cached, so the same error is returned for every later use of the type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{}: {source}", place(.ty, .field))]
    Tag {
        ty: &'static str,
        field: &'static str,
        source: TagError,
    },
    #[error("`{ty}.{field}` is not exported but carries the directive `{tag}`")]
    HiddenDirective {
        ty: &'static str,
        field: &'static str,
        tag: &'static str,
    },
    #[error("{} refers to the enum group `{group}`, which `{ty}` does not register", place(.ty, .field))]
    MissingGroup {
        ty: &'static str,
        field: &'static str,
        group: &'static str,
    },
    #[error("enum group `{group}` of `{ty}` registers index {index} twice")]
    DuplicateIndex {
        ty: &'static str,
        group: &'static str,
        index: u32,
    },
    #[error("enum group `{group}` of `{ty}` registers `{variant}` twice")]
    DuplicateType {
        ty: &'static str,
        group: &'static str,
        variant: &'static str,
    },
    #[error("enum group `{group}` of `{ty}`: expected marker `{expected}`, found `{found}`")]
    GroupMismatch {
        ty: &'static str,
        group: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    #[error("{} has the unsupported type `{found}`: {reason}", place(.ty, .field))]
    Unsupported {
        ty: &'static str,
        field: &'static str,
        found: &'static str,
        reason: &'static str,
    },
    #[error("{}: {reason}", place(.ty, .field))]
    Directive {
        ty: &'static str,
        field: &'static str,
        reason: &'static str,
    },
    #[error("{}: sequence items and map entries must occupy at least one byte", place(.ty, .field))]
    ZeroSizedElement {
        ty: &'static str,
        field: &'static str,
    },
    #[error("`{ty}` contains itself with no `Option` or collection in between")]
    InfiniteSize { ty: &'static str },
}

// -----------------------------------------------------------------------------
// Error

/// Why a variant could not be matched with its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Unregistered {
    #[error("no alternative has the index {0}")]
    Index(u32),
    #[error("`{0}` is not an alternative")]
    Type(&'static str),
    #[error("the variant holds no value")]
    Empty,
}

/// An out-of-domain value in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidEncoding {
    #[error("presence flag {0:#04x}")]
    PresenceFlag(u8),
    #[error("boolean {0:#04x}")]
    Bool(u8),
    #[error("text is not UTF-8")]
    Utf8,
    #[error("map keys are not in strictly increasing order")]
    MapKeyOrder,
}

/// The error type of encoding and decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("enum group `{group}`: {detail}")]
    UnregisteredVariant {
        group: &'static str,
        detail: Unregistered,
    },
    #[error("unexpected end of input: {needed} bytes needed, {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },
    #[error("invalid encoding: {0}")]
    InvalidEncoding(InvalidEncoding),
    #[error("{remaining} bytes left after the value")]
    TrailingBytes { remaining: usize },
    #[error("expected a {expected} value, found `{type_name}`")]
    UnsupportedKind {
        expected: ReflectKind,
        type_name: &'static str,
    },
    #[error("length {len} does not fit in a u32 prefix")]
    LengthOverflow { len: usize },
    #[error("nesting exceeds the limit of {limit} levels")]
    DepthLimitExceeded { limit: usize },
}

impl From<InvalidEncoding> for Error {
    #[inline]
    fn from(value: InvalidEncoding) -> Self {
        Self::InvalidEncoding(value)
    }
}
