//! The canonical binary codec.
//!
//! Values are encoded by walking them against their type's
//! [`TypeDescriptor`]:
//!
//! | Shape | Encoding |
//! |---|---|
//! | `bool` | one byte, `0` or `1` |
//! | integers | little-endian, two's complement |
//! | `String`, `Vec<u8>` | `u32` byte length, then the bytes |
//! | `[T; N]` | `N` items, no prefix |
//! | `Vec<T>` | `u32` count, then the items |
//! | maps | `u32` count, then the entries ordered by encoded key |
//! | structs | exported fields in declaration order |
//! | `Option<T>` | presence byte `0` or `1`, then the value if present |
//! | `Variant<G>` | `u32` registered index, then the alternative |
//!
//! Fields opt in to optional and variant handling with directives:
//!
//! ```
//! use lcs_reflect::{codec, derive::Reflect};
//!
//! #[derive(Reflect, Default, Debug, PartialEq)]
//! struct Entry {
//!     pub key: u8,
//!     #[lcs = "optional"]
//!     pub value: Option<String>,
//! }
//!
//! let entry = Entry { key: 3, value: Some("ab".into()) };
//! let bytes = codec::encode(&entry).unwrap();
//! assert_eq!(bytes, [3, 1, 2, 0, 0, 0, b'a', b'b']);
//! assert_eq!(codec::decode::<Entry>(&bytes).unwrap(), entry);
//! ```

// -----------------------------------------------------------------------------
// Modules

mod de;
mod descriptor;
mod error;
mod options;
mod path;
mod ser;
mod tag;

// -----------------------------------------------------------------------------
// Exports

pub use de::Decoder;
pub use descriptor::{FieldLayout, Layout, TypeDescriptor};
pub use error::{ConfigError, Error, InvalidEncoding, Unregistered};
pub use options::{DEFAULT_MAX_DEPTH, DecodeOptions, EncodeOptions};
pub use ser::Encoder;
pub use tag::{Directive, DirectiveSet, TagError};

use alloc::vec::Vec;

use crate::Reflect;
use crate::info::Typed;

// -----------------------------------------------------------------------------
// Convenience functions

/// Encodes `value` with default options.
#[inline]
pub fn encode<T: Reflect>(value: &T) -> Result<Vec<u8>, Error> {
    Encoder::new().encode(value)
}

/// Appends the encoding of `value` to `out`, with default options.
#[inline]
pub fn encode_into<T: Reflect>(value: &T, out: &mut Vec<u8>) -> Result<(), Error> {
    Encoder::new().encode_into(value, out)
}

/// Encodes a type-erased value with default options.
#[inline]
pub fn encode_dyn(value: &dyn Reflect) -> Result<Vec<u8>, Error> {
    Encoder::new().encode(value)
}

/// Decodes a new `T` with default options.
#[inline]
pub fn decode<T: Reflect + Default>(bytes: &[u8]) -> Result<T, Error> {
    Decoder::new().decode(bytes)
}

/// Decodes into an existing `T` with default options.
#[inline]
pub fn decode_into<T: Reflect>(bytes: &[u8], target: &mut T) -> Result<(), Error> {
    Decoder::new().decode_into(bytes, target)
}

/// Returns the validated descriptor of `T`.
///
/// Fails with the same error every time if `T` cannot be encoded.
#[inline]
pub fn descriptor_of<T: Typed>() -> Result<&'static TypeDescriptor, ConfigError> {
    descriptor::validated(T::type_info())
}
