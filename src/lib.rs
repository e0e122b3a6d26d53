//! A canonical, little-endian binary codec driven by runtime reflection.
//!
//! Derive [`Reflect`] on a struct; its exported (`pub`) fields are encoded
//! in declaration order, and the same value always produces the same bytes.
//!
//! ```
//! use lcs::Reflect;
//!
//! #[derive(Reflect, Default, Debug, PartialEq)]
//! struct Transfer {
//!     pub amount: u64,
//!     #[lcs = "optional"]
//!     pub memo: Option<String>,
//!     retries: u8,
//! }
//!
//! let value = Transfer { amount: 5, memo: Some("hi".into()), retries: 3 };
//! let bytes = lcs::encode(&value).unwrap();
//! assert_eq!(bytes, [5, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 0, b'h', b'i']);
//!
//! let back: Transfer = lcs::decode(&bytes).unwrap();
//! assert_eq!(back.memo.as_deref(), Some("hi"));
//! assert_eq!(back.retries, 0);
//! ```
//!
//! See [`codec`] for the wire format and [`reflect::registry`] for
//! tagged unions.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use lcs_reflect as reflect;
pub use lcs_utils as utils;

pub use lcs_reflect::codec;
pub use lcs_reflect::codec::{
    ConfigError, Decoder, Encoder, Error, decode, decode_into, descriptor_of, encode, encode_dyn,
    encode_into,
};
pub use lcs_reflect::Reflect;
pub use lcs_reflect::derive::Reflect;
pub use lcs_reflect::ops::{Variant, VariantOf};
pub use lcs_reflect::registry::{EnumTypes, EnumVariant};
