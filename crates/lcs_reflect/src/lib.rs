//! Runtime reflection for canonically encoded types, and the codec built on it.
//!
//! - [`info`]: static type information ([`Typed`](info::Typed), [`TypeInfo`](info::TypeInfo)).
//! - [`ops`]: shape traits used to walk values (`Struct`, `List`, `Optional`, ...),
//!   and the [`Variant`](ops::Variant) tagged-union value.
//! - [`registry`]: per-container Enum Registry declarations.
//! - [`codec`]: descriptors, encoder and decoder.
//!
//! ```
//! use lcs_reflect::{codec, derive::Reflect};
//!
//! #[derive(Reflect, Default, Debug, PartialEq)]
//! struct Point {
//!     pub x: u16,
//!     pub y: u16,
//!     scratch: u64,
//! }
//!
//! let bytes = codec::encode(&Point { x: 1, y: 2, scratch: 99 }).unwrap();
//! assert_eq!(bytes, [1, 0, 2, 0]);
//!
//! let back: Point = codec::decode(&bytes).unwrap();
//! assert_eq!(back, Point { x: 1, y: 2, scratch: 0 });
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// The derive resolves `lcs_reflect` by absolute path, which must also work
// inside this crate's own tests.
extern crate self as lcs_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod codec;
pub mod impls;
pub mod info;
pub mod ops;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use lcs_reflect_derive as derive;
pub use reflection::Reflect;
