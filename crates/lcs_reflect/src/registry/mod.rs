//! The Enum Registry: per-container tables mapping a named group to its
//! `(index, prototype)` alternatives.
//!
//! A struct with `Variant<G>` fields opts in with `#[reflect(enum_types)]`
//! and implements [`EnumTypes`]:
//!
//! ```
//! use lcs_reflect::derive::Reflect;
//! use lcs_reflect::ops::{Variant, VariantOf};
//! use lcs_reflect::registry::{EnumTypes, EnumVariant};
//!
//! pub enum Arg {}
//!
//! #[derive(Reflect, Clone, Default, Debug, PartialEq)]
//! pub struct ArgU64(pub u64);
//! #[derive(Reflect, Clone, Default, Debug, PartialEq)]
//! pub struct ArgText(pub String);
//!
//! impl VariantOf<Arg> for ArgU64 {}
//! impl VariantOf<Arg> for ArgText {}
//!
//! #[derive(Reflect, Default)]
//! #[reflect(enum_types)]
//! pub struct Call {
//!     #[lcs = "enum=arg"]
//!     pub args: Vec<Variant<Arg>>,
//! }
//!
//! impl EnumTypes for Call {
//!     fn enum_types() -> Vec<EnumVariant> {
//!         vec![
//!             EnumVariant::new::<Arg, _>("arg", 0, ArgU64::default()),
//!             EnumVariant::new::<Arg, _>("arg", 1, ArgText::default()),
//!         ]
//!     }
//! }
//!
//! let call = Call { args: vec![Variant::new(ArgText("hi".into()))] };
//! let bytes = lcs_reflect::codec::encode(&call).unwrap();
//! assert_eq!(bytes, [1, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, b'h', b'i']);
//! ```

// -----------------------------------------------------------------------------
// Modules

mod enum_registry;
mod enum_variant;

// -----------------------------------------------------------------------------
// Exports

pub use enum_registry::{EnumRegistry, VariantEntry, VariantGroup};
pub use enum_variant::{EnumTypes, EnumVariant};
