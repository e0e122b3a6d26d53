//! The `#[derive(Reflect)]` macro of `lcs_reflect`.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";
static TAG_ATTRIBUTE_NAME: &str = "lcs";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Struct Reflection
///
/// `#[derive(Reflect)]` implements `Typed`, `Reflect` and `Struct` for
/// named, tuple and unit structs. Enums and unions are rejected.
///
/// ## Exported Fields
///
/// Only fields declared plain `pub` are exported; they are reachable
/// through `Struct` and encoded in declaration order. Every other field
/// is recorded as hidden and never touched by the codec.
///
/// Tuple fields are named by their index (`"0"`, `"1"`, ...).
///
/// ## Directives
///
/// A field carries its codec directives as a raw string:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Message {
///     #[lcs = "optional"]
///     pub reply_to: Option<u64>,
///     #[lcs = "enum=body"]
///     pub body: Variant<Body>,
/// }
/// ```
///
/// The string is validated when the descriptor of the type is built,
/// not by the macro.
///
/// ## Enum Registry
///
/// A struct declaring variant alternatives for its fields opts in with
/// `#[reflect(enum_types)]`, and must implement `EnumTypes`:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(enum_types)]
/// struct Message { /* ... */ }
///
/// impl EnumTypes for Message {
///     fn enum_types() -> Vec<EnumVariant> { /* ... */ }
/// }
/// ```
///
/// ## Generics
///
/// Type parameters are allowed. Each exported field type gets a
/// `Reflect + Typed` bound. Lifetime parameters are rejected, since
/// reflected types are `'static`.
#[proc_macro_derive(Reflect, attributes(reflect, lcs))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    impls::match_reflect_impls(ast)
}
