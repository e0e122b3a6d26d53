//! Static type information.
//!
//! Every reflected type exposes a `&'static` [`TypeInfo`] through [`Typed`].
//! The codec classifies a type's wire shape from it.

// -----------------------------------------------------------------------------
// Modules

mod array_info;
mod field_info;
mod list_info;
mod map_info;
mod opaque_info;
mod optional_info;
mod scalar_info;
mod struct_info;
mod ty;
mod type_info;
mod typed;
mod variant_info;

// -----------------------------------------------------------------------------
// Exports

pub use array_info::ArrayInfo;
pub use field_info::{HiddenField, NamedField};
pub use list_info::ListInfo;
pub use map_info::MapInfo;
pub use opaque_info::OpaqueInfo;
pub use optional_info::OptionalInfo;
pub use scalar_info::{ScalarInfo, ScalarKind};
pub use struct_info::StructInfo;
pub use ty::Type;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use typed::{DynamicTyped, Typed};
pub use variant_info::VariantInfo;
