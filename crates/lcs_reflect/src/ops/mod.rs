//! Shape traits, the views the codec walks values through.
//!
//! - [`Array`]: fixed-length arrays (e.g. `[u32; 4]`).
//! - [`List`]: variable-length lists (e.g. `Vec<u32>`).
//! - [`Map`]: key/value collections (e.g. `BTreeMap<u8, String>`).
//! - [`Optional`]: `Option<T>`.
//! - [`Struct`]: structs with exported fields.
//! - [`Union`]: tagged unions, implemented by [`Variant<G>`].
//!
//! Scalars and text have no trait; their views are [`ScalarRef`],
//! [`ScalarMut`] and `str`/`String`.

// -----------------------------------------------------------------------------
// Modules

mod array_ops;
mod kind;
mod list_ops;
mod map_ops;
mod optional_ops;
mod scalar;
mod struct_ops;
mod variant_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectMut, ReflectRef};
pub use scalar::{ScalarMut, ScalarRef};

pub use array_ops::Array;
pub use list_ops::List;
pub use map_ops::{Map, MapInsertError};
pub use optional_ops::Optional;
pub use struct_ops::Struct;
pub use variant_ops::{Union, Variant, VariantOf, VariantValue};
