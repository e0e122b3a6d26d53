//! Code generation.

// -----------------------------------------------------------------------------
// Modules

mod match_reflect;
mod struct_kind;
mod trait_reflect;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use match_reflect::match_reflect_impls;

use trait_reflect::impl_trait_reflect;
use trait_typed::impl_trait_typed;
