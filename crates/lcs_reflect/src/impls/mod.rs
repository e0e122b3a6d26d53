//! Reflection impls for native and standard library types, and the
//! static cells used to implement [`Typed`](crate::info::Typed).
//!
//! | Type | Shape |
//! |---|---|
//! | `bool`, `u8`..`u128`, `i8`..`i128` | Scalar |
//! | `String` | Text |
//! | `[T; N]` | Array |
//! | `Vec<T>` | List |
//! | `Option<T>` | Optional |
//! | `BTreeMap<K, V>`, `HashMap<K, V, S>` | Map |
//! | `Box<T>` | same as `T` |
//! | `f32`, `f64`, `usize`, `isize`, `char` | Opaque (rejected by the codec) |

// -----------------------------------------------------------------------------
// Modules

mod alloc;
mod cell;
mod core;
mod native;
mod std;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, NonGenericTypeInfoCell};
