//! Small shared utilities for the `lcs` crates.
//!
//! - [`TypeIdMap`]: a hash map keyed by [`TypeId`](core::any::TypeId),
//!   used by the type-info cells and the descriptor cache.
//! - [`hash`]: hasher states and re-exports of `hashbrown` and `foldhash`.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Modules

mod typeid_map;

pub mod hash;

// -----------------------------------------------------------------------------
// Top-level exports

pub use typeid_map::TypeIdMap;
