//! A module containing [`HashMap`] and associated types.
//!
//! Other than the map itself, this module provides its configuration ([`MapConfig`] and
//! [`LoadFactor`]), the key hashing seam ([`KeyHasher`]) and iteration over the entries, keys or
//! values of a map.
//!
//! As a note, there is no mutable iterator over entries or keys because mutating the keys of a
//! HashMap in place would cause a logic error.
//!
//! [`HashMap`] is also re-exported under the parent module.

mod config;
mod contracts;
mod hash_map;
mod hasher;
mod iter;
mod tests;

pub use config::*;
pub(crate) use hash_map::Bucket;
pub use hash_map::*;
pub use hasher::*;
pub use iter::*;
