//! Various general-purpose collection types.
//!
//! # Purpose
//! These types exist to get the classic container algorithms right: amortized growth, circular
//! indexing, relinking nodes on removal and chained hashing.
//!
//! # Method
//! Contiguous types implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves writing some of the more repetitive functionality. Everything else shares the
//! contracts in [`traits`].

pub mod error;
pub mod traits;

#[cfg(feature = "adapters")]
pub mod adapters;
#[cfg(feature = "circ")]
pub mod circ;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
