//! A module containing [`Bag`], a multiset that counts repeated values instead of storing them.
//!
//! [`Bag`] is also re-exported under the parent module.

mod bag;

pub use bag::*;
