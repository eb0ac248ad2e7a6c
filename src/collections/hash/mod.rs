//! Hash-based collection types: [`HashMap`], a map with chained buckets, and [`Bag`], a
//! multiset built on any [`MapLike`](crate::collections::traits::MapLike) storage.

pub mod bag;
pub mod map;

#[doc(inline)]
pub use bag::Bag;
#[doc(inline)]
pub use map::HashMap;
