//! Capability contracts shared by the collections.
//!
//! [`Sequence`] is implemented by the unbounded ordered collections, [`StackLike`] and
//! [`QueueLike`] describe the storage that [`Stack`](crate::collections::adapters::Stack) and
//! [`Queue`](crate::collections::adapters::Queue) can sit on, and [`MapLike`] is the map
//! abstraction that [`Bag`](crate::collections::hash::Bag) is built on.

mod container;
mod map;
mod queue;
mod sequence;
mod stack;

pub use container::*;
pub use map::*;
pub use queue::*;
pub use sequence::*;
pub use stack::*;
