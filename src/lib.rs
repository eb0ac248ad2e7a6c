//! A small library of classic containers that manage their own storage.
//!
//! # Purpose
//! The crate collects the handful of containers that every data structures course ends up
//! writing: a growable array, a doubly linked list, a ring buffer, a chained hash map, a bag and
//! the stack / queue adapters that sit on top of them. Each one is written against its own
//! invariants (capacity vs. length, wrap-around indices, link consistency, load factor) rather
//! than by wrapping the standard library's equivalent.
//!
//! # Method
//! [`DynamicArray`](collections::contiguous::DynamicArray) owns a raw allocation and is the
//! backing store for the ring buffer, the 2D view and the hash map's bucket table.
//! [`DoublyLinkedList`](collections::linked::DoublyLinkedList) keeps its nodes in an
//! index-addressed arena, so links are plain keys and no node can outlive the list. The hash
//! map chains entries in linked lists hung off a dynamic array of buckets.
//!
//! The containers share a few capability traits from [`collections::traits`], which is what
//! lets [`Stack`](collections::adapters::Stack) and [`Queue`](collections::adapters::Queue) pick
//! their backing store as a type parameter, and lets [`Bag`](collections::hash::Bag) sit on any
//! map.
//!
//! # Error Handling
//! Fallible operations return strongly typed errors: small structs that implement
//! [`Error`](std::error::Error), combined into enums for static dispatch when an operation can
//! fail in more than one way. See [`collections::error`]. Where it is more ergonomic, a
//! panicking convenience exists beside the `try_` method (indexing, `insert`, `remove`), and it
//! panics with the message of the same error.
//!
//! Element types are checked by the compiler: a `DynamicArray<u8>` can't be handed a `String`,
//! so there is no runtime type-mismatch error.
//!
//! # Logging
//! Structural events (reallocations, rehashes) are reported through the [`log`] facade at
//! `trace` and `debug` level. Nothing is logged unless the application installs a logger.
//!
//! # Dependencies
//! - `derive_more` for the error types' `Display` / `Error` / `From` boilerplate.
//! - `slotmap` for the linked list's node arena.
//! - `log` for the logging facade.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
