//! Error types shared by the collections.
//!
//! Each failure kind is its own (mostly zero-sized) struct, so a method's signature says exactly
//! how it can fail. Operations with more than one failure mode combine them into an enum, e.g.
//! [`BagError`].

use derive_more::{Display, Error, From, IsVariant};

/// An index fell outside the logical range of a collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// A removal or peek was attempted on a collection with no elements.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Collection is empty!")]
pub struct EmptyCollection;

/// An insertion was attempted on a fixed-capacity collection that is already full.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Collection is full! (maxsize: {maxsize})")]
pub struct FullCollection {
    pub maxsize: usize,
}

/// A value that was required to be present in the collection wasn't.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Value not found in collection!")]
pub struct NotFound;

/// A key that was required to be present in a map wasn't.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Key not found in map!")]
pub struct KeyNotFound;

/// A value was rejected because the collection treats it as a sentinel (or it is otherwise not a
/// legal argument, such as a load factor that isn't positive).
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Invalid value!")]
pub struct InvalidValue;

/// A requested capacity can't be represented in memory.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// Rows of differing lengths were supplied where a rectangular shape is required.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Row {row} has {found} columns, expected {expected}!")]
pub struct RaggedRows {
    pub row: usize,
    pub expected: usize,
    pub found: usize,
}

/// Errors produced by [`Bag::remove`](crate::collections::hash::Bag::remove).
#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum BagError {
    InvalidValue(InvalidValue),
    NotFound(NotFound),
}
