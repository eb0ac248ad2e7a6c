//! Contiguous collection types. Namely [`DynamicArray`], a growable array that owns its
//! allocation, and [`Array2D`], a fixed-shape row-major view built on top of it.
#![warn(missing_docs)]

pub mod array_2d;
mod buffer;
pub mod dynamic_array;

#[doc(inline)]
pub use array_2d::Array2D;
pub(crate) use buffer::RawBuffer;
#[doc(inline)]
pub use dynamic_array::DynamicArray;
