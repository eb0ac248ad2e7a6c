//! A module containing [`CircularBuffer`] and its iterators.

mod circular_buffer;
mod contracts;
mod iter;
mod tests;

pub use circular_buffer::*;
pub use iter::*;
