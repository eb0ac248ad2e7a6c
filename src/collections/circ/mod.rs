//! Fixed-capacity ring collections. Currently this is just [`CircularBuffer`].

pub mod circular_buffer;

#[doc(inline)]
pub use circular_buffer::CircularBuffer;
