//! Last-in-first-out and first-in-first-out wrappers over the other collections.
//!
//! [`Stack`] and [`Queue`] only expose the operations of their access policy. The storage they
//! delegate to is chosen by a type parameter: anything implementing
//! [`StackLike`](crate::collections::traits::StackLike) or
//! [`QueueLike`](crate::collections::traits::QueueLike) respectively. Aliases name the common
//! choices:
//!
//! | Alias | Storage | Trade-off |
//! |-|-|-|
//! | [`ArrayStack`], [`ArrayQueue`] | [`DynamicArray`] | Amortized `O(1)` push, `O(n)` dequeue |
//! | [`LinkedStack`], [`LinkedQueue`] | [`DoublyLinkedList`] | `O(1)` at both ends, no resizing |
//! | [`BoundedStack`], [`CircularQueue`] | [`CircularBuffer`] | `O(1)`, fails when full |
//!
//! [`DynamicArray`]: crate::collections::contiguous::DynamicArray
//! [`DoublyLinkedList`]: crate::collections::linked::DoublyLinkedList
//! [`CircularBuffer`]: crate::collections::circ::CircularBuffer

mod queue;
mod stack;
mod tests;

pub use queue::*;
pub use stack::*;
