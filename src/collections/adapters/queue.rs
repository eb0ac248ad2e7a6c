use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;

use crate::collections::circ::CircularBuffer;
use crate::collections::contiguous::DynamicArray;
use crate::collections::error::EmptyCollection;
use crate::collections::linked::DoublyLinkedList;
use crate::collections::traits::QueueLike;

/// A Queue that grows a [`DynamicArray`]. Dequeuing shifts every element, prefer
/// [`LinkedQueue`] or [`CircularQueue`] for long queues.
pub type ArrayQueue<T> = Queue<T, DynamicArray<T>>;
/// A Queue built on a [`DoublyLinkedList`].
pub type LinkedQueue<T> = Queue<T, DoublyLinkedList<T>>;
/// A Queue with a fixed maximum size, built on a [`CircularBuffer`].
pub type CircularQueue<T> = Queue<T, CircularBuffer<T>>;

/// A first-in-first-out collection, storing its elements in `B`.
///
/// # Examples
/// ```
/// # use collections_core::collections::adapters::{CircularQueue, LinkedQueue};
/// # use collections_core::collections::error::{EmptyCollection, FullCollection};
/// let mut queue = LinkedQueue::new();
/// queue.enqueue("first").unwrap();
/// queue.enqueue("second").unwrap();
/// assert_eq!(queue.front(), Ok(&"first"));
/// assert_eq!(queue.back(), Ok(&"second"));
/// assert_eq!(queue.dequeue(), Ok("first"));
///
/// let mut bounded = CircularQueue::bounded(2);
/// bounded.enqueue(1).unwrap();
/// bounded.enqueue(2).unwrap();
/// assert_eq!(bounded.enqueue(3), Err(FullCollection { maxsize: 2 }));
/// ```
pub struct Queue<T, B: QueueLike<T> = DoublyLinkedList<T>> {
    pub(crate) backing: B,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T, B: QueueLike<T> + Default> Queue<T, B> {
    /// Creates an empty Queue with default storage.
    pub fn new() -> Queue<T, B> {
        Queue::with_backing(B::default())
    }
}

impl<T> Queue<T, CircularBuffer<T>> {
    /// Creates an empty Queue that can hold at most `maxsize` elements.
    pub fn bounded(maxsize: usize) -> CircularQueue<T> {
        Queue::with_backing(CircularBuffer::with_maxsize(maxsize))
    }
}

impl<T, B: QueueLike<T>> Queue<T, B> {
    /// Creates a Queue on top of `backing`. The first element of the storage is the front.
    pub fn with_backing(backing: B) -> Queue<T, B> {
        Queue {
            backing,
            _phantom: PhantomData,
        }
    }

    /// Adds `value` to the back of the Queue.
    ///
    /// # Errors
    /// Fails only if the storage is bounded and full. Unbounded storage reports
    /// [`Infallible`](std::convert::Infallible).
    pub fn enqueue(&mut self, value: T) -> Result<(), B::EnqueueError> {
        self.backing.enqueue(value)
    }

    /// Removes and returns the element at the front of the Queue.
    pub fn dequeue(&mut self) -> Result<T, EmptyCollection> {
        self.backing.dequeue().ok_or(EmptyCollection)
    }

    /// Returns a reference to the element that would be dequeued next.
    pub fn front(&self) -> Result<&T, EmptyCollection> {
        self.backing.front().ok_or(EmptyCollection)
    }

    /// Returns a reference to the most recently enqueued element.
    pub fn back(&self) -> Result<&T, EmptyCollection> {
        self.backing.back().ok_or(EmptyCollection)
    }

    pub fn len(&self) -> usize {
        self.backing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    /// Returns true if the next [`enqueue`](Queue::enqueue) would fail.
    pub fn is_full(&self) -> bool {
        self.backing.is_full()
    }

    pub fn clear(&mut self) {
        self.backing.clear()
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.backing.contains(value)
    }

    /// Consumes the Queue, returning its storage.
    pub fn into_inner(self) -> B {
        self.backing
    }
}

impl<T, B: QueueLike<T> + Default> Default for Queue<T, B> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<T, B: QueueLike<T> + Clone> Clone for Queue<T, B> {
    fn clone(&self) -> Self {
        Queue::with_backing(self.backing.clone())
    }
}

impl<T, B: QueueLike<T> + PartialEq> PartialEq for Queue<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.backing == other.backing
    }
}

impl<T, B: QueueLike<T> + Eq> Eq for Queue<T, B> {}

impl<T, B: QueueLike<T> + Debug> Debug for Queue<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue").field("backing", &self.backing).finish()
    }
}

/// Renders the elements front to back.
impl<T, B: QueueLike<T> + Display> Display for Queue<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Queue({})", self.backing)
    }
}
