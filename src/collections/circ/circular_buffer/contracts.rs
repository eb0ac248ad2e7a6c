use super::CircularBuffer;
use crate::collections::error::FullCollection;
use crate::collections::traits::{Container, QueueLike, StackLike};

impl<T> Container for CircularBuffer<T> {
    fn len(&self) -> usize {
        CircularBuffer::len(self)
    }

    fn is_empty(&self) -> bool {
        CircularBuffer::is_empty(self)
    }

    fn clear(&mut self) {
        CircularBuffer::clear(self)
    }
}

/// The top of the stack is the rear of the buffer.
impl<T> StackLike<T> for CircularBuffer<T> {
    type PushError = FullCollection;

    fn push(&mut self, value: T) -> Result<(), Self::PushError> {
        CircularBuffer::enqueue(self, value)
    }

    fn pop(&mut self) -> Option<T> {
        CircularBuffer::pop_back(self).ok()
    }

    fn peek(&self) -> Option<&T> {
        CircularBuffer::back(self).ok()
    }

    fn is_full(&self) -> bool {
        CircularBuffer::is_full(self)
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        CircularBuffer::contains(self, value)
    }
}

impl<T> QueueLike<T> for CircularBuffer<T> {
    type EnqueueError = FullCollection;

    fn enqueue(&mut self, value: T) -> Result<(), Self::EnqueueError> {
        CircularBuffer::enqueue(self, value)
    }

    fn dequeue(&mut self) -> Option<T> {
        CircularBuffer::dequeue(self).ok()
    }

    fn front(&self) -> Option<&T> {
        CircularBuffer::front(self).ok()
    }

    fn back(&self) -> Option<&T> {
        CircularBuffer::back(self).ok()
    }

    fn is_full(&self) -> bool {
        CircularBuffer::is_full(self)
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        CircularBuffer::contains(self, value)
    }
}
