use std::convert::Infallible;
use std::slice;

use super::DynamicArray;
use crate::collections::traits::{Container, QueueLike, Sequence, StackLike};

impl<T> Container for DynamicArray<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        DynamicArray::clear(self)
    }
}

impl<T> Sequence<T> for DynamicArray<T> {
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        T: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    fn front(&self) -> Option<&T> {
        self.first()
    }

    fn back(&self) -> Option<&T> {
        self.last()
    }

    fn push_back(&mut self, value: T) {
        self.push(value)
    }

    fn push_front(&mut self, value: T) {
        DynamicArray::push_front(self, value)
    }

    fn pop_back(&mut self) -> Option<T> {
        self.pop()
    }

    fn pop_front(&mut self) -> Option<T> {
        DynamicArray::pop_front(self)
    }
}

/// The top of the stack is the end of the array, so both `push` and `pop` are amortized `O(1)`.
impl<T> StackLike<T> for DynamicArray<T> {
    type PushError = Infallible;

    fn push(&mut self, value: T) -> Result<(), Self::PushError> {
        DynamicArray::push(self, value);
        Ok(())
    }

    fn pop(&mut self) -> Option<T> {
        DynamicArray::pop(self)
    }

    fn peek(&self) -> Option<&T> {
        self.last()
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(value)
    }
}

/// Dequeuing shifts every remaining element, so it is `O(n)`. Prefer a linked or circular
/// backing for long queues.
impl<T> QueueLike<T> for DynamicArray<T> {
    type EnqueueError = Infallible;

    fn enqueue(&mut self, value: T) -> Result<(), Self::EnqueueError> {
        DynamicArray::push(self, value);
        Ok(())
    }

    fn dequeue(&mut self) -> Option<T> {
        DynamicArray::pop_front(self)
    }

    fn front(&self) -> Option<&T> {
        self.first()
    }

    fn back(&self) -> Option<&T> {
        self.last()
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(value)
    }
}
