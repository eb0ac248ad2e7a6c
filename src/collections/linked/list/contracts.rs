use std::convert::Infallible;

use super::{DoublyLinkedList, Iter};
use crate::collections::traits::{Container, QueueLike, Sequence, StackLike};

impl<T> Container for DoublyLinkedList<T> {
    fn len(&self) -> usize {
        DoublyLinkedList::len(self)
    }

    fn is_empty(&self) -> bool {
        DoublyLinkedList::is_empty(self)
    }

    fn clear(&mut self) {
        DoublyLinkedList::clear(self)
    }
}

impl<T> Sequence<T> for DoublyLinkedList<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        T: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        DoublyLinkedList::iter(self)
    }

    fn front(&self) -> Option<&T> {
        DoublyLinkedList::front(self)
    }

    fn back(&self) -> Option<&T> {
        DoublyLinkedList::back(self)
    }

    fn push_back(&mut self, value: T) {
        DoublyLinkedList::push_back(self, value)
    }

    fn push_front(&mut self, value: T) {
        DoublyLinkedList::push_front(self, value)
    }

    fn pop_back(&mut self) -> Option<T> {
        DoublyLinkedList::pop_back(self)
    }

    fn pop_front(&mut self) -> Option<T> {
        DoublyLinkedList::pop_front(self)
    }
}

/// The top of the stack is the tail of the list.
impl<T> StackLike<T> for DoublyLinkedList<T> {
    type PushError = Infallible;

    fn push(&mut self, value: T) -> Result<(), Self::PushError> {
        DoublyLinkedList::push_back(self, value);
        Ok(())
    }

    fn pop(&mut self) -> Option<T> {
        DoublyLinkedList::pop_back(self)
    }

    fn peek(&self) -> Option<&T> {
        DoublyLinkedList::back(self)
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        DoublyLinkedList::contains(self, value)
    }
}

impl<T> QueueLike<T> for DoublyLinkedList<T> {
    type EnqueueError = Infallible;

    fn enqueue(&mut self, value: T) -> Result<(), Self::EnqueueError> {
        DoublyLinkedList::push_back(self, value);
        Ok(())
    }

    fn dequeue(&mut self) -> Option<T> {
        DoublyLinkedList::pop_front(self)
    }

    fn front(&self) -> Option<&T> {
        DoublyLinkedList::front(self)
    }

    fn back(&self) -> Option<&T> {
        DoublyLinkedList::back(self)
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        DoublyLinkedList::contains(self, value)
    }
}
