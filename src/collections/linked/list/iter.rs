use std::iter::FusedIterator;

use slotmap::SlotMap;

use super::{DoublyLinkedList, Link, Node, NodeKey};

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// An owned iterator over the elements of a [`DoublyLinkedList`].
pub struct IntoIter<T> {
    // Holding the list and popping from either end keeps the links valid for free.
    pub(crate) list: DoublyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowed iterator over the elements of a [`DoublyLinkedList`], which can be walked from
/// either end. See [`DoublyLinkedList::iter`] and [`DoublyLinkedList::reversed`].
pub struct Iter<'a, T> {
    pub(crate) nodes: &'a SlotMap<NodeKey, Node<T>>,
    pub(crate) front: Link,
    pub(crate) back: Link,
    // The ends only meet in the middle, so the remaining count decides when to stop.
    pub(crate) len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = nodes.get(self.front?)?;
        self.front = node.next;
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = nodes.get(self.back?)?;
        self.back = node.prev;
        self.len -= 1;
        Some(&node.value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}
