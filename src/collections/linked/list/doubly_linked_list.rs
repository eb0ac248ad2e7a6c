use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter::Rev;
use std::ops::{Index, IndexMut};

use slotmap::SlotMap;

use super::{Ends, Iter, Link, ListState, Node, NodeKey};
use crate::collections::error::{IndexOutOfBounds, NotFound};
use crate::util::fmt::{DebugList, write_separated};
use crate::util::result::ResultExtension;

use ListState::*;

/// A list with links in both directions.
///
/// Nodes are stored in an arena owned by the list and refer to their neighbours by key, so a
/// removed node can't be reached again: its slot is recycled through the arena's free list and
/// any stale key simply fails to resolve.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)`* |
/// | `pop_front/back` | `O(1)` |
/// | `insert_before/after` | `O(n)` |
/// | `remove` | `O(n)` |
/// | `remove_all` | `O(n)` |
/// | `try_get` | `O(min(i, n-i))` |
/// | `contains` | `O(n)` |
///
/// \* Amortized over the growth of the node arena.
pub struct DoublyLinkedList<T> {
    pub(crate) nodes: SlotMap<NodeKey, Node<T>>,
    pub(crate) state: ListState,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new DoublyLinkedList with no elements.
    pub fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            nodes: SlotMap::with_key(),
            state: Empty,
        }
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the list contains no elements.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head().map(|key| &self.nodes[key].value)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head().map(|key| &mut self.nodes[key].value)
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.tail().map(|key| &self.nodes[key].value)
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.tail().map(|key| &mut self.nodes[key].value)
    }

    /// Adds the provided element to the front of the list.
    pub fn push_front(&mut self, value: T) {
        self.link(None, value, self.head());
    }

    /// Adds the provided element to the back of the list.
    ///
    /// # Examples
    /// ```
    /// # use collections_core::collections::linked::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::new();
    /// list.push_back('b');
    /// list.push_back('c');
    /// list.push_front('a');
    /// assert_eq!(list.to_string(), "['a' <-> 'b' <-> 'c']");
    /// ```
    pub fn push_back(&mut self, value: T) {
        self.link(self.tail(), value, None);
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head()?;
        self.unlink(head)
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail()?;
        self.unlink(tail)
    }

    /// Returns a reference to the element at the provided `index`, walking from whichever end of
    /// the list is closer.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let key = self.seek(index)?;
        Ok(&self.nodes[key].value)
    }

    /// Returns a mutable reference to the element at the provided `index`.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let key = self.seek(index)?;
        Ok(&mut self.nodes[key].value)
    }

    /// Returns a reference to the first element for which `predicate` returns true.
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        let key = self.find_key(&mut predicate)?;
        Some(&self.nodes[key].value)
    }

    /// Returns a mutable reference to the first element for which `predicate` returns true.
    pub fn find_mut(&mut self, mut predicate: impl FnMut(&T) -> bool) -> Option<&mut T> {
        let key = self.find_key(&mut predicate)?;
        Some(&mut self.nodes[key].value)
    }

    /// Removes and returns the first element for which `predicate` returns true.
    pub fn remove_first_where(&mut self, mut predicate: impl FnMut(&T) -> bool) -> Option<T> {
        let key = self.find_key(&mut predicate)?;
        self.unlink(key)
    }

    /// Removes every element for which `predicate` returns true, returning how many were removed.
    /// The remaining elements keep their order.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        let mut removed = 0;
        let mut curr = self.head();

        while let Some(key) = curr {
            // Read the successor first, the node's links are gone once it's unlinked.
            curr = self.nodes[key].next;
            if predicate(&self.nodes[key].value) {
                self.unlink(key);
                removed += 1;
            }
        }

        removed
    }

    /// Moves every element of `other` onto the back of self, in order.
    pub fn append(&mut self, other: DoublyLinkedList<T>) {
        for value in other {
            self.push_back(value);
        }
    }

    /// Removes (and drops) every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.state = Empty;
    }

    /// Returns an iterator over all elements, front to back, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.head(),
            back: self.tail(),
            len: self.len(),
        }
    }

    /// Returns an iterator over all elements, back to front. The list itself isn't modified.
    ///
    /// # Examples
    /// ```
    /// # use collections_core::collections::linked::DoublyLinkedList;
    /// let list: DoublyLinkedList<_> = (1..=3).collect();
    /// assert!(list.reversed().copied().eq([3, 2, 1]));
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn reversed(&self) -> Rev<Iter<'_, T>> {
        self.iter().rev()
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Returns true if any element is equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }

    /// Returns the index of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    /// Inserts `value` directly before the first element equal to `target`.
    ///
    /// # Examples
    /// ```
    /// # use collections_core::collections::linked::DoublyLinkedList;
    /// # use collections_core::collections::error::NotFound;
    /// let mut list: DoublyLinkedList<_> = [1, 3].into_iter().collect();
    /// list.insert_before(&3, 2).unwrap();
    /// assert!(list.iter().eq(&[1, 2, 3]));
    /// assert_eq!(list.insert_before(&4, 0), Err(NotFound));
    /// ```
    pub fn insert_before(&mut self, target: &T, value: T) -> Result<(), NotFound> {
        let key = self.find_key(&mut |item: &T| item == target).ok_or(NotFound)?;
        let prev = self.nodes[key].prev;
        self.link(prev, value, Some(key));
        Ok(())
    }

    /// Inserts `value` directly after the first element equal to `target`.
    pub fn insert_after(&mut self, target: &T, value: T) -> Result<(), NotFound> {
        let key = self.find_key(&mut |item: &T| item == target).ok_or(NotFound)?;
        let next = self.nodes[key].next;
        self.link(Some(key), value, next);
        Ok(())
    }

    /// Removes and returns the first element equal to `value`.
    pub fn remove(&mut self, value: &T) -> Result<T, NotFound> {
        self.remove_first_where(|item| item == value).ok_or(NotFound)
    }

    /// Removes every element equal to `value`, returning how many were removed.
    pub fn remove_all(&mut self, value: &T) -> usize {
        self.remove_where(|item| item == value)
    }
}

impl<T> DoublyLinkedList<T> {
    pub(crate) const fn head(&self) -> Link {
        match self.state {
            Empty => None,
            Full(Ends { head, .. }) => Some(head),
        }
    }

    pub(crate) const fn tail(&self) -> Link {
        match self.state {
            Empty => None,
            Full(Ends { tail, .. }) => Some(tail),
        }
    }

    /// Creates a node holding `value` between `prev` and `next`, which must be adjacent (or None
    /// for the respective end of the list). Both neighbours and the list's ends are updated.
    pub(crate) fn link(&mut self, prev: Link, value: T, next: Link) -> NodeKey {
        debug_assert!(prev.map_or(self.head(), |key| self.nodes[key].next) == next);

        let key = self.nodes.insert(Node { value, prev, next });

        if let Some(prev) = prev {
            self.nodes[prev].next = Some(key);
        }
        if let Some(next) = next {
            self.nodes[next].prev = Some(key);
        }

        self.state = match self.state {
            Empty => Full(Ends { head: key, tail: key }),
            Full(Ends { head, tail }) => Full(Ends {
                head: if prev.is_none() { key } else { head },
                tail: if next.is_none() { key } else { tail },
            }),
        };

        key
    }

    /// Removes the node for `key`, joining its neighbours to each other and moving the list's
    /// ends if the node was one of them. Returns None if `key` doesn't belong to this list.
    pub(crate) fn unlink(&mut self, key: NodeKey) -> Option<T> {
        let Full(ends) = self.state else {
            return None;
        };
        let node = self.nodes.remove(key)?;

        if let Some(prev) = node.prev {
            self.nodes[prev].next = node.next;
        }
        if let Some(next) = node.next {
            self.nodes[next].prev = node.prev;
        }

        let head = if node.prev.is_none() { node.next } else { Some(ends.head) };
        let tail = if node.next.is_none() { node.prev } else { Some(ends.tail) };

        self.state = match (head, tail) {
            (Some(head), Some(tail)) => Full(Ends { head, tail }),
            _ => Empty,
        };

        Some(node.value)
    }

    /// Finds the key of the first node whose value satisfies `predicate`.
    pub(crate) fn find_key(&self, predicate: &mut impl FnMut(&T) -> bool) -> Link {
        let mut curr = self.head();
        while let Some(key) = curr {
            let node = &self.nodes[key];
            if predicate(&node.value) {
                return Some(key);
            }
            curr = node.next;
        }
        None
    }

    /// Finds the key of the node at `index`, walking from whichever end is closer.
    pub(crate) fn seek(&self, index: usize) -> Result<NodeKey, IndexOutOfBounds> {
        let len = self.len();
        let out_of_bounds = IndexOutOfBounds { index, len };

        if index >= len {
            return Err(out_of_bounds);
        }

        let (mut curr, steps, forward) = if index < len / 2 {
            (self.head(), index, true)
        } else {
            (self.tail(), len - 1 - index, false)
        };

        for _ in 0..steps {
            curr = curr.and_then(|key| {
                let node = &self.nodes[key];
                if forward { node.next } else { node.prev }
            });
        }

        curr.ok_or(out_of_bounds)
    }

    /// Walks the list in both directions, asserting that every link is mirrored by its
    /// neighbour, that the ends are correct and that the number of reachable nodes matches the
    /// length.
    #[cfg(test)]
    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_links(&self) {
        match self.state {
            Empty => assert_eq!(self.nodes.len(), 0, "An empty list should hold no nodes."),
            Full(Ends { head, tail }) => {
                assert!(self.nodes[head].prev.is_none(), "The head shouldn't have a predecessor.");
                assert!(self.nodes[tail].next.is_none(), "The tail shouldn't have a successor.");

                let mut count = 1;
                let mut curr = head;
                while let Some(next) = self.nodes[curr].next {
                    assert_eq!(self.nodes[next].prev.unwrap(), curr, "Links should be mirrored.");
                    curr = next;
                    count += 1;
                }
                assert_eq!(curr, tail, "Walking forward from the head should reach the tail.");
                assert_eq!(count, self.len(), "Every node should be reachable from the head.");

                let mut count = 1;
                let mut curr = tail;
                while let Some(prev) = self.nodes[curr].prev {
                    curr = prev;
                    count += 1;
                }
                assert_eq!(curr, head, "Walking backward from the tail should reach the head.");
                assert_eq!(count, self.len());
            },
        }
    }
}

impl<T> Index<usize> for DoublyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.try_get(index).throw()
    }
}

impl<T> IndexMut<usize> for DoublyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.try_get_mut(index).throw()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Hash> Hash for DoublyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("contents", &DebugList(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        write_separated(f, self.iter(), "", " <-> ", "")?;
        write!(f, "]")
    }
}
