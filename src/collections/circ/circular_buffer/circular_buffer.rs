use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::Index;

use super::Iter;
use crate::collections::contiguous::DynamicArray;
use crate::collections::error::{
    CapacityOverflow, EmptyCollection, FullCollection, IndexOutOfBounds,
};
use crate::util::fmt::DebugList;
use crate::util::result::ResultExtension;

/// A first-in-first-out queue with a fixed maximum size, stored in a ring of slots.
///
/// The ring has `maxsize + 1` slots and one of them is always left free, so the two indices are
/// enough to tell an empty buffer from a full one:
/// - empty: `front == rear`
/// - full: `(rear + 1) % slots == front`
///
/// The length is derived from the indices with modular arithmetic and never by scanning.
///
/// # Time Complexity
/// Every operation other than `contains`, `clear` and iteration is `O(1)`. Nothing is ever
/// reallocated after construction.
///
/// # Examples
/// ```
/// # use collections_core::collections::circ::CircularBuffer;
/// # use collections_core::collections::error::FullCollection;
/// let mut queue = CircularBuffer::with_maxsize(3);
/// for i in 1..=3 {
///     queue.enqueue(i).unwrap();
/// }
/// assert!(queue.is_full());
/// assert_eq!(queue.enqueue(4), Err(FullCollection { maxsize: 3 }));
///
/// assert_eq!(queue.dequeue(), Ok(1));
/// queue.enqueue(4).unwrap();
/// assert!(queue.iter().eq(&[2, 3, 4]));
/// ```
#[derive(Clone)]
pub struct CircularBuffer<T> {
    // Fixed length, a slot is Some exactly when it lies in front..rear (wrapping).
    pub(crate) slots: DynamicArray<Option<T>>,
    pub(crate) front: usize,
    pub(crate) rear: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates an empty CircularBuffer that can hold at most `maxsize` elements.
    ///
    /// # Panics
    /// Panics if `maxsize + 1` slots can't be allocated.
    pub fn with_maxsize(maxsize: usize) -> CircularBuffer<T> {
        let slot_count = maxsize.checked_add(1).ok_or(CapacityOverflow).throw();
        CircularBuffer {
            slots: DynamicArray::from_fn(slot_count, |_| None),
            front: 0,
            rear: 0,
        }
    }

    /// Returns the maximum number of elements the buffer can hold, one less than its slot count.
    pub fn maxsize(&self) -> usize {
        self.slot_count() - 1
    }

    pub fn len(&self) -> usize {
        (self.rear + self.slot_count() - self.front) % self.slot_count()
    }

    pub fn is_empty(&self) -> bool {
        self.front == self.rear
    }

    pub fn is_full(&self) -> bool {
        self.advance(self.rear) == self.front
    }

    /// Adds `value` at the rear of the buffer.
    ///
    /// # Errors
    /// Returns [`FullCollection`] without modifying the buffer if it already holds
    /// [`maxsize`](CircularBuffer::maxsize) elements.
    pub fn enqueue(&mut self, value: T) -> Result<(), FullCollection> {
        if self.is_full() {
            return Err(FullCollection { maxsize: self.maxsize() });
        }

        self.slots[self.rear] = Some(value);
        self.rear = self.advance(self.rear);
        Ok(())
    }

    /// Removes and returns the element at the front of the buffer.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the buffer holds no elements.
    pub fn dequeue(&mut self) -> Result<T, EmptyCollection> {
        if self.is_empty() {
            return Err(EmptyCollection);
        }

        let value = self.slots[self.front].take().ok_or(EmptyCollection)?;
        self.front = self.advance(self.front);
        Ok(value)
    }

    /// Removes and returns the most recently enqueued element, which lets the buffer act as a
    /// bounded stack.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the buffer holds no elements.
    pub fn pop_back(&mut self) -> Result<T, EmptyCollection> {
        if self.is_empty() {
            return Err(EmptyCollection);
        }

        let last = self.retreat(self.rear);
        let value = self.slots[last].take().ok_or(EmptyCollection)?;
        self.rear = last;
        Ok(value)
    }

    /// Returns a reference to the element that would be dequeued next.
    pub fn front(&self) -> Result<&T, EmptyCollection> {
        if self.is_empty() {
            return Err(EmptyCollection);
        }
        self.slots[self.front].as_ref().ok_or(EmptyCollection)
    }

    /// Returns a reference to the most recently enqueued element.
    pub fn back(&self) -> Result<&T, EmptyCollection> {
        if self.is_empty() {
            return Err(EmptyCollection);
        }
        self.slots[self.retreat(self.rear)].as_ref().ok_or(EmptyCollection)
    }

    /// Returns a reference to the element `index` places from the front.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let len = self.len();
        if index >= len {
            return Err(IndexOutOfBounds { index, len });
        }
        self.slots[self.physical(index)]
            .as_ref()
            .ok_or(IndexOutOfBounds { index, len })
    }

    /// Removes (and drops) every element. The slots themselves are kept.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.front = 0;
        self.rear = 0;
    }

    /// Returns an iterator over the logical sequence, front to rear.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            front: self.front,
            remaining: self.len(),
        }
    }

    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn advance(&self, index: usize) -> usize {
        (index + 1) % self.slot_count()
    }

    pub(crate) fn retreat(&self, index: usize) -> usize {
        (index + self.slot_count() - 1) % self.slot_count()
    }

    /// Converts a logical offset from the front into a slot index.
    pub(crate) fn physical(&self, offset: usize) -> usize {
        (self.front + offset) % self.slot_count()
    }
}

impl<T: PartialEq> CircularBuffer<T> {
    /// Returns true if any element in the logical sequence is equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }
}

impl<T> Index<usize> for CircularBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.try_get(index).throw()
    }
}

/// Buffers are equal when their logical sequences are, regardless of where in the ring the
/// elements sit or what their maxsizes are.
impl<T: PartialEq> PartialEq for CircularBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularBuffer<T> {}

impl<T: Hash> Hash for CircularBuffer<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for CircularBuffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularBuffer")
            .field("contents", &DebugList(self.iter()))
            .field("len", &self.len())
            .field("maxsize", &self.maxsize())
            .field("front", &self.front)
            .field("rear", &self.rear)
            .finish()
    }
}

impl<T: Debug> Display for CircularBuffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
