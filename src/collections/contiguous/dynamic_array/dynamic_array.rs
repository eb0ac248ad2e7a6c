use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::RawBuffer;
use crate::collections::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::fmt::DebugList;
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;
const SHRINK_THRESHOLD: usize = 4;

/// A homogeneous, contiguous collection that grows and shrinks with its contents.
///
/// The capacity doubles whenever an insertion finds the array full, and halves whenever a
/// removal leaves it no more than a quarter full (never dropping below 1). Capacity is an
/// implementation detail: a DynamicArray is never "full".
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynamicArray.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `try_get` | `O(1)` |
/// | `set` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `push_front` | `O(n)` |
/// | `pop` | `O(1)`*, `O(n)` |
/// | `pop_front` | `O(n)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `contains` | `O(n)` |
///
/// \* Amortized. An individual call reallocates (`O(n)`) when it crosses a resize threshold.
pub struct DynamicArray<T> {
    pub(crate) buf: RawBuffer<T>,
    pub(crate) len: usize,
}

impl<T> DynamicArray<T> {
    /// Creates a new DynamicArray with length and capacity 0. Memory will be allocated by the
    /// first insertion.
    ///
    /// # Examples
    /// ```
    /// # use collections_core::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<u8> = DynamicArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 0);
    /// ```
    pub const fn new() -> DynamicArray<T> {
        DynamicArray {
            buf: RawBuffer::new(),
            len: 0,
        }
    }

    /// Creates a new DynamicArray with capacity exactly equal to `cap`, allowing values to be
    /// added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> DynamicArray<T> {
        DynamicArray {
            buf: RawBuffer::with_cap(cap),
            len: 0,
        }
    }

    /// Creates a DynamicArray of length `len`, where the value at each index is produced by
    /// calling `f` with that index.
    ///
    /// # Examples
    /// ```
    /// # use collections_core::collections::contiguous::DynamicArray;
    /// let arr = DynamicArray::from_fn(4, |i| i * i);
    /// assert_eq!(&*arr, &[0, 1, 4, 9]);
    /// ```
    pub fn from_fn(len: usize, mut f: impl FnMut(usize) -> T) -> DynamicArray<T> {
        let mut arr = DynamicArray::with_cap(len);
        for index in 0..len {
            // SAFETY: arr was created with capacity for len values.
            unsafe { arr.push_unchecked(f(index)); }
        }
        arr
    }

    /// Returns the number of elements in the DynamicArray.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DynamicArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the DynamicArray.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Examples
    /// ```
    /// # use collections_core::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<_> = ['a', 'b'].into_iter().collect();
    /// assert_eq!(arr.try_get(1), Ok(&'b'));
    /// assert!(arr.try_get(2).is_err());
    /// ```
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&self[index])
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&mut self[index])
    }

    /// Replaces the element at `index` with `value`, returning the old value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        Ok(std::mem::replace(self.try_get_mut(index)?, value))
    }

    /// Pushes the provided value onto the end of the DynamicArray, increasing the capacity if
    /// required.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use collections_core::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::<u8>::new();
    /// for i in 0..=5 {
    ///     arr.push(i);
    /// }
    /// assert_eq!(&*arr, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
    }

    /// Pushes the provided value onto the end of the DynamicArray, assuming that there is enough
    /// capacity to do so.
    ///
    /// # Safety
    /// The DynamicArray must have a capacity greater than its length.
    pub(crate) unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that len < cap, so the slot is in bounds and
        // currently uninitialized.
        unsafe { self.buf.slot(self.len).write(value); }
        self.len += 1;
    }

    /// Inserts the provided value before the first element, moving every element one place to
    /// the right.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use collections_core::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = (1..=3).collect();
    /// arr.push_front(0);
    /// assert_eq!(&*arr, &[0, 1, 2, 3]);
    /// ```
    pub fn push_front(&mut self, value: T) {
        self.try_insert(0, value).throw()
    }

    /// Pops the last value off the end of the DynamicArray, returning an owned value if the
    /// DynamicArray isn't empty.
    ///
    /// # Examples
    /// ```
    /// # use collections_core::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = (0..5).collect();
    /// for i in (0..arr.len()).rev() {
    ///     assert_eq!(arr.pop(), Some(i));
    /// }
    /// assert_eq!(arr.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: len has just been decremented, so the slot is in bounds and initialized. Once
        // read, the slot is considered uninitialized because it lies past len.
        let value = unsafe { self.buf.slot(self.len).read() };
        self.shrink_if_sparse();
        Some(value)
    }

    /// Removes the first value of the DynamicArray, moving every other element one place to the
    /// left. Returns None if the DynamicArray is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.try_remove(0).ok()
        }
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary.
    /// Inserting at an index equal to the length appends the value.
    ///
    /// # Panics
    /// Panics if the provided index is greater than the length.
    ///
    /// # Examples
    /// ```
    /// # use collections_core::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = (0..3).collect();
    /// arr.insert(1, 100);
    /// arr.insert(1, 200);
    /// arr.insert(3, 300);
    /// assert_eq!(&*arr, &[0, 200, 100, 300, 1, 2]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at the given index, returning an [`Err`] rather than panicking
    /// if the index is greater than the length. The DynamicArray is unchanged on failure.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        if self.len == self.cap() {
            self.grow();
        }

        // SAFETY: index <= len < cap, so both the source range index..len and the destination
        // range index+1..len+1 are within the allocation. ptr::copy handles the overlap. The slot
        // at index is then overwritten without being dropped, because its value has moved.
        unsafe {
            let slot = self.buf.slot(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            slot.write(value);
        }
        self.len += 1;

        Ok(())
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use collections_core::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = "Hello world!".chars().collect();
    /// assert_eq!(arr.remove(1), 'e');
    /// assert_eq!(arr.remove(4), ' ');
    /// assert_eq!(arr, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at the provided index, returning an [`Err`] rather than panicking if
    /// the index is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        // SAFETY: index < len, so the slot is initialized. After reading it, the following
        // len-index-1 values are moved left by one, all within the initialized range.
        let value = unsafe {
            let slot = self.buf.slot(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            value
        };
        self.len -= 1;
        self.shrink_if_sparse();

        Ok(value)
    }

    /// Drops every element, leaving the capacity unchanged.
    pub fn clear(&mut self) {
        let len = self.len;
        // Set len first, so that a panicking drop can't lead to a double drop.
        self.len = 0;

        // SAFETY: All values below the old length were initialized and are no longer reachable.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.as_ptr(), len));
        }
    }

    /// Ensures that the DynamicArray has capacity to hold an additional `extra` elements. After
    /// invoking this method, the capacity will be >= len + extra.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();

        if new_cap <= self.cap() {
            return;
        }

        self.realloc_with_cap(new_cap);
    }

    /// Shrinks the DynamicArray so that its capacity is equal to its length.
    pub fn shrink_to_fit(&mut self) {
        self.realloc_with_cap(self.len);
    }

    /// Returns a slice over every element, in order.
    pub fn as_slice(&self) -> &[T] {
        self
    }

    /// Reallocates the internal buffer with the provided capacity, which must be at least len.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);
        log::trace!("DynamicArray capacity {} -> {}", self.cap(), new_cap);
        self.buf.realloc(new_cap);
    }

    /// Grows the internal buffer by the growth factor. After calling this, the DynamicArray can
    /// take at least one more element.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        let new_cap = self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw();
        self.realloc_with_cap(cmp::max(new_cap, MIN_CAP));
    }

    /// Halves the capacity if no more than a quarter of it is in use.
    pub(crate) fn shrink_if_sparse(&mut self) {
        let new_cap = cmp::max(self.cap() / GROWTH_FACTOR, MIN_CAP);
        if self.len <= self.cap() / SHRINK_THRESHOLD && new_cap < self.cap() {
            self.realloc_with_cap(new_cap);
        }
    }

    /// Checks that the provided index refers to an element.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = DynamicArray::new();
        arr.extend(iter);
        arr
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(value: &[T]) -> Self {
        value.iter().cloned().collect()
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // Drop the initialized values, the buffer deallocates itself afterwards.
        self.clear();
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The buffer is valid for len initialized values. The pointer is non-null and
        // properly aligned (dangling only when no values are read), and the total size is no
        // greater than isize::MAX as the result of being a valid allocation.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with exclusive access guaranteed by &mut self.
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for DynamicArray<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for DynamicArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut arr = DynamicArray::with_cap(self.cap());
        for value in self.iter() {
            // SAFETY: arr has the same capacity as self, which is at least self.len.
            unsafe { arr.push_unchecked(value.clone()); }
        }
        arr
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("contents", &DebugList(self.iter()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
