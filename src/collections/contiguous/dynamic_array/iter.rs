use std::iter::FusedIterator;
use std::mem::ManuallyDrop;
use std::ptr;
use std::slice;

use super::DynamicArray;
use crate::collections::contiguous::RawBuffer;

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let arr = ManuallyDrop::new(self);
        IntoIter {
            // SAFETY: arr is never used or dropped again, so ownership of the buffer moves into the
            // iterator along with responsibility for the len initialized values.
            buf: unsafe { ptr::read(&arr.buf) },
            start: 0,
            end: arr.len,
        }
    }
}

/// An owned iterator over the elements of a [`DynamicArray`]. See [`DynamicArray::into_iter`].
pub struct IntoIter<T> {
    pub(crate) buf: RawBuffer<T>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: The values in start..end are initialized and haven't been yielded.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.slot(self.start),
                self.end - self.start,
            ));
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: start < end <= len, so the slot is initialized. Incrementing start
            // afterwards means it will never be read or dropped again.
            let value = unsafe { self.buf.slot(self.start).read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: end has just been decremented and is still >= start, so the slot is
            // initialized and will never be read or dropped again.
            Some(unsafe { self.buf.slot(self.end).read() })
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

// Borrowed iteration is provided by the slice iterators that Deref<Target = [T]> gives access to.
impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let slice: &mut [T] = self;
        slice.iter_mut()
    }
}
