use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;

use crate::collections::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// An owned, uninitialized allocation with room for `cap` values of `T`.
///
/// RawBuffer never reads, writes or drops the values it has room for. Tracking which slots are
/// initialized is the responsibility of the owner, which must drop them before the buffer is
/// dropped or shrunk past them.
pub(crate) struct RawBuffer<T> {
    ptr: NonNull<MaybeUninit<T>>,
    cap: usize,
    _phantom: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    /// Creates a buffer with capacity 0, without allocating.
    pub const fn new() -> RawBuffer<T> {
        RawBuffer {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a buffer with capacity exactly `cap`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> RawBuffer<T> {
        let mut buf = RawBuffer::new();
        buf.realloc(cap);
        buf
    }

    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns a pointer to the slot at `index`.
    ///
    /// # Safety
    /// `index` must be less than or equal to the capacity of the buffer. (A pointer to `cap` is one
    /// past the end and must not be read or written.)
    pub const unsafe fn slot(&self, index: usize) -> *mut T {
        // SAFETY: The caller guarantees that index is within (or one past the end of) the
        // allocation, and the allocation is never larger than isize::MAX bytes.
        unsafe { self.ptr.as_ptr().cast::<T>().add(index) }
    }

    pub const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr().cast()
    }

    /// Reallocates the buffer to have capacity equal to `new_cap`, moving the contents of every
    /// slot below `min(cap, new_cap)`.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`].
    pub fn realloc(&mut self, new_cap: usize) {
        if new_cap == self.cap {
            return;
        }

        if size_of::<T>() == 0 {
            // Zero-sized types never need an allocation, the dangling pointer is valid for any
            // number of them.
            self.cap = new_cap;
            return;
        }

        let new_layout = RawBuffer::<T>::make_layout(new_cap);

        let new_ptr = match (self.cap, new_cap) {
            (0, _) => {
                // SAFETY: new_cap is non-zero and T isn't zero-sized, so the layout isn't either.
                let raw_ptr = unsafe { alloc::alloc(new_layout) };
                NonNull::new(raw_ptr.cast()).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
            (old_cap, 0) => {
                // SAFETY: ptr was allocated by the global allocator with the layout for old_cap,
                // which is non-zero.
                unsafe {
                    alloc::dealloc(self.ptr.as_ptr().cast(), RawBuffer::<T>::make_layout(old_cap));
                }
                NonNull::dangling()
            },
            (old_cap, _) => {
                // SAFETY: The same layout and allocator are used as for the original allocation,
                // and the new size is non-zero and no greater than isize::MAX, as checked by
                // Layout::array.
                let raw_ptr = unsafe {
                    alloc::realloc(
                        self.ptr.as_ptr().cast(),
                        RawBuffer::<T>::make_layout(old_cap),
                        new_layout.size(),
                    )
                };
                NonNull::new(raw_ptr.cast()).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    /// Creates a [`Layout`] for `cap` slots of `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    fn make_layout(cap: usize) -> Layout {
        Layout::array::<MaybeUninit<T>>(cap).map_err(|_| CapacityOverflow).throw()
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if self.cap != 0 && size_of::<T>() != 0 {
            // SAFETY: ptr is allocated in the global allocator with the layout for cap, which is
            // non-zero. Contents are the owner's responsibility and are not dropped here.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), RawBuffer::<T>::make_layout(self.cap));
            }
        }
    }
}

// SAFETY: RawBuffer uniquely owns its allocation, so it is Send when T is.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: RawBuffer exposes no interior mutability through a shared reference.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}
