use std::error::Error;

use super::Container;

/// Storage that supports first-in-first-out access.
pub trait QueueLike<T>: Container {
    /// The error produced when the storage can't accept another element. Unbounded storage uses
    /// [`Infallible`](std::convert::Infallible).
    type EnqueueError: Error;

    /// Adds `value` to the rear of the queue.
    fn enqueue(&mut self, value: T) -> Result<(), Self::EnqueueError>;

    /// Removes and returns the front of the queue, if there is one.
    fn dequeue(&mut self) -> Option<T>;

    /// Returns a reference to the element that would be dequeued next, if there is one.
    fn front(&self) -> Option<&T>;

    /// Returns a reference to the most recently enqueued element, if there is one.
    fn back(&self) -> Option<&T>;

    /// Returns true if [`enqueue`](QueueLike::enqueue) would currently fail.
    fn is_full(&self) -> bool {
        false
    }

    /// Returns true if any element is equal to `value`.
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq;
}
