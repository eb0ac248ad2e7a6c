use std::error::Error;

use super::Container;

/// Storage that supports last-in-first-out access.
pub trait StackLike<T>: Container {
    /// The error produced when the storage can't accept another element. Unbounded storage uses
    /// [`Infallible`](std::convert::Infallible).
    type PushError: Error;

    /// Adds `value` to the top of the stack.
    fn push(&mut self, value: T) -> Result<(), Self::PushError>;

    /// Removes and returns the top of the stack, if there is one.
    fn pop(&mut self) -> Option<T>;

    /// Returns a reference to the top of the stack, if there is one.
    fn peek(&self) -> Option<&T>;

    /// Returns true if [`push`](StackLike::push) would currently fail.
    fn is_full(&self) -> bool {
        false
    }

    /// Returns true if any element is equal to `value`.
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq;
}
