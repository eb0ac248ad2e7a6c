use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;

use crate::collections::circ::CircularBuffer;
use crate::collections::contiguous::DynamicArray;
use crate::collections::error::EmptyCollection;
use crate::collections::linked::DoublyLinkedList;
use crate::collections::traits::{Sequence, StackLike};

/// A Stack that grows a [`DynamicArray`].
pub type ArrayStack<T> = Stack<T, DynamicArray<T>>;
/// A Stack built on a [`DoublyLinkedList`].
pub type LinkedStack<T> = Stack<T, DoublyLinkedList<T>>;
/// A Stack with a fixed maximum size, built on a [`CircularBuffer`].
pub type BoundedStack<T> = Stack<T, CircularBuffer<T>>;

/// A last-in-first-out collection, storing its elements in `B`.
///
/// # Examples
/// ```
/// # use collections_core::collections::adapters::{ArrayStack, BoundedStack};
/// # use collections_core::collections::error::{EmptyCollection, FullCollection};
/// let mut stack = ArrayStack::new();
/// stack.push(1).unwrap();
/// stack.push(2).unwrap();
/// assert_eq!(stack.peek(), Ok(&2));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// assert_eq!(stack.pop(), Err(EmptyCollection));
///
/// let mut bounded = BoundedStack::bounded(1);
/// bounded.push('a').unwrap();
/// assert_eq!(bounded.push('b'), Err(FullCollection { maxsize: 1 }));
/// ```
pub struct Stack<T, B: StackLike<T> = DynamicArray<T>> {
    pub(crate) backing: B,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T, B: StackLike<T> + Default> Stack<T, B> {
    /// Creates an empty Stack with default storage.
    pub fn new() -> Stack<T, B> {
        Stack::with_backing(B::default())
    }
}

impl<T> Stack<T, CircularBuffer<T>> {
    /// Creates an empty Stack that can hold at most `maxsize` elements.
    pub fn bounded(maxsize: usize) -> BoundedStack<T> {
        Stack::with_backing(CircularBuffer::with_maxsize(maxsize))
    }
}

impl<T, B: StackLike<T>> Stack<T, B> {
    /// Creates a Stack on top of `backing`. The last element of the storage is the top.
    pub fn with_backing(backing: B) -> Stack<T, B> {
        Stack {
            backing,
            _phantom: PhantomData,
        }
    }

    /// Adds `value` to the top of the Stack.
    ///
    /// # Errors
    /// Fails only if the storage is bounded and full. Unbounded storage reports
    /// [`Infallible`](std::convert::Infallible).
    pub fn push(&mut self, value: T) -> Result<(), B::PushError> {
        self.backing.push(value)
    }

    /// Removes and returns the top of the Stack.
    pub fn pop(&mut self) -> Result<T, EmptyCollection> {
        self.backing.pop().ok_or(EmptyCollection)
    }

    /// Returns a reference to the top of the Stack.
    pub fn peek(&self) -> Result<&T, EmptyCollection> {
        self.backing.peek().ok_or(EmptyCollection)
    }

    pub fn len(&self) -> usize {
        self.backing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    /// Returns true if the next [`push`](Stack::push) would fail.
    pub fn is_full(&self) -> bool {
        self.backing.is_full()
    }

    pub fn clear(&mut self) {
        self.backing.clear()
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.backing.contains(value)
    }

    /// Consumes the Stack, returning its storage.
    pub fn into_inner(self) -> B {
        self.backing
    }
}

impl<T, B: StackLike<T> + Default> Default for Stack<T, B> {
    fn default() -> Self {
        Stack::new()
    }
}

impl<T, B: StackLike<T> + Clone> Clone for Stack<T, B> {
    fn clone(&self) -> Self {
        Stack::with_backing(self.backing.clone())
    }
}

impl<T, B: StackLike<T> + PartialEq> PartialEq for Stack<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.backing == other.backing
    }
}

impl<T, B: StackLike<T> + Eq> Eq for Stack<T, B> {}

impl<T, B: StackLike<T> + Debug> Debug for Stack<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("backing", &self.backing).finish()
    }
}

/// Renders the elements bottom to top.
impl<T, B: StackLike<T> + Display> Display for Stack<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Stack({})", self.backing)
    }
}

impl<T, B: StackLike<T> + Sequence<T>> Extend<T> for Stack<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            Sequence::push_back(&mut self.backing, value);
        }
    }
}

impl<T, B: StackLike<T> + Sequence<T> + Default> FromIterator<T> for Stack<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}
