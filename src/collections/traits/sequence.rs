use super::Container;

/// An unbounded, ordered collection that can be grown and shrunk from both ends.
pub trait Sequence<T>: Container {
    /// Borrowed iteration from front to back. Reversing the iterator walks back to front.
    type Iter<'a>: DoubleEndedIterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Returns an iterator over all elements, in order, as references.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns a reference to the first element, if there is one.
    fn front(&self) -> Option<&T>;

    /// Returns a reference to the last element, if there is one.
    fn back(&self) -> Option<&T>;

    /// Adds `value` after the last element.
    fn push_back(&mut self, value: T);

    /// Adds `value` before the first element.
    fn push_front(&mut self, value: T);

    /// Removes and returns the last element, if there is one.
    fn pop_back(&mut self) -> Option<T>;

    /// Removes and returns the first element, if there is one.
    fn pop_front(&mut self) -> Option<T>;

    /// Returns true if any element is equal to `value`.
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }
}
