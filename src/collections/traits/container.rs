/// Operations that every collection in this crate supports.
pub trait Container {
    /// Returns the number of elements held by the collection.
    fn len(&self) -> usize;

    /// Returns true if the collection holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes (and drops) every element held by the collection.
    fn clear(&mut self);
}
