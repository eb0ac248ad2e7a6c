use super::Container;
use crate::collections::error::KeyNotFound;

/// An association of unique keys to values.
pub trait MapLike<K, V>: Container {
    /// Borrowed iteration over every key in the map, in an unspecified but stable order.
    type Keys<'a>: Iterator<Item = &'a K>
    where
        Self: 'a,
        K: 'a;

    /// Returns a reference to the value associated with `key`.
    fn get(&self, key: &K) -> Result<&V, KeyNotFound>;

    /// Returns a mutable reference to the value associated with `key`.
    fn get_mut(&mut self, key: &K) -> Result<&mut V, KeyNotFound>;

    /// Associates `value` with `key`, returning the value it replaced, if any.
    fn set(&mut self, key: K, value: V) -> Option<V>;

    /// Removes the entry for `key`, returning its value.
    fn delete(&mut self, key: &K) -> Result<V, KeyNotFound>;

    /// Returns true if the map holds an entry for `key`.
    fn contains_key(&self, key: &K) -> bool;

    /// Returns an iterator over every key in the map.
    fn keys(&self) -> Self::Keys<'_>;
}
