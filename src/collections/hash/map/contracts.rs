use super::{HashMap, KeyHasher, Keys};
use crate::collections::error::KeyNotFound;
use crate::collections::traits::{Container, MapLike};

impl<K, V, H> Container for HashMap<K, V, H> {
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        HashMap::clear(self)
    }
}

impl<K: Eq, V, H: KeyHasher<K>> MapLike<K, V> for HashMap<K, V, H> {
    type Keys<'a>
        = Keys<'a, K, V>
    where
        Self: 'a,
        K: 'a;

    fn get(&self, key: &K) -> Result<&V, KeyNotFound> {
        HashMap::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Result<&mut V, KeyNotFound> {
        HashMap::get_mut(self, key)
    }

    fn set(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn delete(&mut self, key: &K) -> Result<V, KeyNotFound> {
        self.remove(key)
    }

    fn contains_key(&self, key: &K) -> bool {
        self.contains(key)
    }

    fn keys(&self) -> Self::Keys<'_> {
        HashMap::keys(self)
    }
}
