use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, BuildHasherDefault, DefaultHasher, Hash};

/// The default hasher for [`HashMap`](super::HashMap): SipHash with fixed keys. Unlike
/// [`RandomState`](std::hash::RandomState), every instance (and every process) hashes a given
/// key to the same value, which keeps bucket placement reproducible.
pub type DefaultHashBuilder = BuildHasherDefault<DefaultHasher>;

/// Maps keys of type `Q` to integers for bucket selection.
///
/// Implementations must be deterministic and consistent with equality: if `a == b` then
/// `hash_key(a) == hash_key(b)`. Every [`BuildHasher`] implements this trait for all hashable
/// types, and [`HashFn`] adapts a plain function.
pub trait KeyHasher<Q: ?Sized> {
    fn hash_key(&self, key: &Q) -> u64;
}

impl<Q: Hash + ?Sized, B: BuildHasher> KeyHasher<Q> for B {
    fn hash_key(&self, key: &Q) -> u64 {
        self.hash_one(key)
    }
}

/// A [`KeyHasher`] backed by a function of the key, for keys that don't implement [`Hash`] or
/// when bucket placement needs to be controlled.
///
/// # Examples
/// ```
/// # use collections_core::collections::hash::map::HashFn;
/// # use collections_core::collections::hash::HashMap;
/// let mut map = HashMap::with_hasher(HashFn(|key: &u32| u64::from(*key)));
/// map.insert(3, "three");
/// assert_eq!(map.get(&3), Ok(&"three"));
/// ```
pub struct HashFn<K: ?Sized>(pub fn(&K) -> u64);

impl<K: ?Sized> KeyHasher<K> for HashFn<K> {
    fn hash_key(&self, key: &K) -> u64 {
        (self.0)(key)
    }
}

impl<K: ?Sized> Clone for HashFn<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: ?Sized> Copy for HashFn<K> {}

impl<K: ?Sized> Debug for HashFn<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HashFn").finish_non_exhaustive()
    }
}
