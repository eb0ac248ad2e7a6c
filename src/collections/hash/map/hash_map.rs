use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::ops::Index;

use log::debug;

use super::{
    DefaultHashBuilder, IntoKeys, IntoValues, Iter, KeyHasher, Keys, LoadFactor, MapConfig, Values,
};
use crate::collections::contiguous::DynamicArray;
use crate::collections::error::{CapacityOverflow, KeyNotFound};
use crate::collections::linked::DoublyLinkedList;
use crate::util::fmt::DebugRaw;
use crate::util::result::ResultExtension;

const GROWTH_FACTOR: usize = 2;

/// A map of keys to values, where collisions are resolved by chaining: each bucket holds a
/// [`DoublyLinkedList`] of every entry whose key hashes to it.
///
/// Keys are hashed by `H`, see [`KeyHasher`]. The bucket for a key is `hash(key) % bucket_count`.
/// Once the ratio of entries to buckets exceeds the map's [`LoadFactor`], the bucket count doubles
/// and every entry is redistributed.
///
/// It is a logic error for keys in a HashMap to be manipulated in a way that changes their hash.
/// Because of this, HashMap's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the HashMap.
/// - `c`: The number of entries in the bucket for the key in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(c)`, `O(n)`* |
/// | `get` | `O(c)` |
/// | `remove` | `O(c)` |
/// | `contains` | `O(c)` |
/// | `reserve` | `O(n)`**, `O(1)` |
///
/// With a reasonable hasher `c` stays close to the load factor.
///
/// \* If the insertion pushes the map past its load factor, `insert` rehashes every entry.
///
/// \** If the HashMap has enough buckets for the additional entries already, `reserve` is `O(1)`.
#[derive(Clone)]
pub struct HashMap<K, V, H = DefaultHashBuilder> {
    pub(crate) buckets: DynamicArray<Bucket<K, V>>,
    pub(crate) len: usize,
    pub(crate) load_factor: LoadFactor,
    pub(crate) hasher: H,
}

pub(crate) type Bucket<K, V> = DoublyLinkedList<(K, V)>;

impl<K, V> HashMap<K, V> {
    /// Creates a new HashMap with the default bucket count, load factor and hasher.
    pub fn new() -> HashMap<K, V> {
        HashMap::with_config(MapConfig::default())
    }

    /// Creates a new HashMap with the provided bucket count and load factor, using the default
    /// hasher.
    pub fn with_config(config: MapConfig) -> HashMap<K, V> {
        HashMap::with_config_and_hasher(config, DefaultHashBuilder::default())
    }
}

impl<K, V, H> HashMap<K, V, H> {
    /// Creates a new HashMap with the default bucket count and load factor, using `hasher`.
    pub fn with_hasher(hasher: H) -> HashMap<K, V, H> {
        HashMap::with_config_and_hasher(MapConfig::default(), hasher)
    }

    /// Creates a new HashMap with the provided `config` and `hasher`.
    pub fn with_config_and_hasher(config: MapConfig, hasher: H) -> HashMap<K, V, H> {
        HashMap {
            buckets: new_table(config.buckets.max(1)),
            len: 0,
            load_factor: config.load_factor,
            hasher,
        }
    }

    /// Returns the number of entries in the HashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current number of buckets, which is never 0.
    pub const fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub const fn load_factor(&self) -> LoadFactor {
        self.load_factor
    }

    /// Returns the current ratio of entries to buckets.
    pub fn load(&self) -> f64 {
        self.len as f64 / self.bucket_count() as f64
    }

    /// Removes (and drops) every entry. The bucket count is left unchanged.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Returns an iterator over all key-value pairs in the HashMap, as references. Entries are
    /// visited bucket by bucket, in chain order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
            len: self.len,
        }
    }

    /// Returns an iterator over all keys in the HashMap, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values in the HashMap, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }
}

impl<K: Eq, V, H: KeyHasher<K>> HashMap<K, V, H> {
    /// Inserts the provided `key`-`value` pair into the HashMap. If the key was already associated
    /// with a value, that value is replaced in place and returned.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    ///
    /// # Examples
    /// ```
    /// # use collections_core::collections::hash::HashMap;
    /// let mut map = HashMap::new();
    /// assert_eq!(map.insert("a", 1), None);
    /// assert_eq!(map.insert("a", 2), Some(1));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];

        if let Some((_, existing)) = bucket.find_mut(|(k, _)| *k == key) {
            return Some(mem::replace(existing, value));
        }

        bucket.push_back((key, value));
        self.len += 1;

        if self.load_factor.is_exceeded_by(self.len, self.bucket_count()) {
            self.grow_for(self.len);
        }
        None
    }

    /// Ensures that `extra` more entries can be inserted without exceeding the load factor, so
    /// without rehashing.
    pub fn reserve(&mut self, extra: usize) {
        let target = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();
        if self.load_factor.is_exceeded_by(target, self.bucket_count()) {
            self.grow_for(target);
        }
    }

    /// Returns the entry for the provided `key` as a key-value pair.
    pub fn get_entry<Q>(&self, key: &Q) -> Result<(&K, &V), KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        self.buckets[self.bucket_index(key)]
            .find(|(k, _)| k.borrow() == key)
            .map(|(k, v)| (k, v))
            .ok_or(KeyNotFound)
    }

    /// Returns a reference to the value associated with the provided `key`.
    ///
    /// # Errors
    /// Returns [`KeyNotFound`] if the map contains no value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Result<&V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value associated with the provided `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        let index = self.bucket_index(key);
        self.buckets[index]
            .find_mut(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
            .ok_or(KeyNotFound)
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        self.get_entry(key).is_ok()
    }

    /// Removes the entry associated with `key`, returning it.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Result<(K, V), KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        let index = self.bucket_index(key);
        let entry = self.buckets[index]
            .remove_first_where(|(k, _)| k.borrow() == key)
            .ok_or(KeyNotFound)?;

        self.len -= 1;
        Ok(entry)
    }

    /// Removes the entry associated with `key`, returning its value.
    ///
    /// # Errors
    /// Returns [`KeyNotFound`] without modifying the map if there is no entry for `key`.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }
}

impl<K, V, H> HashMap<K, V, H> {
    /// Calculates the bucket for the provided key in the current table.
    pub(crate) fn bucket_index<Q: ?Sized>(&self, key: &Q) -> usize
    where
        H: KeyHasher<Q>,
    {
        index_in(&self.hasher, key, self.bucket_count())
    }

    /// Doubles the bucket count until `len` entries fit within the load factor, then rehashes.
    pub(crate) fn grow_for(&mut self, len: usize)
    where
        H: KeyHasher<K>,
    {
        let mut new_count = self.bucket_count();
        while self.load_factor.is_exceeded_by(len, new_count) {
            new_count = new_count.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw();
        }
        self.rehash(new_count);
    }

    /// Redistributes every entry into a new table of `new_count` buckets. The new table is fully
    /// built before it replaces the current one.
    pub(crate) fn rehash(&mut self, new_count: usize)
    where
        H: KeyHasher<K>,
    {
        debug!(
            "Rehashing {} entries from {} to {} buckets.",
            self.len,
            self.bucket_count(),
            new_count
        );

        // Keys are hashed before anything moves, so a panicking hasher leaves the map untouched.
        let indices: DynamicArray<usize> = self
            .iter()
            .map(|(key, _)| index_in(&self.hasher, key, new_count))
            .collect();

        let mut table = new_table(new_count);
        let old = mem::take(&mut self.buckets);

        for (entry, index) in old.into_iter().flatten().zip(indices) {
            table[index].push_back(entry);
        }

        self.buckets = table;
    }
}

fn new_table<K, V>(bucket_count: usize) -> DynamicArray<Bucket<K, V>> {
    DynamicArray::from_fn(bucket_count, |_| DoublyLinkedList::new())
}

fn index_in<Q: ?Sized, H: KeyHasher<Q>>(hasher: &H, key: &Q, bucket_count: usize) -> usize {
    // The remainder is below bucket_count, so it fits back into a usize.
    (hasher.hash_key(key) % bucket_count as u64) as usize
}

impl<K, Q, V, H> Index<&Q> for HashMap<K, V, H>
where
    K: Eq + Borrow<Q>,
    Q: Eq + ?Sized,
    H: KeyHasher<K> + KeyHasher<Q>,
{
    type Output = V;

    fn index(&self, key: &Q) -> &Self::Output {
        self.get(key).throw()
    }
}

impl<K: Eq, V, H: KeyHasher<K> + Default> FromIterator<(K, V)> for HashMap<K, V, H> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMap::with_hasher(H::default());
        map.extend(iter);
        map
    }
}

impl<K: Eq, V, H: KeyHasher<K>> Extend<(K, V)> for HashMap<K, V, H> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, H: Default> Default for HashMap<K, V, H> {
    fn default() -> Self {
        HashMap::with_hasher(H::default())
    }
}

/// Maps are equal when they hold the same set of entries, regardless of bucket layout.
impl<K: Eq, V: PartialEq, H: KeyHasher<K>> PartialEq for HashMap<K, V, H> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|(k, v)| other.get(k) == Ok(v))
    }
}

impl<K: Eq, V: Eq, H: KeyHasher<K>> Eq for HashMap<K, V, H> {}

impl<K: Debug, V: Debug, H> Debug for HashMap<K, V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets: DynamicArray<DebugRaw> = self
            .buckets
            .iter()
            .map(|bucket| {
                DebugRaw(if bucket.is_empty() {
                    "-".into()
                } else {
                    bucket
                        .iter()
                        .map(|(k, v)| format!("({k:?}: {v:?})"))
                        .collect::<DynamicArray<_>>()
                        .join(" -> ")
                })
            })
            .collect();

        f.debug_struct("HashMap")
            .field("buckets", &buckets.as_slice())
            .field("len", &self.len)
            .field("load_factor", &self.load_factor.get())
            .finish()
    }
}

impl<K: Debug, V: Debug, H> Display for HashMap<K, V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
