use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;
use std::num::NonZeroUsize;

use crate::collections::contiguous::DynamicArray;
use crate::collections::error::{BagError, CapacityOverflow, InvalidValue, NotFound};
use crate::collections::hash::HashMap;
use crate::collections::traits::MapLike;
use crate::util::result::ResultExtension;

/// A predicate marking values that a [`Bag`] refuses to hold.
pub type Sentinel<T> = fn(&T) -> bool;

/// An unordered collection that allows duplicates, storing each distinct value once alongside the
/// number of times it was added.
///
/// The counts live in any [`MapLike`] storage, which defaults to this crate's [`HashMap`]. Every
/// stored count is at least 1, so a value is present exactly when the map holds it. The total
/// number of values is tracked as they are added and removed, making [`len`](Bag::len) `O(1)`.
///
/// A bag can optionally be given a sentinel predicate, see [`Bag::with_sentinel`]. Sentinel values
/// are rejected by [`add`](Bag::add) and [`remove`](Bag::remove) with [`InvalidValue`].
///
/// # Examples
/// ```
/// # use collections_core::collections::hash::Bag;
/// let mut bag = Bag::new();
/// bag.add("apple").unwrap();
/// bag.add("pear").unwrap();
/// bag.add("apple").unwrap();
///
/// assert_eq!(bag.count(&"apple"), 2);
/// assert_eq!(bag.len(), 3);
/// assert_eq!(bag.distinct_len(), 2);
///
/// bag.remove(&"apple").unwrap();
/// bag.remove(&"apple").unwrap();
/// assert!(!bag.contains(&"apple"));
/// assert!(bag.remove(&"apple").unwrap_err().is_not_found());
/// ```
pub struct Bag<T, M = HashMap<T, NonZeroUsize>> {
    pub(crate) counts: M,
    pub(crate) total: usize,
    pub(crate) sentinel: Option<Sentinel<T>>,
}

impl<T: Hash + Eq> Bag<T> {
    /// Creates a new, empty Bag backed by a [`HashMap`] that accepts every value.
    pub fn new() -> Bag<T> {
        Bag::with_backing(HashMap::new())
    }

    /// Creates a new, empty Bag backed by a [`HashMap`] that rejects every value for which
    /// `is_sentinel` returns true.
    ///
    /// # Examples
    /// ```
    /// # use collections_core::collections::hash::Bag;
    /// # use collections_core::collections::error::InvalidValue;
    /// let mut bag = Bag::with_sentinel(|word: &&str| word.is_empty());
    /// assert_eq!(bag.add(""), Err(InvalidValue));
    /// assert_eq!(bag.add("word"), Ok(()));
    /// ```
    pub fn with_sentinel(is_sentinel: Sentinel<T>) -> Bag<T> {
        Bag::with_backing(HashMap::new()).sentinel(is_sentinel)
    }
}

impl<T, M: MapLike<T, NonZeroUsize>> Bag<T, M> {
    /// Creates a Bag that stores its counts in `counts`. Any entries already in the map are kept
    /// and included in the total.
    pub fn with_backing(counts: M) -> Bag<T, M> {
        let total = counts
            .keys()
            .filter_map(|item| counts.get(item).ok())
            .map(|count| count.get())
            .sum();

        Bag {
            counts,
            total,
            sentinel: None,
        }
    }

    /// Sets the sentinel predicate, replacing any previous one.
    pub fn sentinel(self, is_sentinel: Sentinel<T>) -> Bag<T, M> {
        Bag {
            sentinel: Some(is_sentinel),
            ..self
        }
    }

    /// Returns the total number of values in the Bag, counting duplicates.
    pub const fn len(&self) -> usize {
        self.total
    }

    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Returns the number of distinct values in the Bag.
    pub fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    /// Returns an iterator over each distinct value, in the backing map's order.
    pub fn distinct_items(&self) -> M::Keys<'_> {
        self.counts.keys()
    }

    /// Returns an iterator over every value in the Bag, with each value repeated as many times as
    /// it was added.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.distinct_items()
            .flat_map(|item| std::iter::repeat_n(item, self.count(item)))
    }

    /// Returns true if `item` is a sentinel for this Bag.
    pub fn is_sentinel(&self, item: &T) -> bool {
        self.sentinel.is_some_and(|is_sentinel| is_sentinel(item))
    }

    /// Returns how many times `item` has been added (and not removed).
    pub fn count(&self, item: &T) -> usize {
        self.counts.get(item).map_or(0, |count| count.get())
    }

    /// Returns true if `item` has been added at least once more than it has been removed.
    pub fn contains(&self, item: &T) -> bool {
        self.counts.contains_key(item)
    }

    /// Adds one occurrence of `item` to the Bag.
    ///
    /// # Errors
    /// Returns [`InvalidValue`] without modifying the Bag if `item` is a sentinel.
    pub fn add(&mut self, item: T) -> Result<(), InvalidValue> {
        if self.is_sentinel(&item) {
            return Err(InvalidValue);
        }
        self.add_unchecked(item);
        Ok(())
    }

    /// Adds every item, or none of them if any is a sentinel.
    ///
    /// # Errors
    /// Returns [`InvalidValue`] without modifying the Bag if any item is a sentinel.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, items: I) -> Result<(), InvalidValue> {
        let items: DynamicArray<T> = items.into_iter().collect();
        if items.iter().any(|item| self.is_sentinel(item)) {
            return Err(InvalidValue);
        }

        for item in items {
            self.add_unchecked(item);
        }
        Ok(())
    }

    /// Removes one occurrence of `item`, dropping the value from the map once its count reaches
    /// zero.
    ///
    /// # Errors
    /// Returns [`BagError::InvalidValue`] if `item` is a sentinel, or [`BagError::NotFound`] if the
    /// Bag doesn't contain it. The Bag is unchanged in both cases.
    pub fn remove(&mut self, item: &T) -> Result<(), BagError> {
        if self.is_sentinel(item) {
            return Err(InvalidValue.into());
        }

        let count = self.counts.get_mut(item).map_err(|_| NotFound)?;
        match NonZeroUsize::new(count.get() - 1) {
            Some(fewer) => *count = fewer,
            None => {
                self.counts.delete(item).map_err(|_| NotFound)?;
            },
        }

        self.total -= 1;
        Ok(())
    }

    /// Removes every value from the Bag. The sentinel predicate is kept.
    pub fn clear(&mut self) {
        self.counts.clear();
        self.total = 0;
    }

    pub(crate) fn add_unchecked(&mut self, item: T) {
        match self.counts.get_mut(&item) {
            Ok(count) => *count = count.checked_add(1).ok_or(CapacityOverflow).throw(),
            Err(_) => {
                self.counts.set(item, NonZeroUsize::MIN);
            },
        }
        self.total += 1;
    }
}

impl<T: Hash + Eq> Default for Bag<T> {
    fn default() -> Self {
        Bag::new()
    }
}

impl<T: Hash + Eq> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bag = Bag::new();
        for item in iter {
            bag.add_unchecked(item);
        }
        bag
    }
}

impl<T, M: Clone> Clone for Bag<T, M> {
    fn clone(&self) -> Self {
        Bag {
            counts: self.counts.clone(),
            total: self.total,
            sentinel: self.sentinel,
        }
    }
}

/// Bags are equal when every value occurs the same number of times in both. Sentinels and the
/// backing layout aren't compared.
impl<T, M: MapLike<T, NonZeroUsize>> PartialEq for Bag<T, M> {
    fn eq(&self, other: &Self) -> bool {
        self.total == other.total
            && self.distinct_len() == other.distinct_len()
            && self.distinct_items().all(|item| self.count(item) == other.count(item))
    }
}

impl<T, M: MapLike<T, NonZeroUsize>> Eq for Bag<T, M> {}

impl<T: Debug, M: Debug> Debug for Bag<T, M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bag")
            .field("counts", &self.counts)
            .field("total", &self.total)
            .field("has_sentinel", &self.sentinel.is_some())
            .finish()
    }
}

impl<T: Debug, M: MapLike<T, NonZeroUsize>> Display for Bag<T, M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Bag(")?;
        f.debug_map()
            .entries(self.distinct_items().map(|item| (item, self.count(item))))
            .finish()?;
        write!(f, ")")
    }
}
