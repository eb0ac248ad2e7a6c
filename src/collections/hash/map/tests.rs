#![cfg(test)]

use super::*;
use crate::collections::contiguous::DynamicArray;
use crate::collections::error::{InvalidValue, KeyNotFound};
use crate::util::alloc::DropCounter;
use crate::util::panic::assert_panics;

fn config(buckets: usize, load_factor: f64) -> MapConfig {
    MapConfig::default()
        .with_buckets(buckets)
        .with_load_factor(LoadFactor::new(load_factor).unwrap())
}

#[test]
fn test_rehash_preserves_entries() {
    let mut map = HashMap::with_config(config(2, 0.75));
    map.insert("one", 1);
    assert_eq!(map.bucket_count(), 2);
    map.insert("two", 2);
    map.insert("three", 3);

    assert!(map.bucket_count() > 2, "Exceeding the load factor should add buckets.");
    assert_eq!(map.bucket_count(), 4);
    assert_eq!(map.len(), 3);
    assert_eq!(map.get("one"), Ok(&1));
    assert_eq!(map.get("two"), Ok(&2));
    assert_eq!(map.get("three"), Ok(&3), "Every entry should survive a rehash.");
    assert!(map.load() <= map.load_factor().get());
}

#[test]
fn test_growth_until_within_load_factor() {
    let mut map = HashMap::with_config(config(1, 0.1));
    map.insert(0, ());
    assert_eq!(
        map.bucket_count(),
        16,
        "The bucket count should keep doubling until the load factor is satisfied."
    );

    let mut map = HashMap::with_config(config(1, 100.0));
    for i in 0..100 {
        map.insert(i, i);
    }
    assert_eq!(map.bucket_count(), 1, "A generous load factor should never force a rehash.");
    assert!((0..100).all(|i| map.get(&i) == Ok(&i)));
}

#[test]
fn test_zero_buckets_is_clamped() {
    let mut map = HashMap::with_config(config(0, 0.75));
    assert_eq!(map.bucket_count(), 1);
    map.insert('x', 1);
    assert_eq!(map[&'x'], 1);
}

#[test]
fn test_insert_get_and_replace() {
    let mut map: HashMap<i32, char> = HashMap::new();
    assert_eq!(map.bucket_count(), DEFAULT_BUCKETS);
    assert_eq!(map.get(&1), Err(KeyNotFound));

    assert_eq!(map.insert(1, 'a'), None);
    assert_eq!(map.insert(2, 'b'), None);
    assert_eq!(map.insert(1, 'c'), Some('a'), "Inserting an existing key should replace the value.");
    assert_eq!(map.len(), 2, "Replacing a value shouldn't change the length.");

    *map.get_mut(&2).unwrap() = 'd';
    assert_eq!(map.get(&2), Ok(&'d'));
    assert_eq!(map.get_entry(&1), Ok((&1, &'c')));
    assert!(map.contains(&1));
    assert!(!map.contains(&3));
    assert_panics!({ map[&3] });
}

#[test]
fn test_remove() {
    let mut map: HashMap<_, _> = (0..10).map(|i| (i, i * i)).collect();

    assert_eq!(map.remove(&3), Ok(9));
    assert_eq!(map.remove(&3), Err(KeyNotFound), "A removed key shouldn't be found again.");
    assert!(!map.contains(&3));
    assert_eq!(map.remove_entry(&4), Ok((4, 16)));
    assert_eq!(map.len(), 8);
    assert_eq!(map.get(&9), Ok(&81), "Removal shouldn't disturb other entries.");
}

#[test]
fn test_hash_collisions() {
    let mut map = HashMap::with_config_and_hasher(config(4, 0.75), HashFn(|_: &u32| 0));
    for i in 0..8 {
        map.insert(i, i * 10);
    }
    assert!(map.bucket_count() > 4);
    assert_eq!(map.buckets[0].len(), 8, "Every key should be chained in the same bucket.");

    assert_eq!(map.remove(&0), Ok(0));
    assert_eq!(map.remove(&4), Ok(40));
    assert_eq!(map.remove(&7), Ok(70));

    assert_eq!(
        *map.into_iter().map(|(k, _)| k).collect::<DynamicArray<_>>(),
        [1, 2, 3, 5, 6],
        "Chains should keep insertion order through rehashing and removal."
    );
}

#[test]
fn test_custom_hash_fn_placement() {
    let mut map = HashMap::with_config_and_hasher(config(2, 2.0), HashFn(|k: &u32| u64::from(*k)));
    map.insert(1, "a");
    map.insert(3, "c");
    map.insert(2, "b");

    assert_eq!(map.bucket_count(), 2);
    assert_eq!(map.bucket_index(&3u32), 1);
    assert_eq!(
        format!("{map:?}"),
        "HashMap { buckets: [(2: \"b\"), (1: \"a\") -> (3: \"c\")], len: 3, load_factor: 2.0 }"
    );
    assert_eq!(map.to_string(), "{2: \"b\", 1: \"a\", 3: \"c\"}");
}

#[test]
fn test_borrowed_lookup() {
    let mut map = HashMap::new();
    map.insert(String::from("apple"), 3);
    map.insert(String::from("pear"), 5);

    assert_eq!(map.get("apple"), Ok(&3));
    assert!(map.contains("pear"));
    assert_eq!(map.remove("pear"), Ok(5));
    assert_eq!(map["apple"], 3);
}

#[test]
fn test_iteration() {
    let map: HashMap<_, _> = (0..50).map(|i| (i, i.to_string())).collect();

    let mut keys: DynamicArray<_> = map.keys().copied().collect();
    keys.sort();
    assert!(keys.iter().copied().eq(0..50), "Every key should be visited exactly once.");

    assert_eq!(map.iter().len(), 50);
    assert_eq!(map.values().map(String::len).sum::<usize>(), 10 + 40 * 2);
    assert!(
        map.iter().eq(map.iter()),
        "Iterating the same map twice should give the same order."
    );

    let mut values: DynamicArray<_> = map.clone().into_values().collect();
    values.sort();
    assert_eq!(values.len(), 50);
    assert_eq!(map.into_keys().len(), 50);
}

#[test]
fn test_default_hasher_is_deterministic() {
    let a: HashMap<_, _> = ["x", "y", "z", "w"].into_iter().zip(0..).collect();
    let b: HashMap<_, _> = ["x", "y", "z", "w"].into_iter().zip(0..).collect();
    assert!(
        a.iter().eq(b.iter()),
        "Separately built maps should lay out equal keys identically."
    );
}

#[test]
fn test_reserve() {
    let mut map: HashMap<i32, ()> = HashMap::new();
    map.reserve(20);
    assert_eq!(map.bucket_count(), 28);

    for i in 0..20 {
        map.insert(i, ());
    }
    assert_eq!(map.bucket_count(), 28, "Reserved space should absorb the insertions.");
}

#[test]
fn test_equality() {
    let mut a = HashMap::with_config(config(1, 10.0));
    let mut b = HashMap::with_config(config(64, 0.75));
    for i in 0..5 {
        a.insert(i, i);
        b.insert(4 - i, 4 - i);
    }

    assert_eq!(a, b, "Equality shouldn't depend on the bucket layout.");
    b.insert(0, 100);
    assert_ne!(a, b);
    b.insert(0, 0);
    b.insert(5, 5);
    assert_ne!(a, b);
}

#[test]
fn test_clear_and_drop() {
    let counter = DropCounter::new();
    let mut map = HashMap::new();
    for i in 0..6 {
        map.insert(i, counter.token(i));
    }

    drop(map.remove(&0));
    assert_eq!(counter.dropped(), 1);
    map.insert(1, counter.token(100));
    assert_eq!(counter.dropped(), 2, "A replaced value should be returned and then dropped.");

    let buckets = map.bucket_count();
    map.clear();
    assert_eq!(counter.dropped(), 7, "Clearing should drop every remaining value.");
    assert!(map.is_empty());
    assert_eq!(map.bucket_count(), buckets, "Clearing shouldn't change the bucket count.");
}

#[test]
fn test_load_factor_validation() {
    assert_eq!(LoadFactor::new(-1.0), Err(InvalidValue));
    assert_eq!(LoadFactor::new(f64::INFINITY), Err(InvalidValue));
    assert_eq!(LoadFactor::default().get(), 0.75);
}
