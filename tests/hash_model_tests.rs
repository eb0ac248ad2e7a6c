// Model-based property tests for HashMap and Bag against the std collections.
//
// Small initial tables and low load factors force frequent rehashing, and a degenerate hash
// function forces every key into one chain, so both paths are compared to the model.
use std::collections::HashMap as StdHashMap;
use std::num::NonZeroUsize;

use collections_core::collections::error::{BagError, InvalidValue, KeyNotFound, NotFound};
use collections_core::collections::hash::map::{HashFn, LoadFactor, MapConfig};
use collections_core::collections::hash::{Bag, HashMap};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum MapOp {
    Insert(u16, u32),
    Remove(u16),
    Get(u16),
    Reserve(usize),
    Clear,
}

fn map_ops() -> impl Strategy<Value = Vec<MapOp>> {
    prop::collection::vec(
        prop_oneof![
            6 => (0u16..64, any::<u32>()).prop_map(|(k, v)| MapOp::Insert(k, v)),
            3 => (0u16..64).prop_map(MapOp::Remove),
            3 => (0u16..64).prop_map(MapOp::Get),
            1 => (0usize..32).prop_map(MapOp::Reserve),
            1 => Just(MapOp::Clear),
        ],
        0..400,
    )
}

#[derive(Debug, Clone)]
enum BagOp {
    Add(u8),
    AddAll(Vec<u8>),
    Remove(u8),
}

fn bag_ops() -> impl Strategy<Value = Vec<BagOp>> {
    prop::collection::vec(
        prop_oneof![
            5 => (0u8..12).prop_map(BagOp::Add),
            1 => prop::collection::vec(0u8..12, 0..6).prop_map(BagOp::AddAll),
            4 => (0u8..12).prop_map(BagOp::Remove),
        ],
        0..300,
    )
}

fn config() -> impl Strategy<Value = MapConfig> {
    (0usize..5, 0.1f64..2.0).prop_map(|(buckets, lf)| {
        MapConfig::default()
            .with_buckets(buckets)
            .with_load_factor(LoadFactor::new(lf).unwrap())
    })
}

fn zero_hash(_: &u16) -> u64 {
    0
}

fn check_map_ops<H>(mut map: HashMap<u16, u32, H>, ops: Vec<MapOp>) -> Result<(), TestCaseError>
where
    H: collections_core::collections::hash::map::KeyHasher<u16>,
{
    let mut model: StdHashMap<u16, u32> = StdHashMap::new();
    let load_factor = map.load_factor().get();

    for op in ops {
        match op {
            MapOp::Insert(k, v) => prop_assert_eq!(map.insert(k, v), model.insert(k, v)),
            MapOp::Remove(k) => prop_assert_eq!(map.remove(&k), model.remove(&k).ok_or(KeyNotFound)),
            MapOp::Get(k) => prop_assert_eq!(map.get(&k), model.get(&k).ok_or(KeyNotFound)),
            MapOp::Reserve(extra) => {
                let buckets = map.bucket_count();
                map.reserve(extra);
                prop_assert!(map.bucket_count() >= buckets);
                prop_assert!((map.len() + extra) as f64 / map.bucket_count() as f64 <= load_factor);
            },
            MapOp::Clear => {
                map.clear();
                model.clear();
            },
        }

        prop_assert_eq!(map.len(), model.len());
        prop_assert!(map.bucket_count() >= 1);
        prop_assert!(
            map.load() <= load_factor,
            "A map should never be left above its load factor."
        );
    }

    let mut entries: Vec<(u16, u32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
    let mut expected: Vec<(u16, u32)> = model.into_iter().collect();
    entries.sort_unstable();
    expected.sort_unstable();
    prop_assert_eq!(entries, expected);
    Ok(())
}

proptest! {
    #[test]
    fn prop_hash_map_matches_std(config in config(), ops in map_ops()) {
        check_map_ops(HashMap::with_config(config), ops)?;
    }

    #[test]
    fn prop_hash_map_with_colliding_keys_matches_std(config in config(), ops in map_ops()) {
        let map = HashMap::with_config_and_hasher(config, HashFn::<u16>(zero_hash));
        check_map_ops(map, ops)?;
    }

    #[test]
    fn prop_hash_map_iterators_agree(entries in prop::collection::vec((any::<u16>(), any::<u32>()), 0..200)) {
        let map: HashMap<u16, u32> = entries.iter().copied().collect();

        prop_assert_eq!(map.iter().len(), map.len());
        prop_assert!(map.keys().eq(map.iter().map(|(k, _)| k)));
        prop_assert!(map.values().eq(map.iter().map(|(_, v)| v)));

        let owned: Vec<(u16, u32)> = map.clone().into_iter().collect();
        let borrowed: Vec<(u16, u32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(owned, borrowed);
    }

    #[test]
    fn prop_bag_matches_counted_map(ops in bag_ops()) {
        // 0 is the sentinel.
        let mut bag = Bag::with_sentinel(|item: &u8| *item == 0);
        let mut model: StdHashMap<u8, usize> = StdHashMap::new();

        for op in ops {
            match op {
                BagOp::Add(item) if item == 0 => prop_assert_eq!(bag.add(item), Err(InvalidValue)),
                BagOp::Add(item) => {
                    prop_assert_eq!(bag.add(item), Ok(()));
                    *model.entry(item).or_default() += 1;
                },
                BagOp::AddAll(items) => {
                    if items.contains(&0) {
                        prop_assert_eq!(bag.add_all(items), Err(InvalidValue));
                    } else {
                        prop_assert_eq!(bag.add_all(items.iter().copied()), Ok(()));
                        for item in items {
                            *model.entry(item).or_default() += 1;
                        }
                    }
                },
                BagOp::Remove(item) if item == 0 => {
                    prop_assert_eq!(bag.remove(&item), Err(BagError::InvalidValue(InvalidValue)));
                },
                BagOp::Remove(item) => match model.get_mut(&item) {
                    Some(count) => {
                        prop_assert_eq!(bag.remove(&item), Ok(()));
                        *count -= 1;
                        if *count == 0 {
                            model.remove(&item);
                        }
                    },
                    None => prop_assert_eq!(bag.remove(&item), Err(BagError::NotFound(NotFound))),
                },
            }

            prop_assert_eq!(bag.len(), model.values().sum::<usize>());
            prop_assert_eq!(bag.distinct_len(), model.len());
            for item in 0u8..12 {
                prop_assert_eq!(bag.count(&item), model.get(&item).copied().unwrap_or(0));
            }
        }

        prop_assert_eq!(bag.iter().count(), bag.len());
    }

    #[test]
    fn prop_bag_with_backing_counts_existing_entries(counts in prop::collection::vec(1usize..5, 0..20)) {
        let mut backing = HashMap::new();
        for (item, count) in counts.iter().enumerate() {
            backing.insert(item, NonZeroUsize::new(*count).unwrap());
        }

        let bag: Bag<usize> = Bag::with_backing(backing);
        prop_assert_eq!(bag.len(), counts.iter().sum::<usize>());
        prop_assert_eq!(bag.distinct_len(), counts.len());
    }
}
