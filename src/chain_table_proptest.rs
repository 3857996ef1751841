#![cfg(test)]

// Property tests for ChainTable kept inside the crate so they exercise the
// same surface integration tests see, without feature gates.

use crate::chain_table::{ChainTable, TableError};
use proptest::prelude::*;
use std::collections::HashMap;

#[derive(Clone, Debug)]
enum Op {
    Insert(u64, i64),
    Upsert(u64, i64),
    Erase(u64),
    Search(u64),
    Mutate(u64, i64),
    Count(u64),
    Occurrences(u64),
    Contains(i64),
    Iterate,
    CopyAndErase(u64),
}

// Small key pool over small bucket counts so chains collide constantly.
fn arb_scenario() -> impl Strategy<Value = (usize, Vec<Op>)> {
    let key = 0u64..16;
    let val = -8i64..8;
    let op = prop_oneof![
        (key.clone(), val.clone()).prop_map(|(k, v)| Op::Insert(k, v)),
        (key.clone(), val.clone()).prop_map(|(k, v)| Op::Upsert(k, v)),
        key.clone().prop_map(Op::Erase),
        key.clone().prop_map(Op::Search),
        (key.clone(), val.clone()).prop_map(|(k, d)| Op::Mutate(k, d)),
        key.clone().prop_map(Op::Count),
        key.clone().prop_map(Op::Occurrences),
        val.prop_map(Op::Contains),
        Just(Op::Iterate),
        key.prop_map(Op::CopyAndErase),
    ];
    (1usize..=8, proptest::collection::vec(op, 1..80))
}

fn snapshot(t: &ChainTable<u64, i64>) -> Vec<(usize, u64, i64)> {
    t.iter().map(|(b, &k, &v)| (b, k, v)).collect()
}

// Property: state-machine equivalence against std::collections::HashMap.
// Because the bucket index is a pure function of the key, per-bucket
// uniqueness coincides with global uniqueness and a flat map is a sound
// model. Invariants exercised across random operation sequences:
// - Insert fails with DuplicateKey exactly when the key is present and
//   leaves the enumeration unchanged on failure.
// - Upsert never fails and leaves exactly one entry for the key.
// - Erase returns hit/miss in agreement with the model.
// - Search/search_mut agree with the model; mutation through the borrow is
//   observed by later searches.
// - count(k) equals the chain length of k's bucket derived from the model;
//   occurrences(k) equals the model's 0/1 presence.
// - contains(v) equals value membership in the model.
// - Deep copies enumerate identically and mutate independently.
// - len parity with the model after every op.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((bucket_count, ops) in arb_scenario()) {
        let mut sut: ChainTable<u64, i64> = ChainTable::new(bucket_count).unwrap();
        let mut model: HashMap<u64, i64> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    let before = snapshot(&sut);
                    match sut.insert(k, v) {
                        Ok(()) => {
                            prop_assert!(!model.contains_key(&k), "insert must fail on duplicate");
                            model.insert(k, v);
                        }
                        Err(TableError::DuplicateKey) => {
                            prop_assert!(model.contains_key(&k), "duplicate error only when key exists");
                            prop_assert_eq!(snapshot(&sut), before, "failed insert must not mutate");
                        }
                        Err(e) => prop_assert!(false, "unexpected error: {e}"),
                    }
                }
                Op::Upsert(k, v) => {
                    sut.insert_or_assign(k, v);
                    model.insert(k, v);
                    prop_assert_eq!(sut.occurrences(k), 1, "upsert leaves exactly one entry");
                }
                Op::Erase(k) => {
                    let hit = sut.erase(k);
                    prop_assert_eq!(hit, model.remove(&k).is_some());
                    if hit {
                        prop_assert_eq!(sut.search(k), Err(TableError::KeyNotFound));
                    }
                }
                Op::Search(k) => {
                    match model.get(&k) {
                        Some(v) => prop_assert_eq!(sut.search(k), Ok(v)),
                        None => prop_assert_eq!(sut.search(k), Err(TableError::KeyNotFound)),
                    }
                }
                Op::Mutate(k, d) => {
                    match sut.search_mut(k) {
                        Ok(v) => {
                            *v = v.wrapping_add(d);
                            let mv = model.get_mut(&k).expect("model tracks present keys");
                            *mv = mv.wrapping_add(d);
                            prop_assert_eq!(sut.search(k), Ok(&*mv));
                        }
                        Err(TableError::KeyNotFound) => prop_assert!(!model.contains_key(&k)),
                        Err(e) => prop_assert!(false, "unexpected error: {e}"),
                    }
                }
                Op::Count(k) => {
                    let bucket = sut.bucket_index(k);
                    let chain_len = model
                        .keys()
                        .filter(|m| sut.bucket_index(**m) == bucket)
                        .count();
                    prop_assert_eq!(sut.count(k), chain_len, "count is the bucket chain length");
                }
                Op::Occurrences(k) => {
                    prop_assert_eq!(sut.occurrences(k), usize::from(model.contains_key(&k)));
                }
                Op::Contains(v) => {
                    prop_assert_eq!(sut.contains(&v), model.values().any(|mv| *mv == v));
                }
                Op::Iterate => {
                    let seen = snapshot(&sut);
                    prop_assert_eq!(seen.len(), model.len(), "each live entry exactly once");
                    for (bucket, k, v) in seen {
                        prop_assert_eq!(sut.bucket_index(k), bucket);
                        prop_assert_eq!(model.get(&k), Some(&v));
                    }
                }
                Op::CopyAndErase(k) => {
                    let source = snapshot(&sut);
                    let mut copy = sut.clone();
                    prop_assert_eq!(snapshot(&copy), source.clone(), "copy enumerates like source");

                    // Mutating the copy must not reach back into the source.
                    copy.erase(k);
                    copy.insert_or_assign(k.wrapping_add(1), 99);
                    prop_assert_eq!(snapshot(&sut), source);
                }
            }

            // Post-conditions after each op.
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            prop_assert_eq!(sut.bucket_count(), bucket_count);
        }
    }
}

// Property: assign (clone_from) replaces the whole contents with an
// independent deep copy, including across differing bucket counts.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_assign_replaces_contents(
        (n1, pairs1) in (1usize..=8, proptest::collection::vec((0u64..16, -8i64..8), 0..12)),
        (n2, pairs2) in (1usize..=8, proptest::collection::vec((0u64..16, -8i64..8), 0..12)),
    ) {
        let mut a: ChainTable<u64, i64> = ChainTable::new(n1).unwrap();
        for (k, v) in pairs1 {
            a.insert_or_assign(k, v);
        }
        let mut b: ChainTable<u64, i64> = ChainTable::new(n2).unwrap();
        for (k, v) in pairs2 {
            b.insert_or_assign(k, v);
        }

        let want = snapshot(&b);
        a.clone_from(&b);
        prop_assert_eq!(a.bucket_count(), b.bucket_count());
        prop_assert_eq!(snapshot(&a), want.clone());

        // Independence in both directions after assign.
        a.insert_or_assign(3, 77);
        prop_assert_eq!(snapshot(&b), want);
        let after_a = snapshot(&a);
        b.erase(3);
        b.insert_or_assign(5, -5);
        prop_assert_eq!(snapshot(&a), after_a);
    }
}
