//! End-to-end scenarios over the public API.

use chain_table::{ChainTable, TableError};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn snapshot(t: &ChainTable<u64, i64>) -> Vec<(usize, u64, i64)> {
    t.iter().map(|(b, &k, &v)| (b, k, v)).collect()
}

/// The reference walkthrough: six buckets, a colliding insert, an upsert
/// pair on the same key, then value-membership checks.
#[test]
fn reference_walkthrough() {
    let mut t: ChainTable<u64, i64> = ChainTable::new(6).unwrap();

    t.insert(9, 15).unwrap();
    assert_eq!(t.bucket_index(9), 3);
    assert_eq!(snapshot(&t), vec![(3, 9, 15)]);

    t.insert_or_assign(10, 4);
    assert_eq!(t.bucket_index(10), 4);
    assert_eq!(t.search(10), Ok(&4));

    t.insert_or_assign(10, 6);
    assert_eq!(t.search(10), Ok(&6));
    assert_eq!(t.count(10), 1, "still one node after the upsert");

    assert!(!t.contains(&43));
    t.insert_or_assign(4, 43);
    assert!(t.contains(&43));

    // 4 and 10 share bucket 4 now; count reports the chain, search the key.
    assert_eq!(t.count(4), 2);
    assert_eq!(t.search(4), Ok(&43));
    assert_eq!(t.search(11).unwrap_err(), TableError::KeyNotFound);
}

/// Deep copies are independent in both directions: mutating either table
/// never shows up in the other's enumeration.
#[test]
fn deep_copy_independence() {
    let mut original: ChainTable<u64, i64> = ChainTable::new(4).unwrap();
    for (k, v) in [(1, 10), (5, 50), (9, 90), (2, 20)] {
        original.insert(k, v).unwrap();
    }

    let mut copy = original.clone();
    assert_eq!(snapshot(&copy), snapshot(&original), "copy preserves order");

    let original_before = snapshot(&original);
    assert!(copy.erase(5));
    copy.insert_or_assign(1, -1);
    copy.insert(13, 130).unwrap();
    assert_eq!(snapshot(&original), original_before);

    let copy_before = snapshot(&copy);
    assert!(original.erase(9));
    original.insert_or_assign(2, -2);
    assert_eq!(snapshot(&copy), copy_before);
}

/// Assign replaces the previous contents entirely, bucket count included,
/// and the result is as independent as a fresh copy.
#[test]
fn assign_replaces_and_detaches() {
    let mut target: ChainTable<u64, i64> = ChainTable::new(2).unwrap();
    target.insert(0, 1).unwrap();
    target.insert(1, 2).unwrap();

    let mut source: ChainTable<u64, i64> = ChainTable::new(5).unwrap();
    source.insert(7, 70).unwrap();
    source.insert(2, 20).unwrap();

    target.clone_from(&source);
    assert_eq!(target.bucket_count(), 5);
    assert_eq!(snapshot(&target), snapshot(&source));
    assert_eq!(target.search(0).unwrap_err(), TableError::KeyNotFound);

    let source_before = snapshot(&source);
    assert!(target.erase(7));
    assert_eq!(snapshot(&source), source_before);
}

/// Chain order survives a copy exactly: a long colliding chain enumerates
/// head-to-tail identically in source and copy.
#[test]
fn copy_preserves_chain_order() {
    let mut t: ChainTable<u64, i64> = ChainTable::new(1).unwrap();
    for k in 0..32u64 {
        t.insert(k, k as i64).unwrap();
    }
    // Everything chains in bucket 0, most recent first.
    let keys: Vec<u64> = t.iter().map(|(_, &k, _)| k).collect();
    assert_eq!(keys, (0..32u64).rev().collect::<Vec<_>>());

    let copy = t.clone();
    assert_eq!(snapshot(&copy), snapshot(&t));
}

/// Randomized construction with an injected seed is reproducible and
/// respects the per-bucket layout and value bounds.
#[test]
fn seeded_randomized_construction() {
    let mut rng = StdRng::seed_from_u64(42);
    let t: ChainTable<u64, i64> = ChainTable::with_random_values_rng(6, 2, 9, &mut rng).unwrap();

    assert_eq!(t.len(), 6);
    for (bucket, (b, k, v)) in snapshot(&t).into_iter().enumerate() {
        assert_eq!(b, bucket);
        assert_eq!(k, bucket as u64);
        assert!((2..=9).contains(&v));
    }

    let mut rng = StdRng::seed_from_u64(42);
    let again: ChainTable<u64, i64> =
        ChainTable::with_random_values_rng(6, 2, 9, &mut rng).unwrap();
    assert_eq!(snapshot(&again), snapshot(&t));
}

/// The count quirk at scale: zero, one, and several unrelated keys that all
/// select the same bucket.
#[test]
fn count_reports_collisions_not_occurrences() {
    let mut t: ChainTable<u64, i64> = ChainTable::new(6).unwrap();
    assert_eq!(t.count(3), 0);

    t.insert(3, 1).unwrap();
    assert_eq!(t.count(3), 1);

    t.insert(9, 2).unwrap();
    t.insert(15, 3).unwrap();
    t.insert(21, 4).unwrap();
    assert_eq!(t.count(3), 4);
    // 27 was never inserted; its bucket is still four deep.
    assert_eq!(t.count(27), 4);
    assert_eq!(t.occurrences(27), 0);
}

/// Signed keys work through the wrapping integral conversion.
#[test]
fn signed_keys_are_supported() {
    let mut t: ChainTable<i64, i64> = ChainTable::new(6).unwrap();
    t.insert(-1, 100).unwrap();
    t.insert(7, 700).unwrap();
    assert_eq!(t.search(-1), Ok(&100));
    assert_eq!(t.search(7), Ok(&700));
    assert!(t.erase(-1));
    assert!(!t.erase(-1));
}
