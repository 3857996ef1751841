//! ChainTable: fixed-bucket separate-chaining table over an arena of nodes.
//!
//! Buckets form a fixed-length array of chain heads; chains are singly
//! linked through a `SlotMap` arena using generational keys instead of raw
//! next-pointers. The arena owns every node, so unlink-and-release is a
//! `SlotMap::remove` and teardown is a single drop.

use core::fmt;

use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slotmap::{DefaultKey, SlotMap};
use thiserror::Error;

use crate::bucket_key::BucketKey;

/// Failures surfaced by table construction and key-based operations.
///
/// Erase and contains misses are reported through return values, never
/// through this type.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// Construction with zero buckets ("size = 0").
    #[error("invalid bucket count: size = 0")]
    InvalidArgument,
    /// Insert found an equal key already chained in the target bucket.
    #[error("key is already present in its bucket")]
    DuplicateKey,
    /// Search found no equal key in the target bucket.
    #[error("no entry exists for the given key")]
    KeyNotFound,
}

#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    next: Option<DefaultKey>,
}

/// Separate-chaining hash table with a bucket count fixed at construction.
///
/// Keys are primitive integers ([`BucketKey`]); the bucket index is
/// `key mod bucket_count`. Chains are ordered by insertion recency: the
/// most recent insert sits at the head. Key uniqueness is enforced per
/// bucket only, which for a pure modulo hash coincides with global
/// uniqueness (equal keys always select the same bucket).
///
/// Single-threaded by design; no resizing, no load-factor management.
#[derive(Debug)]
pub struct ChainTable<K, V> {
    heads: Vec<Option<DefaultKey>>,
    nodes: SlotMap<DefaultKey, Node<K, V>>,
    items: usize,
}

impl<K, V> ChainTable<K, V>
where
    K: BucketKey,
{
    /// Creates an empty table with `bucket_count` buckets.
    ///
    /// Fails with [`TableError::InvalidArgument`] when `bucket_count` is
    /// zero; the bucket count never changes afterwards.
    pub fn new(bucket_count: usize) -> Result<Self, TableError> {
        if bucket_count == 0 {
            return Err(TableError::InvalidArgument);
        }
        Ok(Self {
            heads: vec![None; bucket_count],
            nodes: SlotMap::with_key(),
            items: 0,
        })
    }

    /// Creates a table where bucket `i` starts with one entry: key `i`
    /// (cast to `K`, wrapping) and a uniformly random value in
    /// `[min, max]`, drawn from an entropy-seeded generator. Every bucket
    /// is seeded, even when the cast wraps a narrow key type.
    ///
    /// Demonstration-grade randomness; for deterministic tests inject a
    /// seeded generator via [`ChainTable::with_random_values_rng`].
    pub fn with_random_values(bucket_count: usize, min: V, max: V) -> Result<Self, TableError>
    where
        V: SampleUniform + PartialOrd + Copy,
    {
        Self::with_random_values_rng(bucket_count, min, max, &mut StdRng::from_entropy())
    }

    /// Randomized construction with an injected generator.
    pub fn with_random_values_rng<R>(
        bucket_count: usize,
        min: V,
        max: V,
        rng: &mut R,
    ) -> Result<Self, TableError>
    where
        V: SampleUniform + PartialOrd + Copy,
        R: Rng,
    {
        let mut table = Self::new(bucket_count)?;
        for i in 0..bucket_count {
            // Placed by bucket index, not by hashing the key: a key type
            // narrower than the bucket count wraps, and the wrapped key
            // must still seed bucket i.
            table.prepend(i, K::from_bucket_index(i), rng.gen_range(min..=max));
        }
        Ok(table)
    }

    /// Number of buckets, fixed at construction.
    pub fn bucket_count(&self) -> usize {
        self.heads.len()
    }

    /// Number of live entries across all chains.
    pub fn len(&self) -> usize {
        self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items == 0
    }

    /// Bucket selected by `key`: `key mod bucket_count`.
    ///
    /// Pure in `key` and the bucket count; two calls on the same table
    /// always agree.
    pub fn bucket_index(&self, key: K) -> usize {
        key.bucket_index(self.heads.len())
    }

    /// Inserts a new entry at the head of its bucket's chain.
    ///
    /// Fails with [`TableError::DuplicateKey`] if an equal key is already
    /// chained in that bucket; the table is left untouched. O(chain length).
    pub fn insert(&mut self, key: K, value: V) -> Result<(), TableError> {
        let bucket = self.bucket_index(key);
        if self.find_in_bucket(bucket, key).is_some() {
            return Err(TableError::DuplicateKey);
        }
        self.prepend(bucket, key, value);
        Ok(())
    }

    /// Upsert: overwrites the value in place if an equal key exists in the
    /// bucket (chain structure and position unchanged), otherwise inserts
    /// at the head. Never fails on a key collision.
    pub fn insert_or_assign(&mut self, key: K, value: V) {
        let bucket = self.bucket_index(key);
        match self.find_in_bucket(bucket, key) {
            Some(node) => self.nodes[node].value = value,
            None => self.prepend(bucket, key, value),
        }
    }

    /// Unlinks and releases the entry with `key`, returning whether one was
    /// found. A miss is an outcome, not an error.
    pub fn erase(&mut self, key: K) -> bool {
        let bucket = self.bucket_index(key);
        let mut prev: Option<DefaultKey> = None;
        let mut cursor = self.heads[bucket];
        while let Some(node) = cursor {
            let next = self.nodes[node].next;
            if self.nodes[node].key == key {
                match prev {
                    Some(p) => self.nodes[p].next = next,
                    None => self.heads[bucket] = next,
                }
                self.nodes.remove(node);
                self.items -= 1;
                return true;
            }
            prev = Some(node);
            cursor = next;
        }
        false
    }

    /// Whether any entry holds a value equal to `value`.
    ///
    /// This searches by VALUE, not by key: a linear scan over every bucket
    /// and chain, O(total entries). For key lookup use [`ChainTable::search`].
    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.iter().any(|(_, _, v)| v == value)
    }

    /// Borrows the value stored under `key`.
    ///
    /// Fails with [`TableError::KeyNotFound`] when no entry in the key's
    /// bucket matches.
    pub fn search(&self, key: K) -> Result<&V, TableError> {
        let bucket = self.bucket_index(key);
        self.find_in_bucket(bucket, key)
            .map(|node| &self.nodes[node].value)
            .ok_or(TableError::KeyNotFound)
    }

    /// Mutably borrows the value stored under `key`.
    ///
    /// The borrow is tied to the table, so it cannot outlive a later
    /// structural mutation of the bucket.
    pub fn search_mut(&mut self, key: K) -> Result<&mut V, TableError> {
        let bucket = self.bucket_index(key);
        match self.find_in_bucket(bucket, key) {
            Some(node) => Ok(&mut self.nodes[node].value),
            None => Err(TableError::KeyNotFound),
        }
    }

    /// Chain length of the bucket selected by `key`.
    ///
    /// Known quirk, kept on purpose: despite the name this does NOT count
    /// entries whose key equals `key` — it reports how many entries collide
    /// into `key`'s bucket, whether or not any of them match. The per-key
    /// counter is [`ChainTable::occurrences`].
    pub fn count(&self, key: K) -> usize {
        let bucket = self.bucket_index(key);
        let mut n = 0;
        let mut cursor = self.heads[bucket];
        while let Some(node) = cursor {
            n += 1;
            cursor = self.nodes[node].next;
        }
        n
    }

    /// Number of entries whose key equals `key` (0 or 1 under the insert
    /// uniqueness invariant). The corrected counterpart of
    /// [`ChainTable::count`].
    pub fn occurrences(&self, key: K) -> usize {
        let bucket = self.bucket_index(key);
        let mut n = 0;
        let mut cursor = self.heads[bucket];
        while let Some(node) = cursor {
            if self.nodes[node].key == key {
                n += 1;
            }
            cursor = self.nodes[node].next;
        }
        n
    }

    /// Iterates `(bucket, &key, &value)` over buckets in index order and
    /// each chain head-to-tail.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            table: self,
            bucket: 0,
            cursor: self.heads[0],
        }
    }

    // [private]

    fn find_in_bucket(&self, bucket: usize, key: K) -> Option<DefaultKey> {
        let mut cursor = self.heads[bucket];
        while let Some(node) = cursor {
            if self.nodes[node].key == key {
                return Some(node);
            }
            cursor = self.nodes[node].next;
        }
        None
    }

    fn prepend(&mut self, bucket: usize, key: K, value: V) {
        let head = self.heads[bucket];
        let node = self.nodes.insert(Node {
            key,
            value,
            next: head,
        });
        self.heads[bucket] = Some(node);
        self.items += 1;
    }

    /// Deep-copies every chain of `source` into `self`, appending at the
    /// tail so head-to-tail order is preserved exactly. Buckets of `self`
    /// must be empty and sized like `source`'s.
    fn append_copies_from(&mut self, source: &Self)
    where
        V: Clone,
    {
        debug_assert_eq!(self.heads.len(), source.heads.len());
        for (bucket, &head) in source.heads.iter().enumerate() {
            let mut tail: Option<DefaultKey> = None;
            let mut cursor = head;
            while let Some(node) = cursor {
                let src = &source.nodes[node];
                let copy = self.nodes.insert(Node {
                    key: src.key,
                    value: src.value.clone(),
                    next: None,
                });
                match tail {
                    Some(t) => self.nodes[t].next = Some(copy),
                    None => self.heads[bucket] = Some(copy),
                }
                tail = Some(copy);
                self.items += 1;
                cursor = src.next;
            }
        }
    }
}

/// Deep copy: an independent table with freshly allocated nodes. Chains are
/// walked head-to-tail and copies appended in the same relative order, so
/// enumeration of the copy matches enumeration of the source.
impl<K, V> Clone for ChainTable<K, V>
where
    K: BucketKey,
    V: Clone,
{
    fn clone(&self) -> Self {
        let mut copy = Self {
            heads: vec![None; self.heads.len()],
            nodes: SlotMap::with_key(),
            items: 0,
        };
        copy.append_copies_from(self);
        copy
    }

    /// Assignment: releases the previous contents, then deep-copies
    /// `source`. Equivalent to destroy-then-copy-construct.
    fn clone_from(&mut self, source: &Self) {
        self.nodes.clear();
        self.heads.clear();
        self.heads.resize(source.heads.len(), None);
        self.items = 0;
        self.append_copies_from(source);
    }
}

/// Prints one line per bucket, entries head-to-tail as `key: [value]`
/// separated by `, `. Empty buckets print empty lines.
impl<K, V> fmt::Display for ChainTable<K, V>
where
    K: BucketKey + fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &head in &self.heads {
            let mut cursor = head;
            let mut first = true;
            while let Some(node) = cursor {
                let n = &self.nodes[node];
                if !first {
                    write!(f, ", ")?;
                }
                write!(f, "{}: [{}]", n.key, n.value)?;
                first = false;
                cursor = n.next;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over `(bucket, &key, &value)` in bucket order, chains
/// head-to-tail.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    table: &'a ChainTable<K, V>,
    bucket: usize,
    cursor: Option<DefaultKey>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (usize, &'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.cursor {
                let n = &self.table.nodes[node];
                self.cursor = n.next;
                return Some((self.bucket, &n.key, &n.value));
            }
            self.bucket += 1;
            if self.bucket >= self.table.heads.len() {
                return None;
            }
            self.cursor = self.table.heads[self.bucket];
        }
    }
}
