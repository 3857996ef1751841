//! chain-table: a fixed-bucket, separate-chaining hash table with an
//! arena-backed chain store.
//!
//! Internal design:
//!
//! Summary
//! - Goal: a teaching-grade chained table whose bucket count is fixed at
//!   construction, with every lifecycle and mutation invariant checkable
//!   in safe Rust.
//! - Pieces:
//!   - `BucketKey`: integral-key contract; the bucket index is
//!     `key mod bucket_count` and nothing else.
//!   - `ChainTable<K, V>`: the bucket-head array plus a `SlotMap` arena
//!     that owns every node; chains are singly linked through
//!     generational keys rather than raw pointers, so unlinking and
//!     teardown cannot leak or double-free.
//!   - `roman_to_int`: an unrelated pure text-to-integer collaborator
//!     consumed by the demo driver.
//!
//! Constraints
//! - Single-threaded, synchronous; no internal locking. Callers provide
//!   mutual exclusion if they share a table.
//! - The bucket count never changes: no resizing, no rehashing, no
//!   load-factor management.
//! - New entries are prepended, so each chain is ordered by insertion
//!   recency head-to-tail; enumeration walks buckets in index order.
//! - `insert` rejects a key already chained in its bucket; uniqueness is
//!   enforced per bucket only. With a pure modulo hash that coincides
//!   with global uniqueness, but the narrower contract is the one kept.
//!
//! Quirks kept on purpose
//! - `count(key)` returns the chain length of `key`'s bucket, not the
//!   number of entries holding `key`. The corrected per-key counter is
//!   exposed separately as `occurrences`.
//! - `contains(value)` tests membership by VALUE equality, not by key.
//! - `roman_to_int` accepts ungrammatical numerals ("IIX" evaluates to
//!   10 via the subtraction rule) and only rejects unknown symbols.
//!
//! Notes and non-goals
//! - `Clone` is a deep copy that walks each chain head-to-tail and
//!   appends, so the copy enumerates identically; `clone_from` is the
//!   assign path (release, then copy).
//! - The randomized constructor takes an injected `rand::Rng` for
//!   deterministic tests and defaults to an entropy-seeded generator.
//! - No persistence, no concurrent access, no iteration guarantees
//!   beyond bucket/chain order.

mod bucket_key;
mod chain_table;
mod chain_table_proptest;
pub mod roman;

// Public surface
pub use bucket_key::BucketKey;
pub use chain_table::{ChainTable, Iter, TableError};
pub use roman::{roman_to_int, RomanError};
