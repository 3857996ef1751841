//! BucketKey: integral key trait for modulo bucket selection.
//!
//! The table hashes by `key mod bucket_count` on the key's integral
//! representation, so keys are restricted to primitive integers. Signed
//! keys convert with the usual wrapping `as usize` cast before the
//! modulo, mirroring an unsigned-size conversion; two keys that compare
//! equal always select the same bucket.

/// Key contract for [`ChainTable`](crate::ChainTable): cheap to copy,
/// comparable for equality, and reducible to a bucket index.
pub trait BucketKey: Copy + Eq {
    /// Bucket selected by this key in a table with `bucket_count` buckets.
    ///
    /// Pure: depends only on the key and `bucket_count`.
    fn bucket_index(self, bucket_count: usize) -> usize;

    /// Key synthesized from a bucket index, used by the randomized
    /// constructor to seed bucket `i` with key `i`. Wrapping cast.
    fn from_bucket_index(index: usize) -> Self;
}

macro_rules! impl_bucket_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl BucketKey for $t {
                #[inline]
                fn bucket_index(self, bucket_count: usize) -> usize {
                    self as usize % bucket_count
                }

                #[inline]
                fn from_bucket_index(index: usize) -> Self {
                    index as $t
                }
            }
        )*
    };
}

impl_bucket_key!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
    use super::BucketKey;

    /// Invariant: the bucket index is a pure function of key and bucket count.
    #[test]
    fn bucket_index_is_deterministic() {
        for k in [0u64, 1, 9, 10, 43, u64::MAX] {
            assert_eq!(k.bucket_index(6), k.bucket_index(6));
            assert_eq!(k.bucket_index(6), (k % 6) as usize);
        }
    }

    /// Invariant: indices always land in `[0, bucket_count)`, including for
    /// negative signed keys (wrapping conversion).
    #[test]
    fn bucket_index_in_range() {
        for k in [-17i32, -1, 0, 1, 5, i32::MAX, i32::MIN] {
            for n in [1usize, 2, 6, 7] {
                assert!(k.bucket_index(n) < n);
            }
        }
    }

    /// Invariant: `from_bucket_index` round-trips through `bucket_index` for
    /// indices below the bucket count.
    #[test]
    fn index_key_round_trip() {
        for i in 0..6usize {
            let k = <u32 as BucketKey>::from_bucket_index(i);
            assert_eq!(k.bucket_index(6), i);
        }
    }
}
