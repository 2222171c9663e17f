//! Two-level lookup: weak checksum to a bucket of candidate block signatures,
//! confirmed with a strong hash.

use crate::signature::BlockSignature;
use crate::strong_hash::StrongHasher;
use std::collections::HashMap;

/// Maps a weak checksum to the reference blocks sharing it, in reference
/// index order. Read-only after [`SignatureIndex::build`]; has no interior
/// mutability, so it may be shared across concurrent scans at the caller's
/// discretion.
#[derive(Debug, Default)]
pub struct SignatureIndex {
    buckets: HashMap<u32, Vec<BlockSignature>>,
}

impl SignatureIndex {
    /// Builds the index from an ordered signature list.
    pub fn build(signatures: &[BlockSignature]) -> Self {
        let mut buckets: HashMap<u32, Vec<BlockSignature>> = HashMap::new();
        for sig in signatures {
            buckets.entry(sig.weak).or_default().push(sig.clone());
        }
        Self { buckets }
    }

    /// Probes the index for a candidate window, confirming with the strong
    /// hash. Returns the earliest-inserted (smallest reference index) match.
    ///
    /// The strong hash of `candidate_bytes` is computed once per probe and
    /// compared against every bucket entry, rather than once per candidate.
    pub fn find_match(&self, weak: u32, candidate_bytes: &[u8]) -> Option<u64> {
        let bucket = self.buckets.get(&weak)?;
        let strong = StrongHasher::digest_once(candidate_bytes);
        bucket
            .iter()
            .find(|sig| sig.strong == strong)
            .map(|sig| sig.index)
    }

    /// Number of distinct weak-checksum buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of reference blocks indexed.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strong_hash::StrongHasher;

    fn sig(index: u64, weak: u32, content: &[u8]) -> BlockSignature {
        BlockSignature {
            index,
            weak,
            strong: StrongHasher::digest_once(content),
        }
    }

    #[test]
    fn finds_match_on_weak_and_strong_hit() {
        let sigs = vec![sig(0, 10, b"hello"), sig(1, 20, b"world")];
        let index = SignatureIndex::build(&sigs);
        assert_eq!(index.find_match(20, b"world"), Some(1));
    }

    #[test]
    fn weak_hit_strong_miss_returns_none() {
        let sigs = vec![sig(0, 10, b"hello")];
        let index = SignatureIndex::build(&sigs);
        // Same weak bucket, different content -> strong mismatch.
        assert_eq!(index.find_match(10, b"HELLO"), None);
    }

    #[test]
    fn weak_miss_returns_none() {
        let sigs = vec![sig(0, 10, b"hello")];
        let index = SignatureIndex::build(&sigs);
        assert_eq!(index.find_match(999, b"hello"), None);
    }

    #[test]
    fn earliest_inserted_wins_on_weak_collision() {
        // Two distinct reference blocks whose content happens to collide on
        // a forced weak value; the earlier (smaller) index must win.
        let sigs = vec![sig(5, 42, b"first"), sig(6, 42, b"second")];
        let index = SignatureIndex::build(&sigs);
        assert_eq!(index.find_match(42, b"first"), Some(5));
        assert_eq!(index.find_match(42, b"second"), Some(6));
    }

    #[test]
    fn len_and_bucket_count_track_construction() {
        let sigs = vec![sig(0, 1, b"a"), sig(1, 1, b"b"), sig(2, 2, b"c")];
        let index = SignatureIndex::build(&sigs);
        assert_eq!(index.len(), 3);
        assert_eq!(index.bucket_count(), 2);
        assert!(!index.is_empty());
    }

    #[test]
    fn empty_signature_list_yields_empty_index() {
        let index = SignatureIndex::build(&[]);
        assert!(index.is_empty());
        assert_eq!(index.find_match(0, b""), None);
    }
}
