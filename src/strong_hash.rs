use blake2::digest::{Update, VariableOutput};
use blake2::VarBlake2b;
use std::convert::TryInto;

/// Width of the strong checksum, in bytes.
///
/// The original rsync-family design uses MD5 (16 bytes); this crate keeps
/// Blake2 instead, since MD5 is cryptographically broken, but configures a
/// 16-byte variable output so the collision domain and on-disk record shape
/// match.
pub const STRONG_HASH_LEN: usize = 16;

/// 128-bit digest of a block's content, used to confirm a weak-checksum hit.
pub type StrongHash = [u8; STRONG_HASH_LEN];

/// Stateless content digest used to disambiguate weak-checksum collisions.
///
/// `StrongHasher` carries no state between calls to [`StrongHasher::digest`];
/// each call builds a fresh hasher, which is the simplest way to guarantee
/// the "reset before hashing" contract holds regardless of what the
/// underlying Blake2 implementation does internally.
#[derive(Default)]
pub struct StrongHasher {
    _private: (),
}

impl StrongHasher {
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Digests `bytes` from a clean state.
    pub fn digest(&mut self, bytes: &[u8]) -> StrongHash {
        Self::digest_once(bytes)
    }

    /// Stateless one-shot digest.
    pub fn digest_once(bytes: &[u8]) -> StrongHash {
        let mut hasher = VarBlake2b::new(STRONG_HASH_LEN)
            .expect("16-byte output is a valid Blake2b output size");
        hasher.update(bytes);
        let mut out = [0u8; STRONG_HASH_LEN];
        hasher.finalize_variable(|res| {
            out = res
                .try_into()
                .expect("hasher configured for STRONG_HASH_LEN bytes");
        });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_deterministic() {
        let mut hasher = StrongHasher::new();
        let a = hasher.digest(b"Be yourself");
        let b = hasher.digest(b"Be yourself");
        assert_eq!(a, b);
    }

    #[test]
    fn digest_reflects_content() {
        let mut hasher = StrongHasher::new();
        let a = hasher.digest(b"Be yourself");
        let b = hasher.digest(b"Be someone else");
        assert_ne!(a, b);
    }

    #[test]
    fn digest_once_matches_reused_hasher() {
        let mut hasher = StrongHasher::new();
        let reused = hasher.digest(b"consistent output");
        let once = StrongHasher::digest_once(b"consistent output");
        assert_eq!(reused, once);
    }

    #[test]
    fn reused_hasher_resets_between_calls() {
        let mut hasher = StrongHasher::new();
        let _ = hasher.digest(b"first block of content");
        let second = hasher.digest(b"second block");
        let fresh = StrongHasher::digest_once(b"second block");
        assert_eq!(second, fresh);
    }

    #[test]
    fn digest_length_is_sixteen_bytes() {
        let mut hasher = StrongHasher::new();
        assert_eq!(hasher.digest(b"x").len(), STRONG_HASH_LEN);
        assert_eq!(STRONG_HASH_LEN, 16);
    }
}
