use thiserror::Error;

/// Errors surfaced by signature generation and delta scanning.
///
/// Weak-only hash collisions are *not* represented here: they are recovered
/// locally by [`crate::index::SignatureIndex`] and never reach the caller.
#[derive(Debug, Error)]
pub enum RdiffError {
    /// Block size was zero, or a delta scan was started against an empty
    /// signature list.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A read against the reference or target byte source failed (other
    /// than a clean end-of-stream).
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing a signature or delta record set failed.
    #[error("failed to encode record: {0}")]
    Encode(#[source] bincode::Error),

    /// Deserializing a signature or delta record set failed.
    #[error("failed to decode record: {0}")]
    Decode(#[source] bincode::Error),

    /// A rolling-checksum window operation was attempted past its
    /// configured capacity.
    #[error("rolling window overflow: attempted {attempted} bytes, capacity is {cap}")]
    WindowOverflow { cap: usize, attempted: usize },
}

/// Block-size / signature-set configuration failures.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("block size must be greater than zero")]
    EmptyBlockSize,

    #[error("cannot scan a delta against an empty signature list")]
    EmptySignatureList,
}

pub type Result<T> = std::result::Result<T, RdiffError>;
