pub mod byte_source;
pub mod delta;
pub mod error;
pub mod file_ops;
pub mod index;
pub mod rolling;
pub mod signature;
pub mod strong_hash;

pub use byte_source::ByteSource;
pub use delta::{Delta, DeltaMap, DeltaScanner};
pub use error::{ConfigError, RdiffError, Result};
pub use index::SignatureIndex;
pub use rolling::RollingChecksum;
pub use signature::{BlockSignature, FileSignature, SignatureBuilder, DEFAULT_BLOCK_SIZE};
pub use strong_hash::{StrongHash, StrongHasher, STRONG_HASH_LEN};
