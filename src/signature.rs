//! Splits a reference byte stream into fixed-size blocks and computes one
//! (weak, strong, index) signature per block.

use crate::error::{ConfigError, RdiffError, Result};
use crate::rolling;
use crate::strong_hash::{StrongHash, StrongHasher};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Default block size: 6144 bytes (1024 x 6).
pub const DEFAULT_BLOCK_SIZE: u32 = 1024 * 6;

/// One reference block's signature. The block's content itself is never
/// persisted, only enough to recognize it later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSignature {
    /// 0-based position of the block in the reference stream.
    pub index: u64,
    /// Adler32-family rolling checksum of the block.
    pub weak: u32,
    /// 128-bit content digest of the block.
    pub strong: StrongHash,
}

/// A complete signature of a reference stream: the block size it was
/// computed with, plus one [`BlockSignature`] per block in ascending,
/// contiguous index order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSignature {
    pub block_size: u32,
    pub blocks: Vec<BlockSignature>,
}

/// Splits a reference byte source into fixed-size blocks and signs each one.
pub struct SignatureBuilder;

impl SignatureBuilder {
    /// Reads `reference` to completion and emits one [`BlockSignature`] per
    /// `block_size`-byte chunk (the final chunk may be shorter). An empty
    /// reference produces an empty block list, never an error.
    ///
    /// # Errors
    /// [`ConfigError::EmptyBlockSize`] if `block_size == 0`; I/O errors on
    /// the reference source are surfaced unchanged.
    pub fn build<R: Read>(mut reference: R, block_size: u32) -> Result<FileSignature> {
        if block_size == 0 {
            return Err(RdiffError::Config(ConfigError::EmptyBlockSize));
        }

        let mut buffer = Vec::new();
        reference.read_to_end(&mut buffer)?;
        info!(
            "generating signature: {} bytes, block size {}",
            buffer.len(),
            block_size
        );

        let mut hasher = StrongHasher::new();
        let mut blocks = Vec::with_capacity(buffer.len() / block_size as usize + 1);
        for (index, chunk) in buffer.chunks(block_size as usize).enumerate() {
            let weak = rolling::checksum(chunk);
            let strong = hasher.digest(chunk);
            debug!("block {index}: {} bytes, weak={weak:#010x}", chunk.len());
            blocks.push(BlockSignature {
                index: index as u64,
                weak,
                strong,
            });
        }

        info!("signature complete: {} blocks", blocks.len());
        Ok(FileSignature { block_size, blocks })
    }
}
