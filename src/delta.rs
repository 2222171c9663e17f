//! Byte-at-a-time block-matching scanner and the post-scan integrity pass
//! that fills in missing-block placeholders.

use crate::byte_source::ByteSource;
use crate::error::{ConfigError, RdiffError, Result};
use crate::index::SignatureIndex;
use crate::rolling::RollingChecksum;
use crate::signature::{BlockSignature, FileSignature};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;

/// One reference-block outcome of a delta scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delta {
    /// Reference block index this record describes.
    pub signature_index: u64,
    /// Byte range `[index*B, index*B + B)` in the reference stream.
    pub start: u64,
    pub end: u64,
    /// `true` if the reference block was never located in the target.
    pub missing: bool,
    /// Target bytes consumed since the previous match, immediately
    /// preceding this matched block. Empty when `missing` is `true`.
    pub literal: Vec<u8>,
}

/// Delta records keyed by reference block index; iteration order is
/// unspecified.
pub type DeltaMap = HashMap<u64, Delta>;

/// Consumes a target byte stream against a reference [`SignatureIndex`],
/// emitting matched deltas and accumulating intervening literal bytes.
pub struct DeltaScanner;

impl DeltaScanner {
    /// Scans `target` against `signature`, returning a delta map covering
    /// every reference block index (matched or missing).
    ///
    /// A literal trailing segment of the target that follows the last
    /// match is dropped: it never completes a literal attached to a
    /// subsequent match, and this implementation does not add a sentinel
    /// tail-literal record for it (see `DESIGN.md`).
    ///
    /// # Errors
    /// [`ConfigError::EmptyBlockSize`] if `signature.block_size == 0`;
    /// [`ConfigError::EmptySignatureList`] if `signature.blocks` is empty;
    /// I/O errors on `target` other than a clean end-of-stream are fatal.
    pub fn scan<R: Read>(target: R, signature: &FileSignature) -> Result<DeltaMap> {
        let block_size = signature.block_size;
        if block_size == 0 {
            return Err(RdiffError::Config(ConfigError::EmptyBlockSize));
        }
        if signature.blocks.is_empty() {
            return Err(RdiffError::Config(ConfigError::EmptySignatureList));
        }

        let index = SignatureIndex::build(&signature.blocks);
        let block_size = block_size as usize;
        let mut source = ByteSource::new(target);
        let mut rolling = RollingChecksum::new(block_size);
        let mut literals: Vec<u8> = Vec::new();
        let mut result: DeltaMap = HashMap::new();
        let mut eof = false;

        loop {
            if !eof {
                match source.next_byte()? {
                    None => {
                        if rolling.size() == 0 {
                            break;
                        }
                        eof = true;
                    }
                    Some(byte) => {
                        rolling.push_back(byte)?;
                        if rolling.size() < block_size {
                            continue;
                        }
                    }
                }
            }

            let window = rolling.window_bytes();
            match index.find_match(rolling.sum32(), &window) {
                Some(i) => {
                    trace!(
                        "match at reference block {i}, {} literal bytes pending",
                        literals.len()
                    );
                    result.entry(i).or_insert_with(|| Delta {
                        signature_index: i,
                        start: i * block_size as u64,
                        end: i * block_size as u64 + block_size as u64,
                        missing: false,
                        literal: std::mem::take(&mut literals),
                    });
                    rolling.reset();
                }
                None => {
                    rolling.pop_front();
                    literals.push(rolling.removed());
                }
            }

            if eof {
                break;
            }
        }

        debug!(
            "scan complete: {} matched blocks, {} trailing literal bytes dropped",
            result.len(),
            literals.len()
        );

        fill_missing(&signature.blocks, block_size as u64, &mut result);
        Ok(result)
    }
}

/// Inserts a `missing=true` placeholder for every reference block whose
/// index never turned up in `result`. Post-condition: `result` is keyed by
/// every index in `[0, N)` with no gaps.
fn fill_missing(signatures: &[BlockSignature], block_size: u64, result: &mut DeltaMap) {
    for sig in signatures {
        result.entry(sig.index).or_insert_with(|| Delta {
            signature_index: sig.index,
            start: sig.index * block_size,
            end: sig.index * block_size + block_size,
            missing: true,
            literal: Vec::new(),
        });
    }
}
