//! Rolling (Adler32-family) checksum over a sliding byte window.
//!
//! https://rsync.samba.org/tech_report/node3.html
//!
//! `a`/`b` are the two Adler32 accumulators; `M` is the largest prime
//! below 2^16, per RFC 1950. Arithmetic is carried in `u64` so none of the
//! intermediate subtractions in [`RollingChecksum::pop_front`] or
//! [`RollingChecksum::roll`] can wrap before the final `% M` reduction.

use crate::error::{RdiffError, Result};
use std::collections::VecDeque;

/// Largest prime smaller than 2^16 (RFC 1950 Adler32 modulus).
const MODULO: u64 = 65521;

/// Incrementally maintained Adler32-family checksum over a sliding window
/// of at most `cap` bytes.
///
/// Single-owner, non-shareable: exactly one scan holds a `RollingChecksum`
/// at a time.
#[derive(Debug, Clone)]
pub struct RollingChecksum {
    a: u64,
    b: u64,
    window: VecDeque<u8>,
    cap: usize,
    removed: u8,
}

impl RollingChecksum {
    /// Creates an empty rolling checksum with the given window capacity.
    pub fn new(cap: usize) -> Self {
        Self {
            a: 1,
            b: 0,
            window: VecDeque::with_capacity(cap),
            cap,
            removed: 0,
        }
    }

    /// Resets to the empty-window state, preserving capacity.
    pub fn reset(&mut self) {
        self.a = 1;
        self.b = 0;
        self.window.clear();
    }

    /// Current window length.
    pub fn size(&self) -> usize {
        self.window.len()
    }

    /// Configured maximum window capacity.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Borrow of the bytes currently contributing to the checksum, oldest first.
    pub fn window(&self) -> impl Iterator<Item = &u8> {
        self.window.iter()
    }

    /// Copies the window out as a contiguous `Vec<u8>`, oldest first.
    pub fn window_bytes(&self) -> Vec<u8> {
        self.window.iter().copied().collect()
    }

    /// The most recently evicted byte (by [`pop_front`](Self::pop_front) or
    /// [`roll`](Self::roll)).
    pub fn removed(&self) -> u8 {
        self.removed
    }

    /// Appends one byte to the window without evicting.
    ///
    /// # Errors
    /// Returns [`RdiffError::WindowOverflow`] if the window is already at
    /// capacity.
    pub fn push_back(&mut self, byte: u8) -> Result<()> {
        if self.window.len() >= self.cap {
            return Err(RdiffError::WindowOverflow {
                cap: self.cap,
                attempted: self.window.len() + 1,
            });
        }
        self.window.push_back(byte);
        self.a = (self.a + byte as u64) % MODULO;
        self.b = (self.b + self.a) % MODULO;
        Ok(())
    }

    /// Evicts the oldest byte, storing it for [`removed`](Self::removed).
    ///
    /// No-op on an empty window (mirrors the rolling-hash predecessor this
    /// crate is modeled on, which treats popping an empty window as a reset
    /// rather than a fatal error).
    pub fn pop_front(&mut self) {
        let len = self.window.len() as u64; // L, length *before* this pop
        let Some(oldest) = self.window.pop_front() else {
            return;
        };
        self.removed = oldest;
        self.a = (self.a + MODULO - oldest as u64) % MODULO;
        // b -= len * oldest + 1. The trailing -1 falls out of expanding the
        // recursive Adler32 definition (b_k = b_{k-1} + a_k) for the
        // shrunk window, not just a convenience for composing with a later
        // push_back: dropping it would desync from a from-scratch checksum
        // of the remaining bytes.
        let sub = (len * oldest as u64 + 1) % MODULO;
        self.b = (self.b + MODULO - sub) % MODULO;
    }

    /// Atomic pop-then-push that keeps the window length constant: evicts
    /// the oldest byte and admits `byte`, updating the checksum in closed
    /// form (no recomputation from scratch).
    ///
    /// Precondition: the window is non-empty (callers roll a full window;
    /// priming an empty window uses [`push_back`](Self::push_back) or
    /// [`bulk_init`](Self::bulk_init) instead).
    pub fn roll(&mut self, byte: u8) -> Result<()> {
        if self.window.is_empty() {
            return self.push_back(byte);
        }
        let len = self.window.len() as u64; // L, constant across a roll (pop then push)
        let old = self.window.pop_front().unwrap();
        self.removed = old;
        self.window.push_back(byte);

        self.a = (self.a + MODULO + byte as u64 - old as u64) % MODULO;
        let sub = (len * old as u64 + 1) % MODULO;
        self.b = (self.b + MODULO - sub + self.a) % MODULO;
        Ok(())
    }

    /// Bulk-initializes the window from a fresh (empty) state.
    ///
    /// # Errors
    /// Returns [`RdiffError::WindowOverflow`] if `bytes.len() > cap`, or if
    /// the window is not currently empty.
    pub fn bulk_init(&mut self, bytes: &[u8]) -> Result<()> {
        if !self.window.is_empty() {
            return Err(RdiffError::WindowOverflow {
                cap: self.cap,
                attempted: self.window.len() + bytes.len(),
            });
        }
        if bytes.len() > self.cap {
            return Err(RdiffError::WindowOverflow {
                cap: self.cap,
                attempted: bytes.len(),
            });
        }
        for &byte in bytes {
            self.push_back(byte)?;
        }
        Ok(())
    }

    /// Current Adler32-style 32-bit checksum: `(b << 16) | a`.
    pub fn sum32(&self) -> u32 {
        ((self.b << 16) | self.a) as u32
    }
}

/// One-shot Adler32-family checksum of a byte slice, for callers that don't
/// need an incrementally rolling window.
pub fn checksum(bytes: &[u8]) -> u32 {
    let mut rolling = RollingChecksum::new(bytes.len());
    rolling.bulk_init(bytes).expect("capacity sized to input length");
    rolling.sum32()
}
