//! Von Neumann whitening
//!
//! Each raw word is read as 32 non-overlapping pairs, taking bit positions
//! `(0,1), (2,3), …, (62,63)` where bit 0 is the least significant bit.
//!
//! | pair (first, second) | output  |
//! |----------------------|---------|
//! | (0, 1)               | 0       |
//! | (1, 0)               | 1       |
//! | (0, 0) / (1, 1)      | dropped |
//!
//! This removes static bias from independent bits. It does not remove
//! correlation between the two bits of a pair.

use std::collections::VecDeque;

use tracing::trace;

use super::Xorshift64Star;

/// Apply the Von Neumann rule to one pair of bits
///
/// Returns `None` when the pair is matched and must be discarded.
///
/// # Example
/// ```
/// use xorshift_whitening_core::rng::whiten_pair;
///
/// assert_eq!(whiten_pair(0, 1), Some(0));
/// assert_eq!(whiten_pair(1, 0), Some(1));
/// assert_eq!(whiten_pair(1, 1), None);
/// ```
#[inline]
pub fn whiten_pair(first: u8, second: u8) -> Option<u8> {
    match (first, second) {
        (0, 1) => Some(0),
        (1, 0) => Some(1),
        _ => None,
    }
}

/// Whiten every pair of `word` in pair order, appending accepted bits
///
/// Returns the number of bits appended (0..=32).
pub fn whiten_word(word: u64, out: &mut VecDeque<u8>) -> usize {
    let before = out.len();
    for i in (0..64).step_by(2) {
        let first = ((word >> i) & 1) as u8;
        let second = ((word >> (i + 1)) & 1) as u8;
        if let Some(bit) = whiten_pair(first, second) {
            out.push_back(bit);
        }
    }
    out.len() - before
}

/// FIFO of whitened bits awaiting consumption
///
/// Every bit in the buffer has already passed whitening. Bits leave in the
/// order they were emitted.
#[derive(Debug, Clone, Default)]
pub struct BitBuffer {
    bits: VecDeque<u8>,
}

impl BitBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bits waiting to be consumed
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Draw raw words from `core` until at least one bit has been buffered
    ///
    /// Every pair of each drawn word is processed, so a single fill can add
    /// up to 32 bits. The number of words drawn is unbounded.
    ///
    /// Returns the number of raw words drawn.
    pub fn fill(&mut self, core: &mut Xorshift64Star) -> u64 {
        let mut words = 0u64;
        while self.bits.is_empty() {
            let raw = core.next_raw();
            words += 1;
            whiten_word(raw, &mut self.bits);
        }
        trace!(words, buffered = self.bits.len(), "bit buffer refilled");
        words
    }

    /// Remove and return the oldest bit, if any
    pub fn pop(&mut self) -> Option<u8> {
        self.bits.pop_front()
    }
}
