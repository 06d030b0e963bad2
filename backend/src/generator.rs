//! Whitened bit generator
//!
//! [`WhitenedRng`] owns a xorshift64* core and a buffer of whitened bits.
//! All public operations consume bits from the buffer in FIFO order, so
//! for a given seed the sequence of bits, and every number built from
//! them, is fixed.
//!
//! # Conventions
//!
//! - Pair extraction: least-significant bit first (see [`crate::rng`])
//! - Integer composition: least-significant bit first. The first bit
//!   generated becomes bit 0 of the result.
//!
//! The generator is single-owner. It has no internal locking; wrap the
//! whole value in a `Mutex` to share it, so that state and buffer move
//! together.

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::{Result, RngError};
use crate::rng::{BitBuffer, Xorshift64Star};

/// Widest value [`WhitenedRng::apply_whitening`] can compose
pub const MAX_WHITENED_BITS: i64 = 64;

/// Deterministic generator of whitened bits
///
/// # Example
/// ```
/// use xorshift_whitening_core::WhitenedRng;
///
/// let mut rng = WhitenedRng::new(42);
/// assert_eq!(rng.generate_raw_bit(), 0);
///
/// let n = rng.get_random_number(10).unwrap();
/// assert!(n < 10);
/// ```
#[derive(Debug, Clone)]
pub struct WhitenedRng {
    core: Xorshift64Star,
    buffer: BitBuffer,
    /// Raw words consumed since construction
    words_drawn: u64,
}

impl WhitenedRng {
    /// Create a generator from a seed
    ///
    /// A zero seed is accepted and mapped to the core's fallback state.
    pub fn new(seed: u64) -> Self {
        debug!(seed, "whitened generator created");
        Self {
            core: Xorshift64Star::new(seed),
            buffer: BitBuffer::new(),
            words_drawn: 0,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.seed)
    }

    /// Return the next whitened bit (0 or 1)
    ///
    /// Refills the buffer from the core when it is empty.
    pub fn generate_raw_bit(&mut self) -> u8 {
        loop {
            if let Some(bit) = self.buffer.pop() {
                return bit;
            }
            self.words_drawn += self.buffer.fill(&mut self.core);
        }
    }

    /// Return the next `n` whitened bits in generation order
    ///
    /// `n == 0` returns an empty vector without touching the generator.
    ///
    /// # Errors
    /// `InvalidArgument` if `n` is negative.
    ///
    /// # Example
    /// ```
    /// use xorshift_whitening_core::WhitenedRng;
    ///
    /// let mut rng = WhitenedRng::new(42);
    /// assert_eq!(rng.get_random_bits(4).unwrap(), vec![0, 0, 1, 0]);
    /// assert!(rng.get_random_bits(-5).is_err());
    /// ```
    pub fn get_random_bits(&mut self, n: i64) -> Result<Vec<u8>> {
        let count = usize::try_from(n)
            .map_err(|_| RngError::invalid("n", n, "bit count must not be negative"))?;
        Ok((0..count).map(|_| self.generate_raw_bit()).collect())
    }

    /// Compose `n` whitened bits into an integer in `[0, 2^n - 1]`
    ///
    /// The first bit drawn is the least significant bit of the result.
    ///
    /// # Errors
    /// `InvalidArgument` unless `1 <= n <= 64`.
    ///
    /// # Example
    /// ```
    /// use xorshift_whitening_core::WhitenedRng;
    ///
    /// let mut rng = WhitenedRng::new(42);
    /// assert_eq!(rng.apply_whitening(8).unwrap(), 212);
    /// ```
    pub fn apply_whitening(&mut self, n: i64) -> Result<u64> {
        if !(1..=MAX_WHITENED_BITS).contains(&n) {
            return Err(RngError::invalid(
                "n",
                n,
                "bit width must be between 1 and 64",
            ));
        }
        Ok(self.compose_lsb_first(n as u32))
    }

    /// Return an integer uniformly distributed over `[0, max_value)`
    ///
    /// Draws candidates of the minimal bit width `k` with
    /// `2^k >= max_value` and rejects candidates `>= max_value`. No modulo
    /// reduction is applied. `max_value == 1` returns `0` without drawing.
    ///
    /// # Errors
    /// `InvalidArgument` if `max_value < 1`.
    ///
    /// # Example
    /// ```
    /// use xorshift_whitening_core::WhitenedRng;
    ///
    /// let mut rng = WhitenedRng::new(42);
    /// assert_eq!(rng.get_random_number(256).unwrap(), 212);
    /// assert!(rng.get_random_number(0).is_err());
    /// ```
    pub fn get_random_number(&mut self, max_value: i64) -> Result<u64> {
        if max_value < 1 {
            return Err(RngError::invalid(
                "max_value",
                max_value,
                "upper bound must be at least 1",
            ));
        }
        let bound = max_value as u64;
        let width = bit_width(bound);
        if width == 0 {
            return Ok(0);
        }
        loop {
            let candidate = self.apply_whitening(i64::from(width))?;
            if candidate < bound {
                return Ok(candidate);
            }
        }
    }

    /// Next whitened byte, i.e. `apply_whitening(8)`
    pub fn next_byte(&mut self) -> u8 {
        self.compose_lsb_first(u8::BITS) as u8
    }

    /// Fill `dest` with whitened bytes in index order
    ///
    /// # Example
    /// ```
    /// use xorshift_whitening_core::WhitenedRng;
    ///
    /// let mut rng = WhitenedRng::new(42);
    /// let mut buf = [0u8; 4];
    /// rng.fill_bytes(&mut buf);
    /// assert_eq!(buf, [212, 216, 85, 93]);
    /// ```
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.next_byte();
        }
    }

    /// Next whitened 64-bit value, i.e. `apply_whitening(64)`
    pub fn next_u64(&mut self) -> u64 {
        self.compose_lsb_first(u64::BITS)
    }

    /// Raw words consumed from the core since construction
    pub fn words_drawn(&self) -> u64 {
        self.words_drawn
    }

    /// Whitened bits buffered but not yet returned
    pub fn buffered_bits(&self) -> usize {
        self.buffer.len()
    }

    /// Draw `width` bits (`1..=64`); the first drawn is bit 0 of the result
    fn compose_lsb_first(&mut self, width: u32) -> u64 {
        debug_assert!((1..=u64::BITS).contains(&width));
        (0..width).fold(0u64, |acc, i| {
            acc | (u64::from(self.generate_raw_bit()) << i)
        })
    }
}

/// Minimal `k` such that `2^k >= bound` (`bound >= 1`)
fn bit_width(bound: u64) -> u32 {
    if bound <= 1 {
        0
    } else {
        u64::BITS - (bound - 1).leading_zeros()
    }
}
