//! xorshift64* core generator
//!
//! Fast, deterministic, and NOT cryptographically secure. The state is a
//! single non-zero `u64`; each draw applies three xor-shifts and returns the
//! new state scrambled by an odd multiplier.
//!
//! # Algorithm
//!
//! ```text
//! x = state
//! x ^= x << 12
//! x ^= x >> 25
//! x ^= x << 27
//! state = x
//! return x * 2685821657736338717   (mod 2^64)
//! ```
//!
//! The xor-shift step is a bijection on the non-zero 64-bit values, so a
//! non-zero state never reaches zero.
//!
//! # Determinism
//!
//! Same seed → same sequence of raw words.

use tracing::debug;

/// Output scrambling constant (`0x2545F4914F6CDD1D`)
pub const XORSHIFT_MULTIPLIER: u64 = 2_685_821_657_736_338_717;

/// State used when a caller seeds with zero
///
/// Zero is a fixed point of the xor-shift transition. Seeds `0` and `1`
/// therefore produce identical streams.
pub const ZERO_SEED_FALLBACK: u64 = 1;

/// Raw xorshift64* generator
///
/// # Example
/// ```
/// use xorshift_whitening_core::Xorshift64Star;
///
/// let mut core = Xorshift64Star::new(42);
/// assert_eq!(core.next_raw(), 7339129661131613890);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift64Star {
    /// Internal state (64-bit, never zero)
    state: u64,
}

impl Xorshift64Star {
    /// Create a new core generator with the given seed
    ///
    /// A zero seed is replaced by [`ZERO_SEED_FALLBACK`].
    ///
    /// # Example
    /// ```
    /// use xorshift_whitening_core::Xorshift64Star;
    ///
    /// assert_eq!(Xorshift64Star::new(0).get_state(), 1);
    /// assert_eq!(Xorshift64Star::new(12345).get_state(), 12345);
    /// ```
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 {
            debug!(fallback = ZERO_SEED_FALLBACK, "zero seed replaced with fallback state");
            ZERO_SEED_FALLBACK
        } else {
            seed
        };
        Self { state }
    }

    /// Advance the state and return the next raw 64-bit word
    pub fn next_raw(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 12;
        x ^= x >> 25;
        x ^= x << 27;
        self.state = x;
        x.wrapping_mul(XORSHIFT_MULTIPLIER)
    }

    /// Get current state
    ///
    /// A core generator recreated from this value continues the same
    /// sequence.
    pub fn get_state(&self) -> u64 {
        self.state
    }
}
