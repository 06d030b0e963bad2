//! Deterministic random bit generation
//!
//! Two layers:
//! - [`Xorshift64Star`]: the raw 64-bit state transition
//! - [`whiten_word`] + [`BitBuffer`]: bias removal and FIFO bit buffering
//!
//! CRITICAL: Bit conventions are fixed. Pairs are read least-significant
//! bit first, and changing that changes every seed's output.

mod whitening;
mod xorshift;

pub use whitening::{whiten_pair, whiten_word, BitBuffer};
pub use xorshift::{Xorshift64Star, XORSHIFT_MULTIPLIER, ZERO_SEED_FALLBACK};
