//! Whitened Xorshift64* - deterministic unbiased bit generation
//!
//! A seeded, reproducible source of balanced bits and bytes. NOT suitable
//! for cryptographic use.
//!
//! # Architecture
//!
//! - **rng**: xorshift64* core and Von Neumann whitening
//! - **generator**: public bit / number / byte operations
//! - **analysis**: distribution report and stream fingerprints
//! - **config**: serde-loadable generator and analysis settings
//!
//! # Critical Invariants
//!
//! 1. Core state is never zero
//! 2. Same seed → same bits, numbers and bytes
//! 3. Bits are consumed in the order whitening emitted them
//! 4. Invalid arguments are rejected, never clamped

// Module declarations
pub mod analysis;
pub mod config;
pub mod error;
pub mod generator;
pub mod rng;

// Re-exports for convenience
pub use analysis::{analyze_distribution, stream_fingerprint, DistributionReport};
pub use config::{AnalysisConfig, GeneratorConfig, DEFAULT_SEED};
pub use error::RngError;
pub use generator::{WhitenedRng, MAX_WHITENED_BITS};
pub use rng::{Xorshift64Star, ZERO_SEED_FALLBACK};
