//! Statistical sanity checks over a generator's output
//!
//! These are diagnostics, not proofs of randomness:
//! - **distribution**: bit balance, bounded-number mean, histogram and
//!   consecutive-difference statistics
//! - **fingerprint**: SHA-256 of a stream prefix, for comparing runs

mod distribution;
mod fingerprint;

pub use distribution::{
    analyze_distribution, BitStats, Bucket, CorrelationStats, DistributionReport, NumberStats,
    Summary,
};
pub use fingerprint::stream_fingerprint;
