//! Configuration for generators and distribution analysis
//!
//! Both structs deserialize with missing fields filled from `Default`, so a
//! config file only needs to name what it changes.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RngError};

/// Seed used when no seed is configured
pub const DEFAULT_SEED: u64 = 1_234_567_890;

/// Generator construction parameters
///
/// # Fields
///
/// * `seed` - Initial state; `0` is replaced by the core's fallback state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Seed for deterministic generation
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED }
    }
}

/// Parameters for [`crate::analysis::analyze_distribution`]
///
/// # Fields
///
/// * `sample_count` - Numbers drawn; the bit test draws `8 * sample_count` bits
/// * `max_value` - Exclusive upper bound for the number test
/// * `buckets` - Number of equal histogram ranges over `[0, max_value)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub sample_count: usize,
    pub max_value: i64,
    pub buckets: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sample_count: 1000,
            max_value: 256,
            buckets: 8,
        }
    }
}

/// Bits drawn per number in the bit-balance test
const BITS_PER_SAMPLE: i64 = 8;

impl AnalysisConfig {
    /// Number of bits the bit-balance test draws (`8 * sample_count`)
    ///
    /// # Errors
    /// `InvalidArgument` on `sample_count` if the count does not fit in `i64`.
    pub fn bit_count(&self) -> Result<i64> {
        i64::try_from(self.sample_count)
            .ok()
            .and_then(|count| count.checked_mul(BITS_PER_SAMPLE))
            .ok_or_else(|| {
                RngError::invalid(
                    "sample_count",
                    i64::try_from(self.sample_count).unwrap_or(i64::MAX),
                    "bit count overflows i64",
                )
            })
    }

    /// Check that the configuration describes a runnable analysis
    pub fn validate(&self) -> Result<()> {
        if self.sample_count == 0 {
            return Err(RngError::invalid(
                "sample_count",
                0,
                "must be at least 1",
            ));
        }
        self.bit_count()?;
        if self.max_value < 1 {
            return Err(RngError::invalid(
                "max_value",
                self.max_value,
                "must be at least 1",
            ));
        }
        if self.buckets == 0 || self.buckets as u64 > self.max_value as u64 {
            return Err(RngError::invalid(
                "buckets",
                i64::try_from(self.buckets).unwrap_or(i64::MAX),
                "must be between 1 and max_value",
            ));
        }
        Ok(())
    }
}
