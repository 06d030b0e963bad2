//! Distribution report
//!
//! Draw order is fixed: first `8 * sample_count` bits, then `sample_count`
//! bounded numbers. Two reports from equally seeded generators are equal.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::generator::WhitenedRng;

/// Bit-level balance of whitened output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BitStats {
    pub total: u64,
    pub zeros: u64,
    pub ones: u64,
    /// Percentage of zeros (0.0 - 100.0)
    pub zero_pct: f64,
    /// Percentage of ones (0.0 - 100.0)
    pub one_pct: f64,
}

/// Summary of bounded draws from `get_random_number(max_value)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberStats {
    pub count: u64,
    pub max_value: i64,
    pub mean: f64,
    pub min: u64,
    pub max: u64,
    /// Mean of the uniform distribution over `[0, max_value)`
    pub ideal_mean: f64,
}

/// One histogram range, both ends inclusive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub start: u64,
    pub end: u64,
    pub count: u64,
    pub percentage: f64,
}

/// Mean absolute difference between consecutive numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationStats {
    /// `None` when fewer than two numbers were drawn
    pub mean_abs_diff: Option<f64>,
    /// Expected value for independent uniform draws: `(m^2 - 1) / 3m`
    pub ideal_mean_abs_diff: f64,
}

/// Deviations from ideal; closer to zero is better
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// `|zeros - ones|`
    pub bit_balance_deviation: u64,
    /// `|mean - ideal_mean|`
    pub mean_deviation: f64,
}

/// Complete distribution analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionReport {
    pub bits: BitStats,
    pub numbers: NumberStats,
    pub histogram: Vec<Bucket>,
    pub correlation: CorrelationStats,
    pub summary: Summary,
}

impl DistributionReport {
    /// Serialize as pretty-printed JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Run the bit, number, histogram and correlation checks on `rng`
///
/// # Errors
/// `InvalidArgument` if `config` fails [`AnalysisConfig::validate`].
///
/// # Example
/// ```
/// use xorshift_whitening_core::{analyze_distribution, AnalysisConfig, WhitenedRng};
///
/// let mut rng = WhitenedRng::new(42);
/// let report = analyze_distribution(&mut rng, &AnalysisConfig::default()).unwrap();
/// assert_eq!(report.bits.total, 8000);
/// assert_eq!(report.histogram.len(), 8);
/// ```
pub fn analyze_distribution(
    rng: &mut WhitenedRng,
    config: &AnalysisConfig,
) -> Result<DistributionReport> {
    config.validate()?;

    let bit_count = config.bit_count()?;
    let bits = rng.get_random_bits(bit_count)?;
    let ones = bits.iter().filter(|&&b| b == 1).count() as u64;
    let total = bits.len() as u64;
    let zeros = total - ones;
    let bit_stats = BitStats {
        total,
        zeros,
        ones,
        zero_pct: percent(zeros, total),
        one_pct: percent(ones, total),
    };

    let numbers = (0..config.sample_count)
        .map(|_| rng.get_random_number(config.max_value))
        .collect::<Result<Vec<u64>>>()?;

    let count = numbers.len() as u64;
    let mean = numbers.iter().map(|&n| n as f64).sum::<f64>() / count as f64;
    let ideal_mean = (config.max_value - 1) as f64 / 2.0;
    let number_stats = NumberStats {
        count,
        max_value: config.max_value,
        mean,
        min: numbers.iter().copied().min().unwrap_or(0),
        max: numbers.iter().copied().max().unwrap_or(0),
        ideal_mean,
    };

    let histogram = histogram(&numbers, config.max_value as u64, config.buckets);

    let m = config.max_value as f64;
    let correlation = CorrelationStats {
        mean_abs_diff: mean_abs_diff(&numbers),
        ideal_mean_abs_diff: (m * m - 1.0) / (3.0 * m),
    };

    let summary = Summary {
        bit_balance_deviation: zeros.abs_diff(ones),
        mean_deviation: (mean - ideal_mean).abs(),
    };

    debug!(
        bits = total,
        numbers = count,
        mean,
        bit_balance_deviation = summary.bit_balance_deviation,
        "distribution analysis complete"
    );

    Ok(DistributionReport {
        bits: bit_stats,
        numbers: number_stats,
        histogram,
        correlation,
        summary,
    })
}

fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * part as f64 / total as f64
    }
}

/// Split `[0, bound)` into `buckets` ranges of `bound / buckets` values;
/// the last range also takes the remainder.
fn histogram(numbers: &[u64], bound: u64, buckets: usize) -> Vec<Bucket> {
    let last = buckets - 1;
    let width = bound / buckets as u64;
    let mut counts = vec![0u64; buckets];
    for &n in numbers {
        let idx = ((n / width) as usize).min(last);
        counts[idx] += 1;
    }

    let total = numbers.len() as u64;
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let start = i as u64 * width;
            let end = if i == last {
                bound - 1
            } else {
                start + width - 1
            };
            Bucket {
                start,
                end,
                count,
                percentage: percent(count, total),
            }
        })
        .collect()
}

fn mean_abs_diff(numbers: &[u64]) -> Option<f64> {
    if numbers.len() < 2 {
        return None;
    }
    let sum: f64 = numbers
        .windows(2)
        .map(|w| w[0].abs_diff(w[1]) as f64)
        .sum();
    Some(sum / (numbers.len() - 1) as f64)
}
