//! Plain-text rendering of generator output

use std::fmt;

use xorshift_whitening_core::DistributionReport;

const RULE_WIDTH: usize = 80;

pub fn bit_string(bits: &[u8]) -> String {
    bits.iter().map(|&b| if b == 1 { '1' } else { '0' }).collect()
}

pub fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Human-readable distribution report
pub struct TextReport<'a>(pub &'a DistributionReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        writeln!(f, "{heavy}\nWHITENED XORSHIFT64* - DISTRIBUTION REPORT\n{heavy}\n")?;

        let bits = &report.bits;
        writeln!(f, "[1] BIT BALANCE\n{light}")?;
        writeln!(f, "Total bits: {}", bits.total)?;
        writeln!(f, "Zeros: {} ({:.2}%)", bits.zeros, bits.zero_pct)?;
        writeln!(f, "Ones:  {} ({:.2}%)", bits.ones, bits.one_pct)?;
        writeln!(f, "Ideal: 50.00% each\n")?;

        let numbers = &report.numbers;
        writeln!(f, "[2] NUMBERS IN [0, {})\n{light}", numbers.max_value)?;
        writeln!(f, "Count: {}", numbers.count)?;
        writeln!(f, "Mean:  {:.2}", numbers.mean)?;
        writeln!(f, "Min:   {}", numbers.min)?;
        writeln!(f, "Max:   {}", numbers.max)?;
        writeln!(f, "Ideal mean: {:.2}\n", numbers.ideal_mean)?;

        writeln!(f, "[3] HISTOGRAM ({} ranges)\n{light}", report.histogram.len())?;
        for bucket in &report.histogram {
            let bar = "#".repeat((bucket.percentage / 2.0) as usize);
            writeln!(
                f,
                "[{:>5}-{:>5}]: {} {:5.2}% ({})",
                bucket.start, bucket.end, bar, bucket.percentage, bucket.count
            )?;
        }
        let ideal_pct = 100.0 / report.histogram.len() as f64;
        writeln!(f, "Ideal: ~{:.2}% per range\n", ideal_pct)?;

        let corr = &report.correlation;
        writeln!(f, "[4] CONSECUTIVE DIFFERENCE\n{light}")?;
        match corr.mean_abs_diff {
            Some(diff) => writeln!(f, "Mean |x[i] - x[i+1]|: {:.2}", diff)?,
            None => writeln!(f, "Mean |x[i] - x[i+1]|: n/a (fewer than two samples)")?,
        }
        writeln!(f, "Ideal: ~{:.2}\n", corr.ideal_mean_abs_diff)?;

        let summary = &report.summary;
        writeln!(f, "[5] SUMMARY\n{light}")?;
        writeln!(
            f,
            "Bit balance deviation: {} (closer to 0 is better)",
            summary.bit_balance_deviation
        )?;
        writeln!(
            f,
            "Mean deviation: {:.2} (closer to 0 is better)",
            summary.mean_deviation
        )?;
        writeln!(f, "{heavy}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xorshift_whitening_core::{analyze_distribution, AnalysisConfig, WhitenedRng};

    #[test]
    fn test_bit_string() {
        assert_eq!(bit_string(&[0, 1, 1, 0]), "0110");
        assert_eq!(bit_string(&[]), "");
    }

    #[test]
    fn test_hex() {
        assert_eq!(hex(&[212, 216, 0, 15]), "d4d8000f");
    }

    #[test]
    fn test_text_report_sections() {
        let mut rng = WhitenedRng::new(42);
        let report = analyze_distribution(&mut rng, &AnalysisConfig::default()).unwrap();
        let text = TextReport(&report).to_string();

        assert!(text.contains("Total bits: 8000"));
        assert!(text.contains("[    0-   31]"));
        assert!(text.contains("[  224-  255]"));
        assert!(text.contains("Bit balance deviation: 126"));
    }
}
