//! Tests for distribution analysis and stream fingerprints

use xorshift_whitening_core::{
    analyze_distribution, stream_fingerprint, AnalysisConfig, DistributionReport, RngError,
    WhitenedRng,
};

fn default_report(seed: u64) -> DistributionReport {
    let mut rng = WhitenedRng::new(seed);
    analyze_distribution(&mut rng, &AnalysisConfig::default()).unwrap()
}

#[test]
fn test_default_report_seed_42() {
    let report = default_report(42);

    assert_eq!(report.bits.total, 8000);
    assert_eq!(report.bits.ones, 4063);
    assert_eq!(report.bits.zeros, 3937);
    assert!((report.bits.one_pct - 50.7875).abs() < 1e-9);
    assert!((report.bits.zero_pct + report.bits.one_pct - 100.0).abs() < 1e-9);

    assert_eq!(report.numbers.count, 1000);
    assert_eq!(report.numbers.min, 0);
    assert_eq!(report.numbers.max, 255);
    assert!((report.numbers.mean - 128.136).abs() < 1e-9);
    assert!((report.numbers.ideal_mean - 127.5).abs() < 1e-12);

    assert_eq!(report.summary.bit_balance_deviation, 126);
    assert!((report.summary.mean_deviation - 0.636).abs() < 1e-9);
}

#[test]
fn test_histogram_accounts_for_every_sample() {
    let report = default_report(12345);

    assert_eq!(report.histogram.len(), 8);
    let total: u64 = report.histogram.iter().map(|b| b.count).sum();
    assert_eq!(total, 1000);

    for (i, bucket) in report.histogram.iter().enumerate() {
        assert_eq!(bucket.start, i as u64 * 32);
        assert_eq!(bucket.end, i as u64 * 32 + 31);
        assert!(
            (bucket.percentage - 12.5).abs() < 5.0,
            "bucket {} at {:.2}%",
            i,
            bucket.percentage
        );
    }
}

#[test]
fn test_consecutive_difference_near_ideal() {
    let report = default_report(42);
    let ideal = report.correlation.ideal_mean_abs_diff;
    assert!((ideal - 85.333).abs() < 0.01);

    let observed = report.correlation.mean_abs_diff.unwrap();
    assert!(
        (observed - ideal).abs() < 8.0,
        "mean consecutive difference {} far from {}",
        observed,
        ideal
    );
}

#[test]
fn test_single_sample_has_no_correlation() {
    let mut rng = WhitenedRng::new(1);
    let config = AnalysisConfig {
        sample_count: 1,
        max_value: 10,
        buckets: 2,
    };
    let report = analyze_distribution(&mut rng, &config).unwrap();
    assert_eq!(report.bits.total, 8);
    assert_eq!(report.correlation.mean_abs_diff, None);
}

#[test]
fn test_small_config_seed_5() {
    let mut rng = WhitenedRng::new(5);
    let config = AnalysisConfig {
        sample_count: 10,
        max_value: 10,
        buckets: 3,
    };
    let report = analyze_distribution(&mut rng, &config).unwrap();

    // Bits: 80 drawn, 44 ones; numbers: 6 7 7 5 1 0 1 2 2 2
    assert_eq!(report.bits.ones, 44);
    assert_eq!(report.numbers.min, 0);
    assert_eq!(report.numbers.max, 7);
    assert!((report.numbers.mean - 3.3).abs() < 1e-9);
    assert_eq!(
        report.histogram.iter().map(|b| b.count).collect::<Vec<_>>(),
        vec![6, 1, 3]
    );
}

#[test]
fn test_report_is_deterministic() {
    assert_eq!(default_report(777), default_report(777));
}

#[test]
fn test_invalid_config_rejected_before_drawing() {
    let mut rng = WhitenedRng::new(42);
    let config = AnalysisConfig {
        sample_count: 0,
        ..Default::default()
    };
    let err = analyze_distribution(&mut rng, &config).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(rng.words_drawn(), 0);
}

#[test]
fn test_oversized_sample_count_rejected_by_name() {
    for sample_count in [usize::MAX, 1usize << 61] {
        let mut rng = WhitenedRng::new(42);
        let config = AnalysisConfig {
            sample_count,
            ..Default::default()
        };
        let err = analyze_distribution(&mut rng, &config).unwrap_err();
        assert!(
            matches!(err, RngError::InvalidArgument { name: "sample_count", .. }),
            "unexpected error: {}",
            err
        );
        assert_eq!(rng.words_drawn(), 0);
    }
}

#[test]
fn test_report_json_round_trip() {
    let report = default_report(42);
    let json = report.to_json_pretty().unwrap();
    assert!(json.contains("\"bit_balance_deviation\": 126"));

    let parsed: DistributionReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.bits, report.bits);
    assert_eq!(parsed.histogram.len(), 8);
}

#[test]
fn test_fingerprint_golden_seed_42() {
    let mut rng = WhitenedRng::new(42);
    assert_eq!(
        stream_fingerprint(&mut rng, 32),
        "02fb43e20f08c4c6eb5621262b795ce52467d6ccc95cd0d10296a56c0bfa9aff"
    );
}

#[test]
fn test_fingerprint_distinguishes_seeds() {
    let mut a = WhitenedRng::new(1);
    let mut b = WhitenedRng::new(2);
    assert_ne!(
        stream_fingerprint(&mut a, 1024),
        stream_fingerprint(&mut b, 1024)
    );
}
