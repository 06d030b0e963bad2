//! Tests for the Von Neumann whitening layer

use std::collections::VecDeque;

use xorshift_whitening_core::rng::{whiten_pair, whiten_word, BitBuffer};
use xorshift_whitening_core::{WhitenedRng, Xorshift64Star};

/// Reference whitening of a word, written bit by bit
fn reference_whiten(word: u64) -> Vec<u8> {
    let mut out = Vec::new();
    for i in (0..64).step_by(2) {
        let a = (word >> i) & 1;
        let b = (word >> (i + 1)) & 1;
        if a != b {
            out.push(a as u8);
        }
    }
    out
}

#[test]
fn test_pair_rule() {
    assert_eq!(whiten_pair(0, 1), Some(0));
    assert_eq!(whiten_pair(1, 0), Some(1));
    assert_eq!(whiten_pair(0, 0), None);
    assert_eq!(whiten_pair(1, 1), None);
}

#[test]
fn test_whiten_word_matches_reference_on_raw_words() {
    let mut core = Xorshift64Star::new(31337);
    for _ in 0..500 {
        let word = core.next_raw();
        let mut out = VecDeque::new();
        let appended = whiten_word(word, &mut out);
        assert_eq!(appended, out.len());
        assert_eq!(out.into_iter().collect::<Vec<_>>(), reference_whiten(word));
    }
}

#[test]
fn test_whiten_word_appends_after_existing_bits() {
    let mut out = VecDeque::from(vec![1, 1]);
    whiten_word(0xAAAA_AAAA_AAAA_AAAA, &mut out);
    assert_eq!(out.len(), 34);
    assert_eq!(out[0], 1);
    assert_eq!(out[1], 1);
    assert_eq!(out[2], 0);
}

#[test]
fn test_buffer_is_fifo_over_fill() {
    let mut core = Xorshift64Star::new(42);
    let mut buffer = BitBuffer::new();
    assert!(buffer.is_empty());
    assert_eq!(buffer.pop(), None);

    buffer.fill(&mut core);

    let mut reference_core = Xorshift64Star::new(42);
    let expected = reference_whiten(reference_core.next_raw());

    let drained: Vec<u8> = std::iter::from_fn(|| buffer.pop()).collect();
    assert_eq!(drained, expected);
}

#[test]
fn test_generator_stream_is_concatenated_word_whitening() {
    let mut reference_core = Xorshift64Star::new(555);
    let mut expected = Vec::new();
    while expected.len() < 1000 {
        expected.extend(reference_whiten(reference_core.next_raw()));
    }
    expected.truncate(1000);

    let mut rng = WhitenedRng::new(555);
    assert_eq!(rng.get_random_bits(1000).unwrap(), expected);
}

#[test]
fn test_first_fill_seed_42() {
    let mut rng = WhitenedRng::new(42);
    assert_eq!(rng.generate_raw_bit(), 0);
    assert_eq!(rng.words_drawn(), 1);
    assert_eq!(rng.buffered_bits(), 18);
}

#[test]
fn test_refill_only_when_empty() {
    let mut rng = WhitenedRng::new(42);
    rng.generate_raw_bit();
    let buffered = rng.buffered_bits();

    for _ in 0..buffered {
        rng.generate_raw_bit();
        assert_eq!(rng.words_drawn(), 1);
    }
    assert_eq!(rng.buffered_bits(), 0);

    rng.generate_raw_bit();
    assert!(rng.words_drawn() >= 2);
}

#[test]
fn test_whitening_corrects_static_bias() {
    // OR of two raw words: independent bits with P(1) = 0.75
    let mut core = Xorshift64Star::new(7);
    let mut raw_ones = 0u64;
    let mut ones = 0u64;
    let mut total = 0u64;

    for _ in 0..20_000 {
        let biased = core.next_raw() | core.next_raw();
        raw_ones += u64::from(biased.count_ones());

        let mut out = VecDeque::new();
        whiten_word(biased, &mut out);
        ones += out.iter().filter(|&&bit| bit == 1).count() as u64;
        total += out.len() as u64;
    }

    let raw_fraction = raw_ones as f64 / (20_000.0 * 64.0);
    assert!((raw_fraction - 0.75).abs() < 0.01);

    let fraction = ones as f64 / total as f64;
    assert!(
        (fraction - 0.5).abs() < 0.01,
        "whitened fraction of ones {} not near 0.5",
        fraction
    );
}
