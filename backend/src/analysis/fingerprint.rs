//! Stream fingerprints
//!
//! A fingerprint is the lowercase hex SHA-256 of the next `byte_count`
//! whitened bytes. Two runs (or two implementations using the same bit
//! conventions) agree on a seed exactly when their fingerprints match.

use sha2::{Digest, Sha256};

use crate::generator::WhitenedRng;

/// Bytes hashed per `update` call
const CHUNK: usize = 4096;

/// Hash the next `byte_count` whitened bytes of `rng`
///
/// # Example
/// ```
/// use xorshift_whitening_core::{stream_fingerprint, WhitenedRng};
///
/// let mut rng = WhitenedRng::new(42);
/// assert_eq!(
///     stream_fingerprint(&mut rng, 32),
///     "02fb43e20f08c4c6eb5621262b795ce52467d6ccc95cd0d10296a56c0bfa9aff"
/// );
/// ```
pub fn stream_fingerprint(rng: &mut WhitenedRng, byte_count: usize) -> String {
    let mut hasher = Sha256::new();
    let mut chunk = [0u8; CHUNK];
    let mut remaining = byte_count;
    while remaining > 0 {
        let len = remaining.min(CHUNK);
        rng.fill_bytes(&mut chunk[..len]);
        hasher.update(&chunk[..len]);
        remaining -= len;
    }
    format!("{:x}", hasher.finalize())
}
