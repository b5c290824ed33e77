// src/core/utils/rng.rs
use crate::models::common::TimestampMs;
use rand::Rng;

const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 5;

/// Timestamp-derived id, e.g. `slide-1717171717171`.
pub fn timestamp_id(prefix: &str, now_ms: TimestampMs) -> String {
    format!("{prefix}-{now_ms}")
}

/// Timestamp id with a random base-36 suffix, e.g.
/// `portfolio-1717171717171-k3x9q`. The suffix keeps ids unique when two
/// items are created within the same millisecond.
pub fn suffixed_id(prefix: &str, now_ms: TimestampMs) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect();
    format!("{prefix}-{now_ms}-{suffix}")
}
