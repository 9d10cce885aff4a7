//! Placeholder file metadata.
//!
//! Checksums here are display tokens seeded from the name, size and registration
//! time. They do not describe any content and must not be used to verify data.
//! Chunk counts are likewise arithmetic on the declared size.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Length, in hex characters, of a placeholder checksum.
pub const CHECKSUM_LEN: usize = 10;

/// `max(1, floor(size / chunk_size))`.
/// Sizes too large for a `u64` count saturate at `u64::MAX`.
pub fn chunk_count(size: f64, chunk_size: f64) -> u64 {
    ((size / chunk_size).floor() as u64).max(1)
}

pub fn placeholder_checksum(name: &str, size: f64, at: DateTime<Utc>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hasher.update(size.to_string().as_bytes());
    hasher.update(at.timestamp_nanos_opt().unwrap_or_default().to_le_bytes());

    let mut digest = hex::encode(hasher.finalize());
    digest.truncate(CHECKSUM_LEN);
    digest
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_chunk_count() {
        assert_eq!(chunk_count(128.0, 64.0), 2);
        assert_eq!(chunk_count(127.9, 64.0), 1);
        assert_eq!(chunk_count(200.0, 64.0), 3);
        // Never below one chunk
        assert_eq!(chunk_count(0.5, 64.0), 1);
        assert_eq!(chunk_count(63.99, 64.0), 1);
    }

    #[test]
    fn test_checksum_shape() {
        let checksum = placeholder_checksum("a.txt", 128.0, Utc::now());

        assert_eq!(checksum.len(), CHECKSUM_LEN);
        assert!(checksum.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_checksum_depends_on_time() {
        let t1 = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let t2 = Utc.timestamp_opt(1_700_000_001, 0).unwrap();

        assert_eq!(
            placeholder_checksum("a.txt", 1.0, t1),
            placeholder_checksum("a.txt", 1.0, t1)
        );
        assert_ne!(
            placeholder_checksum("a.txt", 1.0, t1),
            placeholder_checksum("a.txt", 1.0, t2)
        );
    }
}
