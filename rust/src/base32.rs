//! Uppercase, unpadded Base32 identifiers.
//!
//! Twenty random bytes (160 bits) encode to exactly 32 characters of the
//! RFC 4648 alphabet `A-Z2-7` with no `=` padding.

use data_encoding::BASE32_NOPAD;

use crate::UniqError;
use crate::entropy::{EntropySource, OsEntropy, or_empty};

/// Number of random bytes behind every Base32 identifier.
pub const BASE32_ID_BYTES: usize = 20;
/// Length of an encoded Base32 identifier.
pub const BASE32_ID_LEN: usize = 32;

/// Generate a 32 character Base32 identifier.
///
/// Returns an empty string if the random bytes cannot be read.
pub fn base32_id() -> String {
    or_empty("base32", try_base32_id())
}

/// Like [`base32_id`] but reports entropy failure.
pub fn try_base32_id() -> Result<String, UniqError> {
    try_base32_id_from(&OsEntropy)
}

/// Generate a Base32 identifier from `source`.
pub fn try_base32_id_from<S: EntropySource + ?Sized>(source: &S) -> Result<String, UniqError> {
    let mut bytes = [0u8; BASE32_ID_BYTES];
    source.fill(&mut bytes)?;
    Ok(BASE32_NOPAD.encode(&bytes).to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::testing::{Constant, Counter, Unavailable};
    use std::collections::HashSet;

    #[test]
    fn test_base32_shape() {
        for _ in 0..1000 {
            let id = base32_id();
            assert_eq!(id.len(), BASE32_ID_LEN);
            assert!(
                id.bytes().all(|b| matches!(b, b'A'..=b'Z' | b'2'..=b'7')),
                "{id}"
            );
            assert!(!id.contains('='));
        }
    }

    #[test]
    fn test_base32_no_collisions() {
        let ids: HashSet<String> = (0..10_000).map(|_| base32_id()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_base32_from_many_threads() {
        let ids: Vec<String> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| (0..2_000).map(|_| base32_id()).collect::<Vec<_>>()))
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });
        assert_eq!(ids.len(), 16_000);
        assert!(ids.iter().all(|id| {
            id.len() == BASE32_ID_LEN && id.bytes().all(|b| matches!(b, b'A'..=b'Z' | b'2'..=b'7'))
        }));
        let unique: HashSet<&String> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_base32_known_bytes() {
        assert_eq!(try_base32_id_from(&Constant(0)).unwrap(), "A".repeat(32));
        assert_eq!(try_base32_id_from(&Constant(0xff)).unwrap(), "7".repeat(32));
        // 00 01 02 03 04 | 05 06 07 08 09 | ...
        let id = try_base32_id_from(&Counter::default()).unwrap();
        assert!(id.starts_with("AAAQEAYE"), "{id}");
    }

    #[test]
    fn test_base32_entropy_failure() {
        assert!(matches!(
            try_base32_id_from(&Unavailable),
            Err(UniqError::EntropyUnavailable { requested: 20, .. })
        ));
    }
}
