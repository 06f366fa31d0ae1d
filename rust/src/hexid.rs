//! Random hexadecimal identifiers.

use crate::UniqError;
use crate::entropy::{EntropySource, OsEntropy, or_empty, random_bytes_from};

/// Encode `n` random bytes as `2n` lowercase hex characters.
///
/// Returns an empty string if the random bytes cannot be read or `2n`
/// characters cannot be allocated.
pub fn hex_id(n: usize) -> String {
    or_empty("hex", try_hex_id(n))
}

/// Like [`hex_id`] but reports entropy failure.
pub fn try_hex_id(n: usize) -> Result<String, UniqError> {
    try_hex_id_from(&OsEntropy, n)
}

/// Encode `n` bytes from `source` as lowercase hex.
pub fn try_hex_id_from<S: EntropySource + ?Sized>(
    source: &S,
    n: usize,
) -> Result<String, UniqError> {
    let len = n
        .checked_mul(2)
        .ok_or_else(|| UniqError::InvalidArgument(format!("hex length {n} is too large")))?;
    let mut out = Vec::new();
    out.try_reserve_exact(len)
        .map_err(|_| UniqError::InvalidArgument(format!("hex length {n} is too large")))?;
    out.resize(len, 0);

    let bytes = random_bytes_from(source, n)?;
    hex::encode_to_slice(&bytes, &mut out)
        .map_err(|e| UniqError::InvalidArgument(e.to_string()))?;
    String::from_utf8(out).map_err(|e| UniqError::InvalidArgument(e.to_string()))
}
