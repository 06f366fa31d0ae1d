//! Secure random byte sourcing.
//!
//! Every generator in this crate draws its randomness through an
//! [`EntropySource`]. The default source is the operating system CSPRNG.

use crate::UniqError;

/// A supplier of cryptographically secure random bytes.
pub trait EntropySource {
    /// Fill `buf` completely, or fail without partial output.
    fn fill(&self, buf: &mut [u8]) -> Result<(), UniqError>;
}

/// The operating system's random number generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), UniqError> {
        getrandom::getrandom(buf).map_err(|e| UniqError::EntropyUnavailable {
            requested: buf.len(),
            reason: e.to_string(),
        })
    }
}

/// Read `n` random bytes from the operating system.
pub fn random_bytes(n: usize) -> Result<Vec<u8>, UniqError> {
    random_bytes_from(&OsEntropy, n)
}

/// Read `n` random bytes from `source`.
pub fn random_bytes_from<S: EntropySource + ?Sized>(
    source: &S,
    n: usize,
) -> Result<Vec<u8>, UniqError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(n)
        .map_err(|e| UniqError::EntropyUnavailable {
            requested: n,
            reason: e.to_string(),
        })?;
    buf.resize(n, 0);
    if n > 0 {
        source.fill(&mut buf)?;
    }
    Ok(buf)
}

/// Unwrap a generator result, degrading any failure to an empty string.
///
/// Pipelines detect failure by the empty output line, so the error is only
/// logged, never raised.
pub(crate) fn or_empty(kind: &'static str, res: Result<String, UniqError>) -> String {
    match res {
        Ok(id) => id,
        Err(err) => {
            tracing::warn!(kind, error = %err, "emitting empty identifier");
            String::new()
        }
    }
}
