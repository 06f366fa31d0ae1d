//! RFC 4122 version 4 UUIDs.
//!
//! Format: `xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx` where `y` is one of `8 9 a b`.

use crate::UniqError;
use crate::entropy::{EntropySource, OsEntropy, or_empty};

/// Length of the canonical hyphenated form.
pub const UUID_LEN: usize = 36;

/// Byte offsets at which the canonical form starts a new group.
const GROUP_BREAKS: [usize; 4] = [4, 6, 8, 10];

/// Generate a random UUID v4 in canonical lowercase form.
///
/// Returns an empty string if the random bytes cannot be read, never a
/// malformed UUID.
///
/// ```
/// let id = uniq::uuid_v4();
/// assert_eq!(id.len(), 36);
/// assert_eq!(&id[14..15], "4");
/// ```
pub fn uuid_v4() -> String {
    or_empty("uuid", try_uuid_v4())
}

/// Like [`uuid_v4`] but reports entropy failure.
pub fn try_uuid_v4() -> Result<String, UniqError> {
    try_uuid_v4_from(&OsEntropy)
}

/// Generate a UUID v4 from `source`.
pub fn try_uuid_v4_from<S: EntropySource + ?Sized>(source: &S) -> Result<String, UniqError> {
    let mut bytes = [0u8; 16];
    source.fill(&mut bytes)?;
    set_v4_bits(&mut bytes);
    Ok(format_uuid(&bytes))
}

/// Force the version nibble to `0100` and the variant bits to `10`.
pub fn set_v4_bits(bytes: &mut [u8; 16]) {
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
}

/// Render 16 bytes as the 8-4-4-4-12 hyphenated lowercase hex form.
pub fn format_uuid(bytes: &[u8; 16]) -> String {
    let mut out = String::with_capacity(UUID_LEN);
    let mut start = 0;
    for end in GROUP_BREAKS {
        out.push_str(&hex::encode(&bytes[start..end]));
        out.push('-');
        start = end;
    }
    out.push_str(&hex::encode(&bytes[start..]));
    out
}
