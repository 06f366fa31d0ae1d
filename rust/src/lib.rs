//! uniq: short, unique, often sortable string identifiers.
//!
//! Every generator is a stateless function of the OS entropy pool or the
//! system clock and may be called from any thread.
//!
//! | function      | example                                | length |
//! |---------------|----------------------------------------|--------|
//! | [`isosec`]    | `20210304150405`                       | 14     |
//! | [`isosect`]   | `20210304T150405`                      | 15     |
//! | [`isonan`]    | `20210304150405123456789`              | 23     |
//! | [`isodate`]   | `2021-03-04T15:04:05Z`                 | 20     |
//! | [`second`]    | `1614870245`                           | 10     |
//! | [`hex_id`]    | `hex_id(3)` → `9f04c1`                 | 2n     |
//! | [`uuid_v4`]   | `2ca4b2ce-6c13-40d4-bccf-37d222820f6f` | 36     |
//! | [`base32_id`] | `MZXW6YTBOI3FQ2LPNZSXE4DFNBQXI33V`     | 32     |
//!
//! Random generators return an empty string when the entropy source fails.
//! The `try_` variants report the failure instead.
//!
//! # Example
//!
//! ```
//! let id = uniq::base32_id();
//! assert_eq!(id.len(), 32);
//! assert_eq!(uniq::hex_id(4).len(), 8);
//! ```

mod base32;
pub mod cli;
mod entropy;
mod error;
mod hexid;
mod timestamp;
mod uuid;

pub use base32::{BASE32_ID_BYTES, BASE32_ID_LEN, base32_id, try_base32_id, try_base32_id_from};
pub use entropy::{EntropySource, OsEntropy, random_bytes, random_bytes_from};
pub use error::UniqError;
pub use hexid::{hex_id, try_hex_id, try_hex_id_from};
pub use timestamp::{
    Precision, Separators, format_second, format_timestamp, isodate, isonan, isosec, isosect,
    second, timestamp_id,
};
pub use uuid::{UUID_LEN, format_uuid, set_v4_bits, try_uuid_v4, try_uuid_v4_from, uuid_v4};
