//! Sortable UTC timestamp identifiers.
//!
//! All layouts derive from ISO 8601 and are always rendered in UTC, so
//! lexicographic order matches chronological order on any host.
//!
//! | precision  | separators | example                          |
//! |------------|------------|----------------------------------|
//! | second     | compact    | `20210304150405`                 |
//! | second     | date-time  | `20210304T150405`                |
//! | second     | rfc3339    | `2021-03-04T15:04:05Z`           |
//! | nanosecond | compact    | `20210304150405000000007`        |
//! | nanosecond | date-time  | `20210304T150405000000007`       |
//! | nanosecond | rfc3339    | `2021-03-04T15:04:05.000000007Z` |

use chrono::{DateTime, Utc};

/// Finest unit rendered in a timestamp identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Second,
    Nanosecond,
}

/// Punctuation kept in a timestamp identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separators {
    /// Digits only.
    Compact,
    /// Digits with the `T` between date and time.
    DateTime,
    /// Full RFC 3339 with dashes, colons, `T` and trailing `Z`.
    Rfc3339,
}

impl Separators {
    fn layout(self, precision: Precision) -> &'static str {
        match (precision, self) {
            (Precision::Second, Self::Compact) => "%Y%m%d%H%M%S",
            (Precision::Second, Self::DateTime) => "%Y%m%dT%H%M%S",
            (Precision::Second, Self::Rfc3339) => "%Y-%m-%dT%H:%M:%SZ",
            (Precision::Nanosecond, Self::Compact) => "%Y%m%d%H%M%S%9f",
            (Precision::Nanosecond, Self::DateTime) => "%Y%m%dT%H%M%S%9f",
            (Precision::Nanosecond, Self::Rfc3339) => "%Y-%m-%dT%H:%M:%S%.9fZ",
        }
    }
}

/// Format `at` with the given precision and punctuation.
pub fn format_timestamp(
    at: &DateTime<Utc>,
    precision: Precision,
    separators: Separators,
) -> String {
    at.format(separators.layout(precision)).to_string()
}

/// Format the current UTC instant with the given precision and punctuation.
pub fn timestamp_id(precision: Precision, separators: Separators) -> String {
    format_timestamp(&Utc::now(), precision, separators)
}

/// Current second as `YYYYMMDDHHMMSS`.
pub fn isosec() -> String {
    timestamp_id(Precision::Second, Separators::Compact)
}

/// Current second as `YYYYMMDDTHHMMSS`.
pub fn isosect() -> String {
    timestamp_id(Precision::Second, Separators::DateTime)
}

/// Current nanosecond as `YYYYMMDDHHMMSS` followed by nine fractional digits.
pub fn isonan() -> String {
    timestamp_id(Precision::Nanosecond, Separators::Compact)
}

/// Current second in RFC 3339 form, e.g. `2021-03-04T15:04:05Z`.
pub fn isodate() -> String {
    timestamp_id(Precision::Second, Separators::Rfc3339)
}

/// Seconds since the Unix epoch for `at`, in decimal.
pub fn format_second(at: &DateTime<Utc>) -> String {
    at.timestamp().to_string()
}

/// Current seconds since the Unix epoch, in decimal.
pub fn second() -> String {
    format_second(&Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};
    use once_cell::sync::Lazy;
    use regex::Regex;

    static ISODATE_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}Z$").unwrap());

    fn fixed() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 3, 4, 15, 4, 5)
            .unwrap()
            .with_nanosecond(7)
            .unwrap()
    }

    fn all_digits(s: &str) -> bool {
        s.bytes().all(|b| b.is_ascii_digit())
    }

    #[test]
    fn test_fixed_instant_layouts() {
        let at = fixed();
        let cases = [
            (Precision::Second, Separators::Compact, "20210304150405"),
            (Precision::Second, Separators::DateTime, "20210304T150405"),
            (Precision::Second, Separators::Rfc3339, "2021-03-04T15:04:05Z"),
            (Precision::Nanosecond, Separators::Compact, "20210304150405000000007"),
            (Precision::Nanosecond, Separators::DateTime, "20210304T150405000000007"),
            (
                Precision::Nanosecond,
                Separators::Rfc3339,
                "2021-03-04T15:04:05.000000007Z",
            ),
        ];
        for (precision, separators, want) in cases {
            assert_eq!(format_timestamp(&at, precision, separators), want);
        }
    }

    #[test]
    fn test_fraction_is_zero_padded_on_whole_seconds() {
        let at = Utc.with_ymd_and_hms(2021, 3, 4, 15, 4, 5).unwrap();
        assert_eq!(
            format_timestamp(&at, Precision::Nanosecond, Separators::Compact),
            "20210304150405000000000"
        );
    }

    #[test]
    fn test_isosec() {
        let s = isosec();
        assert_eq!(s.len(), 14);
        assert!(all_digits(&s), "{s}");
    }

    #[test]
    fn test_isosect() {
        let s = isosect();
        assert_eq!(s.len(), 15);
        assert_eq!(&s[8..9], "T");
        assert!(all_digits(&s[..8]) && all_digits(&s[9..]), "{s}");
    }

    #[test]
    fn test_isonan() {
        let s = isonan();
        assert_eq!(s.len(), 23);
        assert!(all_digits(&s), "{s}");
    }

    #[test]
    fn test_isodate() {
        let s = isodate();
        assert_eq!(s.len(), 20);
        assert!(ISODATE_PATTERN.is_match(&s), "{s}");
    }

    #[test]
    fn test_second() {
        let s = second();
        assert_eq!(s.len(), 10);
        assert!(all_digits(&s), "{s}");
        assert_eq!(format_second(&fixed()), "1614870245");
    }

    #[test]
    fn test_compact_order_matches_time_order() {
        let earlier = Utc.with_ymd_and_hms(2021, 12, 31, 23, 59, 59).unwrap();
        let later = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
        let a = format_timestamp(&earlier, Precision::Second, Separators::Compact);
        let b = format_timestamp(&later, Precision::Second, Separators::Compact);
        assert!(a < b);
    }
}
