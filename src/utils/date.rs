//! Publication timestamps.
//!
//! `PubDatetime` is an absolute UTC instant with millisecond precision,
//! parsed from frontmatter and formatted for feeds.
//!
//! # Accepted input
//!
//! - `YYYY-MM-DD` (midnight UTC)
//! - RFC 3339 with `Z` or a numeric offset, optional fractional seconds
//! - `YYYY-MM-DDTHH:MM:SS[.fff]` or `YYYY-MM-DD HH:MM:SS` (read as UTC)
//!
//! # Examples
//!
//! ```ignore
//! let dt = PubDatetime::parse("2024-06-15T14:30:45Z").unwrap();
//! assert_eq!(dt.to_rfc2822(), "Sat, 15 Jun 2024 14:30:45 GMT");
//! ```

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;

/// UTC publication instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PubDatetime(DateTime<Utc>);

impl PubDatetime {
    /// Build from milliseconds since the Unix epoch.
    #[cfg(test)]
    pub fn from_millis(millis: i64) -> Option<Self> {
        use chrono::TimeZone;
        Utc.timestamp_millis_opt(millis).single().map(Self)
    }

    #[cfg(test)]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| Self(naive.and_utc()))
    }

    /// Parse any of the accepted textual forms.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Self(dt.with_timezone(&Utc)));
        }

        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(Self(naive.and_utc()));
            }
        }

        // Date only: exactly "YYYY-MM-DD"
        if s.len() == 10 {
            let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
            return Some(Self(date.and_hms_opt(0, 0, 0)?.and_utc()));
        }

        None
    }

    /// Milliseconds since the Unix epoch.
    pub fn timestamp_millis(self) -> i64 {
        self.0.timestamp_millis()
    }

    /// `floor(millis / 1000)`, rounding toward negative infinity.
    pub fn whole_seconds(self) -> i64 {
        self.timestamp_millis().div_euclid(1000)
    }

    /// Fixed-offset form used by Atom.
    pub fn to_fixed_offset(self) -> DateTime<FixedOffset> {
        self.0.fixed_offset()
    }

    /// Format as RFC 3339 with `Z` suffix; fractional seconds only when present.
    pub fn to_rfc3339(self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }

    /// Format as RFC 2822 for RSS: `Sat, 15 Jun 2024 14:30:45 GMT`.
    pub fn to_rfc2822(self) -> String {
        self.0.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
    }
}

impl fmt::Display for PubDatetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl Serialize for PubDatetime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for PubDatetime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).ok_or_else(|| {
            de::Error::custom(format!(
                "invalid datetime `{raw}`, expected YYYY-MM-DD or RFC 3339"
            ))
        })
    }
}
