//! Lenient parsing for the workout `date` field.
//!
//! Accepted forms, all normalised to UTC:
//! - RFC 3339 with offset: `2024-01-01T18:30:00+02:00`
//! - naive date-time, read as UTC: `2024-01-01T18:30:00`, `2024-01-01 18:30:00.5`
//! - bare date, read as midnight UTC: `2024-01-01`

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, de::Error as _};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

pub fn parse(input: &str) -> Result<DateTime<Utc>, String> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("invalid date `{input}`, expected an ISO-8601 date or date-time"))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(D::Error::custom)
}

/// For optional fields; pair with `#[serde(default)]` so an absent key is `None`
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse(&raw).map_err(D::Error::custom))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_accepted_forms() {
        let midnight = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(parse("2024-01-01").unwrap(), midnight);
        assert_eq!(parse("2024-01-01T00:00:00Z").unwrap(), midnight);
        assert_eq!(parse("2024-01-01T02:00:00+02:00").unwrap(), midnight);
        assert_eq!(parse("2024-01-01T00:00:00").unwrap(), midnight);
        assert_eq!(parse("2024-01-01 00:00:00").unwrap(), midnight);
        assert_eq!(parse("2024-01-01T00:00").unwrap(), midnight);
        assert_eq!(parse(" 2024-01-01 ").unwrap(), midnight);
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let parsed = parse("2024-03-05T06:07:08.250").unwrap();
        assert_eq!(parsed.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse("").is_err());
        assert!(parse("yesterday").is_err());
        assert!(parse("2024-13-01").is_err());
        assert!(parse("01/02/2024").is_err());
    }
}
