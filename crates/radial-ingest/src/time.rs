//! CF-style time encoding (`"<unit> since <reference>"`).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{IngestError, Result};

/// Parsed CF time units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeUnits {
    /// Length of one unit in seconds
    pub seconds_per_unit: i64,
    /// Reference instant
    pub epoch: DateTime<Utc>,
}

impl TimeUnits {
    /// Parse units such as `"seconds since 1970-01-01 00:00:00"`.
    pub fn parse(units: &str) -> Result<Self> {
        let invalid = |message: &str| IngestError::TimeUnits {
            units: units.to_string(),
            message: message.to_string(),
        };

        let (unit, reference) = units
            .split_once(" since ")
            .ok_or_else(|| invalid("expected '<unit> since <reference>'"))?;

        let seconds_per_unit = match unit.trim().to_lowercase().as_str() {
            "seconds" | "second" | "secs" | "sec" | "s" => 1,
            "minutes" | "minute" | "mins" | "min" => 60,
            "hours" | "hour" | "hrs" | "hr" | "h" => 3600,
            "days" | "day" | "d" => 86_400,
            _ => return Err(invalid("unit must be seconds, minutes, hours or days")),
        };

        let reference = reference.trim().trim_end_matches('Z').trim_end_matches(" UTC");
        let epoch = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"]
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(reference, format).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(reference, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
            .ok_or_else(|| invalid("unparsable reference date"))?
            .and_utc();

        Ok(Self {
            seconds_per_unit,
            epoch,
        })
    }

    /// Offset of `time` from the reference, in units.
    pub fn encode(&self, time: DateTime<Utc>) -> f64 {
        let seconds = (time - self.epoch).num_seconds();
        seconds as f64 / self.seconds_per_unit as f64
    }
}

/// Encode a time with CF units.
pub fn encode_time(time: DateTime<Utc>, units: &str) -> Result<f64> {
    Ok(TimeUnits::parse(units)?.encode(time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_seconds_since_epoch() {
        let t = Utc.with_ymd_and_hms(2018, 2, 14, 0, 0, 0).unwrap();
        let encoded = encode_time(t, "seconds since 1970-01-01 00:00:00").unwrap();
        assert_eq!(encoded, 1_518_566_400.0);
    }

    #[test]
    fn test_other_units() {
        let t = Utc.with_ymd_and_hms(2018, 2, 14, 12, 0, 0).unwrap();
        assert_eq!(encode_time(t, "days since 2018-02-13").unwrap(), 1.5);
        assert_eq!(encode_time(t, "hours since 2018-02-14T00:00:00Z").unwrap(), 12.0);
    }

    #[test]
    fn test_invalid_units() {
        let t = Utc.with_ymd_and_hms(2018, 2, 14, 0, 0, 0).unwrap();
        assert!(encode_time(t, "seconds").is_err());
        assert!(encode_time(t, "fortnights since 1970-01-01").is_err());
        assert!(encode_time(t, "seconds since yesterday").is_err());
    }
}
