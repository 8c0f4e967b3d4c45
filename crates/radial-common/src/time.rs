//! Capture-time parsing for radial headers.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::error::{RadialError, RadialResult};

/// Parse a header timestamp of the form `YYYY MM DD hh mm ss`.
///
/// Fields are whitespace separated and may be padded with extra spaces
/// (`2018 02 14  00 00 00`). Time-of-day fields that are left off default
/// to zero. The result is interpreted as UTC.
pub fn parse_timestamp(value: &str) -> RadialResult<DateTime<Utc>> {
    let invalid = |message: String| RadialError::invalid_metadata("TimeStamp", message);

    let fields = value
        .split_whitespace()
        .map(|token| {
            token
                .parse::<u32>()
                .map_err(|_| invalid(format!("'{}' is not an integer", token)))
        })
        .collect::<RadialResult<Vec<u32>>>()?;

    if !(3..=6).contains(&fields.len()) {
        return Err(invalid(format!(
            "expected 3 to 6 fields, found {} in '{}'",
            fields.len(),
            value
        )));
    }

    let field = |i: usize| fields.get(i).copied().unwrap_or(0);
    let naive = NaiveDate::from_ymd_opt(field(0) as i32, field(1), field(2))
        .and_then(|date| date.and_hms_opt(field(3), field(4), field(5)))
        .ok_or_else(|| invalid(format!("'{}' is not a valid date and time", value)))?;

    Ok(Utc.from_utc_datetime(&naive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_codar_timestamp() {
        let dt = parse_timestamp("2018 02 14  00 00 00").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2018, 2, 14));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (0, 0, 0));
    }

    #[test]
    fn test_parse_date_only() {
        let dt = parse_timestamp("2018 02 14").unwrap();
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn test_parse_rejects_bad_values() {
        assert!(parse_timestamp("2018 13 14 00 00 00").is_err());
        assert!(parse_timestamp("2018 02").is_err());
        assert!(parse_timestamp("2018 Feb 14 00 00 00").is_err());
    }
}
