//! Typed accessors for header fields.
//!
//! Each accessor accepts metadata in either mode: numeric values are used as
//! they are, string values are parsed.

use chrono::{DateTime, Utc};
use radial_common::{parse_timestamp, Metadata, MetadataValue, RadialError, RadialResult};
use serde::{Deserialize, Serialize};

/// Antenna site position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    /// Latitude (degrees)
    pub lat: f64,
    /// Longitude (degrees)
    pub lon: f64,
}

/// Column names declared by `TableColumnTypes`.
pub fn column_types(metadata: &Metadata) -> RadialResult<Vec<String>> {
    let value = metadata
        .get("TableColumnTypes")
        .ok_or_else(|| RadialError::MissingMetadata("TableColumnTypes".to_string()))?;

    let names: Vec<String> = value
        .to_string()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    if names.is_empty() {
        return Err(RadialError::invalid_metadata(
            "TableColumnTypes",
            "no column names declared",
        ));
    }
    Ok(names)
}

/// Capture time from `TimeStamp`.
pub fn capture_time(metadata: &Metadata) -> RadialResult<DateTime<Utc>> {
    let value = metadata
        .get("TimeStamp")
        .ok_or_else(|| RadialError::MissingMetadata("TimeStamp".to_string()))?;
    parse_timestamp(&value.to_string())
}

/// Antenna site from `Origin` (`"lat lon"`), or `None` when absent.
pub fn origin(metadata: &Metadata) -> RadialResult<Option<Origin>> {
    let Some(value) = metadata.get("Origin") else {
        return Ok(None);
    };

    let text = value.to_string();
    let coords = text
        .split_whitespace()
        .map(|token| token.parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| RadialError::invalid_metadata("Origin", e.to_string()))?;

    match coords[..] {
        [lat, lon] => Ok(Some(Origin { lat, lon })),
        _ => Err(RadialError::invalid_metadata(
            "Origin",
            format!("expected latitude and longitude, found '{}'", text),
        )),
    }
}

/// Angular resolution in degrees from `AngularResolution` (`"5 Deg"`).
pub fn angular_resolution(metadata: &Metadata) -> RadialResult<Option<f64>> {
    leading_number(metadata, "AngularResolution")
}

/// Antenna bearing in degrees from `AntennaBearing` (`"214.0 True"`).
pub fn antenna_bearing(metadata: &Metadata) -> RadialResult<Option<f64>> {
    leading_number(metadata, "AntennaBearing")
}

/// The number at the start of a field that carries a unit suffix.
fn leading_number(metadata: &Metadata, key: &str) -> RadialResult<Option<f64>> {
    match metadata.get(key) {
        None => Ok(None),
        Some(MetadataValue::Int(i)) => Ok(Some(*i as f64)),
        Some(MetadataValue::Float(f)) => Ok(Some(*f)),
        Some(MetadataValue::Str(s)) => {
            let token = s
                .split_whitespace()
                .next()
                .ok_or_else(|| RadialError::invalid_metadata(key, "empty value"))?;
            token
                .parse::<f64>()
                .map(Some)
                .map_err(|_| RadialError::invalid_metadata(key, format!("'{}' is not a number", s)))
        }
    }
}
