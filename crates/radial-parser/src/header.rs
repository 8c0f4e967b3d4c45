//! Header extraction.
//!
//! The header is the run of lines starting with `%` at the top of the file.
//! Lines that still start with `%` after the first one is dropped (`%%`
//! column legends) carry no field.

use std::path::Path;

use radial_common::{Metadata, MetadataValue, RadialResult};
use tracing::debug;

/// Marker line that ends the header proper.
const TABLE_START: &str = "TableStart:";

/// How header values are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetadataMode {
    /// Every value is kept as a string.
    #[default]
    Raw,
    /// Values are coerced to integers or floats where they parse; anything
    /// else is kept as a string.
    Numeric,
}

impl MetadataMode {
    pub fn from_numeric_flag(numeric: bool) -> Self {
        if numeric {
            Self::Numeric
        } else {
            Self::Raw
        }
    }
}

/// Extract the header of a radial file into a [`Metadata`] mapping.
///
/// In numeric mode only the fields up to and including `TableStart:` are
/// collected; in raw mode every field of the leading comment block is.
pub fn extract_metadata(content: &str, mode: MetadataMode) -> Metadata {
    let comments: Vec<&str> = content
        .lines()
        .take_while(|line| line.starts_with('%'))
        .map(|line| line[1..].trim())
        .collect();

    let fields = match mode {
        MetadataMode::Raw => &comments[..],
        MetadataMode::Numeric => match comments.iter().position(|c| *c == TABLE_START) {
            Some(end) => &comments[..=end],
            None => &comments[..],
        },
    };

    let mut metadata = Metadata::new();
    for comment in fields.iter().filter(|c| !c.starts_with('%')) {
        let Some((key, value)) = comment.split_once(':') else {
            debug!(line = %comment, "Header line without a field separator");
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        let value = match mode {
            MetadataMode::Raw => MetadataValue::Str(value.to_string()),
            MetadataMode::Numeric => MetadataValue::coerce(value),
        };
        metadata.insert(key, value);
    }

    debug!(fields = metadata.len(), ?mode, "Extracted header metadata");
    metadata
}

/// Read a file and extract its header.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn extract_metadata_from_path(path: impl AsRef<Path>, mode: MetadataMode) -> RadialResult<Metadata> {
    let bytes = std::fs::read(path)?;
    Ok(extract_metadata(&String::from_utf8_lossy(&bytes), mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "%CTF: 1.00\n%Site: AMAG \"\"\n%RangeCells: 49\n%MergeMethod: 1 MedianVectors\n%TableStart:\n%%   Longitude   Latitude\n -72.1 40.9\n%TableEnd:\n";

    #[test]
    fn test_raw_mode_keeps_strings() {
        let metadata = extract_metadata(HEADER, MetadataMode::Raw);
        assert_eq!(metadata.get_str("CTF"), Some("1.00"));
        assert_eq!(metadata.get_str("RangeCells"), Some("49"));
        assert_eq!(metadata.get_str("TableStart"), Some(""));
        assert!(!metadata.contains_key("TableEnd"));
    }

    #[test]
    fn test_numeric_mode_coerces() {
        let metadata = extract_metadata(HEADER, MetadataMode::Numeric);
        assert_eq!(metadata.get("CTF"), Some(&MetadataValue::Float(1.0)));
        assert_eq!(metadata.get("RangeCells"), Some(&MetadataValue::Int(49)));
        assert_eq!(metadata.get_str("MergeMethod"), Some("1 MedianVectors"));
        assert!(metadata.get_f64("TableStart").unwrap().is_nan());
    }

    #[test]
    fn test_legend_lines_are_skipped() {
        let metadata = extract_metadata(HEADER, MetadataMode::Raw);
        assert_eq!(metadata.len(), 5);
    }

    #[test]
    fn test_numeric_mode_stops_at_table_start() {
        let content = "%A: 1\n%TableStart:\n%B: 2\n";
        let numeric = extract_metadata(content, MetadataMode::Numeric);
        let raw = extract_metadata(content, MetadataMode::Raw);
        assert!(!numeric.contains_key("B"));
        assert_eq!(raw.get_str("B"), Some("2"));
    }

    #[test]
    fn test_value_keeps_later_colons() {
        let metadata = extract_metadata("%ProcessedTime: 01:02:30\n", MetadataMode::Raw);
        assert_eq!(metadata.get_str("ProcessedTime"), Some("01:02:30"));
    }

    #[test]
    fn test_line_without_colon_is_skipped() {
        let metadata = extract_metadata("%just a comment\n%A: 1\n", MetadataMode::Raw);
        assert_eq!(metadata.keys().collect::<Vec<_>>(), vec!["A"]);
    }
}
