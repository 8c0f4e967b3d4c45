//! Tests for header metadata containers.

use radial_common::{Metadata, MetadataValue};

// ============================================================================
// Numeric view
// ============================================================================

#[test]
fn test_to_numeric_coerces_strings_only() {
    let raw: Metadata = [
        ("RangeEnd", "35"),
        ("RangeResolutionKMeters", "5.8249"),
        ("MergeMethod", "1 MedianVectors"),
        ("TableStart", ""),
    ]
    .into_iter()
    .collect();

    let numeric = raw.to_numeric();

    assert_eq!(numeric.get("RangeEnd"), Some(&MetadataValue::Int(35)));
    assert_eq!(numeric.get_f64("RangeResolutionKMeters"), Some(5.8249));
    assert_eq!(numeric.get_str("MergeMethod"), Some("1 MedianVectors"));
    assert!(numeric.get_f64("TableStart").unwrap().is_nan());
    assert_eq!(numeric.len(), raw.len());
}

#[test]
fn test_get_f64_ignores_strings() {
    let raw: Metadata = [("TransmitCenterFreqMHz", "4.513")].into_iter().collect();
    assert_eq!(raw.get_f64("TransmitCenterFreqMHz"), None);
    assert_eq!(raw.to_numeric().get_f64("TransmitCenterFreqMHz"), Some(4.513));
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_serialize_keeps_header_order() {
    let mut metadata = Metadata::new();
    metadata.insert("Site", "AMAG \"\"");
    metadata.insert("RangeCells", 49i64);
    metadata.insert("CTF", 1.0);

    let json = serde_json::to_string(&metadata).unwrap();
    assert_eq!(json, r#"{"Site":"AMAG \"\"","RangeCells":49,"CTF":1.0}"#);
}

#[test]
fn test_to_json_maps_nan_to_null() {
    let mut metadata = Metadata::new();
    metadata.insert("TableStart", f64::NAN);
    metadata.insert("TableRows", 672i64);

    let json = metadata.to_json();
    assert!(json["TableStart"].is_null());
    assert_eq!(json["TableRows"], 672);
}
