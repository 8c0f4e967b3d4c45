//! Range parameters derived from numeric metadata and the table.

use radial_common::{Metadata, MetadataValue, RadialError, RadialResult};
use radial_parser::ObservationTable;
use serde::Serialize;
use tracing::debug;

use crate::axis::{is_close, unique_sorted};

/// Range sampling declared in the header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeResolution {
    /// `RangeStart`, when numeric
    pub start: Option<f64>,
    /// `RangeEnd`, when numeric
    pub end: Option<f64>,
    /// Cell size in km, derived from meters when not given directly
    pub km: f64,
    /// `RangeResolutionMeters`, when numeric
    pub meters: Option<f64>,
    /// Decimals range values are compared at
    pub precision: u32,
}

/// Read the range resolution fields.
///
/// At least one of `RangeResolutionKMeters` and `RangeResolutionMeters` must
/// be numeric. The precision is the number of decimals of the km value as
/// written, or of the meter value when km had to be derived.
pub fn range_resolution(metadata: &Metadata) -> RadialResult<RangeResolution> {
    let km_value = metadata
        .get("RangeResolutionKMeters")
        .filter(|v| v.is_numeric());
    let m_value = metadata
        .get("RangeResolutionMeters")
        .filter(|v| v.is_numeric());

    if km_value.is_none() && m_value.is_none() {
        return Err(RadialError::MissingResolution);
    }

    let meters = m_value.and_then(MetadataValue::as_f64);
    let declared_km = km_value
        .cloned()
        .filter(|v| v.as_f64().is_some_and(|km| km != 0.0));
    let derived_km = meters
        .filter(|m| *m != 0.0)
        .map(|m| MetadataValue::Float(m / 1000.0));

    let km_source = declared_km.or(derived_km).ok_or_else(|| {
        RadialError::invalid_metadata("RangeResolutionKMeters", "range resolution is zero")
    })?;
    let km = km_source.as_f64().unwrap_or(f64::NAN);
    if !(km > 0.0 && km.is_finite()) {
        return Err(RadialError::invalid_metadata(
            "RangeResolutionKMeters",
            format!("range resolution must be positive, found {}", km),
        ));
    }

    let resolution = RangeResolution {
        start: metadata.get_f64("RangeStart"),
        end: metadata.get_f64("RangeEnd"),
        km,
        meters,
        precision: decimal_places(&km_source),
    };
    debug!(
        km = resolution.km,
        precision = resolution.precision,
        "Range resolution"
    );
    Ok(resolution)
}

/// Number of characters after the last `.` of a value's shortest rendering.
///
/// A float that renders without a decimal point (`3.0`) counts one decimal;
/// an integer counts all of its digits.
pub fn decimal_places(value: &MetadataValue) -> u32 {
    let text = value.to_string();
    match value {
        MetadataValue::Float(_) if !text.contains('.') => 1,
        _ => text.rsplit('.').next().map_or(0, |s| s.len() as u32),
    }
}

/// Number of range cells along the range axis.
///
/// A non-zero `RangeCells` field is used when present, after checking that
/// every row agrees on RNGE/SPRC (the cell size). Otherwise the count is
/// `ceil(max_range / km)`.
pub fn range_cells(
    metadata: &Metadata,
    table: &ObservationTable,
    max_range_km: f64,
    range_resolution_km: f64,
) -> RadialResult<usize> {
    let declared = metadata
        .get_f64("RangeCells")
        .filter(|n| *n != 0.0 && n.is_finite());

    if let Some(cells) = declared {
        check_cell_size(table)?;
        debug!(range_cells = cells, "Range cells from metadata");
        return Ok(cells.max(0.0) as usize);
    }

    let cells = (max_range_km / range_resolution_km).ceil().max(0.0) as usize;
    debug!(range_cells = cells, max_range_km, "Range cells from max range");
    Ok(cells)
}

/// RNGE/SPRC must be one value across the table (within rtol 1e-5, atol 1e-8).
fn check_cell_size(table: &ObservationTable) -> RadialResult<()> {
    let (Some(ranges), Some(cells)) = (table.column("RNGE"), table.column("SPRC")) else {
        return Ok(());
    };

    let ratios: Vec<f64> = ranges
        .iter()
        .zip(cells)
        .map(|(r, c)| r / c)
        .filter(|ratio| ratio.is_finite())
        .collect();
    let ratios = unique_sorted(&ratios);

    if let Some((&first, rest)) = ratios.split_first() {
        if let Some(bad) = rest.iter().find(|r| !is_close(**r, first, 1e-5, 1e-8)) {
            return Err(RadialError::InconsistentRangeCells(format!(
                "RNGE/SPRC is {} on some rows and {} on others",
                first, bad
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use radial_parser::Column;

    fn table(ranges: Vec<f64>, cells: Vec<f64>) -> ObservationTable {
        let time = Utc.with_ymd_and_hms(2018, 2, 14, 0, 0, 0).unwrap();
        ObservationTable::new(
            time,
            vec![Column::new("RNGE", ranges), Column::new("SPRC", cells)],
        )
        .unwrap()
    }

    #[test]
    fn test_range_resolution_km() {
        let mut m = Metadata::new();
        m.insert("RangeStart", 2i64);
        m.insert("RangeEnd", 35i64);
        m.insert("RangeResolutionKMeters", 5.8249);
        let r = range_resolution(&m).unwrap();
        assert_eq!(r.km, 5.8249);
        assert_eq!(r.precision, 4);
        assert_eq!((r.start, r.end, r.meters), (Some(2.0), Some(35.0), None));
    }

    #[test]
    fn test_range_resolution_from_meters() {
        let mut m = Metadata::new();
        m.insert("RangeResolutionMeters", 1500i64);
        let r = range_resolution(&m).unwrap();
        assert_eq!(r.km, 1.5);
        assert_eq!(r.precision, 1);
        assert_eq!(r.meters, Some(1500.0));
    }

    #[test]
    fn test_range_resolution_missing() {
        let mut m = Metadata::new();
        m.insert("RangeResolutionKMeters", "5.8 km");
        assert!(matches!(
            range_resolution(&m),
            Err(RadialError::MissingResolution)
        ));
    }

    #[test]
    fn test_decimal_places() {
        assert_eq!(decimal_places(&MetadataValue::Float(5.8249)), 4);
        assert_eq!(decimal_places(&MetadataValue::Float(3.0)), 1);
        assert_eq!(decimal_places(&MetadataValue::Float(0.15)), 2);
        assert_eq!(decimal_places(&MetadataValue::Int(150)), 3);
    }

    #[test]
    fn test_range_cells_declared() {
        let mut m = Metadata::new();
        m.insert("RangeCells", 49i64);
        let t = table(vec![11.6498, 17.4747, 40.7743], vec![2.0, 3.0, 7.0]);
        assert_eq!(range_cells(&m, &t, 443.164, 5.8249).unwrap(), 49);
    }

    #[test]
    fn test_range_cells_inconsistent() {
        let mut m = Metadata::new();
        m.insert("RangeCells", 49i64);
        let t = table(vec![11.6498, 18.0], vec![2.0, 3.0]);
        let err = range_cells(&m, &t, 443.164, 5.8249).unwrap_err();
        assert_eq!(err.code(), "GridSpacingViolation");
    }

    #[test]
    fn test_range_cells_computed() {
        let t = table(vec![3.0], vec![1.0]);
        let cells = range_cells(&Metadata::new(), &t, 2000.0 / 8.348, 3.0).unwrap();
        assert_eq!(cells, 80);

        let mut zero = Metadata::new();
        zero.insert("RangeCells", 0i64);
        assert_eq!(range_cells(&zero, &t, 250.0, 5.0).unwrap(), 50);
    }
}
