//! Choice between lat/lon and range/bearing indexing.

use radial_parser::ObservationTable;
use serde::{Deserialize, Serialize};

/// Coordinate system a radial table is re-indexed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateSystem {
    /// Dimensions (time, i, j): longitude slot, latitude slot
    LatLon,
    /// Dimensions (time, BEAR, RNGE)
    RangeBearing,
}

impl CoordinateSystem {
    /// Names of the two grid dimensions, in index order.
    pub fn dimensions(&self) -> (&'static str, &'static str) {
        match self {
            CoordinateSystem::LatLon => ("i", "j"),
            CoordinateSystem::RangeBearing => ("BEAR", "RNGE"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CoordinateSystem::LatLon => "lat_lon",
            CoordinateSystem::RangeBearing => "range_bearing",
        }
    }
}

impl std::fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Distinct values per coordinate column, an undefined cell counting as one
/// value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AxisCounts {
    pub lon: usize,
    pub lat: usize,
    pub bearing: usize,
    pub range: usize,
}

impl AxisCounts {
    pub fn from_table(table: &ObservationTable) -> Self {
        Self {
            lon: table.unique_count("LOND"),
            lat: table.unique_count("LATD"),
            bearing: table.unique_count("BEAR"),
            range: table.unique_count("RNGE"),
        }
    }

    pub fn lat_lon_cells(&self) -> usize {
        self.lon * self.lat
    }

    pub fn range_bearing_cells(&self) -> usize {
        self.bearing * self.range
    }
}

/// Lat/lon when it needs strictly fewer cells than range/bearing.
pub fn select(counts: AxisCounts) -> CoordinateSystem {
    if counts.lat_lon_cells() < counts.range_bearing_cells() {
        CoordinateSystem::LatLon
    } else {
        CoordinateSystem::RangeBearing
    }
}

/// The coordinate system that best describes a table's sampling.
pub fn detect(table: &ObservationTable) -> CoordinateSystem {
    select(AxisCounts::from_table(table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use radial_parser::Column;

    fn counts(lon: usize, lat: usize, bearing: usize, range: usize) -> AxisCounts {
        AxisCounts {
            lon,
            lat,
            bearing,
            range,
        }
    }

    #[test]
    fn test_select() {
        assert_eq!(select(counts(25, 20, 500, 480)), CoordinateSystem::LatLon);
        assert_eq!(select(counts(589, 589, 31, 19)), CoordinateSystem::RangeBearing);
        // ties go to range/bearing
        assert_eq!(select(counts(2, 3, 3, 2)), CoordinateSystem::RangeBearing);
    }

    #[test]
    fn test_missing_columns_count_zero() {
        let time = Utc.with_ymd_and_hms(2018, 2, 14, 0, 0, 0).unwrap();
        let table = ObservationTable::new(
            time,
            vec![
                Column::new("LOND", vec![-79.5, -79.47]),
                Column::new("LATD", vec![32.5, 32.5]),
            ],
        )
        .unwrap();
        let c = AxisCounts::from_table(&table);
        assert_eq!((c.lat_lon_cells(), c.range_bearing_cells()), (2, 0));
        assert_eq!(detect(&table), CoordinateSystem::RangeBearing);
    }

    #[test]
    fn test_undefined_cells_count_as_a_value() {
        let time = Utc.with_ymd_and_hms(2018, 2, 14, 0, 0, 0).unwrap();
        let table = ObservationTable::new(
            time,
            vec![
                Column::new("LOND", vec![-79.5, -79.47, f64::NAN]),
                Column::new("LATD", vec![32.5, 32.53, f64::NAN]),
                Column::new("BEAR", vec![5.0, 10.0, 15.0]),
                Column::new("RNGE", vec![3.0, 6.0, 6.0]),
            ],
        )
        .unwrap();
        let c = AxisCounts::from_table(&table);
        assert_eq!((c.lon, c.lat, c.bearing, c.range), (3, 3, 3, 2));
        // 9 lat/lon cells against 6 range/bearing cells
        assert_eq!(detect(&table), CoordinateSystem::RangeBearing);
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(CoordinateSystem::LatLon.dimensions(), ("i", "j"));
        assert_eq!(CoordinateSystem::RangeBearing.to_string(), "range_bearing");
    }
}
