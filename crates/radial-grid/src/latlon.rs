//! Lat/lon re-indexing.
//!
//! Observations sit on a regular lon/lat lattice whose pitch is the smallest
//! gap between distinct coordinates. Slots count from the southernmost and
//! westernmost observation; the grid reaches out to the instrument's maximum
//! range north and east of the origin.

use radial_common::{RadialError, RadialResult};
use radial_parser::{ObservationTable, Origin};
use tracing::debug;

use crate::axis::{min_gap, unique_rounded};
use crate::index::{check_grid_size, Axis, GridIndex, IndexedTable};
use crate::selector::CoordinateSystem;

/// Decimals coordinates are compared at.
const COORDINATE_DECIMALS: u32 = 7;

/// Slack added before flooring so on-grid values never land one slot short.
const SLOT_TOLERANCE: f64 = 1e-6;

/// Regular lattice along one coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Lattice {
    min: f64,
    resolution: f64,
}

impl Lattice {
    fn from_values(name: &str, values: &[f64]) -> RadialResult<Self> {
        let unique = unique_rounded(values, COORDINATE_DECIMALS);
        let resolution = min_gap(&unique).ok_or_else(|| {
            RadialError::MalformedCoordinates(format!(
                "{} needs at least two distinct values, found {}",
                name,
                unique.len()
            ))
        })?;
        Ok(Self {
            min: unique[0],
            resolution,
        })
    }

    fn slot(&self, value: f64) -> Option<i64> {
        if value.is_nan() {
            return None;
        }
        Some(((value - self.min) / self.resolution + SLOT_TOLERANCE).floor() as i64)
    }

    /// Slots needed to reach `max` from the lattice minimum.
    fn slots_to(&self, max: f64) -> usize {
        ((max - self.min) / self.resolution).ceil().max(0.0) as usize
    }
}

/// Re-index a table on its lon/lat lattice.
///
/// The index is (time, i, j) with `i` the longitude slot and `j` the
/// latitude slot. Observations outside the theoretical grid are dropped.
pub fn reindex_lat_lon(
    table: &ObservationTable,
    origin: Option<Origin>,
    max_range_km: f64,
) -> RadialResult<IndexedTable> {
    let origin = origin.ok_or_else(|| RadialError::MissingMetadata("Origin".to_string()))?;
    let lats = table.require("LATD")?;
    let lons = table.require("LOND")?;

    let lat_lattice = Lattice::from_values("LATD", lats)?;
    let lon_lattice = Lattice::from_values("LOND", lons)?;

    let (_, max_lat) = geodesy::project(origin.lon, origin.lat, max_range_km, 0.0);
    let (max_lon, _) = geodesy::project(origin.lon, origin.lat, max_range_km, 90.0);
    let nx = lon_lattice.slots_to(max_lon);
    let ny = lat_lattice.slots_to(max_lat);

    debug!(
        lon_resolution = lon_lattice.resolution,
        lat_resolution = lat_lattice.resolution,
        max_lon,
        max_lat,
        nx,
        ny,
        "Lat/lon grid"
    );
    check_grid_size(("lon slots", nx), ("lat slots", ny))?;

    let cells: Vec<Option<(usize, usize)>> = lons
        .iter()
        .zip(lats)
        .map(|(&lon, &lat)| {
            let i = lon_lattice.slot(lon)?;
            let j = lat_lattice.slot(lat)?;
            Some((usize::try_from(i).ok()?, usize::try_from(j).ok()?))
        })
        .collect();

    let index = GridIndex::new(
        CoordinateSystem::LatLon,
        table.time(),
        Axis::slots("i", nx),
        Axis::slots("j", ny),
    );
    IndexedTable::scatter(index, table, &cells, &[])
}
