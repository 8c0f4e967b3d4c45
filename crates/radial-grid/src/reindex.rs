//! Re-indexing of a whole table in its prevailing coordinate system.

use radial_common::{Metadata, RadialResult};
use radial_parser::{angular_resolution, ObservationTable, Origin};
use tracing::debug;

use crate::extent::max_range;
use crate::index::IndexedTable;
use crate::latlon::reindex_lat_lon;
use crate::params::{range_cells, range_resolution};
use crate::range_bearing::{reindex_range_bearing, RangeBearingParams};
use crate::selector::{detect, CoordinateSystem};

/// Re-index a table using parameters from numeric metadata.
///
/// Range parameters are only read when the table is indexed by range and
/// bearing, so a lat/lon file without range resolution fields still
/// converts.
pub fn reindex_table(
    table: &ObservationTable,
    metadata: &Metadata,
    origin: Option<Origin>,
) -> RadialResult<IndexedTable> {
    let max_range_km = max_range(metadata)?;
    let coordinate_system = detect(table);
    debug!(%coordinate_system, max_range_km, rows = table.len(), "Re-indexing table");

    match coordinate_system {
        CoordinateSystem::LatLon => reindex_lat_lon(table, origin, max_range_km),
        CoordinateSystem::RangeBearing => {
            let resolution = range_resolution(metadata)?;
            let params = RangeBearingParams {
                angular_resolution: angular_resolution(metadata)?,
                range_resolution_km: resolution.km,
                range_precision: resolution.precision,
                max_range_km,
                range_cells: range_cells(metadata, table, max_range_km, resolution.km)?,
            };
            reindex_range_bearing(table, &params)
        }
    }
}
