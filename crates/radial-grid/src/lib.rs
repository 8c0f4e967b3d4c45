//! Grid index reconstruction for radial tables.
//!
//! A radial table is an unordered list of observations. This crate recovers
//! the regular grid the instrument sampled and lays the observations out
//! densely over it, keeping empty cells as NaN.
//!
//! # Pipeline
//!
//! ```text
//! ObservationTable + numeric Metadata + Origin
//!      │
//!      ├─► max_range(metadata)             (grid extent)
//!      │
//!      ├─► selector::detect(table)          (lat/lon or range/bearing)
//!      │         │
//!      │         ├─► latlon::reindex_lat_lon
//!      │         │
//!      │         └─► range_bearing::reindex_range_bearing
//!      │                  (angular resolution, range resolution,
//!      │                   precision, range cells)
//!      ▼
//! IndexedTable (time × axis × axis)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use radial_grid::reindex_table;
//!
//! let indexed = reindex_table(&table, &metadata.to_numeric(), origin)?;
//! println!("{:?}", indexed.index().shape());
//! ```

pub mod axis;
pub mod extent;
pub mod index;
pub mod latlon;
pub mod params;
pub mod range_bearing;
pub mod reindex;
pub mod selector;

pub use extent::{max_range, RANGE_CEILING_KM, RANGE_LADDER_KM};
pub use index::{check_grid_size, Axis, AxisLabels, GridIndex, IndexedTable, MAX_GRID_CELLS};
pub use latlon::reindex_lat_lon;
pub use params::{decimal_places, range_cells, range_resolution, RangeResolution};
pub use range_bearing::{bearing_axis, range_axis, reindex_range_bearing, RangeBearingParams};
pub use reindex::reindex_table;
pub use selector::{detect, select, AxisCounts, CoordinateSystem};
