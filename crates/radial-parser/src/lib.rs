//! Parser for HF-radar radial ASCII files (LLUV).
//!
//! This crate reads the two pieces of a radial file:
//!
//! - the `%Key: value` header, into a [`Metadata`] mapping
//!   (see [`extract_metadata`]),
//! - the whitespace separated observation table, into a column-major
//!   [`ObservationTable`].
//!
//! # File Structure
//!
//! ```text
//! %CTF: 1.00
//! %Origin:  40.9693333  -72.1237000
//! ...
//! %TableColumnTypes: LOND LATD VELU VELV ... RNGE BEAR VELO HEAD SPRC
//! %TableStart:
//! %%   Longitude   Latitude ...
//!  -72.1189510  40.9163840  -12.050 ...
//! ...
//! %TableEnd:
//! ```
//!
//! Both CODAR SeaSonde and Helzel WERA files follow this layout; they
//! differ in which header fields and table columns are present.

pub mod dialect;
pub mod fields;
pub mod header;
pub mod table;

pub use dialect::Dialect;
pub use fields::{
    angular_resolution, antenna_bearing, capture_time, column_types, origin, Origin,
};
pub use header::{extract_metadata, extract_metadata_from_path, MetadataMode};
pub use table::{Column, ObservationTable};

pub use radial_common::{Metadata, MetadataValue, RadialError, RadialResult};
