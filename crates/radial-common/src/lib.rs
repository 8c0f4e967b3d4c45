//! Common types and utilities shared across the hf-radial crates.

pub mod columns;
pub mod error;
pub mod metadata;
pub mod time;

pub use columns::{long_name, COLUMN_LONG_NAMES};
pub use error::{RadialError, RadialResult};
pub use metadata::{Metadata, MetadataValue};
pub use time::parse_timestamp;
