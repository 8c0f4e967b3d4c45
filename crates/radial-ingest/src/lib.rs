//! HF-radar radial file conversion.
//!
//! Ties the parser and the grid re-indexer together: a radial file goes in,
//! a [`RadialDataset`] laid out over its reconstructed grid comes out.
//!
//! # Architecture
//!
//! ```text
//! radial file
//!      │
//!      ├─► header  ──► Metadata (raw or numeric) ──► attributes
//!      │                    │
//!      │                    └─► numeric view ──► time, origin, bearing,
//!      │                                         range parameters
//!      ├─► table   ──► ObservationTable
//!      │
//!      └─► reindex ──► IndexedTable ──► RadialDataset
//! ```
//!
//! This crate is used by the `radial-convert` command line tool and can be
//! embedded directly:
//!
//! ```ignore
//! use radial_ingest::{IngestConfig, Ingester};
//!
//! let ingester = Ingester::new(IngestConfig::from_env());
//! let dataset = ingester.convert_file("RDLi_AMAG_2018_02_14_0000.ruv")?;
//! println!("{}", serde_json::to_string(&dataset.summary())?);
//! ```

pub mod config;
pub mod dataset;
pub mod error;
mod ingester;
pub mod time;

// Re-exports
pub use config::IngestConfig;
pub use dataset::{DataVariable, DatasetSummary, Dimension, RadialDataset};
pub use error::{IngestError, Result};
pub use ingester::{Ingester, RADIAL_EXTENSIONS};
pub use time::{encode_time, TimeUnits};
