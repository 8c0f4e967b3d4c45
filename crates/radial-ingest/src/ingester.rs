//! Main Ingester struct for radial file conversion.

use std::path::Path;

use radial_grid::reindex_table;
use radial_parser::{
    antenna_bearing, capture_time, column_types, extract_metadata, origin, Dialect,
    ObservationTable,
};
use tracing::{debug, info};

use crate::config::IngestConfig;
use crate::dataset::RadialDataset;
use crate::error::Result;

/// File extensions of radial files picked up when walking directories.
pub const RADIAL_EXTENSIONS: &[&str] = &["ruv", "lluv"];

/// Converts radial files into [`RadialDataset`]s.
///
/// Holds no state besides its configuration; one ingester can convert
/// files from several threads at once.
#[derive(Debug, Clone, Default)]
pub struct Ingester {
    config: IngestConfig,
}

impl Ingester {
    /// Create a new Ingester.
    pub fn new(config: IngestConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// Convert a file from the filesystem.
    ///
    /// Undecodable bytes are replaced rather than rejected.
    pub fn convert_file(&self, path: impl AsRef<Path>) -> Result<RadialDataset> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        debug!(file = %path.display(), bytes = bytes.len(), "Read radial file");

        let dataset = self.convert_str(&String::from_utf8_lossy(&bytes))?;
        info!(
            file = %path.display(),
            coordinate_system = %dataset.coordinate_system(),
            dialect = %dataset.dialect,
            observations = dataset.observations,
            "Converted radial file"
        );
        Ok(dataset)
    }

    /// Convert the text of a radial file.
    pub fn convert_str(&self, text: &str) -> Result<RadialDataset> {
        let attributes = extract_metadata(text, self.config.metadata_mode());
        let numeric = attributes.to_numeric();

        let dialect = Dialect::detect(&numeric);
        let time = capture_time(&numeric)?;
        let site = origin(&numeric)?;
        let bearing = antenna_bearing(&numeric)?;
        let names = column_types(&numeric)?;
        debug!(
            %dialect,
            %time,
            origin = ?site,
            antenna_bearing = ?bearing,
            columns = names.len(),
            "Header parameters"
        );

        let table = ObservationTable::parse(text, &names, time)?;
        table.check_coordinates()?;

        let indexed = reindex_table(&table, &numeric, site)?;
        RadialDataset::assemble(&self.config, indexed, attributes, dialect, site, bearing)
    }
}
