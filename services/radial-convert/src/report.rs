//! Parallel conversion and per-file reports.

use std::path::{Path, PathBuf};

use radial_ingest::{DatasetSummary, Ingester};
use rayon::prelude::*;
use serde::Serialize;
use tracing::error;

/// Outcome of converting one file, printed as one JSON line.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FileReport {
    Converted {
        file: PathBuf,
        #[serde(flatten)]
        summary: DatasetSummary,
    },
    Failed {
        file: PathBuf,
        code: String,
        error: String,
    },
}

impl FileReport {
    pub fn is_failure(&self) -> bool {
        matches!(self, FileReport::Failed { .. })
    }
}

/// Convert one file into its report.
pub fn convert_one(ingester: &Ingester, path: &Path) -> FileReport {
    match ingester.convert_file(path) {
        Ok(dataset) => FileReport::Converted {
            file: path.to_path_buf(),
            summary: dataset.summary(),
        },
        Err(e) => {
            error!(file = %path.display(), code = e.code(), error = %e, "Conversion failed");
            FileReport::Failed {
                file: path.to_path_buf(),
                code: e.code().to_string(),
                error: e.to_string(),
            }
        }
    }
}

/// Convert files in parallel, one file per task. Reports keep input order.
pub fn convert_all(ingester: &Ingester, files: &[PathBuf]) -> Vec<FileReport> {
    files
        .par_iter()
        .map(|path| convert_one(ingester, path))
        .collect()
}
