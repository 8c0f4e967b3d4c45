//! Input discovery.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use radial_ingest::RADIAL_EXTENSIONS;
use tracing::debug;

/// Expand input arguments into radial files.
///
/// Files are taken as given; directories are walked recursively for files
/// with a radial extension. The result is sorted and free of repeats.
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            for entry in walkdir::WalkDir::new(path).follow_links(true) {
                let entry = entry.with_context(|| format!("walking {}", path.display()))?;
                if entry.file_type().is_file() && is_radial_file(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        } else {
            bail!("input not found: {}", path.display());
        }
    }

    files.sort();
    files.dedup();
    debug!(files = files.len(), "Collected input files");
    Ok(files)
}

fn is_radial_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            RADIAL_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}
