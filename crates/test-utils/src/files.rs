//! Temporary file helpers for tests that go through the filesystem.

use std::path::PathBuf;

use tempfile::TempDir;

/// Write `contents` to `name` inside a fresh temporary directory.
///
/// The directory is removed when the returned [`TempDir`] is dropped, so
/// keep it alive for as long as the path is used.
pub fn write_temp_file(name: &str, contents: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(name);
    std::fs::write(&path, contents)?;
    Ok((dir, path))
}
