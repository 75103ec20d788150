//! Extraction of the bundled templates onto disk.
//!
//! Commands render from a templates directory rather than from the binary, so
//! the directory is refreshed before each `new`/`add`: missing templates are
//! written, identical ones are left alone, and ones that differ from the
//! bundled copy are reported and replaced.

use std::path::{Path, PathBuf};

use crate::error::{CometError, Result};
use crate::templates::embedded::TemplateSet;

/// Make sure every bundled template exists in `dir` with the bundled contents.
///
/// Returns the paths that were (re)written.
pub fn extract_templates(dir: &Path, bundled: &TemplateSet) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|source| CometError::DirectoryCreate {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let mut written = Vec::new();
    for (id, source) in bundled.iter() {
        let path = dir.join(id.file_name());

        if path.exists() {
            let existing = std::fs::read_to_string(&path)?;
            if existing == source {
                continue;
            }
            tracing::info!("file exists but is different: {}", path.display());
        }

        std::fs::write(&path, source).map_err(|source| CometError::FileWrite {
            path: path.clone(),
            source,
        })?;
        tracing::info!("extracted file: {}", path.display());
        written.push(path);
    }

    Ok(written)
}
