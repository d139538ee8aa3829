// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::batch::BatchReport;
use crate::utils::error::StorageError;

/// Owns the single output artifact of a batch.
pub struct StorageManager {
    output_path: PathBuf,
}

impl StorageManager {
    pub fn new<P: AsRef<Path>>(output_path: P) -> Self {
        Self {
            output_path: output_path.as_ref().to_path_buf(),
        }
    }

    /// Writes the combined text in one go, replacing any previous file.
    pub fn save_combined(&self, text: &str) -> Result<&Path, StorageError> {
        write_file(&self.output_path, text.as_bytes())?;
        tracing::info!(
            "Saved {} bytes of combined text to {}",
            text.len(),
            self.output_path.display()
        );
        Ok(self.output_path.as_path())
    }

    /// Saves the run report as pretty-printed JSON.
    pub fn save_report<P: AsRef<Path>>(
        &self,
        path: P,
        report: &BatchReport,
    ) -> Result<PathBuf, StorageError> {
        let path = path.as_ref().to_path_buf();
        let json = serde_json::to_string_pretty(report)?;
        write_file(&path, json.as_bytes())?;
        tracing::info!("Saved run report to {}", path.display());
        Ok(path)
    }
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), StorageError> {
    let io_err = |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };

    // Create the parent directory if it doesn't exist
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    fs::write(path, contents).map_err(io_err)
}
