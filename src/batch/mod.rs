// src/batch/mod.rs
pub mod output;
pub mod report;
pub mod state;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::extractors::ExtractionStrategy;
use crate::storage::StorageManager;
use crate::utils::error::{AppError, ExtractionError};

pub use output::CombinedOutput;
pub use report::{BatchReport, FileOutcome};
pub use state::BatchState;

/// Only entries whose name ends with this are picked up.
pub const INPUT_EXTENSION: &str = ".pdf";

/// Characters shown by `probe`.
pub const PROBE_PREVIEW_CHARS: usize = 100;

/// A discovered source document. Its bytes are read only when it is extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub name: String,
    pub path: PathBuf,
}

impl InputFile {
    pub async fn read(&self) -> Result<Vec<u8>, ExtractionError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| ExtractionError::Read {
                path: self.path.clone(),
                source,
            })
    }
}

/// Text of one file, or the message explaining why there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResult {
    Text(String),
    Failed(String),
}

impl From<Result<String, ExtractionError>> for ExtractionResult {
    fn from(result: Result<String, ExtractionError>) -> Self {
        match result {
            Ok(text) => ExtractionResult::Text(text),
            Err(e) => ExtractionResult::Failed(e.to_string()),
        }
    }
}

/// Lists `.pdf` entries of `directory` in the order the filesystem returns them.
pub async fn discover_inputs(directory: &Path) -> Result<Vec<InputFile>, AppError> {
    let discovery_err = |source| AppError::Discovery {
        path: directory.to_path_buf(),
        source,
    };

    let mut inputs = Vec::new();
    let mut entries = tokio::fs::read_dir(directory).await.map_err(discovery_err)?;
    while let Some(entry) = entries.next_entry().await.map_err(discovery_err)? {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(INPUT_EXTENSION) {
            inputs.push(InputFile {
                name,
                path: entry.path(),
            });
        } else {
            tracing::trace!("Skipping non-PDF entry: {}", name);
        }
    }

    tracing::debug!("Discovered {} input files in {}", inputs.len(), directory.display());
    Ok(inputs)
}

/// Runs one strategy over a directory of PDFs, one file at a time.
pub struct BatchExtractor {
    strategy: Arc<dyn ExtractionStrategy>,
}

impl BatchExtractor {
    pub fn new(strategy: Arc<dyn ExtractionStrategy>) -> Self {
        Self { strategy }
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Reads and decodes a single file. Every failure is folded into the result.
    pub async fn extract_one(&self, file: &InputFile) -> ExtractionResult {
        let result = match file.read().await {
            Ok(bytes) => {
                tracing::debug!("Read {} ({} bytes)", file.name, bytes.len());
                self.strategy.extract_text(bytes).await
            }
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            tracing::warn!("Failed to extract {}: {}", file.name, e);
        }
        result.into()
    }

    /// Extracts every PDF in `directory` and writes the combined text to `output_path` once,
    /// after the last file.
    pub async fn run(&self, directory: &Path, output_path: &Path) -> Result<BatchReport, AppError> {
        let mut report = BatchReport::new(
            self.strategy_name(),
            directory.to_path_buf(),
            output_path.to_path_buf(),
        );

        let inputs = discover_inputs(directory).await?;
        tracing::info!(
            "Found {} PDF files in {} (strategy: {})",
            inputs.len(),
            directory.display(),
            self.strategy_name()
        );

        let mut combined = CombinedOutput::new();
        let mut state = BatchState::Idle.advance(!inputs.is_empty());

        for (index, file) in inputs.iter().enumerate() {
            tracing::info!("Processing {} ({}/{})", file.name, index + 1, inputs.len());

            let result = self.extract_one(file).await;
            state = state.decoded();

            combined.push_block(&file.name, &result);
            report.record(FileOutcome::from_result(&file.name, &result));

            state = state.advance(index + 1 < inputs.len());
        }

        debug_assert_eq!(state, BatchState::Done);
        debug_assert_eq!(combined.block_count(), inputs.len());

        StorageManager::new(output_path).save_combined(combined.as_str())?;
        report.finish();

        tracing::info!(
            "Extraction complete. Saved to {} ({} succeeded, {} failed)",
            output_path.display(),
            report.succeeded,
            report.failed
        );
        Ok(report)
    }

    /// Extracts a single file and returns the start of its text.
    pub async fn probe(&self, path: &Path) -> Result<String, ExtractionError> {
        let file = InputFile {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            path: path.to_path_buf(),
        };
        let bytes = file.read().await?;
        let text = self.strategy.extract_text(bytes).await?;
        Ok(text.chars().take(PROBE_PREVIEW_CHARS).collect())
    }
}
