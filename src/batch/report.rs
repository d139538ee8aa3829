// src/batch/report.rs
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ExtractionResult;

/// What happened during one batch run. Optionally persisted as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub strategy: String,
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub succeeded: usize,
    pub failed: usize,
    pub files: Vec<FileOutcome>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Ok,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub name: String,
    pub status: FileStatus,
    /// Characters of extracted text; zero for failures.
    pub chars: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileOutcome {
    pub fn from_result(name: &str, result: &ExtractionResult) -> Self {
        match result {
            ExtractionResult::Text(text) => FileOutcome {
                name: name.to_string(),
                status: FileStatus::Ok,
                chars: text.chars().count(),
                error: None,
            },
            ExtractionResult::Failed(message) => FileOutcome {
                name: name.to_string(),
                status: FileStatus::Error,
                chars: 0,
                error: Some(message.clone()),
            },
        }
    }
}

impl BatchReport {
    pub fn new(strategy: &str, input_dir: PathBuf, output_path: PathBuf) -> Self {
        let now = Utc::now();
        Self {
            strategy: strategy.to_string(),
            input_dir,
            output_path,
            started_at: now,
            finished_at: now,
            succeeded: 0,
            failed: 0,
            files: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: FileOutcome) {
        match outcome.status {
            FileStatus::Ok => self.succeeded += 1,
            FileStatus::Error => self.failed += 1,
        }
        self.files.push(outcome);
    }

    pub fn finish(&mut self) {
        self.finished_at = Utc::now();
    }
}
