// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Any failure to turn one input file into text.
/// Always caught at the per-file boundary and rendered into the combined output.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Decode(String),

    #[error("document is encrypted")]
    Encrypted,

    #[error("decoder panicked: {0}")]
    Panicked(String),

    #[error("decoder stopped without reporting a result")]
    NoEvent,

    #[error("decode task failed: {0}")]
    Task(String),
}

impl From<pdf_extract::OutputError> for ExtractionError {
    fn from(err: pdf_extract::OutputError) -> Self {
        ExtractionError::Decode(err.to_string())
    }
}

impl From<lopdf::Error> for ExtractionError {
    fn from(err: lopdf::Error) -> Self {
        ExtractionError::Decode(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ExtractionError {
    fn from(err: tokio::task::JoinError) -> Self {
        ExtractionError::Task(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Could not list input directory {path}: {source}")]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_the_path() {
        let err = ExtractionError::Read {
            path: PathBuf::from("docx/a.pdf"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "failed to read docx/a.pdf: gone");
    }

    #[test]
    fn decode_error_is_rendered_verbatim() {
        let err = ExtractionError::Decode("Invalid file header".to_string());
        assert_eq!(err.to_string(), "Invalid file header");
    }

    #[test]
    fn extraction_error_lifts_into_app_error() {
        let app: AppError = ExtractionError::Encrypted.into();
        assert_eq!(app.to_string(), "Extraction failed: document is encrypted");
    }
}
