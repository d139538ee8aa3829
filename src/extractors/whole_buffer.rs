// src/extractors/whole_buffer.rs
use std::panic::{self, AssertUnwindSafe};

use async_trait::async_trait;

use super::{panic_message, ExtractionStrategy};
use crate::utils::error::ExtractionError;

/// Hands the whole file buffer to `pdf-extract` and returns one text blob.
/// No page structure survives.
#[derive(Debug, Default)]
pub struct WholeBufferStrategy;

impl WholeBufferStrategy {
    pub fn new() -> Self {
        Self
    }

    fn decode(bytes: &[u8]) -> Result<String, ExtractionError> {
        // pdf-extract panics on some malformed inputs instead of returning an error.
        match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes))) {
            Ok(result) => Ok(result?),
            Err(payload) => Err(ExtractionError::Panicked(panic_message(payload))),
        }
    }
}

#[async_trait]
impl ExtractionStrategy for WholeBufferStrategy {
    fn name(&self) -> &'static str {
        "whole-buffer"
    }

    async fn extract_text(&self, bytes: Vec<u8>) -> Result<String, ExtractionError> {
        tracing::trace!("Decoding {} byte buffer as a single document", bytes.len());
        tokio::task::spawn_blocking(move || Self::decode(&bytes)).await?
    }
}
