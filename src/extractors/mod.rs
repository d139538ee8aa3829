// src/extractors/mod.rs
pub mod event_driven;
pub mod page_iteration;
pub mod whole_buffer;

#[cfg(test)]
pub(crate) mod test_pdf;

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;

use crate::utils::error::ExtractionError;

pub use event_driven::EventDrivenStrategy;
pub use page_iteration::PageIterationStrategy;
pub use whole_buffer::WholeBufferStrategy;

/// Turns the raw bytes of one PDF into plain text.
///
/// Implementations must hand every failure back as an `ExtractionError`
/// (decoder panics included) so the batch can record it and move on.
#[async_trait]
pub trait ExtractionStrategy: Send + Sync {
    /// Short name used in logs and the run report.
    fn name(&self) -> &'static str;

    async fn extract_text(&self, bytes: Vec<u8>) -> Result<String, ExtractionError>;
}

/// Selectable decoding approach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyKind {
    /// One text blob for the whole document
    WholeBuffer,
    /// Decoder emits a single ready/error event per file
    EventDriven,
    /// Page-by-page fragments, one line per page
    PageIteration,
}

impl StrategyKind {
    pub fn build(self) -> Arc<dyn ExtractionStrategy> {
        match self {
            StrategyKind::WholeBuffer => Arc::new(WholeBufferStrategy::new()),
            StrategyKind::EventDriven => Arc::new(EventDrivenStrategy::new()),
            StrategyKind::PageIteration => Arc::new(PageIterationStrategy::new()),
        }
    }
}

/// Best-effort text of a caught panic payload.
pub(crate) fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
