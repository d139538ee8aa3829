// src/extractors/page_iteration.rs
use std::panic::{self, AssertUnwindSafe};

use async_trait::async_trait;
use lopdf::Document;

use super::{panic_message, ExtractionStrategy};
use crate::utils::error::ExtractionError;

/// Opens the buffer as a paged document and walks pages 1..=N in order.
///
/// Each page contributes its text fragments joined by a single space,
/// terminated by a newline.
#[derive(Debug, Default)]
pub struct PageIterationStrategy;

impl PageIterationStrategy {
    pub fn new() -> Self {
        Self
    }

    fn decode(bytes: &[u8]) -> Result<String, ExtractionError> {
        let doc = Document::load_mem(bytes)?;
        if doc.is_encrypted() {
            return Err(ExtractionError::Encrypted);
        }

        // get_pages is keyed by page number, so iteration is already ascending.
        let pages = doc.get_pages();
        tracing::debug!("Document has {} pages", pages.len());

        let mut text = String::new();
        for page_number in pages.keys() {
            let page_text = doc.extract_text(&[*page_number])?;
            text.push_str(&join_fragments(page_fragments(&page_text)));
            text.push('\n');
        }
        Ok(text)
    }
}

/// Splits lopdf's page text into its discrete runs.
/// lopdf ends every text object with a line break, so each line is one run. Runs keep
/// their own spacing; only the empty lines between text objects are dropped.
fn page_fragments(page_text: &str) -> Vec<&str> {
    page_text
        .lines()
        .filter(|line| !line.is_empty())
        .collect()
}

fn join_fragments(fragments: Vec<&str>) -> String {
    fragments.join(" ")
}

#[async_trait]
impl ExtractionStrategy for PageIterationStrategy {
    fn name(&self) -> &'static str {
        "page-iteration"
    }

    async fn extract_text(&self, bytes: Vec<u8>) -> Result<String, ExtractionError> {
        tokio::task::spawn_blocking(move || {
            match panic::catch_unwind(AssertUnwindSafe(|| Self::decode(&bytes))) {
                Ok(result) => result,
                Err(payload) => Err(ExtractionError::Panicked(panic_message(payload))),
            }
        })
        .await?
    }
}
