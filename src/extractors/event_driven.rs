// src/extractors/event_driven.rs
use std::panic::{self, AssertUnwindSafe};

use async_trait::async_trait;
use tokio::sync::oneshot;

use super::{panic_message, ExtractionStrategy};
use crate::utils::error::ExtractionError;

/// Outcome reported by a decoder session. Exactly one is emitted per file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeEvent {
    DataReady(String),
    DataError(String),
}

/// Starts a decoder session per file and waits for its single completion event
/// before returning, so files are decoded strictly one at a time.
#[derive(Debug, Default)]
pub struct EventDrivenStrategy;

impl EventDrivenStrategy {
    pub fn new() -> Self {
        Self
    }

    /// Spawns a decoder for `bytes`. The returned receiver fires once.
    pub fn load(bytes: Vec<u8>) -> oneshot::Receiver<DecodeEvent> {
        let (tx, rx) = oneshot::channel();
        tokio::task::spawn_blocking(move || {
            let event = match panic::catch_unwind(AssertUnwindSafe(|| {
                pdf_extract::extract_text_from_mem_by_pages(&bytes)
            })) {
                Ok(Ok(pages)) => DecodeEvent::DataReady(raw_text_content(&pages)),
                Ok(Err(e)) => DecodeEvent::DataError(e.to_string()),
                Err(payload) => DecodeEvent::DataError(format!(
                    "decoder panicked: {}",
                    panic_message(payload)
                )),
            };
            // Receiver gone means nobody is waiting for this file anymore.
            let _ = tx.send(event);
        });
        rx
    }
}

/// Concatenates page texts, each followed by a page-break line.
pub fn raw_text_content(pages: &[String]) -> String {
    let mut out = String::new();
    for (i, page) in pages.iter().enumerate() {
        out.push_str(page);
        out.push_str(&format!(
            "\r\n----------------Page ({}) Break----------------\r\n",
            i
        ));
    }
    out
}

#[async_trait]
impl ExtractionStrategy for EventDrivenStrategy {
    fn name(&self) -> &'static str {
        "event-driven"
    }

    async fn extract_text(&self, bytes: Vec<u8>) -> Result<String, ExtractionError> {
        let pending = Self::load(bytes);
        tracing::trace!("Decoder session started, awaiting completion event");
        match pending.await {
            Ok(DecodeEvent::DataReady(text)) => Ok(text),
            Ok(DecodeEvent::DataError(message)) => Err(ExtractionError::Decode(message)),
            Err(_) => Err(ExtractionError::NoEvent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::test_pdf::{corrupt_pdf, pdf_with_broken_type0_font, pdf_with_pages};

    #[test]
    fn page_breaks_follow_each_page() {
        let pages = vec!["first".to_string(), "second".to_string()];
        assert_eq!(
            raw_text_content(&pages),
            "first\r\n----------------Page (0) Break----------------\r\n\
             second\r\n----------------Page (1) Break----------------\r\n"
        );
    }

    #[test]
    fn no_pages_means_no_text() {
        assert_eq!(raw_text_content(&[]), "");
    }

    #[tokio::test]
    async fn load_emits_ready_event_for_valid_document() {
        let pdf = pdf_with_pages(&[&["Hello"]]);
        match EventDrivenStrategy::load(pdf).await.unwrap() {
            DecodeEvent::DataReady(text) => {
                assert!(text.contains("Hello"), "unexpected text: {:?}", text);
                assert!(text.contains("Page (0) Break"));
            }
            other => panic!("expected DataReady, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn load_emits_error_event_for_corrupt_document() {
        let event = EventDrivenStrategy::load(corrupt_pdf()).await.unwrap();
        assert!(matches!(event, DecodeEvent::DataError(_)), "got {:?}", event);
    }

    #[tokio::test]
    async fn error_event_becomes_decode_error() {
        let err = EventDrivenStrategy::new()
            .extract_text(corrupt_pdf())
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Decode(_)));
    }

    #[test]
    fn pages_are_reported_in_order() {
        let pdf = pdf_with_pages(&[&["One"], &["Two"]]);
        let text = tokio_test::block_on(EventDrivenStrategy::new().extract_text(pdf)).unwrap();
        let first = text.find("Page (0) Break").unwrap();
        let second = text.find("Page (1) Break").unwrap();
        assert!(first < second);
    }

    #[tokio::test]
    async fn decoder_panic_is_reported_as_error_event() {
        match EventDrivenStrategy::load(pdf_with_broken_type0_font()).await.unwrap() {
            DecodeEvent::DataError(message) => {
                assert!(message.starts_with("decoder panicked: "), "got {:?}", message)
            }
            other => panic!("expected DataError, got {:?}", other),
        }
    }
}
