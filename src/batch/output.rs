// src/batch/output.rs
use super::ExtractionResult;

/// Accumulated text of a batch, one labeled block per input file.
#[derive(Debug, Default)]
pub struct CombinedOutput {
    text: String,
    blocks: usize,
}

impl CombinedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the block for `name`. Blocks are never reordered or removed.
    pub fn push_block(&mut self, name: &str, result: &ExtractionResult) {
        self.text.push_str(&start_marker(name));
        match result {
            ExtractionResult::Text(text) => self.text.push_str(text),
            ExtractionResult::Failed(message) => {
                self.text.push_str(&error_line(name, message));
            }
        }
        self.text.push_str(&end_marker(name));
        self.blocks += 1;
    }

    pub fn block_count(&self) -> usize {
        self.blocks
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

pub fn start_marker(name: &str) -> String {
    format!("\n\n--- Start of {} ---\n\n", name)
}

pub fn end_marker(name: &str) -> String {
    format!("\n\n--- End of {} ---\n\n", name)
}

pub fn error_line(name: &str, message: &str) -> String {
    format!("Error extracting {}: {}\n", name, message)
}
