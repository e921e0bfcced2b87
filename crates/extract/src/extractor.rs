use ingest::Chunk;
use tracing::warn;

use crate::llm::CompletionClient;
use crate::prompt;
use crate::report::{Skip, StageReport};

/// Raw completion-service output for one chunk. Unstructured; the
/// normalization pass gives it shape.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Position of the originating chunk in the run's chunk sequence.
    pub chunk_index: usize,
    pub text: String,
}

pub struct Extractor<C> {
    client: C,
}

impl<C: CompletionClient> Extractor<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Run the extraction instruction over every chunk, one attempt each.
    /// A failing chunk is logged and skipped; the rest of the stage runs.
    pub async fn extract_chunks(&self, chunks: &[Chunk]) -> StageReport<ExtractionResult> {
        let mut report = StageReport::default();

        for (index, chunk) in chunks.iter().enumerate() {
            match self
                .client
                .complete(prompt::EXTRACTION_INSTRUCTION, &chunk.text)
                .await
            {
                Ok(text) => {
                    report.items.push(ExtractionResult {
                        chunk_index: index,
                        text,
                    });
                }
                Err(e) => {
                    warn!(
                        index,
                        doc_id = %chunk.doc_id,
                        error = %e,
                        "extraction failed, skipping chunk"
                    );
                    report.skipped.push(Skip {
                        index,
                        reason: e.to_string(),
                    });
                }
            }
        }

        report
    }
}
