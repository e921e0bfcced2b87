use tracing::warn;

use crate::extractor::ExtractionResult;
use crate::llm::CompletionClient;
use crate::prompt;
use crate::report::{Skip, StageReport};

/// Normalized entity/relationship breakdown for one extraction. The
/// "Entities"/"Relationships" structure is advisory; the graph builder
/// parses it heuristically.
#[derive(Debug, Clone)]
pub struct Summary {
    pub chunk_index: usize,
    pub text: String,
}

pub struct Summarizer<C> {
    client: C,
}

impl<C: CompletionClient> Summarizer<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Run the normalization instruction over every extraction. Same
    /// per-item isolation as the extraction stage.
    pub async fn summarize_extractions(
        &self,
        extractions: &[ExtractionResult],
    ) -> StageReport<Summary> {
        let mut report = StageReport::default();

        for extraction in extractions {
            match self
                .client
                .complete(prompt::SUMMARY_INSTRUCTION, &extraction.text)
                .await
            {
                Ok(text) => {
                    report.items.push(Summary {
                        chunk_index: extraction.chunk_index,
                        text,
                    });
                }
                Err(e) => {
                    warn!(
                        index = extraction.chunk_index,
                        error = %e,
                        "summarization failed, skipping extraction"
                    );
                    report.skipped.push(Skip {
                        index: extraction.chunk_index,
                        reason: e.to_string(),
                    });
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockCompletionClient;

    #[tokio::test]
    async fn failed_summaries_are_skipped_not_fatal() {
        let client = MockCompletionClient::new();
        client.push_response("Entities:\n1. Alice");
        client.push_failure("rate limited");

        let extractions = vec![
            ExtractionResult {
                chunk_index: 3,
                text: "raw a".to_string(),
            },
            ExtractionResult {
                chunk_index: 7,
                text: "raw b".to_string(),
            },
        ];

        let report = Summarizer::new(client)
            .summarize_extractions(&extractions)
            .await;

        assert_eq!(report.items.len(), 1);
        assert_eq!(report.items[0].chunk_index, 3);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].index, 7);
    }
}
