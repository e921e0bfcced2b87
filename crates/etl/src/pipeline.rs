use std::time::Instant;

use anyhow::Context;
use extract::{CompletionClient, Extractor, Summarizer};
use ingest::{Chunker, ChunkerConfig, FileReader};
use persist::{GraphStore, Persister};
use tracing::{info, warn};

use crate::config::EtlConfig;

/// Totals for one run, after per-item failures have been absorbed by each
/// stage.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub documents: usize,
    pub chunks: usize,
    pub extractions: usize,
    pub extraction_skips: usize,
    pub summaries: usize,
    pub summary_skips: usize,
    pub parse_skips: usize,
    pub nodes_written: usize,
    pub edges_written: usize,
    pub persist_failures: usize,
}

/// One full run over the configured input directory.
pub async fn run<C, S>(config: &EtlConfig, client: C, store: S) -> anyhow::Result<RunSummary>
where
    C: CompletionClient + Clone,
    S: GraphStore,
{
    info!(dir = %config.input_dir.display(), "starting text-to-graph run");

    let documents = FileReader::read_directory(&config.input_dir)
        .await
        .context("failed to read input directory")?;

    run_documents(config.chunking, documents, client, store).await
}

/// The pipeline proper, independent of where the documents came from:
/// chunk every document, extract, summarize, fold into one graph, flush it
/// once. Stages run strictly in order; no stage starts before the previous
/// one has finished.
pub async fn run_documents<C, S>(
    chunking: ChunkerConfig,
    documents: Vec<(String, String)>,
    client: C,
    store: S,
) -> anyhow::Result<RunSummary>
where
    C: CompletionClient + Clone,
    S: GraphStore,
{
    let started = Instant::now();
    let chunker = Chunker::new(chunking)?;

    let mut chunks = Vec::new();
    for (path, content) in &documents {
        let doc_id = ingest::generate_doc_id(path);
        chunks.extend(chunker.chunk_text(&doc_id, content, path));
    }
    info!(
        documents = documents.len(),
        chunks = chunks.len(),
        "chunked input documents"
    );

    let extractor = Extractor::new(client.clone());
    let extractions = extractor.extract_chunks(&chunks).await;
    info!(
        ok = extractions.items.len(),
        skipped = extractions.skipped.len(),
        "extraction stage complete"
    );

    let summarizer = Summarizer::new(client);
    let summaries = summarizer.summarize_extractions(&extractions.items).await;
    info!(
        ok = summaries.items.len(),
        skipped = summaries.skipped.len(),
        "summarization stage complete"
    );

    let build = graph::build_graph(summaries.items.iter().map(|s| s.text.as_str()));
    info!(
        nodes = build.graph.node_count(),
        edges = build.graph.edge_count(),
        skipped_summaries = build.skipped.len(),
        "graph assembled"
    );

    let persister = Persister::new(store);
    let report = persister.persist(&build.graph).await;

    match persister.store().stats().await {
        Ok(stats) => info!(
            entities = stats.entity_count,
            relations = stats.relation_count,
            "store totals after flush"
        ),
        Err(e) => warn!(error = %e, "failed to read store totals"),
    }

    info!(
        nodes_written = report.nodes_written,
        edges_written = report.edges_written,
        failures = report.failures.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "run complete"
    );

    Ok(RunSummary {
        documents: documents.len(),
        chunks: chunks.len(),
        extractions: extractions.items.len(),
        extraction_skips: extractions.skipped.len(),
        summaries: summaries.items.len(),
        summary_skips: summaries.skipped.len(),
        parse_skips: build.skipped.len(),
        nodes_written: report.nodes_written,
        edges_written: report.edges_written,
        persist_failures: report.failures.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use extract::MockCompletionClient;
    use persist::MemoryStore;

    fn doc(path: &str, text: &str) -> (String, String) {
        (path.to_string(), text.to_string())
    }

    #[tokio::test]
    async fn full_run_lands_the_graph_in_the_store() {
        let client = MockCompletionClient::new();
        client.push_response("raw extraction");
        client.push_response("Entities:\n1. Alice\n2. Bob\nRelationships:\nAlice->knows->Bob");

        let store = MemoryStore::new();
        let summary = run_documents(
            ChunkerConfig::default(),
            vec![doc("a.txt", "Alice knows Bob.")],
            client,
            store.clone(),
        )
        .await
        .unwrap();

        assert_eq!(summary.documents, 1);
        assert_eq!(summary.chunks, 1);
        assert_eq!(summary.extractions, 1);
        assert_eq!(summary.summaries, 1);
        assert_eq!(summary.nodes_written, 2);
        assert_eq!(summary.edges_written, 1);
        assert_eq!(summary.persist_failures, 0);

        assert!(store.contains_node("Alice"));
        assert!(store.contains_node("Bob"));
        assert_eq!(store.edge_label("Alice", "Bob").as_deref(), Some("knows"));
    }

    #[tokio::test]
    async fn a_failing_extraction_skips_only_its_chunk() {
        let client = MockCompletionClient::new();
        client.push_failure("service unavailable");
        client.push_response("raw extraction");
        client.push_response("Entities:\nCarol");

        let store = MemoryStore::new();
        let summary = run_documents(
            ChunkerConfig::default(),
            vec![doc("a.txt", "first document"), doc("b.txt", "second document")],
            client,
            store.clone(),
        )
        .await
        .unwrap();

        assert_eq!(summary.chunks, 2);
        assert_eq!(summary.extraction_skips, 1);
        assert_eq!(summary.extractions, 1);
        assert!(store.contains_node("Carol"));
    }

    #[tokio::test]
    async fn an_unparseable_summary_is_dropped_from_the_fold() {
        let client = MockCompletionClient::new();
        client.push_response("raw one");
        client.push_response("raw two");
        client.push_response("prose with no sections");
        client.push_response("Entities:\nDave");

        let store = MemoryStore::new();
        let summary = run_documents(
            ChunkerConfig::default(),
            vec![doc("a.txt", "one"), doc("b.txt", "two")],
            client,
            store.clone(),
        )
        .await
        .unwrap();

        assert_eq!(summary.summaries, 2);
        assert_eq!(summary.parse_skips, 1);
        assert_eq!(store.node_count(), 1);
        assert!(store.contains_node("Dave"));
    }

    #[tokio::test]
    async fn empty_input_persists_nothing() {
        let client = MockCompletionClient::new();
        let store = MemoryStore::new();

        let summary = run_documents(ChunkerConfig::default(), Vec::new(), client, store.clone())
            .await
            .unwrap();

        assert_eq!(summary.chunks, 0);
        assert_eq!(summary.nodes_written, 0);
        assert_eq!(store.node_count(), 0);
    }
}
