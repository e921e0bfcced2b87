use tracing::warn;

use crate::model::Graph;
use crate::parser::{self, ParsedSummary};

/// Result of folding a run's summaries: the merged graph plus the summaries
/// that failed to parse.
#[derive(Debug)]
pub struct GraphBuild {
    pub graph: Graph,
    pub skipped: Vec<SkippedSummary>,
}

#[derive(Debug)]
pub struct SkippedSummary {
    pub index: usize,
    pub reason: String,
}

/// Fold summaries into one fresh graph. Each summary parses independently,
/// then merges in input order, so a later edge label for the same
/// (source, target) pair wins. A summary that fails to parse is logged and
/// skipped; the fold continues with the rest.
pub fn build_graph<'a, I>(summaries: I) -> GraphBuild
where
    I: IntoIterator<Item = &'a str>,
{
    let mut graph = Graph::new();
    let mut skipped = Vec::new();

    for (index, summary) in summaries.into_iter().enumerate() {
        match parser::parse_summary(summary) {
            Ok(parsed) => apply(&mut graph, parsed),
            Err(e) => {
                warn!(index, error = %e, "failed to parse summary, skipping");
                skipped.push(SkippedSummary {
                    index,
                    reason: e.to_string(),
                });
            }
        }
    }

    GraphBuild { graph, skipped }
}

fn apply(graph: &mut Graph, parsed: ParsedSummary) {
    for entity in parsed.entities {
        graph.add_node(entity);
    }
    for relation in parsed.relations {
        graph.add_edge(relation.source, relation.target, relation.label);
    }
}
