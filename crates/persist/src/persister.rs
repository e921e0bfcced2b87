use graph::Graph;
use tracing::warn;

use crate::store::GraphStore;

/// What the flush actually wrote. Failed operations are recorded, not
/// propagated: one bad node or edge does not block the rest.
#[derive(Debug, Default)]
pub struct PersistReport {
    pub nodes_written: usize,
    pub edges_written: usize,
    pub failures: Vec<FailedOp>,
}

#[derive(Debug)]
pub struct FailedOp {
    pub item: String,
    pub reason: String,
}

pub struct Persister<S> {
    store: S,
}

impl<S: GraphStore> Persister<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Flush the whole graph: every node as create-if-absent, then every
    /// edge as create-or-update. Nodes go first so the edge matches find
    /// their endpoints already merged.
    pub async fn persist(&self, graph: &Graph) -> PersistReport {
        let mut report = PersistReport::default();

        for name in graph.nodes() {
            match self.store.upsert_node(name).await {
                Ok(()) => report.nodes_written += 1,
                Err(e) => {
                    warn!(node = name, error = %e, "failed to upsert node, continuing");
                    report.failures.push(FailedOp {
                        item: name.to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        for (source, target, label) in graph.edges() {
            match self.store.upsert_edge(source, target, label).await {
                Ok(()) => report.edges_written += 1,
                Err(e) => {
                    warn!(source, target, error = %e, "failed to upsert edge, continuing");
                    report.failures.push(FailedOp {
                        item: format!("{source}->{target}"),
                        reason: e.to_string(),
                    });
                }
            }
        }

        report
    }
}
