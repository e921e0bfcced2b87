use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::error::PersistError;

/// Graph-database collaborator: two idempotent upsert operations with
/// match-or-create semantics on the server side, plus a count query.
#[allow(async_fn_in_trait)]
pub trait GraphStore {
    async fn upsert_node(&self, name: &str) -> Result<(), PersistError>;

    async fn upsert_edge(
        &self,
        source: &str,
        target: &str,
        label: &str,
    ) -> Result<(), PersistError>;

    async fn stats(&self) -> Result<StoreStats, PersistError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StoreStats {
    pub entity_count: usize,
    pub relation_count: usize,
}

/// In-memory store for tests and dry runs. Mirrors the database semantics:
/// nodes keyed by name, at most one labeled edge per (source, target).
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryInner>>,
}

#[derive(Default)]
struct MemoryInner {
    nodes: HashSet<String>,
    edges: HashMap<(String, String), String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.lock().nodes.contains(name)
    }

    pub fn edge_label(&self, source: &str, target: &str) -> Option<String> {
        self.lock()
            .edges
            .get(&(source.to_string(), target.to_string()))
            .cloned()
    }

    pub fn node_count(&self) -> usize {
        self.lock().nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.lock().edges.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryInner> {
        self.inner.lock().expect("memory store lock poisoned")
    }
}

impl GraphStore for MemoryStore {
    async fn upsert_node(&self, name: &str) -> Result<(), PersistError> {
        self.lock().nodes.insert(name.to_string());
        Ok(())
    }

    async fn upsert_edge(
        &self,
        source: &str,
        target: &str,
        label: &str,
    ) -> Result<(), PersistError> {
        self.lock().edges.insert(
            (source.to_string(), target.to_string()),
            label.to_string(),
        );
        Ok(())
    }

    async fn stats(&self) -> Result<StoreStats, PersistError> {
        let inner = self.lock();
        Ok(StoreStats {
            entity_count: inner.nodes.len(),
            relation_count: inner.edges.len(),
        })
    }
}
