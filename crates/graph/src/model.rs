use std::collections::HashMap;

/// The accumulated knowledge graph for one run: insertion-ordered nodes with
/// a name lookup, and directed labeled edges keyed by endpoint pair. At most
/// one edge per (source, target); a later label overwrites an earlier one.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<String>,
    node_index: HashMap<String, usize>,
    edges: HashMap<(String, String), String>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node if absent. Idempotent.
    pub fn add_node(&mut self, name: impl Into<String>) -> usize {
        let name = name.into();
        if let Some(&idx) = self.node_index.get(&name) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(name.clone());
        self.node_index.insert(name, idx);
        idx
    }

    /// Insert or overwrite the edge from `source` to `target`. Both
    /// endpoints are inserted as nodes first, so an edge can never dangle.
    pub fn add_edge(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        label: impl Into<String>,
    ) {
        let source = source.into();
        let target = target.into();
        self.add_node(source.clone());
        self.add_node(target.clone());
        self.edges.insert((source, target), label.into());
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.node_index.contains_key(name)
    }

    pub fn edge_label(&self, source: &str, target: &str) -> Option<&str> {
        self.edges
            .get(&(source.to_string(), target.to_string()))
            .map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    /// Edges as (source, target, label). No ordering is guaranteed.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.edges
            .iter()
            .map(|((s, t), l)| (s.as_str(), t.as_str(), l.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn re_adding_a_node_is_a_no_op() {
        let mut graph = Graph::new();
        let first = graph.add_node("Alice");
        let second = graph.add_node("Alice");

        assert_eq!(first, second);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn add_edge_inserts_missing_endpoints() {
        let mut graph = Graph::new();
        graph.add_edge("Alice", "Bob", "knows");

        assert!(graph.contains_node("Alice"));
        assert!(graph.contains_node("Bob"));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_label("Alice", "Bob"), Some("knows"));
    }

    #[test]
    fn later_edge_label_overwrites_earlier() {
        let mut graph = Graph::new();
        graph.add_edge("Alice", "Bob", "knows");
        graph.add_edge("Alice", "Bob", "employs");

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_label("Alice", "Bob"), Some("employs"));
    }

    #[test]
    fn edges_are_directed() {
        let mut graph = Graph::new();
        graph.add_edge("Alice", "Bob", "knows");

        assert_eq!(graph.edge_label("Bob", "Alice"), None);
    }
}
