use neo4rs::Query;

use crate::error::PersistError;
use crate::store::{GraphStore, StoreStats};

pub struct Neo4jStore {
    graph: neo4rs::Graph,
}

fn query_err(e: neo4rs::Error) -> PersistError {
    PersistError::Query(e.to_string())
}

impl Neo4jStore {
    /// Connect once for the run. Missing or bad credentials surface here,
    /// before any work is done. The connection is dropped when the store is.
    pub async fn connect(uri: &str, user: &str, password: &str) -> Result<Self, PersistError> {
        let graph = neo4rs::Graph::new(uri, user, password)
            .await
            .map_err(|e| PersistError::Connection(e.to_string()))?;
        Ok(Self { graph })
    }
}

impl GraphStore for Neo4jStore {
    async fn upsert_node(&self, name: &str) -> Result<(), PersistError> {
        let query = Query::new("MERGE (n:Entity {name: $name})".to_string())
            .param("name", name.to_string());

        self.graph.run(query).await.map_err(query_err)
    }

    async fn upsert_edge(
        &self,
        source: &str,
        target: &str,
        label: &str,
    ) -> Result<(), PersistError> {
        // Single RELATION per endpoint pair; SET overwrites the label on
        // re-runs instead of growing parallel edges.
        let query = Query::new(
            r#"
            MATCH (a:Entity {name: $source})
            MATCH (b:Entity {name: $target})
            MERGE (a)-[r:RELATION]->(b)
            SET r.label = $label
            "#
            .to_string(),
        )
        .param("source", source.to_string())
        .param("target", target.to_string())
        .param("label", label.to_string());

        self.graph.run(query).await.map_err(query_err)
    }

    async fn stats(&self) -> Result<StoreStats, PersistError> {
        let entity_query = Query::new("MATCH (e:Entity) RETURN count(e) as count".to_string());
        let mut result = self.graph.execute(entity_query).await.map_err(query_err)?;
        let entity_count = if let Some(row) = result.next().await.map_err(query_err)? {
            row.get::<i64>("count").unwrap_or(0) as usize
        } else {
            0
        };

        let relation_query =
            Query::new("MATCH ()-[r:RELATION]->() RETURN count(r) as count".to_string());
        let mut result = self.graph.execute(relation_query).await.map_err(query_err)?;
        let relation_count = if let Some(row) = result.next().await.map_err(query_err)? {
            row.get::<i64>("count").unwrap_or(0) as usize
        } else {
            0
        };

        Ok(StoreStats {
            entity_count,
            relation_count,
        })
    }
}
