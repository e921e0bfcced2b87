use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistError {
    /// Raised once at startup; fatal for the run.
    #[error("failed to connect to graph database: {0}")]
    Connection(String),

    /// Raised per upsert; recovered by skipping the node or edge.
    #[error("graph database query failed: {0}")]
    Query(String),
}
