pub mod error;
pub mod neo4j;
pub mod persister;
pub mod store;

pub use error::PersistError;
pub use neo4j::Neo4jStore;
pub use persister::{FailedOp, PersistReport, Persister};
pub use store::{GraphStore, MemoryStore, StoreStats};
