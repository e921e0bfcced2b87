pub mod chunk;
pub mod chunker;
pub mod error;
pub mod reader;

pub use chunk::Chunk;
pub use chunker::{Chunker, ChunkerConfig};
pub use error::IngestError;
pub use reader::FileReader;

use sha2::{Digest, Sha256};

/// Generate a stable document ID from a file path.
pub fn generate_doc_id(path: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(path.as_bytes());
    let result = hasher.finalize();
    hex::encode(&result[..16])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doc_ids_are_stable_and_distinct() {
        assert_eq!(generate_doc_id("a.txt"), generate_doc_id("a.txt"));
        assert_ne!(generate_doc_id("a.txt"), generate_doc_id("b.txt"));
        assert_eq!(generate_doc_id("a.txt").len(), 32);
    }
}
