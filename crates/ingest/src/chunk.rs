use serde::{Deserialize, Serialize};

/// One window of a source document, with enough provenance to identify it in
/// logs. Downstream stages only look at `text`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub doc_id: String,
    /// Position of this window within its document.
    pub index: usize,
    pub text: String,
    pub source: String,
}
