use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("invalid chunker configuration: overlap {overlap} must be smaller than chunk size {chunk_size}")]
    InvalidConfiguration { chunk_size: usize, overlap: usize },

    #[error("failed to read input directory {path}: {source}")]
    Directory {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
