use crate::chunk::Chunk;
use crate::error::IngestError;

#[derive(Debug, Clone, Copy)]
pub struct ChunkerConfig {
    /// Window length in characters.
    pub chunk_size: usize,
    /// Characters shared between consecutive windows.
    pub overlap: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: 600,
            overlap: 100,
        }
    }
}

impl ChunkerConfig {
    /// The step must be positive or the window sequence never advances.
    pub fn validate(&self) -> Result<(), IngestError> {
        if self.overlap >= self.chunk_size {
            return Err(IngestError::InvalidConfiguration {
                chunk_size: self.chunk_size,
                overlap: self.overlap,
            });
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    pub fn new(config: ChunkerConfig) -> Result<Self, IngestError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Window the document into `chunk_size`-character chunks, each sharing
    /// `overlap` characters with its predecessor. The final chunk may be
    /// shorter. Pure; one document at a time.
    pub fn chunk_text(&self, doc_id: &str, text: &str, source: &str) -> Vec<Chunk> {
        let step = self.config.chunk_size - self.config.overlap;

        // Byte offset of every char boundary, so a window never splits a
        // multi-byte character.
        let mut bounds: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        bounds.push(text.len());
        let char_count = bounds.len() - 1;

        let mut chunks = Vec::new();
        let mut start = 0;
        while start < char_count {
            let end = (start + self.config.chunk_size).min(char_count);
            chunks.push(Chunk {
                doc_id: doc_id.to_string(),
                index: chunks.len(),
                text: text[bounds[start]..bounds[end]].to_string(),
                source: source.to_string(),
            });
            start += step;
        }

        chunks
    }
}
