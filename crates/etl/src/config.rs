use std::path::PathBuf;

use ingest::ChunkerConfig;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("environment variable {name} is not a number: {value}")]
    InvalidNumber { name: &'static str, value: String },

    #[error(transparent)]
    InvalidChunking(#[from] ingest::IngestError),
}

/// Everything the run needs, loaded once at startup and passed down.
#[derive(Debug, Clone)]
pub struct EtlConfig {
    pub input_dir: PathBuf,
    pub chunking: ChunkerConfig,
    pub neo4j: Neo4jConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Clone)]
pub struct Neo4jConfig {
    pub uri: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
}

impl EtlConfig {
    /// Load from the environment. Database credentials are required; the
    /// rest falls back to defaults. Invalid chunk sizing is rejected here,
    /// before any work starts.
    pub fn from_env() -> Result<Self, ConfigError> {
        let chunking = ChunkerConfig {
            chunk_size: env_number("CHUNK_SIZE", 600)?,
            overlap: env_number("CHUNK_OVERLAP", 100)?,
        };
        chunking.validate()?;

        Ok(Self {
            input_dir: PathBuf::from(env_or("TXT_DIRECTORY_PATH", "data")),
            chunking,
            neo4j: Neo4jConfig {
                uri: required("NEO4J_URI")?,
                username: required("NEO4J_USERNAME")?,
                password: required("NEO4J_PASSWORD")?,
            },
            llm: LlmConfig {
                base_url: env_or("OLLAMA_URL", "http://localhost:11434"),
                model: env_or("OLLAMA_MODEL", "llama3"),
            },
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_number(name: &'static str, default: usize) -> Result<usize, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidNumber { name, value }),
        Err(_) => Ok(default),
    }
}
