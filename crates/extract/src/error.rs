use thiserror::Error;

/// Completion-service failure. Always recovered at the call site by skipping
/// the affected item; never aborts a run.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("completion service returned status {0}")]
    Status(u16),

    #[error("malformed completion response: {0}")]
    MalformedResponse(String),

    #[error("mock completion script exhausted")]
    ScriptExhausted,
}
