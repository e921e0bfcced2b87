use thiserror::Error;

/// Malformed summary text. Recovered by skipping the summary; individual
/// malformed lines inside a summary are ignored without error.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("summary contains no recognized Entities/Relationships section")]
    NoRecognizedSections,
}
