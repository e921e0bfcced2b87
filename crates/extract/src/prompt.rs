/// System instruction for the extraction pass over raw chunk text.
pub const EXTRACTION_INSTRUCTION: &str =
    "Extract entities and relationships from the following text.";

/// System instruction for the normalization pass. `->` is the relationship
/// delimiter the downstream summary parser splits on.
pub const SUMMARY_INSTRUCTION: &str = "Summarize the following entities and relationships \
     in a structured format. Use '->' to represent relationships, after the \
     'Relationships:' word.";
