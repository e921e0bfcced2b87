pub mod builder;
pub mod error;
pub mod model;
pub mod parser;

pub use builder::{GraphBuild, SkippedSummary, build_graph};
pub use error::ParseError;
pub use model::Graph;
pub use parser::{ParsedSummary, Relation, parse_summary};
