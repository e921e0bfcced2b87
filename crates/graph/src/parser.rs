use regex::Regex;

use crate::error::ParseError;

/// Entity and relationship lines recognized in one summary, before the fold
/// merges them into the run graph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSummary {
    pub entities: Vec<String>,
    pub relations: Vec<Relation>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    pub source: String,
    pub target: String,
    pub label: String,
}

// Model output spells section headers inconsistently; all of these mark the
// same section.
const ENTITY_HEADERS: [&str; 3] = ["### Entities:", "**Entities:**", "Entities:"];
const RELATIONSHIP_HEADERS: [&str; 3] =
    ["### Relationships:", "**Relationships:**", "Relationships:"];

fn is_header(line: &str, variants: &[&str]) -> bool {
    variants.iter().any(|v| line.starts_with(v))
}

/// Parse one summary line by line. Header lines switch between the entity
/// and relationship sections and are not data themselves. Malformed lines
/// are ignored; only a summary with no recognizable section at all is an
/// error.
pub fn parse_summary(text: &str) -> Result<ParsedSummary, ParseError> {
    let enumeration = Regex::new(r"^\s*\d+\.\s*").unwrap();

    let mut parsed = ParsedSummary::default();
    let mut in_entities = false;
    let mut in_relationships = false;
    let mut saw_section = false;

    for line in text.lines() {
        if is_header(line, &ENTITY_HEADERS) {
            in_entities = true;
            in_relationships = false;
            saw_section = true;
            continue;
        }
        if is_header(line, &RELATIONSHIP_HEADERS) {
            in_entities = false;
            in_relationships = true;
            saw_section = true;
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        if in_entities {
            let name = enumeration.replace(line, "").replace("**", "");
            let name = name.trim();
            if !name.is_empty() {
                parsed.entities.push(name.to_string());
            }
        } else if in_relationships {
            let parts: Vec<&str> = line.split("->").collect();
            if parts.len() < 2 {
                // No delimiter: not a relationship line.
                continue;
            }

            let source = parts[0].trim();
            let target = parts[parts.len() - 1].trim();
            if source.is_empty() || target.is_empty() {
                continue;
            }

            // Everything between the endpoints is the label; chained lines
            // keep their inner hops verbatim.
            let label = parts[1..parts.len() - 1].join("->").trim().to_string();

            parsed.relations.push(Relation {
                source: source.to_string(),
                target: target.to_string(),
                label,
            });
        }
    }

    if !saw_section {
        return Err(ParseError::NoRecognizedSections);
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_canonical_summary() {
        let parsed =
            parse_summary("Entities:\n1. Alice\n2. Bob\nRelationships:\nAlice->knows->Bob")
                .unwrap();

        assert_eq!(parsed.entities, ["Alice", "Bob"]);
        assert_eq!(
            parsed.relations,
            [Relation {
                source: "Alice".to_string(),
                target: "Bob".to_string(),
                label: "knows".to_string(),
            }]
        );
    }

    #[test]
    fn all_header_spellings_parse_identically() {
        let body = "\n1. Alice\n";
        let plain = parse_summary(&format!("Entities:{body}")).unwrap();
        let emphasized = parse_summary(&format!("**Entities:**{body}")).unwrap();
        let heading = parse_summary(&format!("### Entities:{body}")).unwrap();

        assert_eq!(plain, emphasized);
        assert_eq!(plain, heading);
        assert_eq!(plain.entities, ["Alice"]);
    }

    #[test]
    fn entity_lines_lose_markers_and_emphasis() {
        let parsed = parse_summary("Entities:\n12. **Ada Lovelace**\n  3.  Babbage ").unwrap();
        assert_eq!(parsed.entities, ["Ada Lovelace", "Babbage"]);
    }

    #[test]
    fn relationship_line_without_delimiter_is_ignored() {
        let parsed = parse_summary("Relationships:\nAlice knows Bob\n").unwrap();
        assert!(parsed.relations.is_empty());
    }

    #[test]
    fn chained_relationship_keeps_inner_hops_as_label() {
        let parsed = parse_summary("Relationships:\nAlice -> knows -> Bob -> via -> Carol").unwrap();

        assert_eq!(parsed.relations.len(), 1);
        let relation = &parsed.relations[0];
        assert_eq!(relation.source, "Alice");
        assert_eq!(relation.target, "Carol");
        assert_eq!(relation.label, "knows -> Bob -> via");
    }

    #[test]
    fn two_part_relationship_gets_an_empty_label() {
        let parsed = parse_summary("Relationships:\nAlice->Bob").unwrap();
        assert_eq!(parsed.relations[0].label, "");
    }

    #[test]
    fn header_switches_back_and_forth() {
        let parsed = parse_summary(
            "Entities:\nAlice\nRelationships:\nAlice->knows->Bob\nEntities:\nCarol",
        )
        .unwrap();

        assert_eq!(parsed.entities, ["Alice", "Carol"]);
        assert_eq!(parsed.relations.len(), 1);
    }

    #[test]
    fn lines_before_any_header_are_not_data() {
        let parsed = parse_summary("Here is the breakdown:\nEntities:\nAlice").unwrap();
        assert_eq!(parsed.entities, ["Alice"]);
    }

    #[test]
    fn summary_without_sections_is_an_error() {
        let err = parse_summary("just prose, no structure at all").unwrap_err();
        assert!(matches!(err, ParseError::NoRecognizedSections));
    }
}
