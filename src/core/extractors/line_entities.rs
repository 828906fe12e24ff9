// src/core/extractors/line_entities.rs
//! Colon-delimited `name:platform:link` lines following a keyword line

use tracing::debug;

use crate::diagnostics::Extraction;
use crate::types::{CommandKind, LinkedEntityRecord};

/// Parse one `name:platform:link` line. The link keeps any further colons.
pub fn parse_entity_line(line: &str) -> Option<LinkedEntityRecord> {
    let mut parts = line.split(':');
    let name = parts.next()?.trim();
    let platform = parts.next()?.trim();
    let link = parts.collect::<Vec<_>>().join(":");
    let link = link.trim();

    if name.is_empty() || link.is_empty() {
        return None;
    }

    Some(LinkedEntityRecord {
        name: name.to_string(),
        platform_or_category: platform.to_string(),
        link: link.to_string(),
        description: None,
    })
}

/// Records from every non-empty line after the line that is exactly the keyword
pub fn extract_entities(kind: CommandKind, message: &str) -> Extraction<LinkedEntityRecord> {
    let keyword = kind.keyword();
    let mut lines = message.lines();

    if !lines
        .by_ref()
        .any(|line| line.trim().to_ascii_lowercase() == keyword)
    {
        debug!("{} keyword is not on a line of its own", kind);
        return Extraction::malformed();
    }

    let records = lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let record = parse_entity_line(line);
            if record.is_none() {
                debug!("Skipping {} line without name:platform:link: {}", kind, line);
            }
            record
        })
        .collect();

    Extraction::records(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_community_lines_keep_colons_in_links() {
        let message = "Check these out:\n/community\nFoo:Reddit:https://a.b/c\nBar:Discord:https://x.y:8080/z\n";
        let extraction = extract_entities(CommandKind::Community, message);

        assert_eq!(extraction.records.len(), 2);
        assert_eq!(extraction.records[0].name, "Foo");
        assert_eq!(extraction.records[0].platform_or_category, "Reddit");
        assert_eq!(extraction.records[0].link, "https://a.b/c");
        assert_eq!(extraction.records[1].link, "https://x.y:8080/z");
    }

    #[test]
    fn test_skips_short_and_blank_lines() {
        let message = "  /Courses  \n\nRust Book:Free\nIntro to ML:Coursera:https://coursera.org/ml\n   \n:Udemy:https://udemy.com/x\n";
        let extraction = extract_entities(CommandKind::Courses, message);

        assert!(!extraction.malformed);
        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.records[0].name, "Intro to ML");
        assert_eq!(extraction.records[0].platform_or_category, "Coursera");
    }

    #[test]
    fn test_keyword_must_be_its_own_line() {
        let extraction = extract_entities(
            CommandKind::Community,
            "/community Foo:Reddit:https://a.b/c",
        );
        assert!(extraction.malformed);
        assert!(extraction.records.is_empty());
    }

    #[test]
    fn test_lines_before_keyword_are_ignored() {
        let message = "Early:Slack:https://early.dev\n/community\nLate:Slack:https://late.dev";
        let extraction = extract_entities(CommandKind::Community, message);
        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.records[0].name, "Late");
    }

    #[test]
    fn test_parse_entity_line() {
        assert_eq!(parse_entity_line("only:two"), None);
        assert_eq!(parse_entity_line("name:platform:  "), None);
        let record = parse_entity_line(" Rustaceans : Discord : https://discord.gg/rust ").unwrap();
        assert_eq!(record.name, "Rustaceans");
        assert_eq!(record.link, "https://discord.gg/rust");
    }
}
