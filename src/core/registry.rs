// src/core/registry.rs
//! Keyword to extractor table used by dispatch

use crate::config::RendererSettings;
use crate::core::extractors::{extract_entities, extract_jobs, extract_portals, extract_resume};
use crate::core::matcher::find_keyword;
use crate::diagnostics::Extraction;
use crate::types::{CommandKind, StructuredRecord};

pub type ExtractFn = fn(&RendererSettings, &str) -> Extraction<StructuredRecord>;

#[derive(Clone, Copy)]
pub struct CommandEntry {
    pub kind: CommandKind,
    pub keyword: &'static str,
    pub extract: ExtractFn,
}

impl std::fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandEntry")
            .field("kind", &self.kind)
            .field("keyword", &self.keyword)
            .finish()
    }
}

fn job_data(_: &RendererSettings, message: &str) -> Extraction<StructuredRecord> {
    extract_jobs(message).map(StructuredRecord::Job)
}

fn community(_: &RendererSettings, message: &str) -> Extraction<StructuredRecord> {
    extract_entities(CommandKind::Community, message).map(StructuredRecord::Entity)
}

fn courses(_: &RendererSettings, message: &str) -> Extraction<StructuredRecord> {
    extract_entities(CommandKind::Courses, message).map(StructuredRecord::Entity)
}

fn resume(_: &RendererSettings, message: &str) -> Extraction<StructuredRecord> {
    extract_resume(message).map(StructuredRecord::Resume)
}

fn job_portals(settings: &RendererSettings, _: &str) -> Extraction<StructuredRecord> {
    extract_portals(settings).map(StructuredRecord::Entity)
}

/// Ordered command table; earlier entries take priority during detection
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        for kind in CommandKind::PRIORITY {
            let extract: ExtractFn = match kind {
                CommandKind::JobData => job_data,
                CommandKind::Community => community,
                CommandKind::Courses => courses,
                CommandKind::Resume => resume,
                CommandKind::JobPortals => job_portals,
            };
            registry.register(kind, extract);
        }
        registry
    }
}

impl CommandRegistry {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a command, or replace the extractor of an already registered kind
    /// while keeping its priority
    pub fn register(&mut self, kind: CommandKind, extract: ExtractFn) -> &mut Self {
        let entry = CommandEntry {
            kind,
            keyword: kind.keyword(),
            extract,
        };
        match self.entries.iter_mut().find(|e| e.kind == kind) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        self
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    pub fn get(&self, kind: CommandKind) -> Option<&CommandEntry> {
        self.entries.iter().find(|e| e.kind == kind)
    }

    /// First entry whose keyword appears anywhere in the message. Matching is
    /// a plain substring search, so `/resumes` or prose mentioning `/resume`
    /// also matches.
    pub fn detect(&self, message: &str) -> Option<&CommandEntry> {
        self.entries
            .iter()
            .find(|entry| find_keyword(message, entry.keyword).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LinkedEntityRecord;

    #[test]
    fn test_default_registry_follows_priority() {
        let registry = CommandRegistry::default();
        let kinds: Vec<_> = registry.entries().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, CommandKind::PRIORITY);
    }

    fn detect(message: &str) -> Option<CommandKind> {
        CommandRegistry::default().detect(message).map(|e| e.kind)
    }

    #[test]
    fn test_detect() {
        assert_eq!(detect("hello there"), None);
        assert_eq!(detect(""), None);
        assert_eq!(detect("Here you go /JobData [{}]"), Some(CommandKind::JobData));
        assert_eq!(
            detect("/COMMUNITY\nRust:Reddit:https://reddit.com/r/rust"),
            Some(CommandKind::Community)
        );
        assert_eq!(detect("/jobportals"), Some(CommandKind::JobPortals));
    }

    #[test]
    fn test_detect_priority_order_wins() {
        assert_eq!(
            detect("/resume: https://a.b/c.pdf and /jobdata []"),
            Some(CommandKind::JobData)
        );
        assert_eq!(detect("/courses then /community"), Some(CommandKind::Community));
    }

    #[test]
    fn test_detect_matches_inside_other_text() {
        assert_eq!(
            detect("I uploaded it to my/resumes folder"),
            Some(CommandKind::Resume)
        );
    }

    #[test]
    fn test_detect_uses_registered_entries_only() {
        let mut registry = CommandRegistry::empty();
        registry.register(CommandKind::Resume, resume);

        assert!(registry.detect("/jobdata []").is_none());
        assert_eq!(
            registry.detect("/resume: https://a.b/c.pdf").map(|e| e.kind),
            Some(CommandKind::Resume)
        );
    }

    #[test]
    fn test_register_replaces_extractor_in_place() {
        fn fixed(_: &RendererSettings, _: &str) -> Extraction<StructuredRecord> {
            Extraction::records(vec![StructuredRecord::Entity(LinkedEntityRecord {
                name: "Fixed".to_string(),
                platform_or_category: "Test".to_string(),
                link: "https://fixed.test".to_string(),
                description: None,
            })])
        }

        let mut registry = CommandRegistry::default();
        registry.register(CommandKind::Community, fixed);

        assert_eq!(registry.entries().len(), 5);
        assert_eq!(registry.entries()[1].kind, CommandKind::Community);
        let entry = registry.get(CommandKind::Community).unwrap();
        let extraction = (entry.extract)(&RendererSettings::default(), "/community");
        assert_eq!(extraction.records.len(), 1);
    }
}
