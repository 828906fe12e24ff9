// src/core/renderer.rs
//! Message to render descriptor dispatch

use tracing::debug;

use crate::config::RendererSettings;
use crate::core::link_resolver;
use crate::core::registry::{CommandEntry, CommandRegistry};
use crate::diagnostics::{RenderOutcome, SkipReason};
use crate::types::{CommandKind, RenderDescriptor, StructuredRecord};

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    settings: RendererSettings,
    registry: CommandRegistry,
}

impl Renderer {
    pub fn new(settings: RendererSettings) -> Self {
        Self {
            settings,
            registry: CommandRegistry::default(),
        }
    }

    pub fn with_registry(mut self, registry: CommandRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn settings(&self) -> &RendererSettings {
        &self.settings
    }

    pub fn detect_command(&self, message: &str) -> Option<CommandKind> {
        self.registry.detect(message).map(|entry| entry.kind)
    }

    /// Records for `kind` regardless of which keyword detection would pick.
    /// Unregistered kinds yield nothing.
    pub fn extract(&self, kind: CommandKind, message: &str) -> Vec<StructuredRecord> {
        match self.registry.get(kind) {
            Some(entry) => (entry.extract)(&self.settings, message).records,
            None => {
                debug!("No extractor registered for {}", kind);
                Vec::new()
            }
        }
    }

    pub fn favicon_url(&self, link: &str) -> String {
        link_resolver::favicon_url(&self.settings, link)
    }

    pub fn render_outcome(&self, message: &str) -> RenderOutcome {
        let Some(entry) = self.registry.detect(message) else {
            return Self::skipped(SkipReason::NoCommandDetected);
        };
        self.render_entry(entry, message)
    }

    pub fn renderable_for(&self, message: &str) -> Option<RenderDescriptor> {
        self.render_outcome(message).into_descriptor()
    }

    fn render_entry(&self, entry: &CommandEntry, message: &str) -> RenderOutcome {
        let extraction = (entry.extract)(&self.settings, message);

        if extraction.records.is_empty() {
            let reason = if extraction.malformed {
                SkipReason::MalformedPayload(entry.kind)
            } else {
                SkipReason::EmptyResultSet(entry.kind)
            };
            return Self::skipped(reason);
        }

        debug!(
            "Rendering {} with {} record(s)",
            entry.kind,
            extraction.records.len()
        );
        RenderOutcome::Rendered(RenderDescriptor {
            kind: entry.kind,
            records: extraction.records,
        })
    }

    fn skipped(reason: SkipReason) -> RenderOutcome {
        debug!(
            code = reason.code(),
            kind = ?reason.kind(),
            "Nothing to render: {}",
            reason
        );
        RenderOutcome::Skipped { reason }
    }
}
