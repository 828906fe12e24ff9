//! Chat message command extraction for the job-search assistant.
//!
//! Assistant and user messages may embed a slash-command (`/jobdata`,
//! `/community`, `/courses`, `/resume`, `/jobportals`) followed by a payload.
//! [`Renderer`] detects the command, extracts typed records and returns a
//! [`RenderDescriptor`], or `None` when there is nothing to show.

pub mod config;
pub mod core;
pub mod diagnostics;
pub mod environment;
pub mod types;
pub mod utils;

pub use crate::config::RendererSettings;
pub use crate::core::{Card, CommandRegistry, Renderer};
pub use crate::diagnostics::{RenderOutcome, SkipReason};
pub use crate::types::{
    CommandKind, JobRecord, LinkedEntityRecord, RenderDescriptor, ResumeRecord, StructuredRecord,
};

/// Convenience function rendering a message with the built-in settings
pub fn render_message(message: &str) -> Option<RenderDescriptor> {
    Renderer::default().renderable_for(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_message() {
        assert_eq!(render_message("no commands here"), None);

        let descriptor = render_message(
            "Join these:\n/community\nFoo:Reddit:https://a.b/c\nBar:Discord:https://x.y:8080/z",
        )
        .unwrap();
        assert_eq!(descriptor.kind, CommandKind::Community);
        match &descriptor.records[1] {
            StructuredRecord::Entity(entity) => assert_eq!(entity.link, "https://x.y:8080/z"),
            other => panic!("unexpected record: {:?}", other),
        }
    }

    #[test]
    fn test_descriptor_serializes_for_ui() {
        let descriptor = render_message(
            "/resume: https://cdn.io/3f2b8c1e-9a4d-4e5f-8b6a-1c2d3e4f5a6b_resume_2024-01-01T00-00-00Z.pdf",
        )
        .unwrap();
        let json = serde_json::to_value(&descriptor).unwrap();

        assert_eq!(json["kind"], "resume");
        assert_eq!(json["records"][0]["type"], "resume");
        assert_eq!(json["records"][0]["derived_filename"], "resume.pdf");
    }
}
