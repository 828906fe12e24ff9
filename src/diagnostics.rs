// src/diagnostics.rs
use serde::Serialize;

use crate::types::{CommandKind, RenderDescriptor};

/// Why a message produced nothing to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    NoCommandDetected,
    MalformedPayload(CommandKind),
    EmptyResultSet(CommandKind),
}

impl SkipReason {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoCommandDetected => "NO_COMMAND",
            Self::MalformedPayload(_) => "MALFORMED_PAYLOAD",
            Self::EmptyResultSet(_) => "EMPTY_RESULT_SET",
        }
    }

    pub fn kind(&self) -> Option<CommandKind> {
        match self {
            Self::NoCommandDetected => None,
            Self::MalformedPayload(kind) | Self::EmptyResultSet(kind) => Some(*kind),
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoCommandDetected => write!(f, "no command keyword in message"),
            Self::MalformedPayload(kind) => write!(f, "{} payload could not be decoded", kind),
            Self::EmptyResultSet(kind) => write!(f, "{} produced no valid records", kind),
        }
    }
}

/// Per-extraction result; `malformed` is set when the payload as a whole was
/// unreadable rather than merely empty
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction<T> {
    pub records: Vec<T>,
    pub malformed: bool,
}

impl<T> Extraction<T> {
    pub fn records(records: Vec<T>) -> Self {
        Self {
            records,
            malformed: false,
        }
    }

    pub fn malformed() -> Self {
        Self {
            records: Vec::new(),
            malformed: true,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Extraction<U> {
        Extraction {
            records: self.records.into_iter().map(f).collect(),
            malformed: self.malformed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RenderOutcome {
    Rendered(RenderDescriptor),
    Skipped { reason: SkipReason },
}

impl RenderOutcome {
    pub fn into_descriptor(self) -> Option<RenderDescriptor> {
        match self {
            Self::Rendered(descriptor) => Some(descriptor),
            Self::Skipped { .. } => None,
        }
    }

    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Self::Rendered(_) => None,
            Self::Skipped { reason } => Some(*reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_display() {
        assert_eq!(SkipReason::NoCommandDetected.code(), "NO_COMMAND");
        assert_eq!(
            SkipReason::MalformedPayload(CommandKind::JobData).to_string(),
            "/jobdata payload could not be decoded"
        );
        assert_eq!(
            SkipReason::EmptyResultSet(CommandKind::Community).kind(),
            Some(CommandKind::Community)
        );
    }
}
