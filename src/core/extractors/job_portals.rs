// src/core/extractors/job_portals.rs
use crate::config::RendererSettings;
use crate::diagnostics::Extraction;
use crate::types::LinkedEntityRecord;

/// `/jobportals` carries no payload; the configured catalog is returned as is
pub fn extract_portals(settings: &RendererSettings) -> Extraction<LinkedEntityRecord> {
    Extraction::records(settings.job_portals.clone())
}
