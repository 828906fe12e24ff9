// src/core/extractors/job_data.rs
//! `/jobdata [ ... ]` payloads carrying job search results as a JSON array

use serde_json::Value;
use tracing::debug;

use crate::core::matcher::find_keyword;
use crate::diagnostics::Extraction;
use crate::types::{CommandKind, JobRecord};

/// The JSON span runs from the first `[` after the keyword to the last `]`
/// of the message
fn json_span(message: &str) -> Option<&str> {
    let keyword = CommandKind::JobData.keyword();
    let after_keyword = find_keyword(message, keyword)? + keyword.len();
    let rest = &message[after_keyword..];

    let start = rest.find('[')?;
    let end = rest.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&rest[start..=end])
}

pub fn extract_jobs(message: &str) -> Extraction<JobRecord> {
    let Some(span) = json_span(message) else {
        debug!("No JSON array after {}", CommandKind::JobData);
        return Extraction::malformed();
    };

    let items: Vec<Value> = match serde_json::from_str(span) {
        Ok(items) => items,
        Err(e) => {
            debug!("Discarding malformed job payload: {}", e);
            return Extraction::malformed();
        }
    };

    let jobs = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<JobRecord>(item) {
            Ok(job) => Some(job),
            Err(e) => {
                debug!("Dropping job entry {}: {}", index, e);
                None
            }
        })
        .collect();

    Extraction::records(jobs)
}
