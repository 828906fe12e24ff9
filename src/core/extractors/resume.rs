// src/core/extractors/resume.rs
//! `/resume: <url>` links to a hosted resume file

use once_cell::sync::Lazy;
use percent_encoding::percent_decode_str;
use regex::Regex;
use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::diagnostics::Extraction;
use crate::types::ResumeRecord;

static RESUME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i:/resume)\s*:\s*(https?://\S+)").expect("valid resume pattern"));

// 2024-01-01T00-00-00Z, 2024-01-01T00:00:00.123Z, 2024-01-01, 20240101_120000, 1714552800000
static TIMESTAMP_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[_-]?(?:\d{4}-\d{2}-\d{2}(?:[T_ ]\d{2}[-:]?\d{2}[-:]?\d{2}(?:\.\d+)?Z?)?|\d{8}[_T]?\d{6}|\d{10,13})$",
    )
    .expect("valid timestamp pattern")
});

static REPEATED_UNDERSCORES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_{2,}").expect("valid underscore pattern"));

const FALLBACK_STEM: &str = "resume";
const UUID_LEN: usize = 36;

pub fn extract_resume(message: &str) -> Extraction<ResumeRecord> {
    let Some(captures) = RESUME_RE.captures(message) else {
        debug!("No `/resume: <url>` pattern in message");
        return Extraction::malformed();
    };

    let url = captures[1].to_string();
    let derived_filename = derive_filename(&url);

    Extraction::records(vec![ResumeRecord {
        url,
        derived_filename,
    }])
}

/// Last path segment of the URL, without query or fragment, percent-decoded
fn last_path_segment(url: &str) -> String {
    let segment = match Url::parse(url) {
        Ok(parsed) => parsed
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .unwrap_or_default()
            .to_string(),
        Err(_) => url
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .rsplit('/')
            .find(|s| !s.is_empty())
            .unwrap_or_default()
            .to_string(),
    };

    percent_decode_str(&segment).decode_utf8_lossy().into_owned()
}

fn strip_uuid_prefix(stem: &str) -> &str {
    match stem.get(..UUID_LEN) {
        Some(prefix) if Uuid::parse_str(prefix).is_ok() => &stem[UUID_LEN..],
        _ => stem,
    }
}

/// Human-facing filename for an uploaded resume: the stored name minus the
/// upload UUID prefix and timestamp suffix
pub fn derive_filename(url: &str) -> String {
    let segment = last_path_segment(url);

    let (stem, extension) = match segment.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => (stem, Some(ext)),
        _ => (segment.as_str(), None),
    };

    let stem = strip_uuid_prefix(stem);
    let stem = TIMESTAMP_SUFFIX_RE.replace(stem, "");
    let stem = REPEATED_UNDERSCORES_RE.replace_all(&stem, "_");
    let stem = stem.trim_matches(|c| c == '_' || c == '-');
    let stem = if stem.is_empty() { FALLBACK_STEM } else { stem };

    match extension {
        Some(ext) => format!("{}.{}", stem, ext),
        None => stem.to_string(),
    }
}
