// src/types/records.rs
//! Structured records decoded from command payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ===== Command Kinds =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    JobData,
    Community,
    Courses,
    Resume,
    JobPortals,
}

impl CommandKind {
    /// Detection priority; the first kind whose keyword is present wins
    pub const PRIORITY: [CommandKind; 5] = [
        Self::JobData,
        Self::Community,
        Self::Courses,
        Self::Resume,
        Self::JobPortals,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::JobData => "/jobdata",
            Self::Community => "/community",
            Self::Courses => "/courses",
            Self::Resume => "/resume",
            Self::JobPortals => "/jobportals",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::JobData => "Jobs",
            Self::Community => "Communities",
            Self::Courses => "Courses",
            Self::Resume => "Resume",
            Self::JobPortals => "Job Portals",
        }
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

// ===== Records =====

/// One job posting as returned by the job search aggregator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawJobRecord")]
pub struct JobRecord {
    pub title: String,
    pub employer_name: String,
    pub employer_logo_url: Option<String>,
    pub apply_link: String,
    /// Empty when the aggregator sent none
    pub employment_type: String,
    pub posted_at_utc: Option<String>,
}

/// Job object as written by the aggregator or the assistant; each field may
/// arrive under any of its spellings, and more than one may be present
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawJobRecord {
    job_title: Option<String>,
    title: Option<String>,
    employer_name: Option<String>,
    #[serde(rename = "employerName")]
    employer_name_camel: Option<String>,
    employer_logo: Option<String>,
    employer_logo_url: Option<String>,
    #[serde(rename = "employerLogo")]
    employer_logo_camel: Option<String>,
    #[serde(rename = "employerLogoUrl")]
    employer_logo_url_camel: Option<String>,
    job_apply_link: Option<String>,
    apply_link: Option<String>,
    #[serde(rename = "applyLink")]
    apply_link_camel: Option<String>,
    job_employment_type: Option<String>,
    employment_type: Option<String>,
    #[serde(rename = "employmentType")]
    employment_type_camel: Option<String>,
    job_posted_at_datetime_utc: Option<String>,
    posted_at_utc: Option<String>,
    #[serde(rename = "postedAtUtc")]
    posted_at_utc_camel: Option<String>,
}

/// First spelling that carries a non-blank value
fn first_present(candidates: [Option<String>; 4]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}

impl TryFrom<RawJobRecord> for JobRecord {
    type Error = String;

    fn try_from(raw: RawJobRecord) -> Result<Self, Self::Error> {
        let title = first_present([raw.job_title, raw.title, None, None])
            .ok_or("missing job title")?;
        let employer_name = first_present([raw.employer_name, raw.employer_name_camel, None, None])
            .ok_or("missing employer name")?;
        let apply_link = first_present([
            raw.job_apply_link,
            raw.apply_link,
            raw.apply_link_camel,
            None,
        ])
        .ok_or("missing apply link")?;

        Ok(Self {
            title,
            employer_name,
            employer_logo_url: first_present([
                raw.employer_logo,
                raw.employer_logo_url,
                raw.employer_logo_camel,
                raw.employer_logo_url_camel,
            ]),
            apply_link,
            employment_type: first_present([
                raw.job_employment_type,
                raw.employment_type,
                raw.employment_type_camel,
                None,
            ])
            .unwrap_or_default(),
            posted_at_utc: first_present([
                raw.job_posted_at_datetime_utc,
                raw.posted_at_utc,
                raw.posted_at_utc_camel,
                None,
            ]),
        })
    }
}

impl JobRecord {
    /// Parsed posting time; `None` when absent or not RFC 3339
    pub fn posted_at(&self) -> Option<DateTime<Utc>> {
        self.posted_at_utc
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw.trim()).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Shared shape for communities, courses and job portals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedEntityRecord {
    pub name: String,
    pub platform_or_category: String,
    pub link: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub url: String,
    pub derived_filename: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StructuredRecord {
    Job(JobRecord),
    Entity(LinkedEntityRecord),
    Resume(ResumeRecord),
}

/// What the presentation layer receives for a message that renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderDescriptor {
    pub kind: CommandKind,
    pub records: Vec<StructuredRecord>,
}
