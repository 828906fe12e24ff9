// src/core/cards.rs
//! Display-ready card view models built from render descriptors

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::RendererSettings;
use crate::core::link_resolver::favicon_url;
use crate::types::{JobRecord, LinkedEntityRecord, RenderDescriptor, ResumeRecord, StructuredRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub title: String,
    pub subtitle: String,
    pub badge: Option<String>,
    pub body: Option<String>,
    /// Opened by the platform link launcher when the card is activated
    pub link: String,
    pub icon_url: String,
    pub posted_label: Option<String>,
}

impl Card {
    pub fn from_record(
        record: &StructuredRecord,
        settings: &RendererSettings,
        now: DateTime<Utc>,
    ) -> Self {
        match record {
            StructuredRecord::Job(job) => Self::from_job(job, settings, now),
            StructuredRecord::Entity(entity) => Self::from_entity(entity, settings),
            StructuredRecord::Resume(resume) => Self::from_resume(resume, settings),
        }
    }

    fn from_job(job: &JobRecord, settings: &RendererSettings, now: DateTime<Utc>) -> Self {
        let icon_url = job
            .employer_logo_url
            .as_deref()
            .map(str::trim)
            .filter(|logo| !logo.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| favicon_url(settings, &job.apply_link));

        Self {
            title: job.title.clone(),
            subtitle: job.employer_name.clone(),
            badge: Some(job.employment_type.clone()).filter(|t| !t.trim().is_empty()),
            body: None,
            link: job.apply_link.clone(),
            icon_url,
            posted_label: job.posted_at().map(|posted| posted_label(posted, now)),
        }
    }

    fn from_entity(entity: &LinkedEntityRecord, settings: &RendererSettings) -> Self {
        Self {
            title: entity.name.clone(),
            subtitle: entity.platform_or_category.clone(),
            badge: None,
            body: entity.description.clone(),
            link: entity.link.clone(),
            icon_url: favicon_url(settings, &entity.link),
            posted_label: None,
        }
    }

    fn from_resume(resume: &ResumeRecord, settings: &RendererSettings) -> Self {
        Self {
            title: resume.derived_filename.clone(),
            subtitle: "Resume".to_string(),
            badge: None,
            body: None,
            link: resume.url.clone(),
            icon_url: favicon_url(settings, &resume.url),
            posted_label: None,
        }
    }
}

/// "Posted today" / "Posted 1 day ago" / "Posted N days ago"
pub fn posted_label(posted: DateTime<Utc>, now: DateTime<Utc>) -> String {
    match (now - posted).num_days() {
        days if days <= 0 => "Posted today".to_string(),
        1 => "Posted 1 day ago".to_string(),
        days => format!("Posted {} days ago", days),
    }
}

impl RenderDescriptor {
    pub fn cards(&self, settings: &RendererSettings, now: DateTime<Utc>) -> Vec<Card> {
        self.records
            .iter()
            .map(|record| Card::from_record(record, settings, now))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
    }

    fn job(logo: Option<&str>, posted: Option<&str>) -> JobRecord {
        JobRecord {
            title: "Platform Engineer".to_string(),
            employer_name: "Ferrous".to_string(),
            employer_logo_url: logo.map(str::to_string),
            apply_link: "https://jobs.ferrous.io/42".to_string(),
            employment_type: "FULLTIME".to_string(),
            posted_at_utc: posted.map(str::to_string),
        }
    }

    #[test]
    fn test_posted_label() {
        let now = now();
        assert_eq!(posted_label(now, now), "Posted today");
        assert_eq!(
            posted_label(now + chrono::Duration::hours(5), now),
            "Posted today"
        );
        assert_eq!(
            posted_label(now - chrono::Duration::hours(30), now),
            "Posted 1 day ago"
        );
        assert_eq!(
            posted_label(now - chrono::Duration::days(9), now),
            "Posted 9 days ago"
        );
    }

    #[test]
    fn test_job_card_prefers_employer_logo() {
        let settings = RendererSettings::default();
        let with_logo = Card::from_job(
            &job(Some("https://logo.ferrous.io/l.png"), Some("2024-05-07T08:00:00Z")),
            &settings,
            now(),
        );
        assert_eq!(with_logo.icon_url, "https://logo.ferrous.io/l.png");
        assert_eq!(with_logo.posted_label.as_deref(), Some("Posted 3 days ago"));
        assert_eq!(with_logo.badge.as_deref(), Some("FULLTIME"));

        let without_logo = Card::from_job(&job(Some("  "), Some("last week")), &settings, now());
        assert_eq!(
            without_logo.icon_url,
            "https://www.google.com/s2/favicons?domain=jobs.ferrous.io&sz=64"
        );
        assert_eq!(without_logo.posted_label, None);
    }

    #[test]
    fn test_descriptor_cards() {
        let settings = RendererSettings::default();
        let descriptor = RenderDescriptor {
            kind: crate::types::CommandKind::Resume,
            records: vec![StructuredRecord::Resume(ResumeRecord {
                url: "not-a-url".to_string(),
                derived_filename: "cv.pdf".to_string(),
            })],
        };

        let cards = descriptor.cards(&settings, now());
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "cv.pdf");
        assert_eq!(cards[0].icon_url, settings.placeholder_icon_url);
    }
}
