// src/config.rs
use serde::{Deserialize, Serialize};

use crate::types::LinkedEntityRecord;

pub const DEFAULT_FAVICON_SERVICE_URL: &str = "https://www.google.com/s2/favicons";
pub const DEFAULT_PLACEHOLDER_ICON_URL: &str = "https://via.placeholder.com/64?text=%3F";
pub const DEFAULT_ICON_SIZE: u32 = 64;

/// Static settings injected into the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererSettings {
    pub favicon_service_url: String,
    pub placeholder_icon_url: String,
    pub icon_size: u32,
    pub job_portals: Vec<LinkedEntityRecord>,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            favicon_service_url: DEFAULT_FAVICON_SERVICE_URL.to_string(),
            placeholder_icon_url: DEFAULT_PLACEHOLDER_ICON_URL.to_string(),
            icon_size: DEFAULT_ICON_SIZE,
            job_portals: default_job_portals(),
        }
    }
}

impl RendererSettings {
    pub fn with_favicon_service_url(mut self, url: String) -> Self {
        self.favicon_service_url = url;
        self
    }

    pub fn with_placeholder_icon_url(mut self, url: String) -> Self {
        self.placeholder_icon_url = url;
        self
    }

    pub fn with_icon_size(mut self, size: u32) -> Self {
        self.icon_size = size;
        self
    }

    pub fn with_job_portals(mut self, portals: Vec<LinkedEntityRecord>) -> Self {
        self.job_portals = portals;
        self
    }
}

fn portal(name: &str, category: &str, link: &str, description: &str) -> LinkedEntityRecord {
    LinkedEntityRecord {
        name: name.to_string(),
        platform_or_category: category.to_string(),
        link: link.to_string(),
        description: Some(description.to_string()),
    }
}

/// Catalog returned for `/jobportals`
pub fn default_job_portals() -> Vec<LinkedEntityRecord> {
    vec![
        portal(
            "Herkey",
            "Women in Tech",
            "https://www.herkey.com/jobs",
            "Career platform for women returning to work and growing their careers",
        ),
        portal(
            "LinkedIn Jobs",
            "General",
            "https://www.linkedin.com/jobs",
            "Professional network with a large job board across industries",
        ),
        portal(
            "Indeed",
            "General",
            "https://www.indeed.com",
            "Job search engine aggregating listings from company sites and boards",
        ),
        portal(
            "AngelList",
            "Startups",
            "https://wellfound.com/jobs",
            "Startup jobs with upfront salary and equity information",
        ),
        portal(
            "Stack Overflow Jobs",
            "Developers",
            "https://stackoverflow.com/jobs",
            "Developer-focused listings from the Stack Overflow community",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_has_five_portals() {
        let names: Vec<_> = default_job_portals().into_iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            ["Herkey", "LinkedIn Jobs", "Indeed", "AngelList", "Stack Overflow Jobs"]
        );
    }

    #[test]
    fn test_builder_overrides() {
        let settings = RendererSettings::default()
            .with_icon_size(32)
            .with_placeholder_icon_url("https://cdn.test/blank.png".to_string())
            .with_job_portals(Vec::new());

        assert_eq!(settings.icon_size, 32);
        assert_eq!(settings.placeholder_icon_url, "https://cdn.test/blank.png");
        assert!(settings.job_portals.is_empty());
        assert_eq!(settings.favicon_service_url, DEFAULT_FAVICON_SERVICE_URL);
    }
}
