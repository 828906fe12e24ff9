// src/environment.rs
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use crate::config::RendererSettings;

const FAVICON_SERVICE_ENV: &str = "JOBCHAT_FAVICON_SERVICE_URL";
const PLACEHOLDER_ICON_ENV: &str = "JOBCHAT_PLACEHOLDER_ICON_URL";

/// config.yaml holds one settings section per environment name
type ConfigFile = HashMap<String, RendererSettings>;

pub fn get_environment() -> String {
    std::env::var("JOBCHAT_ENV")
        .or_else(|_| std::env::var("ENVIRONMENT"))
        .unwrap_or_else(|_| "local".to_string())
}

/// Load settings for the current environment, falling back to defaults
/// when the file does not exist
pub fn load_settings(config_path: &Path) -> Result<RendererSettings> {
    let environment = get_environment();
    info!("Loading renderer settings for environment: {}", environment);

    let settings = if config_path.exists() {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        settings_from_yaml(&content, &environment)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?
    } else {
        info!(
            "{} not found, using built-in renderer settings",
            config_path.display()
        );
        RendererSettings::default()
    };

    Ok(apply_overrides(settings, |key| std::env::var(key).ok()))
}

pub fn settings_from_yaml(content: &str, environment: &str) -> Result<RendererSettings> {
    let mut sections: ConfigFile = serde_yaml::from_str(content)?;

    let settings = sections
        .remove(environment)
        .or_else(|| sections.remove("local"))
        .unwrap_or_default();

    if settings.icon_size == 0 {
        anyhow::bail!("icon_size must be greater than zero");
    }

    Ok(settings)
}

pub fn apply_overrides<F>(mut settings: RendererSettings, lookup: F) -> RendererSettings
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(FAVICON_SERVICE_ENV).filter(|v| !v.trim().is_empty()) {
        info!("Favicon service overridden by {}", FAVICON_SERVICE_ENV);
        settings = settings.with_favicon_service_url(url);
    }
    if let Some(url) = lookup(PLACEHOLDER_ICON_ENV).filter(|v| !v.trim().is_empty()) {
        info!("Placeholder icon overridden by {}", PLACEHOLDER_ICON_ENV);
        settings = settings.with_placeholder_icon_url(url);
    }
    settings
}
