// src/core/link_resolver.rs
use url::Url;

use crate::config::RendererSettings;

/// Favicon service URL for the link's host, or the placeholder icon when the
/// link has no usable host. Never fetches anything.
pub fn favicon_url(settings: &RendererSettings, link: &str) -> String {
    let host = Url::parse(link.trim())
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .filter(|host| !host.is_empty());

    let Some(host) = host else {
        return settings.placeholder_icon_url.clone();
    };

    let size = settings.icon_size.to_string();
    match Url::parse_with_params(
        &settings.favicon_service_url,
        &[("domain", host.as_str()), ("sz", size.as_str())],
    ) {
        Ok(url) => url.to_string(),
        Err(_) => settings.placeholder_icon_url.clone(),
    }
}
