//! API utilities for frontend-backend communication
//!
//! Provides helpers for constructing backend URLs. The backend origin is
//! baked in at build time, so these work inside `spawn_local` futures where
//! no reactive context is available.

use super::config::AppConfig;

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/shipments/123/history");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&AppConfig::from_env(), path, "")
}

/// Same as [`api_url`] with an already encoded query string appended
pub fn api_url_with_query(path: &str, query: &str) -> String {
    join_url(&AppConfig::from_env(), path, query)
}

fn join_url(config: &AppConfig, path: &str, query: &str) -> String {
    let mut url = if path.starts_with('/') {
        format!("{}{}", config.backend_url, path)
    } else {
        format!("{}/{}", config.backend_url, path)
    };
    if !query.is_empty() {
        url.push('?');
        url.push_str(query);
    }
    url
}
