//! Build-time configuration of the dashboard
//!
//! The bundle is static, so the only knob is the backend origin baked in at
//! compile time through `DELIVRO_BACKEND_URL`.

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:4000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin without a trailing slash
    pub backend_url: String,
}

impl AppConfig {
    pub fn new(backend_url: &str) -> Self {
        let trimmed = backend_url.trim().trim_end_matches('/');
        let backend_url = if trimmed.is_empty() {
            DEFAULT_BACKEND_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { backend_url }
    }

    pub fn from_env() -> Self {
        Self::new(option_env!("DELIVRO_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL))
    }
}
