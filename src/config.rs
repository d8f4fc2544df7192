use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self { base_url, timeout }
    }

    /// `PL_API_BASE_URL` and `PL_HTTP_TIMEOUT_SECS`, falling back to the local backend.
    pub fn from_env() -> Self {
        let base_url = env::var("PL_API_BASE_URL")
            .ok()
            .filter(|val| !val.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_secs = env::var("PL_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|val| val.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
            .max(1);
        Self::new(base_url, Duration::from_secs(timeout_secs))
    }
}
