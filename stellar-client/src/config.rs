//! Client configuration

/// Default Stellar Burger API base URL
pub const DEFAULT_BASE_URL: &str = "https://norma.nomoreparties.space/api";

/// Client configuration for connecting to the Stellar Burger API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g. "https://norma.nomoreparties.space/api")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a configuration pointing at the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: 30,
        }
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = secs;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
