//! Service configuration.
//!
//! Built once at startup from CLI flags and environment variables, then passed
//! into the components that need it. Nothing else in the crate reads the
//! environment at request time.

const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

/// Immutable service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Gemini API key, passed as a `key` query parameter on the outbound call.
    pub api_key: String,
    /// Base URL of the generateContent API (no trailing slash needed).
    pub api_base_url: String,
    /// Model name, e.g. `gemini-2.5-flash`.
    pub model: String,
    /// Upstream request timeout in seconds. Expiry is a typed failure, not a stall.
    pub timeout_secs: u64,
    /// HTTP bind address (default: 127.0.0.1; use 0.0.0.0 for LAN access).
    pub bind_address: String,
    /// HTTP server port.
    pub port: u16,
}

impl ServiceConfig {
    pub fn new(
        api_key: String,
        port: Option<u16>,
        bind_address: Option<String>,
        api_base_url: Option<String>,
        model: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Self {
        Self {
            api_key,
            api_base_url: api_base_url.unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout_secs: timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            bind_address: bind_address.unwrap_or_else(default_bind_address),
            port: port.unwrap_or(DEFAULT_PORT),
        }
    }

    /// Full generateContent endpoint URL including the key credential.
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base_url.trim_end_matches('/'),
            self.model,
            self.api_key
        )
    }
}
