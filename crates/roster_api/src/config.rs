use std::env;
use std::time::Duration;

/// Environment variable holding the service base address,
/// e.g. `http://192.168.1.20:3000`.
pub const BASE_URL_ENV: &str = "ROSTER_API_BASE_URL";

/// Optional environment variable overriding the request timeout, in
/// milliseconds.
pub const TIMEOUT_MS_ENV: &str = "ROSTER_API_TIMEOUT_MS";

const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Configuration for `HttpClient`. The base URL is read once at process
/// start; it is not supplied per call.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the configuration from the process environment.
    ///
    /// Returns `None` when `ROSTER_API_BASE_URL` is unset. A malformed
    /// timeout override is ignored in favor of the default.
    pub fn from_env() -> Option<Self> {
        let base_url = env::var(BASE_URL_ENV).ok()?;
        let mut config = Self::new(base_url);
        if let Some(ms) = env::var(TIMEOUT_MS_ENV)
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
        {
            config.timeout = Duration::from_millis(ms);
        }
        Some(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeout_is_ten_seconds() {
        let config = ApiConfig::new("http://localhost:3000");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.base_url, "http://localhost:3000");
    }
}
