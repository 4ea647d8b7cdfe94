//! Global configuration model for the roster client.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// Root configuration for the roster client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Base URL of the students REST service.
    pub api_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl RosterConfig {
    /// Creates a configuration with the given base URL and default timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not use an `http`/`https` scheme.
    pub fn with_api_url(api_url: impl Into<String>) -> Result<Self> {
        let api_url = api_url.into();
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(RosterError::Config {
                message: format!("API URL must be http(s): {api_url}"),
            });
        }
        Ok(Self {
            api_url,
            ..Self::default()
        })
    }

    /// Returns the base URL without a trailing slash.
    #[must_use]
    pub fn api_base(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            api_url: crate::constants::DEFAULT_API_URL.to_string(),
            timeout_secs: crate::constants::DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_api_url_accepts_https() {
        let config = RosterConfig::with_api_url("https://api.example.com/").expect("valid url");
        assert_eq!(config.api_base(), "https://api.example.com");
        assert_eq!(config.timeout_secs, crate::constants::DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn with_api_url_rejects_other_schemes() {
        let err = RosterConfig::with_api_url("ftp://api.example.com").unwrap_err();
        assert!(matches!(err, RosterError::Config { .. }));
    }

    #[test]
    fn api_base_strips_trailing_slash() {
        let config = RosterConfig {
            api_url: "http://localhost:3333/".to_string(),
            ..RosterConfig::default()
        };
        assert_eq!(config.api_base(), "http://localhost:3333");
    }
}
