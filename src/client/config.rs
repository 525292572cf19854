//! Client configuration options.

use std::time::Duration;

/// Base URL of the partner-portal sandbox environment.
pub const PARTNER_PORTAL_URL: &str = "https://partner-portals.qubeglobalcloud.com/qubews/";

/// Configuration for the Qube PM client.
///
/// Defaults to the partner-portal sandbox endpoint with no request timeout;
/// a hanging call propagates to the caller unless a timeout is configured.
///
/// # Example
///
/// ```
/// use qube_pm_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("https://qube.example.com/qubews/")
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint all SOAP requests are POSTed to
    pub base_url: String,
    /// Request timeout; `None` leaves requests unbounded
    pub timeout: Option<Duration>,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: PARTNER_PORTAL_URL.to_string(),
            timeout: None,
            user_agent: format!("qube-pm-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a configuration pointing at the given endpoint.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Create a configuration for the partner-portal sandbox.
    pub fn partner_portal() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, PARTNER_PORTAL_URL);
        assert_eq!(config.timeout, None);
        assert!(config.user_agent.starts_with("qube-pm-rs/"));
    }

    #[test]
    fn test_builder_setters() {
        let config = ClientConfig::new("https://qube.example.com/qubews/")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("ledger-sync/2.1");
        assert_eq!(config.base_url, "https://qube.example.com/qubews/");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.user_agent, "ledger-sync/2.1");
    }
}
