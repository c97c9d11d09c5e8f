//! Client configuration.
//!
//! A [`ClientConfig`] is seeded with defaults for everything but the
//! organisation and token, then adjusted by an ordered list of
//! [`ClientOption`]s. Later options win when they touch the same field.

use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::{DaizyError, Result};

/// Default service host.
pub const DEFAULT_BASE_URL: &str = "https://api-test.daizy.io";

/// Default API path prefix, appended to the host.
pub const DEFAULT_BASE_PATH: &str = "/api/v1";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const ENV_ORGANISATION: &str = "DAIZY_ORGANISATION";
const ENV_TOKEN: &str = "DAIZY_API_TOKEN";
const ENV_BASE_URL: &str = "DAIZY_API_URL";
const ENV_BASE_PATH: &str = "DAIZY_API_PATH";
const ENV_TIMEOUT: &str = "DAIZY_TIMEOUT_SECS";

/// A single configuration step applied on top of the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientOption {
    /// Override the service host (e.g. `http://localhost:8080`).
    BaseUrl(String),
    /// Override the API path prefix. An empty string selects no prefix.
    BasePath(String),
    /// Override the request timeout. `Duration::ZERO` disables the deadline.
    Timeout(Duration),
}

/// Configuration for a [`DaizyClient`](crate::DaizyClient).
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    organisation: String,
    token: String,
    base_url: String,
    base_path: String,
    timeout: Duration,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("organisation", &self.organisation)
            .field("base_url", &self.base_url)
            .field("base_path", &self.base_path)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ClientConfig {
    /// Create a configuration with default host, path and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`DaizyError::Validation`] if the organisation or the token
    /// is empty. The organisation is checked first.
    pub fn new(organisation: &str, token: &str) -> Result<Self> {
        if organisation.is_empty() {
            return Err(DaizyError::Validation(
                "organisation ID is required".to_string(),
            ));
        }

        if token.is_empty() {
            return Err(DaizyError::Validation(
                "authorization token is required".to_string(),
            ));
        }

        Ok(Self {
            organisation: organisation.to_string(),
            token: token.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Read the configuration from environment variables.
    ///
    /// - `DAIZY_ORGANISATION` (required)
    /// - `DAIZY_API_TOKEN` (required)
    /// - `DAIZY_API_URL` (optional host override)
    /// - `DAIZY_API_PATH` (optional path override; set but empty means no prefix)
    /// - `DAIZY_TIMEOUT_SECS` (optional timeout override in seconds)
    ///
    /// # Errors
    ///
    /// Returns a validation error if a required variable is unset or empty,
    /// or if the timeout is not a whole number of seconds.
    pub fn from_env() -> Result<Self> {
        let organisation = env::var(ENV_ORGANISATION).unwrap_or_default();
        let token = env::var(ENV_TOKEN).unwrap_or_default();
        let config = Self::new(&organisation, &token)?;

        let mut options = Vec::new();
        if let Ok(url) = env::var(ENV_BASE_URL) {
            options.push(ClientOption::BaseUrl(url));
        }
        if let Ok(path) = env::var(ENV_BASE_PATH) {
            options.push(ClientOption::BasePath(path));
        }
        if let Ok(secs) = env::var(ENV_TIMEOUT) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                DaizyError::Validation(format!(
                    "{ENV_TIMEOUT} must be a whole number of seconds, got '{secs}'"
                ))
            })?;
            options.push(ClientOption::Timeout(Duration::from_secs(secs)));
        }

        Ok(config.with_options(options))
    }

    /// Apply a single option in place.
    pub fn apply(&mut self, option: ClientOption) {
        match option {
            ClientOption::BaseUrl(url) => self.base_url = url,
            ClientOption::BasePath(path) => self.base_path = path,
            ClientOption::Timeout(timeout) => self.timeout = timeout,
        }
    }

    /// Apply a single option, builder style.
    #[must_use]
    pub fn with_option(mut self, option: ClientOption) -> Self {
        self.apply(option);
        self
    }

    /// Apply options in order.
    #[must_use]
    pub fn with_options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = ClientOption>,
    {
        for option in options {
            self.apply(option);
        }
        self
    }

    /// The organisation ID every resource path is scoped to.
    pub fn organisation(&self) -> &str {
        &self.organisation
    }

    /// The bearer token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The service host.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The API path prefix.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// The request timeout. Zero means requests have no deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Join host, prefix and a path suffix.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, self.base_path, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let config = ClientConfig::new("12345", "testtoken").unwrap();
        assert_eq!(config.organisation(), "12345");
        assert_eq!(config.token(), "testtoken");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.base_path(), DEFAULT_BASE_PATH);
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_organisation_checked_before_token() {
        let err = ClientConfig::new("", "").unwrap_err();
        assert_eq!(err.to_string(), "organisation ID is required");
    }

    #[test]
    fn test_later_option_wins() {
        let config = ClientConfig::new("12345", "testtoken")
            .unwrap()
            .with_options([
                ClientOption::Timeout(Duration::from_secs(1)),
                ClientOption::BaseUrl("http://first".to_string()),
                ClientOption::Timeout(Duration::from_secs(30)),
            ]);

        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.base_url(), "http://first");
        assert_eq!(config.base_path(), DEFAULT_BASE_PATH);
    }

    #[test]
    fn test_empty_base_path_is_kept() {
        let config = ClientConfig::new("12345", "testtoken")
            .unwrap()
            .with_option(ClientOption::BasePath(String::new()));

        assert_eq!(config.base_path(), "");
        assert_eq!(
            config.endpoint("/organisation/12345/projects"),
            "https://api-test.daizy.io/organisation/12345/projects"
        );
    }

    #[test]
    fn test_endpoint_concatenates() {
        let config = ClientConfig::new("12345", "testtoken").unwrap();
        assert_eq!(
            config.endpoint("/organisation/12345/project/1"),
            "https://api-test.daizy.io/api/v1/organisation/12345/project/1"
        );
    }

    // The only test in this binary touching DAIZY_* variables.
    #[test]
    fn test_from_env() {
        for var in [ENV_ORGANISATION, ENV_TOKEN, ENV_BASE_URL, ENV_BASE_PATH, ENV_TIMEOUT] {
            env::remove_var(var);
        }

        let err = ClientConfig::from_env().unwrap_err();
        assert_eq!(err.to_string(), "organisation ID is required");

        // Missing identity is reported ahead of a malformed timeout.
        env::set_var(ENV_TIMEOUT, "soon");
        let err = ClientConfig::from_env().unwrap_err();
        assert_eq!(err.to_string(), "organisation ID is required");

        env::set_var(ENV_ORGANISATION, "12345");
        let err = ClientConfig::from_env().unwrap_err();
        assert_eq!(err.to_string(), "authorization token is required");
        env::remove_var(ENV_TIMEOUT);

        env::set_var(ENV_TOKEN, "testtoken");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_path(), DEFAULT_BASE_PATH);

        env::set_var(ENV_BASE_PATH, "");
        env::set_var(ENV_TIMEOUT, "3");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_path(), "");
        assert_eq!(config.timeout(), Duration::from_secs(3));

        env::set_var(ENV_TIMEOUT, "soon");
        let err = ClientConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("DAIZY_TIMEOUT_SECS"));

        for var in [ENV_ORGANISATION, ENV_TOKEN, ENV_BASE_PATH, ENV_TIMEOUT] {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_debug_hides_token() {
        let config = ClientConfig::new("12345", "super-secret").unwrap();
        let debug = format!("{:?}", config);
        assert!(debug.contains("ClientConfig"));
        assert!(debug.contains("12345"));
        assert!(!debug.contains("super-secret"));
    }
}
