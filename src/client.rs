//! Daizy API client.
//!
//! Low-level HTTP client that handles authentication and raw requests.
//! Resource operations live next to their models (see [`crate::models`]).

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::{ClientConfig, ClientOption};
use crate::error::{DaizyError, ResponseError, Result};

const USER_AGENT: &str = concat!("daizy/", env!("CARGO_PKG_VERSION"));

/// Placeholder body for requests that send none.
///
/// ```no_run
/// # async fn example(client: &daizy::DaizyClient) -> daizy::Result<()> {
/// use daizy::{Method, NO_BODY};
/// let raw = client.request_raw(Method::GET, "/organisation/1/projects", NO_BODY).await?;
/// # Ok(())
/// # }
/// ```
pub const NO_BODY: Option<&()> = None;

/// Low-level Daizy API client.
///
/// Builds the full URL from the configured host and path prefix, attaches
/// the bearer token and decodes responses. Project operations such as
/// [`DaizyClient::get_projects`] are built on [`DaizyClient::request`].
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool and configuration.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use daizy::{ClientOption, DaizyClient};
///
/// # fn example() -> daizy::Result<()> {
/// // Create from environment variables
/// let client = DaizyClient::from_env()?;
///
/// // Or configure manually
/// let client = DaizyClient::new(
///     "12345",
///     "your-token",
///     [ClientOption::Timeout(Duration::from_secs(30))],
/// )?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DaizyClient {
    http: Client,
    config: Arc<ClientConfig>,
    request_timeout: Option<Duration>,
}

impl std::fmt::Debug for DaizyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DaizyClient")
            .field("organisation", &self.config.organisation())
            .field("base_url", &self.config.base_url())
            .field("base_path", &self.config.base_path())
            .finish_non_exhaustive()
    }
}

impl DaizyClient {
    /// Create a client for an organisation.
    ///
    /// Defaults (host, path prefix, 10 second timeout) are seeded first and
    /// `options` are applied on top, in order.
    ///
    /// # Errors
    ///
    /// Returns [`DaizyError::Validation`] if `organisation` or `token` is
    /// empty, or [`DaizyError::Http`] if the HTTP client cannot be built.
    pub fn new<I>(organisation: &str, token: &str, options: I) -> Result<Self>
    where
        I: IntoIterator<Item = ClientOption>,
    {
        let config = ClientConfig::new(organisation, token)?.with_options(options);
        Self::from_config(config)
    }

    /// Create a client from a prepared configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DaizyError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(DaizyError::Http)?;

        Ok(Self {
            http,
            config: Arc::new(config),
            request_timeout: None,
        })
    }

    /// Create a client from environment variables.
    ///
    /// See [`ClientConfig::from_env`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns an error if `DAIZY_ORGANISATION` or `DAIZY_API_TOKEN` is not
    /// set, or if an optional variable is malformed.
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the organisation ID.
    pub fn organisation(&self) -> &str {
        self.config.organisation()
    }

    /// Get the timeout requests are sent with. Zero means no deadline.
    pub fn timeout(&self) -> Duration {
        self.request_timeout.unwrap_or_else(|| self.config.timeout())
    }

    /// Return a client whose requests use `timeout` instead of the
    /// configured one.
    ///
    /// The returned client shares the connection pool with `self`.
    /// `Duration::ZERO` removes the deadline.
    #[must_use]
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            http: self.http.clone(),
            config: Arc::clone(&self.config),
            request_timeout: Some(timeout),
        }
    }

    /// Send a request and return the raw body of a 200 response.
    ///
    /// The URL is `base_url + base_path + path`. Every request carries
    /// `Authorization: Bearer <token>` and `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// - [`DaizyError::Encode`] if `body` cannot be serialized.
    /// - [`DaizyError::Url`] if the joined URL is invalid.
    /// - [`DaizyError::Http`] on transport failure.
    /// - [`DaizyError::Response`] if the status is not 200 and the body is a
    ///   service error.
    /// - [`DaizyError::Decode`] if the status is not 200 and the body is not
    ///   a service error.
    #[tracing::instrument(skip(self, body), fields(organisation = %self.config.organisation()))]
    pub async fn request_raw<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Vec<u8>>
    where
        B: Serialize + ?Sized,
    {
        let payload = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(DaizyError::Encode)?;

        let url = Url::parse(&self.config.endpoint(path))?;

        let mut request = self
            .http
            .request(method, url)
            .bearer_auth(self.config.token())
            .header(CONTENT_TYPE, "application/json");

        if let Some(payload) = payload {
            request = request.body(payload);
        }

        let timeout = self.timeout();
        if !timeout.is_zero() {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(DaizyError::Http)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(DaizyError::Http)?;

        tracing::debug!(status = status.as_u16(), len = bytes.len(), "received response");

        if status != StatusCode::OK {
            return Err(Self::response_error(status, &bytes));
        }

        Ok(bytes.to_vec())
    }

    /// Send a request and decode the body of a 200 response into `T`.
    ///
    /// # Errors
    ///
    /// Same as [`request_raw`](Self::request_raw), plus
    /// [`DaizyError::Decode`] if the success body does not match `T`.
    pub async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let bytes = self.request_raw(method, path, body).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Convert a non-200 response body into an error.
    fn response_error(status: StatusCode, body: &[u8]) -> DaizyError {
        match serde_json::from_slice::<ResponseError>(body) {
            Ok(mut re) => {
                re.status = status.as_u16();
                tracing::warn!(status = re.status, message = %re, "Daizy API returned an error");
                DaizyError::Response(re)
            }
            Err(e) => {
                tracing::warn!(status = status.as_u16(), "unable to decode error response from server");
                DaizyError::Decode(e)
            }
        }
    }
}
