//! Nager.Date public-holiday client.
//!
//! ### Protocol
//!
//! - **Endpoint**: `GET {base}/{year}/{COUNTRY}`, base defaulting to
//!   `https://date.nager.at/api/v3/PublicHolidays`. The country is appended
//!   as a single percent-encoded path segment.
//! - **Success**: any 2xx status; the body is parsed as JSON and returned
//!   verbatim, with no schema applied.
//! - **Failure**: non-2xx status, network error, timeout or unparsable
//!   body. One attempt per call, no retries.

pub mod error;

pub use error::FetchError;

use almanac_core::{AppConfig, CountryCode, Year};
use reqwest::{Url, header};
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default base URL for the Nager.Date API.
const DEFAULT_BASE_URL: &str = "https://date.nager.at/api/v3/PublicHolidays";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = "almanac/0.1";

/// Provenance label reported for payloads fetched from Nager.Date.
pub const SOURCE_NAME: &str = "nager.date";

/// Source of public-holiday payloads for a (country, year) pair.
#[async_trait::async_trait]
pub trait HolidayProvider: Send + Sync {
    /// Fetch the holiday payload for `country` in `year`.
    async fn public_holidays(&self, country: &CountryCode, year: Year) -> Result<Value, FetchError>;

    /// Label identifying where payloads come from.
    fn name(&self) -> &'static str;
}

/// Nager.Date client configuration.
#[derive(Debug, Clone)]
pub struct NagerConfig {
    /// Base URL (default: https://date.nager.at/api/v3/PublicHolidays).
    pub base_url: String,
    /// Request timeout (default: 10s).
    pub timeout: Duration,
    /// User-agent string (default: almanac/0.1).
    pub user_agent: String,
}

impl Default for NagerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl From<&AppConfig> for NagerConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            base_url: config.holidays_base_url.clone(),
            timeout: config.timeout(),
            user_agent: config.user_agent.clone(),
        }
    }
}

/// Nager.Date API client.
#[derive(Debug, Clone)]
pub struct NagerClient {
    http: reqwest::Client,
    config: NagerConfig,
}

impl NagerClient {
    /// Create a new client with the given configuration.
    pub fn new(config: NagerConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .use_rustls_tls()
            .build()
            .map_err(|e| FetchError::Network(Arc::new(e)))?;

        Ok(Self { http, config })
    }

    /// Create a client around an existing `reqwest::Client`.
    ///
    /// The client's own timeout and user agent apply instead of `config`'s.
    pub fn with_http_client(http: reqwest::Client, config: NagerConfig) -> Self {
        Self { http, config }
    }

    /// URL of the holiday listing for `country` in `year`.
    ///
    /// # Errors
    ///
    /// `FetchError::InvalidUrl` if the base URL does not parse or the country
    /// is a dot segment, which URL normalization would drop.
    pub fn url_for(&self, country: &CountryCode, year: Year) -> Result<Url, FetchError> {
        if matches!(country.as_str(), "." | "..") {
            return Err(FetchError::InvalidUrl(format!("country {:?} is a dot segment", country.as_str())));
        }

        let mut url = Url::parse(&self.config.base_url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(format!("{} cannot be a base", self.config.base_url)))?
            .pop_if_empty()
            .push(&year.to_string())
            .push(country.as_str());
        Ok(url)
    }
}

#[async_trait::async_trait]
impl HolidayProvider for NagerClient {
    async fn public_holidays(&self, country: &CountryCode, year: Year) -> Result<Value, FetchError> {
        let start = Instant::now();
        let url = self.url_for(country, year)?;

        tracing::debug!("fetching public holidays: {}", url);

        let response = self
            .http
            .get(url.clone())
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Nager.Date response status: {}", status);

        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16() });
        }

        let bytes = response.bytes().await?;
        let payload: Value = serde_json::from_slice(&bytes).map_err(|e| FetchError::Parse(e.to_string()))?;

        tracing::debug!("fetched {} in {:?} ({} bytes)", url, start.elapsed(), bytes.len());

        Ok(payload)
    }

    fn name(&self) -> &'static str {
        SOURCE_NAME
    }
}
