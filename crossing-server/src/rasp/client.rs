//! Yandex.Rasp HTTP client.
//!
//! Provides the single outbound query the server makes: fetching one
//! day's arrival schedule for the configured station. No retries are
//! performed here; retry policy, if any, belongs to the caller.

use chrono::NaiveDate;

use super::error::RaspError;
use super::types::ScheduleResponse;

/// Default base URL for the schedule endpoint.
const DEFAULT_BASE_URL: &str = "https://api.rasp.yandex.net/v3.0/schedule/";

/// Default station: Udelnaya, the stop next to the crossing.
const DEFAULT_STATION: &str = "s9603463";

/// Timezone the provider is asked to express timestamps in, so arrival
/// instants are unambiguous regardless of server locale.
const DEFAULT_RESULT_TZ: &str = "Europe/Moscow";

/// Only suburban rail arrivals close the barrier.
const TRANSPORT_TYPES: &str = "suburban";
const EVENT: &str = "arrival";

/// Upper bound on response body excerpts carried inside errors.
const BODY_EXCERPT_CHARS: usize = 300;

/// Configuration for the schedule client.
#[derive(Debug, Clone)]
pub struct RaspConfig {
    /// API key for authentication. May be empty; requests then fail
    /// fast with [`RaspError::MissingApiKey`].
    pub api_key: String,
    /// Base URL of the schedule endpoint (override for testing)
    pub base_url: String,
    /// Station identifier to query
    pub station: String,
    /// Result timezone requested from the provider
    pub result_timezone: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RaspConfig {
    /// Create a new config with the given API key and production defaults.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            station: DEFAULT_STATION.to_string(),
            result_timezone: DEFAULT_RESULT_TZ.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the station identifier to query.
    pub fn with_station(mut self, station: impl Into<String>) -> Self {
        self.station = station.into();
        self
    }

    /// Set the result timezone requested from the provider.
    pub fn with_result_timezone(mut self, tz: impl Into<String>) -> Self {
        self.result_timezone = tz.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Yandex.Rasp schedule client.
#[derive(Debug, Clone)]
pub struct RaspClient {
    http: reqwest::Client,
    config: RaspConfig,
}

impl RaspClient {
    /// Create a new client with the given configuration.
    pub fn new(config: RaspConfig) -> Result<Self, RaspError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// The station identifier this client queries.
    pub fn station(&self) -> &str {
        &self.config.station
    }

    /// Fetch the suburban arrival schedule for one calendar day.
    ///
    /// Issues a single GET with fixed parameters: the configured
    /// station, transport type `suburban`, event `arrival`, the
    /// requested date and the configured result timezone.
    pub async fn fetch_arrivals(&self, date: NaiveDate) -> Result<ScheduleResponse, RaspError> {
        if self.config.api_key.is_empty() {
            return Err(RaspError::MissingApiKey);
        }

        let date_str = date.format("%Y-%m-%d").to_string();

        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[
                ("apikey", self.config.api_key.as_str()),
                ("station", self.config.station.as_str()),
                ("transport_types", TRANSPORT_TYPES),
                ("event", EVENT),
                ("date", date_str.as_str()),
                ("result_timezone", self.config.result_timezone.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RaspError::Api {
                status: status.as_u16(),
                body: body.chars().take(BODY_EXCERPT_CHARS).collect(),
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| RaspError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(BODY_EXCERPT_CHARS).collect()),
        })
    }
}
