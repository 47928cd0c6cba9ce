//! Fare service HTTP client.
//!
//! Async client for the remote fare-calculation and location-search API.
//! No call is ever retried; a failure is terminal for that attempt and
//! requires a new user action.

use serde::Deserialize;

use crate::domain::{FareRequest, FareResponse, Language, LocationsResponse, SearchResponse};

use super::error::ApiError;

/// Default base URL for the fare service.
const DEFAULT_BASE_URL: &str = "http://localhost:8888/api";

/// Environment variable overriding the base URL.
const BASE_URL_ENV: &str = "FARE_API_URL";

/// Error body the service sends with non-2xx fare responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Configuration for the fare service client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL for the API, including the `/api` prefix
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Create a config with the default base URL.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Create a config from the environment.
    ///
    /// Reads `FARE_API_URL`, falling back to the default base URL.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self {
            base_url,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the fare service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new fare service client.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Calculate a fare.
    ///
    /// `POST {base}/calculate-fare` with the request as JSON. On a non-2xx
    /// response, the body's `{message}` is surfaced when present; otherwise
    /// a generic message is synthesized from the HTTP status.
    pub async fn calculate_fare(&self, request: &FareRequest) -> Result<FareResponse, ApiError> {
        let url = format!("{}/calculate-fare", self.base_url);

        tracing::debug!(%url, "requesting fare calculation");

        let response = self.http.post(&url).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or_else(|_| format!("HTTP error! status: {}", status.as_u16()));
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| ApiError::Json {
            message: e.to_string(),
        })
    }

    /// Search locations by name.
    ///
    /// `GET {base}/locations/search?q=..&lang=..&limit=..`. The `q`
    /// parameter is omitted entirely when the trimmed query is empty.
    pub async fn search_locations(
        &self,
        query: &str,
        lang: Language,
        limit: usize,
    ) -> Result<SearchResponse, ApiError> {
        let url = format!("{}/locations/search", self.base_url);

        let mut params: Vec<(&str, String)> = Vec::new();
        let trimmed = query.trim();
        if !trimmed.is_empty() {
            params.push(("q", trimmed.to_string()));
        }
        params.push(("lang", lang.to_string()));
        params.push(("limit", limit.to_string()));

        let response = self.http.get(&url).query(&params).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| ApiError::Json {
            message: e.to_string(),
        })
    }

    /// Fetch the full location list.
    ///
    /// `GET {base}/locations`. Used as a startup probe and for frontends
    /// that want to browse rather than search.
    pub async fn all_locations(&self) -> Result<LocationsResponse, ApiError> {
        let url = format!("{}/locations", self.base_url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| ApiError::Json {
            message: e.to_string(),
        })
    }

    /// Probe the service's health endpoint.
    ///
    /// The server exposes `/health` beside the `/api` prefix, so the
    /// prefix is stripped from the base URL when present.
    pub async fn health(&self) -> Result<(), ApiError> {
        let root = self
            .base_url
            .strip_suffix("/api")
            .unwrap_or(&self.base_url);
        let url = format!("{root}/health");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(())
    }
}
