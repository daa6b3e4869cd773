//! HTTP implementation of the repository boundary.
//!
//! Talks to the KOBIS-style REST service: one endpoint for the daily ranked
//! list, one for per-movie detail. All reqwest failures are classified into
//! [`TransportError`] here; nothing below the trait surface leaks out.

use crate::config::Config;
use crate::error::{ConfigError, TransportError};
use crate::repository::{BoxOfficePayload, MovieInfoPayload, MovieRepository};
use crate::types::MovieId;
use async_trait::async_trait;
use chrono::{Days, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Path of the daily ranked-list endpoint, relative to the base URL
const LIST_ENDPOINT: &str = "boxoffice/searchDailyBoxOfficeList.json";

/// Path of the movie detail endpoint, relative to the base URL
const DETAIL_ENDPOINT: &str = "movie/searchMovieInfo.json";

/// Repository implementation backed by the remote REST service
pub struct HttpMovieRepository {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
    target_date: Option<NaiveDate>,
}

impl HttpMovieRepository {
    /// Create a repository from the crate configuration
    ///
    /// Builds a `reqwest::Client` with the configured per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration fails validation or the
    /// HTTP client cannot be constructed.
    pub fn new(config: &Config) -> std::result::Result<Self, ConfigError> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api.request_timeout_secs))
            .build()
            .map_err(|e| ConfigError {
                message: format!("failed to build HTTP client: {}", e),
                key: None,
            })?;

        // Url::join drops the last path segment unless the base ends with a
        // slash, so normalize it once here.
        let mut base_url = Url::parse(&config.api.base_url).map_err(|e| ConfigError {
            message: format!("base url '{}' is invalid: {}", config.api.base_url, e),
            key: Some("api.base_url"),
        })?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client,
            base_url,
            api_key: config.api.api_key.clone(),
            target_date: config.api.target_date,
        })
    }

    /// The date whose ranking is requested, formatted as the wire expects
    ///
    /// Falls back to yesterday (UTC): the service publishes each day's
    /// ranking the following morning.
    fn target_date_param(&self) -> String {
        let date = self.target_date.unwrap_or_else(|| {
            Utc::now()
                .date_naive()
                .checked_sub_days(Days::new(1))
                .unwrap_or_else(|| Utc::now().date_naive())
        });
        date.format("%Y%m%d").to_string()
    }

    fn endpoint(&self, leaf: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(leaf)
            .map_err(|e| TransportError::Other(format!("invalid endpoint '{}': {}", leaf, e)))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, TransportError> {
        tracing::debug!(url = %url, "requesting payload");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(TransportError::from)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "remote returned non-success status");
            return Err(TransportError::Status {
                code: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(TransportError::from)
    }
}

#[async_trait]
impl MovieRepository for HttpMovieRepository {
    async fn get_ranked_list(&self) -> Result<BoxOfficePayload, TransportError> {
        let mut url = self.endpoint(LIST_ENDPOINT)?;
        url.query_pairs_mut()
            .append_pair("key", &self.api_key)
            .append_pair("targetDt", &self.target_date_param());

        self.get_json(url).await
    }

    async fn get_detail(&self, id: &MovieId) -> Result<MovieInfoPayload, TransportError> {
        let mut url = self.endpoint(DETAIL_ENDPOINT)?;
        url.query_pairs_mut()
            .append_pair("key", &self.api_key)
            .append_pair("movieCd", id.as_str());

        self.get_json(url).await
    }
}
