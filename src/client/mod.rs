use tracing::{debug, error, info, instrument};

use crate::error::{AnalyticsError, ShortenError};
use crate::types::{AnalyticsData, ShortenRequest, ShortenResult};
use crate::utils::valid_url;

/// HTTP client for the shortener backend. Cheap to clone; the underlying
/// connection pool is shared between clones.
#[derive(Debug, Clone)]
pub struct ShortenClient {
    http: reqwest::Client,
    base_url: String,
}

impl ShortenClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Shortens `request.long_url` against the backend.
    ///
    /// Runs the submission pipeline in strict order: syntactic validation,
    /// remote validation, then the shorten request. Every failure is
    /// terminal and the remaining steps are never reached, so a request
    /// only hits the shorten endpoint after passing both checks.
    #[instrument(skip(self, request), fields(long_url = %request.long_url))]
    pub async fn shorten_url(
        &self,
        request: &ShortenRequest,
    ) -> Result<ShortenResult, ShortenError> {
        if !valid_url(&request.long_url) {
            error!("invalid URL format");
            return Err(ShortenError::InvalidFormat);
        }

        if !self.validate(&request.long_url).await {
            error!("URL did not pass remote validation");
            return Err(ShortenError::UnreachableUrl);
        }

        let response = self
            .http
            .post(format!("{}/shorten", self.base_url))
            .form(&[
                ("url", request.long_url.as_str()),
                ("alias", request.alias_or_empty()),
                ("expiration", request.expiration_or_empty()),
            ])
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "shorten request failed");
                ShortenError::ShortenFailed
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, "shorten request rejected");
            return Err(ShortenError::ShortenFailed);
        }

        let body = response.text().await.map_err(|e| {
            error!(error = %e, "failed to read shorten response body");
            ShortenError::ShortenFailed
        })?;

        info!("short URL created");
        Ok(ShortenResult::new(body))
    }

    // Remote reachability check. Success is strictly a 200; any other
    // status or a transport failure counts as invalid.
    async fn validate(&self, long_url: &str) -> bool {
        let result = self
            .http
            .post(format!("{}/validate", self.base_url))
            .form(&[("url", long_url)])
            .send()
            .await;

        match result {
            Ok(response) => response.status() == reqwest::StatusCode::OK,
            Err(e) => {
                debug!(error = %e, "validate request failed");
                false
            }
        }
    }

    /// Fetches click analytics for a short URL. The path segment is
    /// forwarded to the backend verbatim.
    #[instrument(skip(self))]
    pub async fn analytics(&self, short_url: &str) -> Result<AnalyticsData, AnalyticsError> {
        let response = self
            .http
            .get(format!("{}/analytics/{}", self.base_url, short_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalyticsError::Status(status.as_u16()));
        }

        response
            .json::<AnalyticsData>()
            .await
            .map_err(|e| AnalyticsError::Parse(e.to_string()))
    }
}
