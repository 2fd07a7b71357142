use thiserror::Error;

/// Terminal outcomes of the shorten workflow. None of these is retried;
/// presentation is entirely the caller's business.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShortenError {
    /// The long URL failed syntactic parsing. No network call was made.
    #[error("invalid URL format, please provide a valid URL")]
    InvalidFormat,

    /// Remote validation did not return HTTP 200. A validator rejection and
    /// a validator outage are indistinguishable here.
    #[error("URL is not valid or reachable")]
    UnreachableUrl,

    /// The shorten call itself failed after validation passed. Transport
    /// detail goes to the log, not the error.
    #[error("failed to shorten URL")]
    ShortenFailed,
}

/// Errors from the analytics read path. Unlike [`ShortenError`] these keep
/// their cause: the view maps an unknown short URL differently from a
/// backend outage.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("analytics transport error: {0}")]
    Transport(String),

    #[error("analytics request failed with status {0}")]
    Status(u16),

    #[error("analytics payload parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for AnalyticsError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}
