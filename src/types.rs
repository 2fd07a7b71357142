use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ShortenRequest {
    pub long_url: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub expiration: Option<String>,
}

impl ShortenRequest {
    pub fn new(long_url: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
            alias: None,
            expiration: None,
        }
    }

    // Absent alias and empty alias both mean "server assigns".
    pub fn alias_or_empty(&self) -> &str {
        self.alias.as_deref().unwrap_or("")
    }

    pub fn expiration_or_empty(&self) -> &str {
        self.expiration.as_deref().unwrap_or("")
    }
}

/// Raw response body of a successful shorten call, returned verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenResult(String);

impl ShortenResult {
    pub fn new(body: String) -> Self {
        Self(body)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsData {
    pub total_click_counts: u64,
    #[serde(default)]
    pub day: BTreeMap<String, DayClicks>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayClicks {
    pub click_counts: u64,
    #[serde(default)]
    pub timestamps: Vec<String>,
}
