//! Query-string handling for the search endpoints

use crate::error::{LitSearchError, Result};
use serde::Deserialize;

/// Result count used when `max` is absent or unparseable
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Upper bound on `max`
pub const MAX_RESULTS_CAP: usize = 20;

/// Raw query string of `/pubmed/search` and `/epmc/search`
///
/// `max` is taken as text so a malformed value falls back to the default
/// instead of being rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub max: Option<String>,
}

/// Validated search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub max: usize,
}

impl SearchParams {
    /// Require a non-blank query and resolve the effective result count
    pub fn validate(self) -> Result<SearchRequest> {
        let query = self
            .query
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty())
            .ok_or(LitSearchError::MissingQuery)?;

        Ok(SearchRequest {
            query,
            max: effective_max(self.max.as_deref()),
        })
    }
}

/// Parse `max`, defaulting to [`DEFAULT_MAX_RESULTS`] and clamping to `1..=MAX_RESULTS_CAP`
pub fn effective_max(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .map(|value| value.clamp(1, MAX_RESULTS_CAP as i64) as usize)
        .unwrap_or(DEFAULT_MAX_RESULTS)
}
