use crate::article::Article;
use crate::config::ClientConfig;
use crate::error::{LitSearchError, Result};
use crate::europe_pmc::responses::parse_search_response;
use reqwest::Client;
use tracing::{debug, error, info, instrument, warn};

/// Client for the Europe PMC REST search endpoint
#[derive(Clone)]
pub struct EuropePmcClient {
    client: Client,
    base_url: String,
    config: ClientConfig,
}

impl EuropePmcClient {
    /// Create a new Europe PMC client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new Europe PMC client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use litsearch_proxy::{ClientConfig, EuropePmcClient};
    /// use std::time::Duration;
    ///
    /// let config = ClientConfig::new().with_europe_pmc_timeout(Duration::from_secs(5));
    /// let client = EuropePmcClient::with_config(config).unwrap();
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = config.create_http_client()?;
        Ok(Self::with_client(client, config))
    }

    /// Create a Europe PMC client over an existing HTTP connection pool
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        let base_url = config.effective_europe_pmc_base_url().to_string();
        Self {
            client,
            base_url,
            config,
        }
    }

    /// Search Europe PMC and return normalized articles
    ///
    /// Uses the `lite` result type, which carries identifiers and citation
    /// fields but no abstract.
    ///
    /// # Errors
    ///
    /// * `LitSearchError::RequestError` - If the HTTP request fails or times out
    /// * `LitSearchError::ApiError` - If Europe PMC answers with a non-success status
    /// * `LitSearchError::JsonError` - If the response is not a JSON search envelope
    #[instrument(skip(self), fields(query = %query, limit = limit))]
    pub async fn search_articles(&self, query: &str, limit: usize) -> Result<Vec<Article>> {
        if query.trim().is_empty() {
            debug!("Empty query provided, returning empty results");
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/search?query={}&format=json&pageSize={}&resultType=lite",
            self.base_url,
            urlencoding::encode(query),
            limit
        );

        debug!("Making Europe PMC search request");
        let response = self
            .client
            .get(&url)
            .timeout(self.config.europe_pmc_timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(
                "Search API request failed with status: {}",
                response.status()
            );
            return Err(LitSearchError::ApiError {
                message: format!(
                    "HTTP {}: {}",
                    response.status(),
                    response
                        .status()
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                ),
            });
        }

        let body = response.text().await?;
        let mut articles = parse_search_response(&body)?;
        // Upstream may return more than pageSize
        articles.truncate(limit);

        info!(results_found = articles.len(), "Search completed successfully");
        Ok(articles)
    }

    /// Search that never fails
    ///
    /// Any transport, status or parsing error is logged and reported as an
    /// empty result list.
    pub async fn search(&self, query: &str, limit: usize) -> Vec<Article> {
        match self.search_articles(query, limit).await {
            Ok(articles) => articles,
            Err(e) => {
                error!(query = %query, error = %e, "Europe PMC search failed, returning no articles");
                Vec::new()
            }
        }
    }
}
