//! Client configuration for the upstream literature providers
//!
//! Both provider clients share one [`ClientConfig`]. Every setting has a
//! production default, so `ClientConfig::new()` is enough outside of tests.

use crate::error::{LitSearchError, Result};
use std::time::Duration;

/// Default NCBI E-utilities endpoint
pub const PUBMED_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Default Europe PMC REST endpoint
pub const EUROPE_PMC_BASE_URL: &str = "https://www.ebi.ac.uk/europepmc/webservices/rest";

const DEFAULT_PUBMED_TIMEOUT: Duration = Duration::from_secs(15);
const DEFAULT_EUROPE_PMC_TIMEOUT: Duration = Duration::from_secs(20);
const DEFAULT_TOOL: &str = "litsearch-proxy";

/// Configuration shared by the PubMed and Europe PMC clients
///
/// # Example
///
/// ```
/// use litsearch_proxy::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new()
///     .with_email("researcher@university.edu")
///     .with_pubmed_timeout(Duration::from_secs(10));
///
/// assert_eq!(config.pubmed_timeout, Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// NCBI API key, raises the upstream per-key quota
    pub api_key: Option<String>,
    /// Contact email sent to NCBI
    pub email: Option<String>,
    /// Tool name sent to NCBI
    pub tool: Option<String>,
    /// Override for the E-utilities base URL
    pub pubmed_base_url: Option<String>,
    /// Override for the Europe PMC base URL
    pub europe_pmc_base_url: Option<String>,
    /// Timeout applied to each PubMed request
    pub pubmed_timeout: Duration,
    /// Timeout applied to each Europe PMC request
    pub europe_pmc_timeout: Duration,
    /// Override for the User-Agent header
    pub user_agent: Option<String>,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            api_key: None,
            email: None,
            tool: None,
            pubmed_base_url: None,
            europe_pmc_base_url: None,
            pubmed_timeout: DEFAULT_PUBMED_TIMEOUT,
            europe_pmc_timeout: DEFAULT_EUROPE_PMC_TIMEOUT,
            user_agent: None,
        }
    }

    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_tool<S: Into<String>>(mut self, tool: S) -> Self {
        self.tool = Some(tool.into());
        self
    }

    pub fn with_pubmed_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.pubmed_base_url = Some(base_url.into());
        self
    }

    pub fn with_europe_pmc_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.europe_pmc_base_url = Some(base_url.into());
        self
    }

    pub fn with_pubmed_timeout(mut self, timeout: Duration) -> Self {
        self.pubmed_timeout = timeout;
        self
    }

    pub fn with_europe_pmc_timeout(mut self, timeout: Duration) -> Self {
        self.europe_pmc_timeout = timeout;
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// E-utilities base URL with any trailing slash removed
    pub fn effective_pubmed_base_url(&self) -> &str {
        self.pubmed_base_url
            .as_deref()
            .unwrap_or(PUBMED_BASE_URL)
            .trim_end_matches('/')
    }

    /// Europe PMC base URL with any trailing slash removed
    pub fn effective_europe_pmc_base_url(&self) -> &str {
        self.europe_pmc_base_url
            .as_deref()
            .unwrap_or(EUROPE_PMC_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("litsearch-proxy/{}", env!("CARGO_PKG_VERSION")))
    }

    pub fn effective_tool(&self) -> &str {
        self.tool.as_deref().unwrap_or(DEFAULT_TOOL)
    }

    /// Pooled HTTP client shared by both providers
    ///
    /// Timeouts are applied per request so each provider keeps its own bound.
    pub fn create_http_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .user_agent(self.effective_user_agent())
            .build()
            .map_err(|e| LitSearchError::Config(format!("Failed to create HTTP client: {}", e)))
    }

    /// Courtesy parameters appended to every E-utilities request
    ///
    /// `tool` is always present; `api_key` and `email` only when configured.
    pub fn build_api_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(ref api_key) = self.api_key {
            params.push(("api_key".to_string(), api_key.clone()));
        }
        if let Some(ref email) = self.email {
            params.push(("email".to_string(), email.clone()));
        }
        params.push(("tool".to_string(), self.effective_tool().to_string()));

        params
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
