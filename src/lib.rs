//! # litsearch-proxy
//!
//! A small HTTP service that searches PubMed and Europe PMC and returns both
//! providers' results in one normalized JSON schema.
//!
//! ## Features
//!
//! - **PubMed**: ESearch + batched EFetch, XML parsed into [`Article`]s
//! - **Europe PMC**: REST search, JSON parsed into [`Article`]s
//! - **Graceful degradation**: provider failures yield empty result lists, never errors
//! - **axum server**: `/pubmed/search`, `/epmc/search` and `/health`
//!
//! ## Quick Start
//!
//! ```no_run
//! use litsearch_proxy::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new()?;
//!
//!     for article in client.pubmed.search("covid-19 treatment", 5).await {
//!         println!("{} ({}) {}", article.title, article.year, article.url);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod article;
pub mod config;
pub mod error;
pub mod europe_pmc;
pub mod pubmed;
pub mod server;

pub use article::{Article, SearchResponse};
pub use config::ClientConfig;
pub use error::{LitSearchError, Result};
pub use europe_pmc::EuropePmcClient;
pub use pubmed::PubMedClient;

/// Both provider clients over one HTTP connection pool
#[derive(Clone)]
pub struct Client {
    /// PubMed E-utilities client
    pub pubmed: PubMedClient,
    /// Europe PMC REST client
    pub europe_pmc: EuropePmcClient,
}

impl Client {
    /// Create a combined client with default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use litsearch_proxy::Client;
    ///
    /// let client = Client::new().unwrap();
    /// ```
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::new())
    }

    /// Create a combined client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use litsearch_proxy::{Client, ClientConfig};
    ///
    /// let config = ClientConfig::new().with_email("researcher@university.edu");
    /// let client = Client::with_config(config).unwrap();
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http_client = config.create_http_client()?;
        Ok(Self {
            pubmed: PubMedClient::with_client(http_client.clone(), config.clone()),
            europe_pmc: EuropePmcClient::with_client(http_client, config),
        })
    }
}
