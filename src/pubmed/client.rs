use crate::article::Article;
use crate::config::ClientConfig;
use crate::error::{LitSearchError, Result};
use crate::pubmed::parser::parse_articles_from_xml;
use crate::pubmed::responses::ESearchResult;
use reqwest::{Client, Response};
use tracing::{debug, error, info, instrument, warn};

/// Client for the NCBI E-utilities PubMed endpoints
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    base_url: String,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a new PubMed client with default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use litsearch_proxy::PubMedClient;
    ///
    /// let client = PubMedClient::new().unwrap();
    /// ```
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new PubMed client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use litsearch_proxy::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new()
    ///     .with_api_key("your_api_key_here")
    ///     .with_email("researcher@university.edu");
    ///
    /// let client = PubMedClient::with_config(config).unwrap();
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = config.create_http_client()?;
        Ok(Self::with_client(client, config))
    }

    /// Create a PubMed client over an existing HTTP connection pool
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        let base_url = config.effective_pubmed_base_url().to_string();
        Self {
            client,
            base_url,
            config,
        }
    }

    /// Search PubMed and return matching PMIDs, most relevant first
    ///
    /// A blank query returns an empty list without contacting NCBI.
    ///
    /// # Errors
    ///
    /// * `LitSearchError::RequestError` - If the HTTP request fails or times out
    /// * `LitSearchError::ApiError` - If NCBI answers with a non-success status
    /// * `LitSearchError::JsonError` - If the ESearch JSON cannot be parsed
    #[instrument(skip(self), fields(query = %query, limit = limit))]
    pub async fn search_articles(&self, query: &str, limit: usize) -> Result<Vec<String>> {
        if query.trim().is_empty() {
            debug!("Empty query provided, returning empty results");
            return Ok(Vec::new());
        }

        let mut url = format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmax={}&retmode=json&sort=relevance",
            self.base_url,
            urlencoding::encode(query),
            limit
        );
        self.append_api_params(&mut url);

        debug!("Making ESearch API request");
        let response = self.get(&url).await?;
        let body = response.text().await?;
        let search_result: ESearchResult = serde_json::from_str(&body)?;

        if let Some(message) = search_result.esearchresult.error {
            warn!(error = %message, "ESearch reported an error");
            return Err(LitSearchError::ApiError { message });
        }

        let pmids = search_result.esearchresult.idlist;
        info!(results_found = pmids.len(), "Search completed successfully");

        Ok(pmids)
    }

    /// Fetch metadata for several PMIDs with a single EFetch call
    ///
    /// Records that fail to convert are skipped; see
    /// [`parse_articles_from_xml`].
    #[instrument(skip(self, pmids), fields(count = pmids.len()))]
    pub async fn fetch_articles(&self, pmids: &[String]) -> Result<Vec<Article>> {
        if pmids.is_empty() {
            return Ok(Vec::new());
        }

        for pmid in pmids {
            if pmid.trim().is_empty() || !pmid.chars().all(|c| c.is_ascii_digit()) {
                warn!(pmid = %pmid, "Invalid PMID format provided");
                return Err(LitSearchError::InvalidPmid { pmid: pmid.clone() });
            }
        }

        let mut url = format!(
            "{}/efetch.fcgi?db=pubmed&id={}&retmode=xml&rettype=abstract",
            self.base_url,
            pmids.join(",")
        );
        self.append_api_params(&mut url);

        debug!("Making EFetch API request");
        let response = self.get(&url).await?;

        debug!("Received successful API response, parsing XML");
        let xml_text = response.text().await?;
        let articles = parse_articles_from_xml(&xml_text)?;

        info!(
            requested = pmids.len(),
            parsed = articles.len(),
            "Fetched article batch"
        );
        Ok(articles)
    }

    /// Search and fetch in one step
    pub async fn search_and_fetch(&self, query: &str, limit: usize) -> Result<Vec<Article>> {
        let pmids = self.search_articles(query, limit).await?;
        self.fetch_articles(&pmids).await
    }

    /// Search that never fails
    ///
    /// Any transport, status or parsing error is logged and reported as an
    /// empty result list.
    pub async fn search(&self, query: &str, limit: usize) -> Vec<Article> {
        match self.search_and_fetch(query, limit).await {
            Ok(articles) => articles,
            Err(e) => {
                error!(query = %query, error = %e, "PubMed search failed, returning no articles");
                Vec::new()
            }
        }
    }

    fn append_api_params(&self, url: &mut String) {
        for (key, value) in self.config.build_api_params() {
            url.push('&');
            url.push_str(&key);
            url.push('=');
            url.push_str(&urlencoding::encode(&value));
        }
    }

    async fn get(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .timeout(self.config.pubmed_timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            warn!("API request failed with status: {}", response.status());
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

        Ok(response)
    }
}
