//! Europe PMC client tests against a mocked REST server

mod common;

use common::*;
use litsearch_proxy::LitSearchError;
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_search(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body.to_string())
                .insert_header("content-type", "application/json"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
#[traced_test]
async fn test_search_normalizes_results() {
    let pubmed = MockServer::start().await;
    let europe_pmc = MockServer::start().await;
    mount_search(&europe_pmc, 200, EPMC_TWO_RESULTS).await;

    let client = create_mock_client(&pubmed, &europe_pmc);
    let articles = client
        .europe_pmc
        .search_articles("malaria vaccine", 10)
        .await
        .expect("search should succeed");

    assert_eq!(articles.len(), 2);

    let trial = &articles[0];
    assert_eq!(trial.title, "Efficacy of a low-dose candidate malaria vaccine.");
    assert_eq!(trial.authors, "Datoo MS, Natama MH, Some A, et al.");
    assert_eq!(trial.journal, "Lancet");
    assert_eq!(trial.year, "2021");
    assert_eq!(trial.url, "https://pubmed.ncbi.nlm.nih.gov/34000000/");
    assert_eq!(trial.abstract_text, "");

    let preprint = &articles[1];
    assert_eq!(preprint.authors, "Smith J, Doe A");
    assert_eq!(preprint.journal, "Unknown journal");
    assert_eq!(preprint.pmid, "");
    assert_eq!(preprint.url, "https://doi.org/10.1101/2022.01.01.22268000");
}

#[tokio::test]
#[traced_test]
async fn test_search_request_parameters() {
    let pubmed = MockServer::start().await;
    let europe_pmc = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("query", "malaria vaccine"))
        .and(query_param("format", "json"))
        .and(query_param("pageSize", "20"))
        .and(query_param("resultType", "lite"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EPMC_EMPTY))
        .expect(1)
        .mount(&europe_pmc)
        .await;

    let client = create_mock_client(&pubmed, &europe_pmc);
    let articles = client.europe_pmc.search("malaria vaccine", 20).await;
    assert!(articles.is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_results_capped_at_limit() {
    let pubmed = MockServer::start().await;
    let europe_pmc = MockServer::start().await;
    mount_search(&europe_pmc, 200, EPMC_TWO_RESULTS).await;

    let client = create_mock_client(&pubmed, &europe_pmc);
    let articles = client.europe_pmc.search("malaria vaccine", 1).await;
    assert_eq!(articles.len(), 1);
}

#[tokio::test]
#[traced_test]
async fn test_malformed_record_does_not_hide_others() {
    let pubmed = MockServer::start().await;
    let europe_pmc = MockServer::start().await;
    mount_search(&europe_pmc, 200, EPMC_WITH_MALFORMED_RECORD).await;

    let client = create_mock_client(&pubmed, &europe_pmc);
    let articles = client.europe_pmc.search("anything", 10).await;

    let pmids: Vec<&str> = articles.iter().map(|a| a.pmid.as_str()).collect();
    assert_eq!(pmids, vec!["1", "3"]);
}

#[tokio::test]
#[traced_test]
async fn test_server_error_degrades_to_empty() {
    let pubmed = MockServer::start().await;
    let europe_pmc = MockServer::start().await;
    mount_search(&europe_pmc, 500, r#"{"error": "internal"}"#).await;

    let client = create_mock_client(&pubmed, &europe_pmc);

    let result = client.europe_pmc.search_articles("malaria", 10).await;
    assert!(matches!(result, Err(LitSearchError::ApiError { .. })));

    assert!(client.europe_pmc.search("malaria", 10).await.is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_non_json_body_degrades_to_empty() {
    let pubmed = MockServer::start().await;
    let europe_pmc = MockServer::start().await;
    mount_search(&europe_pmc, 200, "<html>maintenance</html>").await;

    let client = create_mock_client(&pubmed, &europe_pmc);

    let result = client.europe_pmc.search_articles("malaria", 10).await;
    assert!(matches!(result, Err(LitSearchError::JsonError(_))));

    assert!(client.europe_pmc.search("malaria", 10).await.is_empty());
}
