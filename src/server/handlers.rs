//! HTTP request handlers
//!
//! Search handlers only fail on bad input. Provider trouble is absorbed by the
//! clients and surfaces as an empty article list with status 200.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
};
use serde::Serialize;
use tracing::info;

use crate::Client;
use crate::article::SearchResponse;
use crate::error::{LitSearchError, Result};
use crate::server::params::SearchParams;

/// Turn an undecodable query string into the JSON 400 used for bad input
fn search_params(
    params: std::result::Result<Query<SearchParams>, QueryRejection>,
) -> Result<SearchParams> {
    params
        .map(|Query(params)| params)
        .map_err(|rejection| LitSearchError::InvalidQuery(rejection.body_text()))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Liveness probe; touches no upstream service
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse { status: "healthy" })
}

/// `GET /pubmed/search`
pub async fn pubmed_search_handler(
    State(client): State<Arc<Client>>,
    params: std::result::Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>> {
    let request = search_params(params)?.validate()?;
    let articles = client.pubmed.search(&request.query, request.max).await;

    info!(
        provider = "pubmed",
        query = %request.query,
        max = request.max,
        returned = articles.len(),
        "Search served"
    );
    Ok(Json(SearchResponse::from(articles)))
}

/// `GET /epmc/search`
pub async fn europe_pmc_search_handler(
    State(client): State<Arc<Client>>,
    params: std::result::Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>> {
    let request = search_params(params)?.validate()?;
    let articles = client.europe_pmc.search(&request.query, request.max).await;

    info!(
        provider = "europe_pmc",
        query = %request.query,
        max = request.max,
        returned = articles.len(),
        "Search served"
    );
    Ok(Json(SearchResponse::from(articles)))
}
