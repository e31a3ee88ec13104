//! HTTP surface: two search endpoints and a health probe
//!
//! | route            | handler                               |
//! |------------------|---------------------------------------|
//! | `/pubmed/search` | [`handlers::pubmed_search_handler`]     |
//! | `/epmc/search`   | [`handlers::europe_pmc_search_handler`] |
//! | `/health`        | [`handlers::health_handler`]            |

pub mod handlers;
pub mod middleware;
pub mod params;

use std::sync::Arc;

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::cors::CorsLayer;

use crate::Client;

/// Build the application router around a shared provider client
pub fn router(client: Arc<Client>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/pubmed/search", get(handlers::pubmed_search_handler))
        .route("/epmc/search", get(handlers::europe_pmc_search_handler))
        .layer(axum_middleware::from_fn(middleware::log_request))
        .layer(CorsLayer::permissive())
        .with_state(client)
}
