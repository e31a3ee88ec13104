use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Error types for literature search operations
#[derive(Error, Debug)]
pub enum LitSearchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// XML parsing failed
    #[error("XML parsing failed: {0}")]
    XmlError(String),

    /// Invalid PMID format
    #[error("Invalid PMID format: {pmid}")]
    InvalidPmid { pmid: String },

    /// Upstream API answered with a non-success status
    #[error("API error: {message}")]
    ApiError { message: String },

    /// Inbound request did not carry a usable `query` parameter
    #[error("Query parameter is required")]
    MissingQuery,

    /// Inbound query string could not be decoded
    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    /// Client could not be configured
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LitSearchError {
    /// HTTP status reported when this error reaches a handler
    pub fn status_code(&self) -> StatusCode {
        match self {
            LitSearchError::MissingQuery | LitSearchError::InvalidQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            LitSearchError::RequestError(_)
            | LitSearchError::ApiError { .. }
            | LitSearchError::JsonError(_)
            | LitSearchError::XmlError(_)
            | LitSearchError::InvalidPmid { .. } => StatusCode::BAD_GATEWAY,
            LitSearchError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for LitSearchError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, LitSearchError>;
