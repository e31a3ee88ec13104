//! Europe PMC provider
//!
//! One JSON search call per request against the Europe PMC REST API.

pub mod client;
pub mod responses;

pub use client::EuropePmcClient;
pub use responses::parse_search_response;
