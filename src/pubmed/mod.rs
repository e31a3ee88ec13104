//! PubMed provider
//!
//! Searches NCBI E-utilities with ESearch (JSON) and retrieves the matching
//! records in a single EFetch (XML) call.

pub mod client;
pub mod parser;
mod responses;

pub use client::PubMedClient;
pub use parser::parse_articles_from_xml;
