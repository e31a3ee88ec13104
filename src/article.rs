//! Normalized article record shared by every provider
//!
//! Providers disagree on nearly every field name and format. Everything they
//! return is projected into [`Article`], whose fields are always present
//! strings so downstream consumers never have to deal with nulls.

use serde::{Deserialize, Serialize};

/// Maximum number of characters kept from an abstract
pub const ABSTRACT_MAX_CHARS: usize = 800;

/// Number of author names listed before the `et al.` suffix
pub const MAX_LISTED_AUTHORS: usize = 3;

pub const NO_TITLE: &str = "No title available";
pub const NO_AUTHORS: &str = "No authors listed";
pub const UNKNOWN_JOURNAL: &str = "Unknown journal";
pub const UNKNOWN_YEAR: &str = "Unknown year";
pub const NO_ABSTRACT: &str = "No abstract available";

const PUBMED_ARTICLE_URL: &str = "https://pubmed.ncbi.nlm.nih.gov";
const PMC_ARTICLE_URL: &str = "https://www.ncbi.nlm.nih.gov/pmc/articles";
const DOI_RESOLVER_URL: &str = "https://doi.org";

/// One search result in the normalized schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub authors: String,
    pub journal: String,
    pub year: String,
    pub pmid: String,
    pub pmcid: String,
    pub doi: String,
    pub url: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

/// Body returned by both search endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub articles: Vec<Article>,
}

impl From<Vec<Article>> for SearchResponse {
    fn from(articles: Vec<Article>) -> Self {
        Self { articles }
    }
}

/// Join author names for display
///
/// Blank names are dropped. At most [`MAX_LISTED_AUTHORS`] names are kept;
/// when more exist the list ends with `et al.`.
///
/// # Example
///
/// ```
/// use litsearch_proxy::article::format_authors;
///
/// let names = ["Wu F", "Zhao S", "Yu B", "Chen YM"];
/// assert_eq!(format_authors(&names), "Wu F, Zhao S, Yu B, et al.");
/// assert_eq!(format_authors(&["Wu F"]), "Wu F");
/// ```
pub fn format_authors<S: AsRef<str>>(names: &[S]) -> String {
    let names: Vec<&str> = names
        .iter()
        .map(|n| n.as_ref().trim())
        .filter(|n| !n.is_empty())
        .collect();

    if names.is_empty() {
        return NO_AUTHORS.to_string();
    }

    let mut joined = names
        .iter()
        .take(MAX_LISTED_AUTHORS)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    if names.len() > MAX_LISTED_AUTHORS {
        joined.push_str(", et al.");
    }
    joined
}

/// Collapse whitespace and cut the text at [`ABSTRACT_MAX_CHARS`] characters
///
/// Truncated text ends with `...`. Counting is by `char`, so multi-byte
/// characters are never split.
pub fn truncate_abstract(text: &str) -> String {
    let collapsed = collapse_whitespace(text);

    let cut = collapsed
        .char_indices()
        .nth(ABSTRACT_MAX_CHARS)
        .map(|(index, _)| index);
    match cut {
        Some(cut) => format!("{}...", &collapsed[..cut]),
        None => collapsed,
    }
}

/// Display link for an article, preferring PubMed, then PMC, then DOI
///
/// Returns an empty string when no identifier is present.
pub fn build_url(pmid: &str, pmcid: &str, doi: &str) -> String {
    let pmid = pmid.trim();
    let pmcid = pmcid.trim();
    let doi = doi.trim();

    if !pmid.is_empty() {
        format!("{}/{}/", PUBMED_ARTICLE_URL, pmid)
    } else if !pmcid.is_empty() {
        format!("{}/{}/", PMC_ARTICLE_URL, normalize_pmcid(pmcid))
    } else if !doi.is_empty() {
        format!("{}/{}", DOI_RESOLVER_URL, doi)
    } else {
        String::new()
    }
}

/// Ensure a PMC identifier carries its `PMC` prefix
pub fn normalize_pmcid(pmcid: &str) -> String {
    let trimmed = pmcid.trim();
    if trimmed.is_empty() || trimmed.to_ascii_uppercase().starts_with("PMC") {
        trimmed.to_string()
    } else {
        format!("PMC{}", trimmed)
    }
}

/// Trimmed value, or the placeholder when the value is missing or blank
pub(crate) fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => collapse_whitespace(v),
        _ => placeholder.to_string(),
    }
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
