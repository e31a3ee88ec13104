//! Europe PMC search response envelope and per-record conversion

use crate::article::{
    Article, NO_TITLE, UNKNOWN_JOURNAL, UNKNOWN_YEAR, build_url, format_authors,
    normalize_pmcid, or_placeholder,
};
use crate::error::Result;
use crate::pubmed::parser::preprocessing::strip_inline_html_tags;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// Top level of `GET /search?format=json`
///
/// Records stay as raw [`Value`]s here so a single bad record can be skipped
/// instead of failing the whole envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope {
    #[serde(rename = "hitCount", default)]
    pub hit_count: Option<u64>,
    #[serde(rename = "resultList", default)]
    pub result_list: Option<ResultList>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResultList {
    #[serde(default)]
    pub result: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EuropePmcRecord {
    pub title: Option<String>,
    pub author_string: Option<String>,
    pub journal_title: Option<String>,
    pub journal_info: Option<JournalInfo>,
    pub pub_year: Option<String>,
    pub pmid: Option<String>,
    pub pmcid: Option<String>,
    pub doi: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct JournalInfo {
    pub journal: Option<JournalDetails>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct JournalDetails {
    pub title: Option<String>,
}

/// Split an `authorString` such as `"Wu F, Zhao S, Yu B."` into names
fn split_author_string(author_string: &str) -> Vec<String> {
    author_string
        .trim()
        .trim_end_matches('.')
        .split(',')
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Title-like text with inline `<i>`/`<sup>` markup removed
fn clean_text(value: Option<&str>) -> Option<String> {
    value.map(strip_inline_html_tags)
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl EuropePmcRecord {
    pub(crate) fn into_article(self) -> Article {
        let names = self
            .author_string
            .as_deref()
            .map(split_author_string)
            .unwrap_or_default();

        let journal_from_info = self
            .journal_info
            .as_ref()
            .and_then(|info| info.journal.as_ref())
            .and_then(|journal| non_blank(&journal.title));
        let title = clean_text(self.title.as_deref());
        let journal = clean_text(non_blank(&self.journal_title).or(journal_from_info));

        let pmid = non_blank(&self.pmid).unwrap_or_default().to_string();
        let pmcid = non_blank(&self.pmcid)
            .map(normalize_pmcid)
            .unwrap_or_default();
        let doi = non_blank(&self.doi).unwrap_or_default().to_string();
        let url = build_url(&pmid, &pmcid, &doi);

        Article {
            title: or_placeholder(title.as_deref(), NO_TITLE),
            authors: format_authors(&names),
            journal: or_placeholder(journal.as_deref(), UNKNOWN_JOURNAL),
            year: or_placeholder(self.pub_year.as_deref(), UNKNOWN_YEAR),
            pmid,
            pmcid,
            doi,
            url,
            abstract_text: String::new(),
        }
    }
}

/// Parse a Europe PMC search response body into normalized articles
///
/// The body must be a JSON object; a missing `resultList` means no results.
/// Entries that do not deserialize as a record are logged and skipped.
#[instrument(skip(body), fields(body_size = body.len()))]
pub fn parse_search_response(body: &str) -> Result<Vec<Article>> {
    let envelope: SearchEnvelope = serde_json::from_str(body)?;

    let records = envelope
        .result_list
        .map(|list| list.result)
        .unwrap_or_default();

    let articles = records
        .into_iter()
        .enumerate()
        .filter_map(
            |(index, value)| match serde_json::from_value::<EuropePmcRecord>(value) {
                Ok(record) => Some(record.into_article()),
                Err(e) => {
                    warn!(index, error = %e, "Failed to parse Europe PMC record, skipping");
                    None
                }
            },
        )
        .collect::<Vec<_>>();

    if let Some(hit_count) = envelope.hit_count {
        debug!(hit_count, returned = articles.len(), "Parsed Europe PMC results");
    }

    Ok(articles)
}
