//! PubMed EFetch XML parsing
//!
//! - `preprocessing` - inline markup removal ahead of deserialization
//! - `deserializers` - mixed-content text handling for titles and abstracts
//! - `xml_types` - serde mirror of the EFetch schema and its conversion to [`Article`]
//!
//! The entry point is [`parse_articles_from_xml`].

mod deserializers;
pub(crate) mod preprocessing;
mod xml_types;

use crate::article::Article;
use crate::error::{LitSearchError, Result};
use preprocessing::strip_inline_html_tags;
use quick_xml::de::from_str;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use tracing::{debug, instrument, warn};
use xml_types::PubmedArticleXml;

const ARTICLE_SET_TAG: &[u8] = b"PubmedArticleSet";
const ARTICLE_TAG: &[u8] = b"PubmedArticle";

/// Parse every `<PubmedArticle>` in an EFetch response
///
/// The document as a whole must be well-formed with a `PubmedArticleSet`
/// root; otherwise an [`LitSearchError::XmlError`] is returned. Each record is
/// deserialized on its own, and records that cannot be converted (content
/// that does not fit the schema, no PMID, non-numeric PMID) are logged and
/// skipped so one bad record never hides the rest of the batch.
///
/// # Example
///
/// ```
/// use litsearch_proxy::pubmed::parse_articles_from_xml;
///
/// let xml = r#"<?xml version="1.0"?>
/// <PubmedArticleSet>
///   <PubmedArticle>
///     <MedlineCitation>
///       <PMID>12345678</PMID>
///       <Article>
///         <ArticleTitle>Example Article</ArticleTitle>
///         <Journal><Title>Example Journal</Title></Journal>
///       </Article>
///     </MedlineCitation>
///   </PubmedArticle>
/// </PubmedArticleSet>"#;
///
/// let articles = parse_articles_from_xml(xml)?;
/// assert_eq!(articles[0].title, "Example Article");
/// assert_eq!(articles[0].url, "https://pubmed.ncbi.nlm.nih.gov/12345678/");
/// # Ok::<(), litsearch_proxy::LitSearchError>(())
/// ```
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_articles_from_xml(xml: &str) -> Result<Vec<Article>> {
    let cleaned_xml = strip_inline_html_tags(xml);
    let fragments = split_article_fragments(&cleaned_xml)?;
    debug!(records = fragments.len(), "Split EFetch response into records");

    let articles = fragments
        .iter()
        .enumerate()
        .filter_map(|(index, fragment)| match parse_article(fragment) {
            Ok(article) => Some(article),
            Err(e) => {
                warn!(index, error = %e, "Failed to parse article, skipping");
                None
            }
        })
        .collect();

    Ok(articles)
}

fn parse_article(fragment: &str) -> Result<Article> {
    let article_xml: PubmedArticleXml = from_str(fragment)
        .map_err(|e| LitSearchError::XmlError(format!("Failed to deserialize article: {}", e)))?;
    article_xml.into_article()
}

/// Cut the document into standalone `<PubmedArticle>` documents
///
/// Only the nesting of `PubmedArticle` itself is tracked, so markup inside a
/// record with mismatched end tags stays confined to that record.
fn split_article_fragments(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().check_end_names = false;

    let mut fragments = Vec::new();
    let mut saw_root = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == ARTICLE_SET_TAG {
                    saw_root = true;
                } else if e.name().as_ref() == ARTICLE_TAG {
                    let span = reader.read_to_end(e.name()).map_err(|err| {
                        LitSearchError::XmlError(format!("Unterminated PubmedArticle: {}", err))
                    })?;
                    let inner = &xml[span.start as usize..span.end as usize];
                    fragments.push(format!("<PubmedArticle>{}</PubmedArticle>", inner));
                }
            }
            Ok(Event::Empty(e)) if e.name().as_ref() == ARTICLE_SET_TAG => saw_root = true,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(LitSearchError::XmlError(format!("Failed to read XML: {}", e)));
            }
        }
    }

    if !saw_root {
        return Err(LitSearchError::XmlError(
            "Missing PubmedArticleSet root element".to_string(),
        ));
    }

    Ok(fragments)
}
