//! Serde mirror of the parts of the EFetch `PubmedArticle` schema we read
//!
//! Every element is optional so a sparse record still deserializes; deciding
//! whether a record is usable happens in [`PubmedArticleXml::into_article`].

use crate::article::{
    Article, NO_ABSTRACT, NO_TITLE, UNKNOWN_JOURNAL, UNKNOWN_YEAR, build_url, format_authors,
    normalize_pmcid, or_placeholder, truncate_abstract,
};
use crate::error::{LitSearchError, Result};
use serde::Deserialize;

use super::deserializers::MixedText;

#[derive(Debug, Deserialize)]
pub(super) struct PubmedArticleXml {
    #[serde(rename = "MedlineCitation", default)]
    pub medline_citation: Option<MedlineCitation>,
    #[serde(rename = "PubmedData", default)]
    pub pubmed_data: Option<PubmedData>,
}

#[derive(Debug, Deserialize)]
pub(super) struct MedlineCitation {
    #[serde(rename = "PMID", default)]
    pub pmid: Option<TextElement>,
    #[serde(rename = "Article", default)]
    pub article: Option<ArticleXml>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(from = "MixedText")]
pub(super) struct TextElement {
    pub value: String,
}

impl From<MixedText> for TextElement {
    fn from(mixed: MixedText) -> Self {
        Self { value: mixed.text }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct ArticleXml {
    #[serde(rename = "Journal", default)]
    pub journal: Option<JournalXml>,
    #[serde(rename = "ArticleTitle", default)]
    pub article_title: Option<TextElement>,
    #[serde(rename = "ELocationID", default)]
    pub elocation_ids: Vec<ELocationIdXml>,
    #[serde(rename = "Abstract", default)]
    pub abstract_xml: Option<AbstractXml>,
    #[serde(rename = "AuthorList", default)]
    pub author_list: Option<AuthorListXml>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct JournalXml {
    #[serde(rename = "Title", default)]
    pub title: Option<TextElement>,
    #[serde(rename = "ISOAbbreviation", default)]
    pub iso_abbreviation: Option<TextElement>,
    #[serde(rename = "JournalIssue", default)]
    pub journal_issue: Option<JournalIssueXml>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct JournalIssueXml {
    #[serde(rename = "PubDate", default)]
    pub pub_date: Option<PubDateXml>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct PubDateXml {
    #[serde(rename = "Year", default)]
    pub year: Option<TextElement>,
    #[serde(rename = "MedlineDate", default)]
    pub medline_date: Option<TextElement>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct AbstractXml {
    #[serde(rename = "AbstractText", default)]
    pub parts: Vec<AbstractTextXml>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(from = "MixedText")]
pub(super) struct AbstractTextXml {
    pub label: Option<String>,
    pub text: String,
}

impl From<MixedText> for AbstractTextXml {
    fn from(mixed: MixedText) -> Self {
        Self {
            label: mixed.label,
            text: mixed.text,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct AuthorListXml {
    #[serde(rename = "Author", default)]
    pub authors: Vec<AuthorXml>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct AuthorXml {
    #[serde(rename = "LastName", default)]
    pub last_name: Option<TextElement>,
    #[serde(rename = "ForeName", default)]
    pub fore_name: Option<TextElement>,
    #[serde(rename = "Initials", default)]
    pub initials: Option<TextElement>,
    #[serde(rename = "CollectiveName", default)]
    pub collective_name: Option<TextElement>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct PubmedData {
    #[serde(rename = "ArticleIdList", default)]
    pub article_id_list: Option<ArticleIdListXml>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct ArticleIdListXml {
    #[serde(rename = "ArticleId", default)]
    pub ids: Vec<ArticleIdXml>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct ArticleIdXml {
    #[serde(rename = "@IdType", default)]
    pub id_type: Option<String>,
    #[serde(rename = "$text", default)]
    pub value: String,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct ELocationIdXml {
    #[serde(rename = "@EIdType", default)]
    pub id_type: Option<String>,
    #[serde(rename = "$text", default)]
    pub value: String,
}

impl TextElement {
    fn non_empty(&self) -> Option<&str> {
        let trimmed = self.value.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

fn text_of(element: &Option<TextElement>) -> Option<&str> {
    element.as_ref().and_then(TextElement::non_empty)
}

impl AuthorXml {
    /// `LastName Initials`, the way PubMed lists authors
    fn display_name(&self) -> Option<String> {
        if let Some(last) = text_of(&self.last_name) {
            let initials = text_of(&self.initials).map(str::to_string).or_else(|| {
                text_of(&self.fore_name)
                    .and_then(|fore| fore.chars().next())
                    .map(String::from)
            });
            return Some(match initials {
                Some(initials) => format!("{} {}", last, initials),
                None => last.to_string(),
            });
        }

        text_of(&self.collective_name)
            .or_else(|| text_of(&self.fore_name))
            .map(str::to_string)
    }
}

impl AbstractXml {
    fn joined_text(&self) -> String {
        self.parts
            .iter()
            .filter(|part| !part.text.trim().is_empty())
            .map(|part| match part.label.as_deref().map(str::trim) {
                Some(label) if !label.is_empty() => format!("{}: {}", label, part.text.trim()),
                _ => part.text.trim().to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl PubDateXml {
    fn year(&self) -> Option<String> {
        text_of(&self.year)
            .and_then(first_year)
            .or_else(|| text_of(&self.medline_date).and_then(first_year))
    }
}

/// First run of four ASCII digits, e.g. `1998` from `1998 Dec-1999 Jan`
fn first_year(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    bytes
        .windows(4)
        .position(|w| w.iter().all(u8::is_ascii_digit))
        .map(|start| text[start..start + 4].to_string())
}

impl PubmedArticleXml {
    /// Convert one `<PubmedArticle>` into the normalized record
    ///
    /// Fails only when the record has no usable PMID; every other missing
    /// field falls back to its placeholder.
    pub(super) fn into_article(self) -> Result<Article> {
        let citation = self.medline_citation.ok_or_else(|| LitSearchError::InvalidPmid {
            pmid: String::new(),
        })?;

        let pmid = text_of(&citation.pmid).unwrap_or_default().to_string();
        if pmid.is_empty() || !pmid.chars().all(|c| c.is_ascii_digit()) {
            return Err(LitSearchError::InvalidPmid { pmid });
        }

        let article = citation.article.unwrap_or_default();
        let journal = article.journal.unwrap_or_default();

        let title = or_placeholder(text_of(&article.article_title), NO_TITLE);

        let author_names: Vec<String> = article
            .author_list
            .map(|list| list.authors.iter().filter_map(AuthorXml::display_name).collect())
            .unwrap_or_default();
        let authors = format_authors(&author_names);

        let journal_name = or_placeholder(
            text_of(&journal.title).or_else(|| text_of(&journal.iso_abbreviation)),
            UNKNOWN_JOURNAL,
        );

        let year = journal
            .journal_issue
            .and_then(|issue| issue.pub_date)
            .and_then(|date| date.year())
            .unwrap_or_else(|| UNKNOWN_YEAR.to_string());

        let abstract_text = article
            .abstract_xml
            .map(|a| a.joined_text())
            .filter(|text| !text.is_empty())
            .map(|text| truncate_abstract(&text))
            .unwrap_or_else(|| NO_ABSTRACT.to_string());

        let ids = self
            .pubmed_data
            .and_then(|data| data.article_id_list)
            .map(|list| list.ids)
            .unwrap_or_default();
        let find_id = |wanted: &str| {
            ids.iter()
                .find(|id| id.id_type.as_deref() == Some(wanted) && !id.value.trim().is_empty())
                .map(|id| id.value.trim().to_string())
        };

        let doi = find_id("doi")
            .or_else(|| {
                article
                    .elocation_ids
                    .iter()
                    .find(|id| id.id_type.as_deref() == Some("doi") && !id.value.trim().is_empty())
                    .map(|id| id.value.trim().to_string())
            })
            .unwrap_or_default();
        let pmcid = find_id("pmc")
            .map(|id| normalize_pmcid(&id))
            .unwrap_or_default();

        let url = build_url(&pmid, &pmcid, &doi);

        Ok(Article {
            title,
            authors,
            journal: journal_name,
            year,
            pmid,
            pmcid,
            doi,
            url,
            abstract_text,
        })
    }
}
