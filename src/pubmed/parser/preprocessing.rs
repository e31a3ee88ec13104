//! Cleanup applied to EFetch XML before deserialization

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Strip inline formatting tags such as `<i>`, `<sup>` and `<sub>`
///
/// PubMed titles and abstracts carry these tags as mixed content. Opening
/// tags may carry attributes. Only the tags are removed; their text content
/// stays in place.
pub(crate) fn strip_inline_html_tags(xml: &str) -> String {
    static INLINE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = INLINE_TAG_REGEX.get_or_init(|| {
        Regex::new(r"</?(?:i|b|u|sup|sub|em|strong|italic|bold|underline|sc)(?:\s[^>]*)?>")
            .expect("inline tag regex is valid")
    });

    let cleaned = re.replace_all(xml, "");

    if cleaned.len() != xml.len() {
        debug!(
            original_bytes = xml.len(),
            cleaned_bytes = cleaned.len(),
            "Stripped inline formatting tags"
        );
    }

    cleaned.into_owned()
}
