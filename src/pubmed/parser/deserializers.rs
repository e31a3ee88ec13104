//! Mixed-content text deserialization for EFetch elements
//!
//! Titles and abstracts can hold markup that survives preprocessing, such as
//! MathML (`<mml:math>`) or `<named-content>`. A plain `$text` field rejects
//! those, so text elements go through [`MixedText`] instead, which collects
//! the text of every child element in document order.

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::result;

/// Text content of an element plus its optional `Label` attribute
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(super) struct MixedText {
    pub label: Option<String>,
    pub text: String,
}

impl<'de> Deserialize<'de> for MixedText {
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MixedTextVisitor)
    }
}

struct MixedTextVisitor;

impl<'de> Visitor<'de> for MixedTextVisitor {
    type Value = MixedText;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("element text content")
    }

    fn visit_str<E>(self, value: &str) -> result::Result<MixedText, E>
    where
        E: de::Error,
    {
        Ok(MixedText {
            label: None,
            text: value.to_string(),
        })
    }

    fn visit_string<E>(self, value: String) -> result::Result<MixedText, E>
    where
        E: de::Error,
    {
        Ok(MixedText { label: None, text: value })
    }

    fn visit_unit<E>(self) -> result::Result<MixedText, E>
    where
        E: de::Error,
    {
        Ok(MixedText::default())
    }

    fn visit_map<M>(self, mut map: M) -> result::Result<MixedText, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut text_parts = Vec::new();
        let mut label = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == "$text" {
                text_parts.push(map.next_value::<String>()?);
            } else if key == "@Label" {
                label = Some(map.next_value::<String>()?);
            } else if key.starts_with('@') {
                let _: IgnoredAny = map.next_value()?;
            } else {
                // `$value` or a nested element such as `mml:mi`
                text_parts.push(map.next_value::<MixedText>()?.text);
            }
        }

        let text = text_parts
            .iter()
            .flat_map(|part| part.split_whitespace())
            .collect::<Vec<_>>()
            .join(" ");
        Ok(MixedText { label, text })
    }
}
