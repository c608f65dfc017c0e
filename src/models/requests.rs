use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Journal entry submitted for mood analysis
///
/// Both fields default to empty when absent. Only `content` is scored.
///
/// Decoding is lenient in the same ways as the journal backend's original
/// analyzer: field names match case-insensitively (`"Content"` fills
/// `content`), a `null` field is skipped, and when a key repeats the last
/// non-null value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JournalEntry {
    pub content: String,
    pub title: String,
}

impl JournalEntry {
    pub fn new(content: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            title: title.into(),
        }
    }

    /// Decode a request body
    ///
    /// Only the first JSON value is read; anything after it is ignored. A
    /// bare `null` yields an empty entry, and an empty body is an `EOF`
    /// error.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<JournalEntry>>();

        match values.next() {
            Some(entry) => Ok(entry?.unwrap_or_default()),
            None => Err(de::Error::custom("EOF")),
        }
    }
}

impl<'de> Deserialize<'de> for JournalEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(JournalEntryVisitor)
    }
}

struct JournalEntryVisitor;

impl<'de> Visitor<'de> for JournalEntryVisitor {
    type Value = JournalEntry;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("struct JournalEntry")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entry = JournalEntry::default();

        while let Some(key) = map.next_key::<String>()? {
            let field = if key.eq_ignore_ascii_case("content") {
                &mut entry.content
            } else if key.eq_ignore_ascii_case("title") {
                &mut entry.title
            } else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };

            if let Some(value) = map.next_value::<Option<String>>()? {
                *field = value;
            }
        }

        Ok(entry)
    }
}
