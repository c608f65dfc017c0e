use crate::models::LexiconEntry;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Lowest score a lexicon keyword may carry
pub const MIN_KEYWORD_SCORE: f64 = 1.0;
/// Highest score a lexicon keyword may carry
pub const MAX_KEYWORD_SCORE: f64 = 9.0;

/// Built-in sentiment table. Order is significant: the first keyword found
/// inside a token wins.
const BUILTIN_ENTRIES: [(&str, f64); 30] = [
    ("happy", 8.0),
    ("glad", 7.5),
    ("good", 7.0),
    ("nice", 6.5),
    ("ok", 5.5),
    ("fine", 5.0),
    ("neutral", 5.0),
    ("tired", 4.0),
    ("sad", 3.0),
    ("angry", 2.5),
    ("upset", 2.0),
    ("depressed", 1.5),
    ("terrible", 1.0),
    ("love", 9.0),
    ("enjoy", 8.0),
    ("hate", 1.5),
    ("excited", 8.5),
    ("worried", 3.5),
    ("anxious", 3.0),
    ("stressed", 2.5),
    ("relaxed", 7.0),
    ("calm", 6.5),
    ("frustrated", 3.0),
    ("disappointed", 3.5),
    ("grateful", 8.0),
    ("thankful", 8.0),
    ("proud", 7.5),
    ("confident", 7.0),
    ("lonely", 3.0),
    ("overwhelmed", 2.5),
];

/// Errors that can occur while building a lexicon
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("Lexicon has no entries")]
    Empty,

    #[error("Lexicon entry {index} has an empty keyword")]
    EmptyKeyword { index: usize },

    #[error("Lexicon keyword '{keyword}' must be lowercase")]
    NotLowercase { keyword: String },

    #[error("Lexicon keyword '{keyword}' has score {score}, expected 1.0 to 9.0")]
    ScoreOutOfRange { keyword: String, score: f64 },

    #[error("Failed to read lexicon file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse lexicon file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// On-disk lexicon layout
///
/// ```toml
/// [[entries]]
/// keyword = "happy"
/// score = 8.0
/// ```
#[derive(Debug, Deserialize)]
struct LexiconFile {
    entries: Vec<LexiconEntry>,
}

/// Ordered, immutable sentiment lexicon
#[derive(Debug, Clone, PartialEq)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    /// The built-in 30 keyword table
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_ENTRIES
                .iter()
                .map(|&(keyword, score)| LexiconEntry::new(keyword, score))
                .collect(),
        }
    }

    /// Build a lexicon from caller-supplied entries, keeping their order
    pub fn from_entries(entries: Vec<LexiconEntry>) -> Result<Self, LexiconError> {
        if entries.is_empty() {
            return Err(LexiconError::Empty);
        }

        for (index, entry) in entries.iter().enumerate() {
            validate_entry(index, entry)?;
        }

        Ok(Self { entries })
    }

    /// Load a lexicon from a TOML file of `[[entries]]` tables
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let file: LexiconFile = toml::from_str(&raw)?;

        Self::from_entries(file.entries)
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry, in table order, whose keyword occurs anywhere in `token`
    ///
    /// Matching is substring containment, not equality, so "unhappy" hits
    /// "happy" and "book" hits "ok". Callers rely on these hits staying put.
    #[inline]
    pub fn first_match(&self, token: &str) -> Option<&LexiconEntry> {
        self.entries
            .iter()
            .find(|entry| token.contains(entry.keyword.as_str()))
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_entry(index: usize, entry: &LexiconEntry) -> Result<(), LexiconError> {
    if entry.keyword.is_empty() {
        return Err(LexiconError::EmptyKeyword { index });
    }

    // Text is lowercased before matching, so uppercase keywords could never hit
    if entry.keyword.to_lowercase() != entry.keyword {
        return Err(LexiconError::NotLowercase {
            keyword: entry.keyword.clone(),
        });
    }

    if !entry.score.is_finite()
        || entry.score < MIN_KEYWORD_SCORE
        || entry.score > MAX_KEYWORD_SCORE
    {
        return Err(LexiconError::ScoreOutOfRange {
            keyword: entry.keyword.clone(),
            score: entry.score,
        });
    }

    Ok(())
}
