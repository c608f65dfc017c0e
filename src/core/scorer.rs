use crate::core::lexicon::Lexicon;
use crate::models::{LexiconEntry, ScoringParams};
use std::sync::Arc;

/// Punctuation stripped from both ends of every token
const TRIM_CHARS: &[char] = &['.', ',', '!', '?', ';', ':', '(', ')'];

/// Score for a text together with the lexicon entries that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown<'a> {
    pub score: f64,
    /// One entry per matching token, in token order
    pub matches: Vec<&'a LexiconEntry>,
}

impl ScoreBreakdown<'_> {
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }
}

/// Bag-of-words mood scorer
///
/// Each whitespace separated token contributes the score of the first
/// lexicon keyword it contains. The average of those scores is then damped
/// toward the neutral midpoint:
///
/// ```text
/// score = neutral + (average - neutral) * dampening
/// ```
///
/// Text with no tokens or no keyword hits scores exactly `neutral`.
#[derive(Debug, Clone)]
pub struct Scorer {
    lexicon: Arc<Lexicon>,
    params: ScoringParams,
}

impl Scorer {
    pub fn new(lexicon: Arc<Lexicon>, params: ScoringParams) -> Self {
        Self { lexicon, params }
    }

    pub fn with_builtin_lexicon() -> Self {
        Self {
            lexicon: Arc::new(Lexicon::builtin()),
            params: ScoringParams::default(),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn params(&self) -> ScoringParams {
        self.params
    }

    /// Mood score for `text`
    pub fn score(&self, text: &str) -> f64 {
        self.evaluate(text).score
    }

    /// Mood score for `text` along with the keywords that matched
    pub fn evaluate(&self, text: &str) -> ScoreBreakdown<'_> {
        let neutral = self.params.neutral_score;
        let lowered = fold_lowercase(text);

        let mut total = 0.0;
        let mut matches = Vec::new();

        for token in lowered.split_whitespace() {
            // At most one keyword per token
            if let Some(entry) = self.lexicon.first_match(clean_token(token)) {
                total += entry.score;
                matches.push(entry);
            }
        }

        if matches.is_empty() {
            return ScoreBreakdown {
                score: neutral,
                matches,
            };
        }

        let average = total / matches.len() as f64;

        ScoreBreakdown {
            score: neutral + (average - neutral) * self.params.dampening,
            matches,
        }
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::with_builtin_lexicon()
    }
}

/// Lowercase one character at a time, keeping the single-character mapping
///
/// `str::to_lowercase` expands 'İ' to "i\u{307}" and picks 'ς' for a
/// word-final 'Σ'. Per-character folding gives 'i' and 'σ', which keeps
/// "NİCE" matching "nice".
pub fn fold_lowercase(text: &str) -> String {
    text.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// Strip leading and trailing punctuation from a token; interior characters
/// are left alone
#[inline]
pub fn clean_token(token: &str) -> &str {
    token.trim_matches(TRIM_CHARS)
}
