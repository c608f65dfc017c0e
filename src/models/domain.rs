use serde::{Deserialize, Serialize};

/// Sentiment keyword with its score on the 1-9 mood scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub keyword: String,
    pub score: f64,
}

impl LexiconEntry {
    pub fn new(keyword: impl Into<String>, score: f64) -> Self {
        Self {
            keyword: keyword.into(),
            score,
        }
    }
}

/// Scoring parameters
///
/// A text's average keyword score is pulled toward `neutral_score` by
/// `dampening` (1.0 keeps the average, 0.0 always yields neutral).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringParams {
    pub neutral_score: f64,
    pub dampening: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            neutral_score: 5.0,
            dampening: 0.7,
        }
    }
}

/// Advice category selected from a mood score
///
/// Variants are declared from least to most positive, so the derived
/// ordering ranks buckets by positivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdviceBucket {
    QuiteLow,
    Down,
    BitLow,
    NeutralReflective,
    FairlyPositive,
    PrettyGood,
    VeryGood,
    Excellent,
}

impl AdviceBucket {
    pub const ALL: [AdviceBucket; 8] = [
        AdviceBucket::QuiteLow,
        AdviceBucket::Down,
        AdviceBucket::BitLow,
        AdviceBucket::NeutralReflective,
        AdviceBucket::FairlyPositive,
        AdviceBucket::PrettyGood,
        AdviceBucket::VeryGood,
        AdviceBucket::Excellent,
    ];

    pub fn id(self) -> &'static str {
        match self {
            AdviceBucket::QuiteLow => "quite-low",
            AdviceBucket::Down => "down",
            AdviceBucket::BitLow => "bit-low",
            AdviceBucket::NeutralReflective => "neutral-reflective",
            AdviceBucket::FairlyPositive => "fairly-positive",
            AdviceBucket::PrettyGood => "pretty-good",
            AdviceBucket::VeryGood => "very-good",
            AdviceBucket::Excellent => "excellent",
        }
    }
}

impl std::fmt::Display for AdviceBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_ordering_follows_positivity() {
        assert!(AdviceBucket::QuiteLow < AdviceBucket::Down);
        assert!(AdviceBucket::VeryGood < AdviceBucket::Excellent);

        let mut sorted = AdviceBucket::ALL;
        sorted.sort();
        assert_eq!(sorted, AdviceBucket::ALL);
    }

    #[test]
    fn test_bucket_serializes_as_id() {
        for bucket in AdviceBucket::ALL {
            let json = serde_json::to_string(&bucket).unwrap();
            assert_eq!(json, format!("\"{}\"", bucket.id()));
        }
    }
}
