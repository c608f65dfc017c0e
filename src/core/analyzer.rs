use crate::core::{advisor::Advisor, scorer::Scorer};
use crate::models::{JournalEntry, MoodAnalysis};

/// Runs a journal entry through the scorer and then the advisor
#[derive(Debug, Clone, Default)]
pub struct MoodAnalyzer {
    scorer: Scorer,
    advisor: Advisor,
}

impl MoodAnalyzer {
    pub fn new(scorer: Scorer, advisor: Advisor) -> Self {
        Self { scorer, advisor }
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn advisor(&self) -> &Advisor {
        &self.advisor
    }

    /// Score the entry's content and pick advice for it. The title is ignored.
    pub fn analyze(&self, entry: &JournalEntry) -> MoodAnalysis {
        let breakdown = self.scorer.evaluate(&entry.content);
        let bucket = self.advisor.bucket_for(breakdown.score);

        tracing::debug!(
            score = breakdown.score,
            matches = breakdown.match_count(),
            bucket = %bucket,
            "Analyzed journal entry"
        );

        MoodAnalysis {
            mood_score: breakdown.score,
            advice: self.advisor.advise(breakdown.score, &entry.content).to_string(),
        }
    }
}
