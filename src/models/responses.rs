use serde::{Deserialize, Serialize};

/// Response for the analyze endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodAnalysis {
    #[serde(rename = "moodScore")]
    pub mood_score: f64,
    pub advice: String,
}
