// Core algorithm exports
pub mod advisor;
pub mod analyzer;
pub mod lexicon;
pub mod scorer;

pub use advisor::{advice_text, round_to_half, Advisor};
pub use analyzer::MoodAnalyzer;
pub use lexicon::{Lexicon, LexiconError};
pub use scorer::{clean_token, fold_lowercase, ScoreBreakdown, Scorer};
