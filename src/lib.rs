//! Mood AI - Mood analysis service for the mood journal app
//!
//! Scores free-text journal entries with a keyword lexicon and pairs the
//! score with a fixed piece of advice.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{Advisor, Lexicon, MoodAnalyzer, Scorer};
pub use error::{RequestError, StartupError};
pub use models::{AdviceBucket, JournalEntry, LexiconEntry, MoodAnalysis, ScoringParams};
