// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AdviceBucket, LexiconEntry, ScoringParams};
pub use requests::JournalEntry;
pub use responses::MoodAnalysis;
