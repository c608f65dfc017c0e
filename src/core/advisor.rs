use crate::models::AdviceBucket;

/// Lower bounds on the rounded score, scanned from the top down. Anything
/// below the last threshold lands in `QuiteLow`.
const ADVICE_THRESHOLDS: [(f64, AdviceBucket); 7] = [
    (8.5, AdviceBucket::Excellent),
    (7.5, AdviceBucket::VeryGood),
    (6.5, AdviceBucket::PrettyGood),
    (5.5, AdviceBucket::FairlyPositive),
    (4.5, AdviceBucket::NeutralReflective),
    (3.5, AdviceBucket::BitLow),
    (2.5, AdviceBucket::Down),
];

/// Maps mood scores onto fixed advice text
#[derive(Debug, Clone, Copy, Default)]
pub struct Advisor;

impl Advisor {
    pub fn new() -> Self {
        Self
    }

    /// Advice for a mood score.
    ///
    /// `_content` is the journal text the score came from. The buckets only
    /// look at the score today; the parameter is where content-aware advice
    /// would hook in.
    pub fn advise(&self, score: f64, _content: &str) -> &'static str {
        advice_text(self.bucket_for(score))
    }

    /// Bucket for a mood score after rounding to the nearest half point
    ///
    /// NaN compares false against every threshold and falls to `QuiteLow`.
    pub fn bucket_for(&self, score: f64) -> AdviceBucket {
        let rounded = round_to_half(score);

        ADVICE_THRESHOLDS
            .iter()
            .find(|(threshold, _)| rounded >= *threshold)
            .map(|&(_, bucket)| bucket)
            .unwrap_or(AdviceBucket::QuiteLow)
    }
}

/// Round to the nearest 0.5, halves away from zero
#[inline]
pub fn round_to_half(score: f64) -> f64 {
    (score * 2.0).round() / 2.0
}

/// Fixed advice text for a bucket
pub fn advice_text(bucket: AdviceBucket) -> &'static str {
    match bucket {
        AdviceBucket::Excellent => "Your mood is excellent! This is a great time to tackle challenging tasks or help others. Consider journaling about what made today so positive so you can reference it later.",
        AdviceBucket::VeryGood => "You're in a very good mood today. Try to identify the factors contributing to your positive state and consider how to incorporate more of these elements into your daily routine.",
        AdviceBucket::PrettyGood => "You're feeling pretty good today. This is a good time for creative activities or social connection. Remember these positive feelings when you encounter challenges.",
        AdviceBucket::FairlyPositive => "Your mood is fairly positive. Consider activities that might further elevate your mood, like a brief walk outside, listening to uplifting music, or connecting with a friend.",
        AdviceBucket::NeutralReflective => "You seem to be feeling neutral today. This could be a good time for reflection or planning. Consider what small steps might shift your day in a more positive direction.",
        AdviceBucket::BitLow => "You're feeling a bit low today. Consider some self-care activities like going for a walk, practicing mindfulness, or engaging in a hobby you enjoy.",
        AdviceBucket::Down => "Your journal suggests you're feeling down. Try to be kind to yourself today. Simple activities like light exercise, calling a friend, or spending time in nature might help lift your spirits.",
        AdviceBucket::QuiteLow => "I notice your mood appears quite low today. Remember that emotions are temporary and can change. Consider talking to someone you trust, practicing self-compassion, or engaging in activities that have helped you feel better in the past.",
    }
}
