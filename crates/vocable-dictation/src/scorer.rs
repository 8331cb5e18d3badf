//! Dictation accuracy scoring.
//!
//! Compares a reference sentence with a learner's transcription and produces
//! an integer accuracy percentage plus a correct/incorrect verdict:
//!
//! 1. Trim both strings.
//! 2. Both empty scores 100, exactly one empty scores 0.
//! 3. Otherwise fold case, take the Levenshtein distance `d` and the longer
//!    trimmed length `n`, and truncate `(n - d) / n * 100` toward zero.
//! 4. The attempt is correct when the accuracy meets the mastery threshold.

use vocable_core::config::ScoringConfig;
use vocable_core::types::{MasteryThreshold, ScoringInput, ScoringResult};

use crate::levenshtein::edit_distance;

/// Scores dictation attempts against a mastery threshold.
///
/// Holds no state beyond the threshold, so one scorer can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DictationScorer {
    threshold: MasteryThreshold,
}

impl DictationScorer {
    /// Create a scorer using the default threshold of 80%.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(threshold: MasteryThreshold) -> Self {
        Self { threshold }
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self::with_threshold(config.mastery_threshold)
    }

    pub fn threshold(&self) -> MasteryThreshold {
        self.threshold
    }

    /// Score `submitted` against `reference`.
    ///
    /// Total over all string pairs: never panics and never fails.
    pub fn score(&self, reference: &str, submitted: &str) -> ScoringResult {
        match compare(reference, submitted) {
            Comparison::BothEmpty => ScoringResult::PERFECT,
            Comparison::OneEmpty => ScoringResult::MISSED,
            Comparison::Scored(accuracy) => ScoringResult {
                accuracy_percentage: accuracy,
                is_correct: self.threshold.is_met_by(accuracy),
            },
        }
    }

    pub fn score_input(&self, input: &ScoringInput) -> ScoringResult {
        self.score(&input.reference, &input.submitted)
    }

    /// Score every input independently, preserving order.
    pub fn score_batch(&self, inputs: &[ScoringInput]) -> Vec<ScoringResult> {
        let results: Vec<ScoringResult> = inputs.iter().map(|i| self.score_input(i)).collect();
        tracing::debug!(
            count = results.len(),
            correct = results.iter().filter(|r| r.is_correct).count(),
            threshold = %self.threshold,
            "Scored dictation batch"
        );
        results
    }
}

/// Score with the default 80% threshold.
pub fn score(reference: &str, submitted: &str) -> ScoringResult {
    DictationScorer::new().score(reference, submitted)
}

/// Compute the accuracy percentage of `submitted` against `reference`.
pub fn accuracy_percentage(reference: &str, submitted: &str) -> u8 {
    match compare(reference, submitted) {
        Comparison::BothEmpty => ScoringResult::PERFECT.accuracy_percentage,
        Comparison::OneEmpty => ScoringResult::MISSED.accuracy_percentage,
        Comparison::Scored(accuracy) => accuracy,
    }
}

enum Comparison {
    BothEmpty,
    /// Exactly one side is empty; always incorrect whatever the threshold.
    OneEmpty,
    Scored(u8),
}

fn compare(reference: &str, submitted: &str) -> Comparison {
    let reference = fold_case(reference.trim());
    let submitted = fold_case(submitted.trim());

    match (reference.is_empty(), submitted.is_empty()) {
        (true, true) => return Comparison::BothEmpty,
        (true, false) | (false, true) => return Comparison::OneEmpty,
        (false, false) => {}
    }

    let distance = edit_distance(&reference, &submitted);
    let max_length = reference.len().max(submitted.len());

    // Truncate after the float division rather than rounding.
    let raw = (max_length.saturating_sub(distance) as f64 / max_length as f64 * 100.0) as i64;
    let accuracy = raw.clamp(0, 100) as u8;

    tracing::trace!(distance, max_length, accuracy, "Dictation attempt scored");
    Comparison::Scored(accuracy)
}

/// Lowercase each `char` independently of locale.
///
/// A character whose lowercase form expands to several characters (such as
/// `'İ'`) is kept as-is so the folded sequence has the same length as the
/// input.
fn fold_case(text: &str) -> Vec<char> {
    text.chars()
        .map(|c| {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(l), None) => l,
                _ => c,
            }
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
