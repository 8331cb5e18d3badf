//! Per-sentence mastery statistics built from scored attempts.
//!
//! Attempts are grouped by their trimmed reference sentence. A sentence is
//! mastered once the learner produces `required_streak` correct attempts in a
//! row; mastery is sticky and survives later mistakes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use vocable_core::config::ProgressConfig;
use vocable_core::types::{DictationAttempt, ScoringResult};

/// Running statistics for one reference sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceProgress {
    pub attempts: u32,
    pub correct: u32,
    pub best_accuracy: u8,
    pub last_accuracy: u8,
    /// Consecutive correct attempts, reset by an incorrect one.
    pub current_streak: u32,
    pub mastered: bool,
}

impl SentenceProgress {
    fn apply(&mut self, result: ScoringResult, required_streak: u32) {
        self.attempts += 1;
        self.last_accuracy = result.accuracy_percentage;
        self.best_accuracy = self.best_accuracy.max(result.accuracy_percentage);
        if result.is_correct {
            self.correct += 1;
            self.current_streak += 1;
        } else {
            self.current_streak = 0;
        }
        if self.current_streak >= required_streak {
            self.mastered = true;
        }
    }
}

/// Aggregate view over everything the tracker has recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub sentences: usize,
    pub attempts: usize,
    pub correct: usize,
    pub mastered: usize,
    /// Mean accuracy over all attempts, `0.0` when nothing was recorded.
    pub mean_accuracy: f64,
}

/// In-memory attempt log with per-sentence statistics.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    required_streak: u32,
    attempts: Vec<DictationAttempt>,
    sentences: HashMap<String, SentenceProgress>,
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::from_config(&ProgressConfig::default())
    }
}

impl ProgressTracker {
    /// Create a tracker. A `required_streak` of zero is treated as one.
    pub fn new(required_streak: u32) -> Self {
        Self {
            required_streak: required_streak.max(1),
            attempts: Vec::new(),
            sentences: HashMap::new(),
        }
    }

    pub fn from_config(config: &ProgressConfig) -> Self {
        Self::new(config.required_streak)
    }

    pub fn required_streak(&self) -> u32 {
        self.required_streak
    }

    /// Record a scored attempt and return the stored entry.
    pub fn record(
        &mut self,
        reference: &str,
        submitted: &str,
        result: ScoringResult,
    ) -> &DictationAttempt {
        let key = reference.trim().to_string();
        let progress = self.sentences.entry(key.clone()).or_default();
        let was_mastered = progress.mastered;
        progress.apply(result, self.required_streak);

        if progress.mastered && !was_mastered {
            tracing::info!(
                reference = %key,
                attempts = progress.attempts,
                "Sentence mastered"
            );
        }

        let attempt = DictationAttempt::new(key, submitted.to_string(), result);
        tracing::debug!(
            attempt_id = %attempt.id,
            accuracy = result.accuracy_percentage,
            is_correct = result.is_correct,
            "Dictation attempt recorded"
        );
        self.attempts.push(attempt);
        &self.attempts[self.attempts.len() - 1]
    }

    pub fn progress(&self, reference: &str) -> Option<&SentenceProgress> {
        self.sentences.get(reference.trim())
    }

    /// All recorded attempts in recording order.
    pub fn attempts(&self) -> &[DictationAttempt] {
        &self.attempts
    }

    pub fn summary(&self) -> ProgressSummary {
        let attempts = self.attempts.len();
        let total_accuracy: u64 = self
            .attempts
            .iter()
            .map(|a| u64::from(a.result.accuracy_percentage))
            .sum();
        let mean_accuracy = if attempts == 0 {
            0.0
        } else {
            total_accuracy as f64 / attempts as f64
        };

        ProgressSummary {
            sentences: self.sentences.len(),
            attempts,
            correct: self.attempts.iter().filter(|a| a.result.is_correct).count(),
            mastered: self.sentences.values().filter(|p| p.mastered).count(),
            mean_accuracy,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
