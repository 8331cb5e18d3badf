use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::{Result, VocableError};

// =============================================================================
// Scoring
// =============================================================================

/// A reference sentence paired with the learner's transcription of it.
///
/// Missing and `null` fields deserialize to the empty string, so absent input
/// from a caller is scored as empty rather than rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringInput {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reference: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub submitted: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ScoringInput {
    pub fn new(reference: impl Into<String>, submitted: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            submitted: submitted.into(),
        }
    }
}

/// Verdict for one dictation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResult {
    /// Similarity in `0..=100`, truncated toward zero.
    pub accuracy_percentage: u8,
    /// Whether `accuracy_percentage` reached the mastery threshold.
    pub is_correct: bool,
}

impl ScoringResult {
    /// Both sides empty.
    pub const PERFECT: ScoringResult = ScoringResult {
        accuracy_percentage: 100,
        is_correct: true,
    };

    /// Exactly one side empty.
    pub const MISSED: ScoringResult = ScoringResult {
        accuracy_percentage: 0,
        is_correct: false,
    };
}

/// Minimum accuracy percentage at which an attempt counts as correct.
///
/// Always within `0..=100`. The comparison is inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct MasteryThreshold(u8);

impl MasteryThreshold {
    pub const DEFAULT: MasteryThreshold = MasteryThreshold(80);

    pub fn new(value: u32) -> Result<Self> {
        if value > 100 {
            return Err(VocableError::InvalidThreshold { value });
        }
        Ok(Self(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns whether `accuracy` meets this threshold.
    pub fn is_met_by(self, accuracy: u8) -> bool {
        accuracy >= self.0
    }
}

impl Default for MasteryThreshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for MasteryThreshold {
    type Error = VocableError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<MasteryThreshold> for u32 {
    fn from(threshold: MasteryThreshold) -> Self {
        threshold.0 as u32
    }
}

impl fmt::Display for MasteryThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// Progress
// =============================================================================

/// A scored attempt as recorded by the progress tracker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DictationAttempt {
    pub id: Uuid,
    pub reference: String,
    pub submitted: String,
    pub result: ScoringResult,
    pub attempted_at: DateTime<Utc>,
}

impl DictationAttempt {
    pub fn new(reference: String, submitted: String, result: ScoringResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            reference,
            submitted,
            result,
            attempted_at: Utc::now(),
        }
    }
}
