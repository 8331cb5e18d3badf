//! Vocable Dictation crate - accuracy scoring and progress tracking for dictation exercises.
//!
//! A learner listens to a reference sentence and types what they hear. The
//! [`DictationScorer`] compares the two with a case-insensitive Levenshtein
//! distance and classifies the attempt against a mastery threshold; the
//! [`ProgressTracker`] folds scored attempts into per-sentence statistics.

pub mod levenshtein;
pub mod progress;
pub mod scorer;

pub use levenshtein::edit_distance;
pub use progress::{ProgressSummary, ProgressTracker, SentenceProgress};
pub use scorer::{accuracy_percentage, score, DictationScorer};
