//! JSON Lines batch scoring.
//!
//! Each non-blank input line is a `ScoringInput` object; each output line is
//! the matching `ScoringResult`. Attempts are also folded into a
//! `ProgressTracker` so the caller can report a summary.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use vocable_core::error::{Result, VocableError};
use vocable_core::types::ScoringInput;
use vocable_dictation::{DictationScorer, ProgressTracker};

/// Score every record from `reader`, writing one result per line to `writer`.
///
/// Returns the number of records scored. Stops at the first malformed line.
pub fn score_lines<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    scorer: &DictationScorer,
    tracker: &mut ProgressTracker,
) -> Result<usize> {
    let mut scored = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let input: ScoringInput =
            serde_json::from_str(&line).map_err(|e| VocableError::Batch {
                line: index + 1,
                message: e.to_string(),
            })?;

        let result = scorer.score_input(&input);
        tracker.record(&input.reference, &input.submitted, result);

        serde_json::to_writer(&mut writer, &result)?;
        writeln!(writer)?;
        scored += 1;
    }

    writer.flush()?;
    Ok(scored)
}

/// Score a JSON Lines file, writing to `output` or stdout.
pub fn score_file(
    input: &Path,
    output: Option<&Path>,
    scorer: &DictationScorer,
    tracker: &mut ProgressTracker,
) -> Result<usize> {
    let reader = BufReader::new(File::open(input)?);
    let scored = match output {
        Some(path) => {
            let writer = BufWriter::new(File::create(path)?);
            score_lines(reader, writer, scorer, tracker)?
        }
        None => {
            let stdout = std::io::stdout();
            score_lines(reader, stdout.lock(), scorer, tracker)?
        }
    };

    tracing::info!(
        input = %input.display(),
        records = scored,
        "Batch scoring complete"
    );
    Ok(scored)
}
