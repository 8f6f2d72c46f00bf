//! # Differencer — Positional Line Comparison
//!
//! Produces a positional line diff between a candidate document and a
//! reference text. Comparison is by position only: line `i` of the document
//! against line `i` of the reference, exact string inequality, no
//! whitespace normalization and no fuzzy alignment.
//!
//! ## Known Precision Gap
//!
//! Comparison stops at the shorter document — extra trailing lines in the
//! longer text are silently ignored, matching the inherited behavior.
//! Whether trailing unmatched lines should count as differences is an open
//! product question; do not change this without one.
//!
//! ## Outcome Model
//!
//! A failed text extraction and a clean comparison are different results.
//! [`AnalysisOutcome`] keeps them apart structurally instead of collapsing
//! both into an absent value.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Type tag carried by every line-level difference.
pub const LINE_DIFFERENCE_KIND: &str = "Line";

/// One line-level mismatch between the compared document and the reference.
///
/// Field serialization names match the columns of the exported differences
/// report, which preserves the original tool's artifact format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifferenceRecord {
    /// Positional label, `"Line {i}"` with 1-based `i`.
    #[serde(rename = "seccion")]
    pub section: String,
    /// The reference text's line at this position.
    #[serde(rename = "contenido_referencia")]
    pub reference_content: String,
    /// The compared document's line at this position.
    #[serde(rename = "contenido_documento")]
    pub document_content: String,
    /// Difference type tag; always [`LINE_DIFFERENCE_KIND`] for this
    /// differencer.
    #[serde(rename = "tipo")]
    pub kind: String,
    /// Fixed reviewer guidance referencing the line number.
    #[serde(rename = "recomendacion")]
    pub recommendation: String,
}

/// Compare a document against a reference, line by line.
///
/// Both texts are split on `'\n'` and compared position by position up to
/// the length of the shorter sequence. For each index where the lines are
/// unequal, one [`DifferenceRecord`] is emitted with 1-based line
/// numbering. Returns an empty vector (never an absent value) when no
/// differences exist.
pub fn diff_lines(document_text: &str, reference_text: &str) -> Vec<DifferenceRecord> {
    let document_lines = document_text.split('\n');
    let reference_lines = reference_text.split('\n');

    document_lines
        .zip(reference_lines)
        .enumerate()
        .filter(|(_, (doc_line, ref_line))| doc_line != ref_line)
        .map(|(idx, (doc_line, ref_line))| {
            let line_number = idx + 1;
            DifferenceRecord {
                section: format!("Line {line_number}"),
                reference_content: ref_line.to_string(),
                document_content: doc_line.to_string(),
                kind: LINE_DIFFERENCE_KIND.to_string(),
                recommendation: format!(
                    "Review line {line_number} in the document and adjust it to the manual."
                ),
            }
        })
        .collect()
}

/// A text extraction failure at the document boundary.
///
/// Carried by [`AnalysisOutcome::ExtractionFailed`] so that a comparison
/// that never ran is distinguishable from one that found nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("text extraction failed for {path}: {reason}")]
pub struct ExtractionFailure {
    /// The document that could not be read.
    pub path: String,
    /// Why extraction failed.
    pub reason: String,
}

/// The result of one document comparison.
///
/// The three variants are distinct outcomes and must not be conflated:
/// a failed extraction is an unrecoverable failure for that comparison,
/// not "no differences found".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// The comparison never ran because a document's text could not be
    /// extracted.
    ExtractionFailed(ExtractionFailure),
    /// The comparison ran and the documents are line-identical.
    NoDifferences,
    /// The comparison ran and found at least one mismatched line.
    Differences(Vec<DifferenceRecord>),
}

impl AnalysisOutcome {
    /// Classify a completed diff: an empty record list is
    /// [`AnalysisOutcome::NoDifferences`], anything else is
    /// [`AnalysisOutcome::Differences`].
    pub fn from_differences(differences: Vec<DifferenceRecord>) -> Self {
        if differences.is_empty() {
            Self::NoDifferences
        } else {
            Self::Differences(differences)
        }
    }
}

impl From<ExtractionFailure> for AnalysisOutcome {
    fn from(failure: ExtractionFailure) -> Self {
        Self::ExtractionFailed(failure)
    }
}
