//! # Analysis Pipeline — Shared Extraction and Diff Steps
//!
//! The common front half of every comparison subcommand: load both
//! documents through the extraction boundary, build the reference
//! vocabulary, and classify the line diff into an explicit
//! [`AnalysisOutcome`].
//!
//! Degraded extractions (delegated PDF/DOCX kinds, unknown extensions)
//! are warned about HERE, at the boundary — an empty text silently
//! diffing against every line of the other document is the failure mode
//! this warning exists for.

use std::path::Path;

use dossier_core::{diff_lines, AnalysisOutcome, ExtractionFailure, Vocabulary};
use dossier_extract::{extract, DocumentKind, ExtractError};

/// Load a document's text through the extraction boundary.
///
/// Unknown kinds and delegated kinds (PDF/DOCX) degrade to empty text
/// with a warning, preserving the inherited contract. Unreadable files
/// and invalid UTF-8 are genuine failures.
pub fn load_text(path: &Path) -> Result<String, ExtractionFailure> {
    let failure = |reason: String| ExtractionFailure {
        path: path.display().to_string(),
        reason,
    };

    let bytes = std::fs::read(path).map_err(|e| {
        failure(
            ExtractError::Io {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
            .to_string(),
        )
    })?;

    let Some(kind) = DocumentKind::from_path(path) else {
        tracing::warn!(
            path = %path.display(),
            "unsupported document kind; proceeding with empty text"
        );
        return Ok(String::new());
    };

    let text = extract(kind, bytes).map_err(|e| failure(e.to_string()))?;

    if text.is_empty() && kind != DocumentKind::Txt {
        tracing::warn!(
            path = %path.display(),
            %kind,
            "extraction for this kind is delegated to an external extractor; proceeding with empty text"
        );
    }

    Ok(text)
}

/// Extracted texts and the reference vocabulary of one comparison run.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Vocabulary built from the reference text.
    pub vocabulary: Vocabulary,
    /// Raw reference text.
    pub reference_text: String,
    /// Raw candidate document text.
    pub document_text: String,
}

impl Analysis {
    /// Diff the document against the reference and classify the result.
    pub fn outcome(&self) -> AnalysisOutcome {
        AnalysisOutcome::from_differences(diff_lines(&self.document_text, &self.reference_text))
    }
}

/// Extract both documents and build the reference vocabulary.
///
/// # Errors
///
/// Returns the first [`ExtractionFailure`]; the comparison never runs.
pub fn prepare(reference: &Path, document: &Path) -> Result<Analysis, ExtractionFailure> {
    let reference_text = load_text(reference)?;
    let document_text = load_text(document)?;
    let vocabulary = Vocabulary::build([reference_text.as_str()]);
    Ok(Analysis {
        vocabulary,
        reference_text,
        document_text,
    })
}

/// Convert an extraction failure into the command's error, recording the
/// aborted outcome in the process log.
///
/// A failed extraction is an unrecoverable failure for that comparison —
/// it must never be reported as "no differences found".
pub fn extraction_error(failure: ExtractionFailure) -> anyhow::Error {
    let outcome = AnalysisOutcome::from(failure.clone());
    tracing::error!(?outcome, "comparison aborted before diffing");
    anyhow::Error::new(failure)
}
