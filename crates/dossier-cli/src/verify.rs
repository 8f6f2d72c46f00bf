//! # Verify Subcommand
//!
//! Compliance yes/no check: the candidate document is diffed against the
//! space-joined vocabulary of the reference. This is the inherited
//! semantics of the original verification action, preserved as-is.

use std::path::PathBuf;

use clap::Args;

use dossier_core::diff_lines;

use crate::analysis;
use crate::present::{Presenter, TablePresenter};

/// Arguments for the verify subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Reference document establishing the vocabulary.
    pub reference: PathBuf,

    /// Candidate document to verify.
    pub document: PathBuf,
}

/// Run the verify subcommand.
pub fn run(args: &VerifyArgs) -> anyhow::Result<()> {
    let analysis = analysis::prepare(&args.reference, &args.document)
        .map_err(analysis::extraction_error)?;

    let joined_vocabulary = analysis.vocabulary.joined();
    let differences = diff_lines(&analysis.document_text, &joined_vocabulary);

    if differences.is_empty() {
        println!("The document complies with the reference manual.");
    } else {
        tracing::warn!(
            differences = differences.len(),
            "document does not comply with the reference manual"
        );
        println!("The document does not comply with the reference manual.");
        TablePresenter::stdout().differences(&differences)?;
    }
    Ok(())
}
