//! # Process Subcommand
//!
//! Diffs a candidate document against a reference, vectorizes every
//! difference over the reference vocabulary, exports the per-run
//! differences report, and presents the table.

use std::path::PathBuf;

use clap::Args;

use dossier_core::AnalysisOutcome;
use dossier_store::{vectorize_differences, write_differences_report};

use crate::analysis;
use crate::present::{Presenter, TablePresenter};

/// Arguments for the process subcommand.
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Reference document (the manual side of the comparison).
    pub reference: PathBuf,

    /// Candidate document to compare against the reference.
    pub document: PathBuf,

    /// Directory receiving the differences report.
    #[arg(long, default_value = "data/output")]
    pub output_dir: PathBuf,
}

/// Run the process subcommand.
pub fn run(args: &ProcessArgs) -> anyhow::Result<()> {
    let analysis = analysis::prepare(&args.reference, &args.document)
        .map_err(analysis::extraction_error)?;

    match analysis.outcome() {
        AnalysisOutcome::ExtractionFailed(failure) => Err(analysis::extraction_error(failure)),
        AnalysisOutcome::NoDifferences => {
            println!("No differences found between the documents.");
            Ok(())
        }
        AnalysisOutcome::Differences(differences) => {
            let rows = vectorize_differences(&differences, &analysis.vocabulary);

            let stem = args
                .document
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("documento");
            let report_path = args.output_dir.join(format!("{stem}_diferencias.csv"));
            write_differences_report(&report_path, &rows)?;
            tracing::info!(
                differences = differences.len(),
                report = %report_path.display(),
                "differences found and vectorized"
            );

            println!(
                "{} difference(s) found; report written to {}.",
                differences.len(),
                report_path.display()
            );
            TablePresenter::stdout().differences(&differences)?;
            Ok(())
        }
    }
}
