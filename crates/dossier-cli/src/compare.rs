//! # Compare-With-Manual Subcommand
//!
//! Scores a candidate document's differences against the persisted rule
//! store. A missing store is a distinct, actionable error — not an empty
//! result.

use std::path::PathBuf;

use anyhow::bail;
use clap::Args;

use dossier_core::{match_against_rules, AnalysisOutcome, MatcherConfig};
use dossier_store::{RuleStore, StoreError};

use crate::analysis;
use crate::present::{Presenter, TablePresenter};
use crate::Settings;

/// Arguments for the compare-with-manual subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Reference document establishing the vocabulary.
    pub reference: PathBuf,

    /// Candidate document whose differences are scored.
    pub document: PathBuf,
}

/// Run the compare-with-manual subcommand.
pub fn run(args: &CompareArgs, settings: &Settings) -> anyhow::Result<()> {
    let analysis = analysis::prepare(&args.reference, &args.document)
        .map_err(analysis::extraction_error)?;

    match analysis.outcome() {
        AnalysisOutcome::ExtractionFailed(failure) => Err(analysis::extraction_error(failure)),
        AnalysisOutcome::NoDifferences => {
            println!("No differences found between the documents.");
            Ok(())
        }
        AnalysisOutcome::Differences(differences) => {
            let store = RuleStore::new(&settings.store);
            let rules = match store.load_rules() {
                Ok(rules) => rules,
                Err(err @ StoreError::NotFound { .. }) => {
                    tracing::warn!(store = %store.path().display(), "rule store missing");
                    bail!("{err}. Run `dossier load-manual <reference>` first.");
                }
                Err(err) => return Err(err.into()),
            };

            let config = MatcherConfig::with_threshold(settings.threshold)?;
            let results =
                match_against_rules(&differences, &analysis.vocabulary, &rules, &config);

            if results.is_empty() {
                println!(
                    "All {} difference(s) scored at or above the compliance threshold ({}).",
                    differences.len(),
                    config.threshold()
                );
            } else {
                tracing::info!(
                    differences = differences.len(),
                    flagged = results.len(),
                    "sub-threshold compliance matches found"
                );
                println!(
                    "{} sub-threshold match(es) across {} difference(s):",
                    results.len(),
                    differences.len()
                );
                TablePresenter::stdout().comparisons(&results)?;
            }
            Ok(())
        }
    }
}
