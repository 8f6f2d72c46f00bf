//! # Load-Manual Subcommand
//!
//! Vectorizes a reference manual and persists its rules, fully replacing
//! any previously stored generation.

use std::path::PathBuf;

use clap::Args;

use dossier_core::Vocabulary;
use dossier_store::RuleStore;

use crate::analysis;
use crate::config;
use crate::Settings;

/// Arguments for the load-manual subcommand.
#[derive(Args, Debug)]
pub struct LoadManualArgs {
    /// Reference manual to vectorize.
    pub reference: PathBuf,

    /// Table of contents file (YAML sequence of section titles, in
    /// labeling-precedence order). Defaults to the built-in EMA
    /// variations index.
    #[arg(long)]
    pub toc: Option<PathBuf>,

    /// Key rules by raw manual line instead of by section title.
    #[arg(long)]
    pub per_line: bool,
}

/// Run the load-manual subcommand.
pub fn run(args: &LoadManualArgs, settings: &Settings) -> anyhow::Result<()> {
    let manual_text =
        analysis::load_text(&args.reference).map_err(analysis::extraction_error)?;
    if manual_text.trim().is_empty() {
        tracing::warn!(
            reference = %args.reference.display(),
            "manual text is empty; the stored rule set will be empty"
        );
    }

    let vocabulary = Vocabulary::build([manual_text.as_str()]);
    let store = RuleStore::new(&settings.store);

    let rules = if args.per_line {
        store.store_line_rules(&vocabulary, &manual_text)?
    } else {
        let toc = config::load_toc(args.toc.as_deref())?;
        store.store_section_rules(&vocabulary, &manual_text, &toc)?
    };

    tracing::info!(
        rules = rules.len(),
        store = %store.path().display(),
        "manual vectorized and stored"
    );
    println!(
        "Manual vectorized: {} rule(s) stored at {}.",
        rules.len(),
        store.path().display()
    );
    Ok(())
}
