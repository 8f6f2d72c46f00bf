//! # dossier CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::path::PathBuf;

use clap::Parser;

/// Dossier Compliance Stack CLI — regulatory guidance comparison.
///
/// Diffs candidate documents against a reference manual, vectorizes and
/// stores the manual's rules, and flags differences whose content
/// diverges from the stored rule set.
#[derive(Parser, Debug)]
#[command(name = "dossier", version, about)]
struct Cli {
    /// Location of the durable rule store file.
    #[arg(
        long,
        global = true,
        default_value = "data/output/reglas_vectorizadas.csv"
    )]
    store: PathBuf,

    /// Compliance similarity threshold; differences scoring below it
    /// against a stored rule are flagged.
    #[arg(long, global = true, default_value_t = dossier_core::DEFAULT_THRESHOLD)]
    threshold: f64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Diff a document against a reference and export the vectorized
    /// differences report.
    Process(dossier_cli::process::ProcessArgs),
    /// Vectorize a reference manual and store its rules.
    LoadManual(dossier_cli::manual::LoadManualArgs),
    /// Check a document against the reference vocabulary.
    Verify(dossier_cli::verify::VerifyArgs),
    /// Score a document's differences against the stored manual rules.
    CompareWithManual(dossier_cli::compare::CompareArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let settings = dossier_cli::Settings {
        store: cli.store,
        threshold: cli.threshold,
    };

    match cli.command {
        Commands::Process(args) => dossier_cli::process::run(&args),
        Commands::LoadManual(args) => dossier_cli::manual::run(&args, &settings),
        Commands::Verify(args) => dossier_cli::verify::run(&args),
        Commands::CompareWithManual(args) => dossier_cli::compare::run(&args, &settings),
    }
}
