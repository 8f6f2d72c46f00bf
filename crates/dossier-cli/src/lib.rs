//! # dossier-cli — Dossier Compliance Stack Command-Line Interface
//!
//! Exposes the four top-level user actions as clap subcommands:
//!
//! - `process` — diff a document against a reference and export the
//!   vectorized differences report
//! - `load-manual` — vectorize a reference manual and store its rules
//! - `verify` — check a document against the reference vocabulary
//! - `compare-with-manual` — score a document's differences against the
//!   stored manual rules
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions orchestrate; the domain crates decide. No
//!   tokenization, vectorization, or persistence logic lives here.
//! - Extraction failures are surfaced as errors, never presented as a
//!   clean "no differences" result.

pub mod analysis;
pub mod compare;
pub mod config;
pub mod manual;
pub mod present;
pub mod process;
pub mod verify;

use std::path::PathBuf;

/// Settings shared by every subcommand, built from the global CLI flags.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Location of the durable rule store file.
    pub store: PathBuf,
    /// Compliance similarity threshold.
    pub threshold: f64,
}
