//! # dossier-core — Core Analysis Pipeline
//!
//! This crate is the bedrock of the Dossier Compliance Stack. It holds the
//! entire data model and all algorithmic content: vocabulary construction,
//! TF-IDF vectorization over a frozen vocabulary, table-of-contents section
//! indexing, positional line diffing, and dot-product compliance matching.
//! Every other crate in the workspace depends on `dossier-core`; it depends
//! on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One tokenization rule.** Vocabulary construction and term counting
//!    share [`vocab::word_tokens`]. Two tokenizers with diverging word
//!    boundaries would silently desynchronize vector slots.
//!
//! 2. **Canonical vocabulary order.** [`Vocabulary`] is backed by an
//!    `IndexSet`: set semantics for membership, deterministic first-seen
//!    iteration order for vector alignment. Every vector produced against
//!    the same vocabulary instance has the same length and slot order.
//!
//! 3. **Explicit configuration.** The similarity threshold and the table of
//!    contents are values passed to each operation, never ambient state.
//!
//! 4. **Explicit outcomes.** [`diff::AnalysisOutcome`] distinguishes
//!    "extraction failed", "no differences", and "differences found".
//!    Failure and a clean document are never the same value.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `dossier-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public record types derive `Debug`, `Clone`, and `Serialize`.

pub mod diff;
pub mod error;
pub mod matcher;
pub mod section;
pub mod vector;
pub mod vocab;

// Re-export primary types for ergonomic imports.
pub use diff::{diff_lines, AnalysisOutcome, DifferenceRecord, ExtractionFailure};
pub use error::CoreError;
pub use matcher::{match_against_rules, ComparisonResult, MatcherConfig, DEFAULT_THRESHOLD};
pub use section::{label_section, split_sections, TableOfContents, UNKNOWN_SECTION};
pub use vector::TfidfVector;
pub use vocab::Vocabulary;
