//! # dossier-store — Durable Rule Store
//!
//! Persistence for vectorized manual rules and the per-run differences
//! report. The rule file is the ONLY durable entity in the system: it is
//! created or fully replaced by the "vectorize manual" operation, read by
//! the "compliance match" operation, and never incrementally updated —
//! at most one generation is alive at a time.
//!
//! ## File Format
//!
//! A two-column CSV, header `Seccion,Vector` (rules keyed by section
//! title) or `Regla,Vector` (rules keyed by raw manual line), one row per
//! rule, the vector serialized as a JSON array of reals in a single cell.
//!
//! ## Crate Policy
//!
//! - Writes are atomic from the caller's perspective: write-temp-then-
//!   rename, never an in-place truncate. A crash mid-store leaves the
//!   previous generation intact.
//! - A malformed vector cell fails the whole load. Skipping rows would
//!   hand the matcher vectors of silently diverging shapes.

pub mod report;
pub mod rules;

pub use report::{vectorize_differences, write_differences_report, VectorizedDifference};
pub use rules::{RuleStore, StoreError};
