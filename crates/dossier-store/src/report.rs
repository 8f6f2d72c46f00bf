//! # Differences Report — Per-Run CSV Export
//!
//! Writes the vectorized differences of one comparison run to a CSV
//! artifact for downstream review. Unlike the rule store this is a
//! per-document output, plainly overwritten, with no single-generation
//! contract. Column names preserve the inherited artifact format.

use std::path::Path;

use csv::WriterBuilder;

use dossier_core::{DifferenceRecord, TfidfVector, Vocabulary};

use crate::rules::StoreError;

/// Columns of the differences report, in order.
const REPORT_HEADER: [&str; 6] = [
    "seccion",
    "contenido_referencia",
    "contenido_documento",
    "tipo",
    "recomendacion",
    "vector",
];

/// A difference record paired with the vector of its document-side
/// content.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorizedDifference {
    /// The underlying line-level difference.
    pub difference: DifferenceRecord,
    /// TF-IDF vector of the difference's document-side content.
    pub vector: TfidfVector,
}

/// Vectorize the document-side content of every difference.
///
/// The returned sequence is index-aligned with the input.
pub fn vectorize_differences(
    differences: &[DifferenceRecord],
    vocabulary: &Vocabulary,
) -> Vec<VectorizedDifference> {
    differences
        .iter()
        .map(|difference| VectorizedDifference {
            difference: difference.clone(),
            vector: vocabulary.vectorize(&difference.document_content),
        })
        .collect()
}

/// Write the differences report to `path`, overwriting any existing file.
///
/// One row per difference; the vector is a JSON array cell like the rule
/// store's. Parent directories are created as needed.
pub fn write_differences_report(
    path: &Path,
    rows: &[VectorizedDifference],
) -> Result<(), StoreError> {
    if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    let mut writer = WriterBuilder::new().from_path(path)?;
    writer.write_record(REPORT_HEADER)?;
    for row in rows {
        let cell = serde_json::to_string(&row.vector)?;
        writer.write_record([
            row.difference.section.as_str(),
            row.difference.reference_content.as_str(),
            row.difference.document_content.as_str(),
            row.difference.kind.as_str(),
            row.difference.recommendation.as_str(),
            cell.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
