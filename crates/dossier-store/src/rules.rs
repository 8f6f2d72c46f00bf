//! # Rule Store — Full-Replace CSV Persistence
//!
//! Stores `{identifier -> vector}` rule mappings produced from a reference
//! manual. Identifiers are section titles (labeled against the table of
//! contents) or raw manual lines; vectors are TF-IDF vectors over the
//! run's vocabulary, serialized as JSON array cells.
//!
//! ## Replacement Semantics
//!
//! Every store operation writes the FULL mapping and replaces any prior
//! content — no merge, no append. The store holds exactly one manual's
//! rules at a time. The write goes to a temp file in the target directory
//! and is renamed over the destination, so a crash mid-write cannot leave
//! a torn generation behind.
//!
//! ## Concurrency
//!
//! The rule file is shared mutable state with no locking. Concurrent
//! store and load from two processes still race; multi-user deployments
//! need a single-writer lock or versioned snapshots on top of this.

use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use indexmap::IndexMap;
use tempfile::NamedTempFile;
use thiserror::Error;

use dossier_core::{label_section, split_sections, TableOfContents, TfidfVector, Vocabulary};

/// Key header for rules keyed by section title.
const SECTION_KEY_HEADER: &str = "Seccion";
/// Key header for rules keyed by raw manual line.
const LINE_KEY_HEADER: &str = "Regla";
/// Header of the vector column.
const VECTOR_HEADER: &str = "Vector";

/// Error raised by the rule store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No rule store has been written yet at the configured location.
    ///
    /// Non-fatal by contract: the caller decides whether to propagate or
    /// to treat a missing store as "nothing to match against".
    #[error("no rule store found at {}; run the vectorize-manual operation first", path.display())]
    NotFound {
        /// The configured store location.
        path: PathBuf,
    },

    /// The stored file does not start with a recognized header row.
    #[error("rule store has unrecognized header {found:?}; expected ({SECTION_KEY_HEADER:?}|{LINE_KEY_HEADER:?}, {VECTOR_HEADER:?})")]
    MalformedHeader {
        /// The header row actually found.
        found: String,
    },

    /// A stored vector cell failed to parse as a JSON array of reals.
    ///
    /// Fails the whole load: silently skipping the row would let vectors
    /// of diverging shapes reach the dot-product computation.
    #[error("malformed vector for rule {rule:?}: {reason}")]
    MalformedVector {
        /// Identifier of the offending rule row.
        rule: String,
        /// Why the cell did not parse.
        reason: String,
    },

    /// CSV-level read or write failure.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Vector serialization failure.
    #[error("vector serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// The durable rule store, bound to one file location.
///
/// The location is a constructor parameter — callers own the path, the
/// store owns the format and the replacement semantics.
#[derive(Debug, Clone)]
pub struct RuleStore {
    path: PathBuf,
}

impl RuleStore {
    /// Create a store handle for the given file location.
    ///
    /// Nothing is read or written until a store or load operation runs.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The configured store location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Vectorize a manual per section and persist the rules keyed by
    /// section title.
    ///
    /// The manual is split on blank lines, each chunk labeled with the
    /// first matching table-of-contents entry (or the unknown-section
    /// sentinel) and vectorized over `vocabulary`. The full mapping
    /// replaces any prior store content. Chunks labeling to the same
    /// title collapse to the last one's vector, mirroring the mapping
    /// semantics of the stored file.
    ///
    /// Returns the stored mapping.
    pub fn store_section_rules(
        &self,
        vocabulary: &Vocabulary,
        manual_text: &str,
        toc: &TableOfContents,
    ) -> Result<IndexMap<String, TfidfVector>, StoreError> {
        let mut rules = IndexMap::new();
        for chunk in split_sections(manual_text) {
            let title = label_section(chunk, toc);
            rules.insert(title.to_string(), vocabulary.vectorize(chunk));
        }
        self.write_rules(SECTION_KEY_HEADER, &rules)?;
        Ok(rules)
    }

    /// Vectorize a manual per line and persist the rules keyed by the
    /// raw rule line.
    ///
    /// Every non-blank line (after trimming) becomes one rule. Same
    /// full-replace semantics and file as the section-keyed variant.
    pub fn store_line_rules(
        &self,
        vocabulary: &Vocabulary,
        manual_text: &str,
    ) -> Result<IndexMap<String, TfidfVector>, StoreError> {
        let mut rules = IndexMap::new();
        for line in manual_text.split('\n') {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            rules.insert(line.to_string(), vocabulary.vectorize(line));
        }
        self.write_rules(LINE_KEY_HEADER, &rules)?;
        Ok(rules)
    }

    /// Load the persisted rule mapping.
    ///
    /// Accepts either key header (`Seccion` or `Regla`).
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] when no store has been written yet.
    /// - [`StoreError::MalformedHeader`] when the file does not open with
    ///   a recognized header row.
    /// - [`StoreError::MalformedVector`] when any vector cell fails to
    ///   parse — the whole load fails, no rows are skipped.
    pub fn load_rules(&self) -> Result<IndexMap<String, TfidfVector>, StoreError> {
        if !self.path.exists() {
            return Err(StoreError::NotFound {
                path: self.path.clone(),
            });
        }

        let mut reader = ReaderBuilder::new().from_path(&self.path)?;

        let headers = reader.headers()?.clone();
        let key_header = headers.get(0).unwrap_or("");
        let vector_header = headers.get(1).unwrap_or("");
        if !(key_header == SECTION_KEY_HEADER || key_header == LINE_KEY_HEADER)
            || vector_header != VECTOR_HEADER
        {
            return Err(StoreError::MalformedHeader {
                found: headers.iter().collect::<Vec<_>>().join(","),
            });
        }

        let mut rules = IndexMap::new();
        for record in reader.records() {
            let record = record?;
            let identifier = record.get(0).unwrap_or("").to_string();
            let cell = record.get(1).unwrap_or("");
            let weights: Vec<f64> =
                serde_json::from_str(cell).map_err(|e| StoreError::MalformedVector {
                    rule: identifier.clone(),
                    reason: e.to_string(),
                })?;
            rules.insert(identifier, TfidfVector::from(weights));
        }
        Ok(rules)
    }

    /// Write the full mapping to the store location, atomically replacing
    /// any prior content.
    fn write_rules(
        &self,
        key_header: &str,
        rules: &IndexMap<String, TfidfVector>,
    ) -> Result<(), StoreError> {
        let parent = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(dir) = parent {
            std::fs::create_dir_all(dir)?;
        }

        let mut temp = match parent {
            Some(dir) => NamedTempFile::new_in(dir)?,
            None => NamedTempFile::new_in(".")?,
        };

        {
            let mut writer = WriterBuilder::new().from_writer(&mut temp);
            writer.write_record([key_header, VECTOR_HEADER])?;
            for (identifier, vector) in rules {
                let cell = serde_json::to_string(vector)?;
                writer.write_record([identifier.as_str(), cell.as_str()])?;
            }
            writer.flush()?;
        }
        temp.as_file_mut().flush()?;

        temp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_core::UNKNOWN_SECTION;

    fn store_in(dir: &Path) -> RuleStore {
        RuleStore::new(dir.join("reglas_vectorizadas.csv"))
    }

    // ---- store / load round trip ----

    #[test]
    fn test_section_rules_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let manual = "2.1. Minor variations\nSubmit the notification.\n\n2.4. Extensions\nFile the application.";
        let vocabulary = Vocabulary::build([manual]);
        let toc = TableOfContents::from(vec!["2.1. Minor variations", "2.4. Extensions"]);

        let stored = store
            .store_section_rules(&vocabulary, manual, &toc)
            .unwrap();
        assert_eq!(stored.len(), 2);

        let loaded = store.load_rules().unwrap();
        assert_eq!(loaded, stored);
        assert!(loaded.contains_key("2.1. Minor variations"));
        assert!(loaded.contains_key("2.4. Extensions"));
    }

    #[test]
    fn test_unmatched_chunk_stored_under_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let manual = "completely unlabeled chunk";
        let vocabulary = Vocabulary::build([manual]);
        let stored = store
            .store_section_rules(&vocabulary, manual, &TableOfContents::default())
            .unwrap();
        assert_eq!(stored.len(), 1);
        assert!(stored.contains_key(UNKNOWN_SECTION));
    }

    #[test]
    fn test_line_rules_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let manual = "First rule line.\n\n  Second rule line.  \n";
        let vocabulary = Vocabulary::build([manual]);
        let stored = store.store_line_rules(&vocabulary, manual).unwrap();

        assert_eq!(stored.len(), 2);
        assert!(stored.contains_key("First rule line."));
        assert!(stored.contains_key("Second rule line."));

        let loaded = store.load_rules().unwrap();
        assert_eq!(loaded, stored);
    }

    #[test]
    fn test_vectors_survive_round_trip_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let manual = "alpha beta\n\ngamma delta";
        let vocabulary = Vocabulary::build([manual]);
        let stored = store
            .store_section_rules(&vocabulary, manual, &TableOfContents::default())
            .unwrap();
        let loaded = store.load_rules().unwrap();

        for (identifier, vector) in &stored {
            assert_eq!(loaded.get(identifier), Some(vector));
            assert_eq!(vector.len(), vocabulary.len());
        }
    }

    // ---- replacement semantics ----

    #[test]
    fn test_store_fully_replaces_prior_generation() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let first = "2.1. Minor variations\nold content";
        let vocabulary = Vocabulary::build([first]);
        let toc = TableOfContents::from(vec!["2.1. Minor variations", "2.4. Extensions"]);
        store.store_section_rules(&vocabulary, first, &toc).unwrap();

        let second = "2.4. Extensions\nnew content";
        let vocabulary = Vocabulary::build([second]);
        store.store_section_rules(&vocabulary, second, &toc).unwrap();

        let loaded = store.load_rules().unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.contains_key("2.4. Extensions"));
        assert!(!loaded.contains_key("2.1. Minor variations"));
    }

    // ---- error paths ----

    #[test]
    fn test_load_before_store_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        let err = store.load_rules().unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_malformed_vector_fails_whole_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reglas_vectorizadas.csv");
        std::fs::write(
            &path,
            "Seccion,Vector\ngood,\"[0.5,0.5]\"\nbad,\"not json\"\n",
        )
        .unwrap();

        let err = RuleStore::new(&path).load_rules().unwrap_err();
        match err {
            StoreError::MalformedVector { rule, .. } => assert_eq!(rule, "bad"),
            other => panic!("expected MalformedVector, got: {other}"),
        }
    }

    #[test]
    fn test_unrecognized_header_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reglas_vectorizadas.csv");
        std::fs::write(&path, "Title,Embedding\nx,\"[1.0]\"\n").unwrap();

        let err = RuleStore::new(&path).load_rules().unwrap_err();
        assert!(matches!(err, StoreError::MalformedHeader { .. }));
    }

    #[test]
    fn test_load_accepts_line_key_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reglas_vectorizadas.csv");
        std::fs::write(&path, "Regla,Vector\nsome rule,\"[0.0,1.0]\"\n").unwrap();

        let loaded = RuleStore::new(&path).load_rules().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(
            loaded.get("some rule"),
            Some(&TfidfVector::from(vec![0.0, 1.0]))
        );
    }

    #[test]
    fn test_store_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = RuleStore::new(dir.path().join("data/output/reglas.csv"));
        let vocabulary = Vocabulary::build(["rule text"]);
        store
            .store_line_rules(&vocabulary, "rule text")
            .unwrap();
        assert!(store.path().exists());
    }
}
