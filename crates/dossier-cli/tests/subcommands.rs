//! End-to-end subcommand flows against temporary files: load a manual
//! into the store, process a differing document, and score it against the
//! stored rules.

use std::path::{Path, PathBuf};

use dossier_cli::{compare, manual, process, Settings};

const MANUAL: &str = "\
2.1. Minor variations of Type IA
Submission of Type IA notifications is required within twelve months.

2.4. Extensions
Submission of Extensions applications follows the centralised procedure.";

fn write_txt(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn settings(dir: &Path) -> Settings {
    Settings {
        store: dir.join("reglas_vectorizadas.csv"),
        threshold: dossier_core::DEFAULT_THRESHOLD,
    }
}

#[test]
fn load_manual_then_compare_flags_off_manual_lines() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings(dir.path());

    let reference = write_txt(dir.path(), "manual.txt", MANUAL);
    let document = write_txt(
        dir.path(),
        "dossier.txt",
        "2.1. Minor variations of Type IA\nCompletely off-manual wording here.",
    );

    let load_args = manual::LoadManualArgs {
        reference: reference.clone(),
        toc: None,
        per_line: false,
    };
    manual::run(&load_args, &settings).unwrap();
    assert!(settings.store.exists());

    let compare_args = compare::CompareArgs {
        reference,
        document,
    };
    compare::run(&compare_args, &settings).unwrap();
}

#[test]
fn compare_without_store_is_an_actionable_error() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings(dir.path());

    let reference = write_txt(dir.path(), "manual.txt", "line a\nline b");
    let document = write_txt(dir.path(), "dossier.txt", "line a\nline changed");

    let err = compare::run(
        &compare::CompareArgs {
            reference,
            document,
        },
        &settings,
    )
    .unwrap_err();
    assert!(err.to_string().contains("load-manual"));
}

#[test]
fn process_writes_report_named_after_document() {
    let dir = tempfile::tempdir().unwrap();

    let reference = write_txt(dir.path(), "manual.txt", "alpha\nbeta\ngamma");
    let document = write_txt(dir.path(), "variation_dossier.txt", "alpha\nchanged\ngamma");

    let args = process::ProcessArgs {
        reference,
        document,
        output_dir: dir.path().join("out"),
    };
    process::run(&args).unwrap();

    let report = dir.path().join("out/variation_dossier_diferencias.csv");
    let content = std::fs::read_to_string(report).unwrap();
    assert!(content.starts_with("seccion,"));
    // Header plus the single changed line.
    assert_eq!(content.lines().count(), 2);
    assert!(content.contains("Line 2"));
}

#[test]
fn process_with_identical_documents_writes_no_report() {
    let dir = tempfile::tempdir().unwrap();

    let reference = write_txt(dir.path(), "manual.txt", "same\ntext");
    let document = write_txt(dir.path(), "dossier.txt", "same\ntext");

    let args = process::ProcessArgs {
        reference,
        document,
        output_dir: dir.path().join("out"),
    };
    process::run(&args).unwrap();
    assert!(!dir.path().join("out").exists());
}

#[test]
fn missing_document_fails_with_extraction_error() {
    let dir = tempfile::tempdir().unwrap();
    let reference = write_txt(dir.path(), "manual.txt", "content");

    let args = process::ProcessArgs {
        reference,
        document: dir.path().join("absent.txt"),
        output_dir: dir.path().join("out"),
    };
    let err = process::run(&args).unwrap_err();
    assert!(err.to_string().contains("text extraction failed"));
}
