//! End-to-end pipeline: vectorize a manual into the store, reload it, and
//! score a candidate document's differences against the stored rules.

use dossier_core::{
    diff_lines, match_against_rules, MatcherConfig, TableOfContents, Vocabulary,
};
use dossier_store::RuleStore;

const MANUAL: &str = "\
2.1. Minor variations of Type IA
Submission of Type IA notifications is required within twelve months.

2.4. Extensions
Submission of Extensions applications follows the centralised procedure.";

#[test]
fn stored_rules_flag_off_manual_differences() {
    let dir = tempfile::tempdir().unwrap();
    let store = RuleStore::new(dir.path().join("reglas_vectorizadas.csv"));

    let vocabulary = Vocabulary::build([MANUAL]);
    let toc = TableOfContents::from(vec![
        "2.1. Minor variations of Type IA",
        "2.4. Extensions",
    ]);
    let stored = store
        .store_section_rules(&vocabulary, MANUAL, &toc)
        .unwrap();
    assert_eq!(stored.len(), 2);

    // A fresh process reloads the rules from disk.
    let rules = RuleStore::new(store.path()).load_rules().unwrap();
    assert_eq!(rules, stored);

    let reference = "Submission of Type IA notifications is required within twelve months.";
    let document = "Entirely unrelated wording about something else.";
    let differences = diff_lines(document, reference);
    assert_eq!(differences.len(), 1);

    let results =
        match_against_rules(&differences, &vocabulary, &rules, &MatcherConfig::new());
    // The off-manual line scores below threshold against both sections.
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.similarity < 0.8));
}

#[test]
fn compliant_line_passes_against_its_section() {
    let dir = tempfile::tempdir().unwrap();
    let store = RuleStore::new(dir.path().join("reglas_vectorizadas.csv"));

    let vocabulary = Vocabulary::build([MANUAL]);
    let toc = TableOfContents::from(vec![
        "2.1. Minor variations of Type IA",
        "2.4. Extensions",
    ]);
    store
        .store_section_rules(&vocabulary, MANUAL, &toc)
        .unwrap();
    let rules = store.load_rules().unwrap();

    // The document line restates the 2.1 chunk almost verbatim, so its
    // dot product against that section's vector stays at or above the
    // threshold — it is only flagged against the unrelated section.
    let document =
        "2.1. Minor variations of Type IA Submission of Type IA notifications is required within twelve months.";
    let differences = diff_lines(document, "some reference line");

    let results =
        match_against_rules(&differences, &vocabulary, &rules, &MatcherConfig::new());
    assert!(results
        .iter()
        .all(|r| r.rule != "2.1. Minor variations of Type IA"));
    assert!(results.iter().any(|r| r.rule == "2.4. Extensions"));
}
