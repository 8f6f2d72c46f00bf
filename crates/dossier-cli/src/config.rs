//! # Configuration — Table of Contents Loading
//!
//! The table of contents is caller-supplied configuration: an ordered
//! YAML list of section-title strings. Its order is load-bearing
//! (first-match-wins labeling), so the file format is a plain sequence,
//! never a mapping.
//!
//! When no file is given, the built-in default is the EMA variations
//! guideline index the tool was originally calibrated against.

use std::path::Path;

use anyhow::Context;

use dossier_core::TableOfContents;

/// The built-in default table of contents: the EMA guideline index on
/// variations to marketing authorisations.
pub fn default_toc() -> TableOfContents {
    TableOfContents::from(vec![
        "2.1. Minor variations of Type IA",
        "2.1.1. Submission of Type IA notifications",
        "2.1.2. Type IA variations review for mutual recognition procedure",
        "2.1.3. Type IA variations review for purely national procedure",
        "2.1.4. Type IA variations review for centralised procedure",
        "2.2. Minor variations of Type IB",
        "2.2.1. Submission of Type IB notifications",
        "2.2.2. Type IB variations review for mutual recognition procedure",
        "2.2.3. Type IB variations review for purely national procedure",
        "2.2.4. Type IB variations review for centralised procedure",
        "2.3. Major variations of Type II",
        "2.3.1. Submission of Type II applications",
        "2.3.2. Type II variations assessment for mutual recognition procedure",
        "2.3.3. Outcome of Type II variations assessment for mutual recognition procedure",
        "2.3.4. Type II variations assessment for purely national procedure",
        "2.3.5. Outcome of Type II variations assessment for purely national procedure",
        "2.3.6. Type II variations assessment for centralised procedure",
        "2.3.7. Outcome of Type II variations assessment in centralised procedure",
        "2.4. Extensions",
        "2.4.1. Submission of Extensions applications",
        "2.4.2. Extension assessment for national procedure",
        "2.4.3. Extension assessment for centralised procedure",
    ])
}

/// Load a table of contents from a YAML file, or fall back to the
/// built-in default when no path is given.
///
/// The file must be a YAML sequence of strings; the sequence order
/// becomes the labeling precedence.
pub fn load_toc(path: Option<&Path>) -> anyhow::Result<TableOfContents> {
    let Some(path) = path else {
        return Ok(default_toc());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read table of contents {}", path.display()))?;
    let toc: TableOfContents = serde_yaml::from_str(&content)
        .with_context(|| format!("invalid table of contents {}", path.display()))?;
    Ok(toc)
}
