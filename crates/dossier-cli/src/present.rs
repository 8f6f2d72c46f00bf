//! # Presenter — Tabular Result Display
//!
//! The display boundary: structured results in, rendered output out.
//! The core pipeline has no dependency on any presentation mechanism;
//! subcommand handlers hand their results to a [`Presenter`] and are done.

use std::io::{self, Write};

use dossier_core::{ComparisonResult, DifferenceRecord};

/// Receives structured results for user display.
pub trait Presenter {
    /// Present line-level differences.
    fn differences(&mut self, records: &[DifferenceRecord]) -> io::Result<()>;

    /// Present scored compliance comparisons.
    fn comparisons(&mut self, results: &[ComparisonResult]) -> io::Result<()>;
}

/// Renders results as aligned text tables.
pub struct TablePresenter<W> {
    out: W,
}

impl TablePresenter<io::Stdout> {
    /// A presenter writing to standard output.
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TablePresenter<W> {
    /// A presenter writing to an arbitrary sink.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn table(&mut self, headers: &[&str], rows: &[Vec<String>]) -> io::Result<()> {
        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        self.row(headers.iter().map(|h| h.to_string()).collect::<Vec<_>>().as_slice(), &widths)?;
        let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        self.row(&separator, &widths)?;
        for row in rows {
            self.row(row, &widths)?;
        }
        Ok(())
    }

    fn row(&mut self, cells: &[String], widths: &[usize]) -> io::Result<()> {
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                line.push_str("  ");
            }
            line.push_str(cell);
            let padding = widths[i].saturating_sub(cell.chars().count());
            if i + 1 < cells.len() {
                line.extend(std::iter::repeat(' ').take(padding));
            }
        }
        writeln!(self.out, "{line}")
    }
}

impl<W: Write> Presenter for TablePresenter<W> {
    fn differences(&mut self, records: &[DifferenceRecord]) -> io::Result<()> {
        let rows: Vec<Vec<String>> = records
            .iter()
            .map(|r| {
                vec![
                    r.section.clone(),
                    r.reference_content.clone(),
                    r.document_content.clone(),
                    r.kind.clone(),
                    r.recommendation.clone(),
                ]
            })
            .collect();
        self.table(
            &["Section", "Reference", "Document", "Type", "Recommendation"],
            &rows,
        )
    }

    fn comparisons(&mut self, results: &[ComparisonResult]) -> io::Result<()> {
        let rows: Vec<Vec<String>> = results
            .iter()
            .map(|r| {
                vec![
                    r.difference.section.clone(),
                    r.difference.reference_content.clone(),
                    r.difference.document_content.clone(),
                    r.rule.clone(),
                    format!("{:.4}", r.similarity),
                ]
            })
            .collect();
        self.table(
            &["Section", "Reference", "Document", "Rule", "Similarity"],
            &rows,
        )
    }
}
