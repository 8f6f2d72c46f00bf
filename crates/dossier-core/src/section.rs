//! # Section Indexer — Table-of-Contents Chunk Labeling
//!
//! Maps a raw manual text blob to named sections using a known, ordered
//! table of contents. Chunks are delimited by blank lines; a chunk is
//! labeled with the first TOC entry that occurs in it as a substring.
//!
//! ## Ordering Contract
//!
//! When a chunk contains several TOC entries, the FIRST entry in TOC list
//! order wins. The iteration order of [`TableOfContents`] is therefore part
//! of its public contract: callers control tie-breaking by controlling the
//! order of the list they supply.

use serde::{Deserialize, Serialize};

/// Sentinel label for a chunk matching no table-of-contents entry.
pub const UNKNOWN_SECTION: &str = "Unknown section";

/// An ordered list of canonical section-title strings — the manual's
/// table of contents.
///
/// Supplied by the caller as configuration. The list order is load-bearing:
/// [`label_section`] returns the first matching entry in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableOfContents(Vec<String>);

impl TableOfContents {
    /// Create a table of contents from an ordered list of section titles.
    pub fn new(titles: Vec<String>) -> Self {
        Self(titles)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the table of contents has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in list order.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_str())
    }
}

impl From<Vec<&str>> for TableOfContents {
    fn from(titles: Vec<&str>) -> Self {
        Self(titles.into_iter().map(String::from).collect())
    }
}

/// Split a manual text into raw section chunks.
///
/// Chunks are delimited by a blank line (double newline). Chunks that are
/// empty after trimming are dropped.
pub fn split_sections(manual_text: &str) -> Vec<&str> {
    manual_text
        .split("\n\n")
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect()
}

/// Label a chunk with the first table-of-contents entry occurring in it
/// as a substring, or [`UNKNOWN_SECTION`] when none matches.
///
/// First match in TOC list order wins; an empty TOC labels every chunk
/// unknown.
pub fn label_section<'a>(chunk: &str, toc: &'a TableOfContents) -> &'a str {
    toc.entries()
        .find(|title| chunk.contains(title))
        .unwrap_or(UNKNOWN_SECTION)
}
