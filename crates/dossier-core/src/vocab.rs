//! # Vocabulary — Deduplicated Reference Token Set
//!
//! Builds the frozen vocabulary that anchors every vector in a run. The
//! vocabulary is constructed once from one or more reference texts and then
//! treated as read-only: vector slot `i` always corresponds to the `i`-th
//! vocabulary token.
//!
//! ## Ordering Contract
//!
//! Membership is set-semantic (deduplicated, order-irrelevant to callers),
//! but the backing `IndexSet` gives every vocabulary instance a stable
//! first-seen iteration order. That order is the canonical slot order used
//! by [`crate::vector`] — two vectors produced against the same instance
//! are always comparable slot-by-slot.
//!
//! ## Tokenization
//!
//! One rule for the whole pipeline: a token is a maximal run of
//! alphanumeric-or-underscore characters. Punctuation separates tokens and
//! is dropped; case is preserved (matching is case-sensitive everywhere).

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Split a text into word tokens.
///
/// A token is a maximal run of characters that are alphanumeric or `_`.
/// Everything else (whitespace, punctuation) is a separator. Case is
/// preserved. Empty input yields no tokens.
pub fn word_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
}

/// A deduplicated set of word tokens drawn from reference texts.
///
/// The vocabulary is the frozen dimension list for all vectors in a run.
/// It is ephemeral — rebuilt per invocation, never persisted.
///
/// # Construction
///
/// - [`Vocabulary::build()`] — tokenize one or more reference texts,
///   concatenate, deduplicate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    tokens: IndexSet<String>,
}

impl Vocabulary {
    /// Build a vocabulary from a sequence of reference texts.
    ///
    /// Tokens from all inputs are concatenated and deduplicated. An empty
    /// input sequence yields an empty vocabulary.
    pub fn build<'a, I>(texts: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tokens = IndexSet::new();
        for text in texts {
            for token in word_tokens(text) {
                if !tokens.contains(token) {
                    tokens.insert(token.to_string());
                }
            }
        }
        Self { tokens }
    }

    /// Number of distinct tokens. This is the length of every vector
    /// produced against this vocabulary.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the vocabulary has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Membership test (case-sensitive).
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Canonical slot index of a token, if it is in the vocabulary.
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.tokens.get_index_of(token)
    }

    /// Iterate tokens in canonical (first-seen) order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|s| s.as_str())
    }

    /// All tokens joined with a single space, in canonical order.
    ///
    /// The `verify` operation diffs a document against this joined form of
    /// the reference vocabulary.
    pub fn joined(&self) -> String {
        let mut out = String::new();
        for (i, token) in self.tokens().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(token);
        }
        out
    }
}
