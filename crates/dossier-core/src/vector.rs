//! # TF-IDF Vectors — Fixed-Length Spans Over the Vocabulary
//!
//! Maps a text span to a fixed-length numeric vector over a given
//! [`Vocabulary`]. One slot per vocabulary token, in canonical vocabulary
//! order; tokens of the span absent from the vocabulary contribute nothing,
//! vocabulary tokens absent from the span weigh zero.
//!
//! ## Inherited Degenerate IDF
//!
//! The weighting treats the single input span as the entire corpus
//! (corpus size = 1), so the smoothed IDF factor
//! `ln((1 + n) / (1 + df)) + 1` is the constant `1.0` for every token
//! present in the span. The result is a Euclidean-length-normalized term
//! count vector. This degeneracy is inherited behavior and is preserved
//! deliberately — a redesigned scorer would vectorize against a real
//! multi-document corpus.
//!
//! ## Similarity
//!
//! [`TfidfVector::dot`] is the similarity measure used by the matcher: the
//! elementwise product summed, with **no** division by vector norms at
//! comparison time. It is not cosine similarity and the compliance
//! threshold is calibrated against the raw dot product.

use serde::{Deserialize, Serialize};

use crate::vocab::{word_tokens, Vocabulary};

/// Number of documents in the vectorization corpus. The corpus is always
/// the single span being vectorized.
const CORPUS_SIZE: f64 = 1.0;

/// A fixed-length vector of non-negative TF-IDF weights, one slot per
/// vocabulary token in canonical order.
///
/// # Invariants
///
/// - `len()` equals the length of the vocabulary it was produced against.
/// - All weights are non-negative.
/// - A span with no vocabulary tokens produces the all-zero vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TfidfVector(Vec<f64>);

impl TfidfVector {
    /// Number of slots.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the vector has no slots.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The weights in canonical vocabulary order.
    pub fn weights(&self) -> &[f64] {
        &self.0
    }

    /// Returns true if every slot is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|w| *w == 0.0)
    }

    /// Raw dot product: elementwise product summed over paired slots.
    ///
    /// Pairs slots positionally up to the shorter vector (zip semantics).
    /// Deliberately NOT cosine similarity — there is no division by norms
    /// here; the 0.8 compliance threshold is defined against this raw
    /// value.
    pub fn dot(&self, other: &TfidfVector) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| a * b)
            .sum()
    }
}

impl From<Vec<f64>> for TfidfVector {
    fn from(weights: Vec<f64>) -> Self {
        Self(weights)
    }
}

impl Vocabulary {
    /// Vectorize a text span against this vocabulary.
    ///
    /// Term counts use the same word-boundary tokenization as vocabulary
    /// construction and are case-sensitive. Each slot is
    /// `count * (ln((1 + n) / (1 + df)) + 1)` with `n = 1` (the span is
    /// the whole corpus) and `df = 1` when the token occurs in the span —
    /// the inherited constant-IDF degenerate case. The weighted vector is
    /// then Euclidean-length normalized; an all-zero vector stays
    /// all-zero.
    ///
    /// The output always has exactly `self.len()` slots regardless of the
    /// span's content.
    pub fn vectorize(&self, text: &str) -> TfidfVector {
        let mut weights = vec![0.0; self.len()];

        for token in word_tokens(text) {
            if let Some(slot) = self.index_of(token) {
                weights[slot] += 1.0;
            }
        }

        for weight in &mut weights {
            if *weight > 0.0 {
                let doc_freq = 1.0;
                let idf = ((1.0 + CORPUS_SIZE) / (1.0 + doc_freq)).ln() + 1.0;
                *weight *= idf;
            }
        }

        let norm = weights.iter().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for weight in &mut weights {
                *weight /= norm;
            }
        }

        TfidfVector(weights)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The output length equals the vocabulary length for any span.
        #[test]
        fn vector_length_always_matches_vocabulary(
            reference in "[a-d ]{0,60}",
            span in "[a-f .,]{0,60}",
        ) {
            let vocab = Vocabulary::build([reference.as_str()]);
            let v = vocab.vectorize(&span);
            prop_assert_eq!(v.len(), vocab.len());
        }

        /// All weights are non-negative and the vector is unit length or zero.
        #[test]
        fn weights_nonnegative_and_normalized(
            reference in "[a-d ]{1,60}",
            span in "[a-f ]{0,60}",
        ) {
            let vocab = Vocabulary::build([reference.as_str()]);
            let v = vocab.vectorize(&span);
            prop_assert!(v.weights().iter().all(|w| *w >= 0.0));
            let norm_sq: f64 = v.weights().iter().map(|w| w * w).sum();
            prop_assert!(norm_sq == 0.0 || (norm_sq - 1.0).abs() < 1e-9);
        }
    }
}
