//! # Compliance Matcher — Scoring Differences Against Stored Rules
//!
//! Vectorizes each difference's document-side content and scores it against
//! every persisted rule vector with the raw dot product. Pairs scoring
//! below the configured threshold are surfaced as potential non-compliance.
//!
//! ## Scoring Contract
//!
//! The score is [`TfidfVector::dot`] — elementwise product summed, no
//! division by norms at comparison time. The 0.8 default threshold is
//! calibrated against that raw value; a redesigned scorer would use cosine
//! similarity, but the threshold and the unnormalized score ARE the
//! contract here.
//!
//! One difference may fail against several rules and then yields one
//! result per failed rule — the comparison is the full
//! differences × rules cross product.

use indexmap::IndexMap;
use serde::Serialize;

use crate::diff::DifferenceRecord;
use crate::error::CoreError;
use crate::vector::TfidfVector;
use crate::vocab::Vocabulary;

/// Default compliance similarity threshold.
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Matcher configuration.
///
/// An explicit value passed to [`match_against_rules`] — the threshold is
/// never ambient state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatcherConfig {
    threshold: f64,
}

impl MatcherConfig {
    /// Configuration with the default 0.8 threshold.
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Configuration with a caller-supplied threshold.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidThreshold`] when the threshold is NaN
    /// or infinite.
    pub fn with_threshold(threshold: f64) -> Result<Self, CoreError> {
        if !threshold.is_finite() {
            return Err(CoreError::InvalidThreshold(threshold));
        }
        Ok(Self { threshold })
    }

    /// The similarity threshold below which a pair is non-compliant.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A difference that scored below the threshold against a stored rule.
///
/// One [`DifferenceRecord`] extended with the failed rule's identifier and
/// the similarity score. The score is a raw dot product: non-negative,
/// not guaranteed to be bounded by 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// The underlying line-level difference.
    #[serde(flatten)]
    pub difference: DifferenceRecord,
    /// Identifier of the stored rule this difference failed against
    /// (a section title or a raw rule line).
    pub rule: String,
    /// Raw dot-product similarity between the difference's document-side
    /// vector and the rule vector.
    pub similarity: f64,
}

/// Score every difference against every stored rule vector.
///
/// For each difference, the DOCUMENT-side content is vectorized over
/// `vocabulary`; for every `(identifier, vector)` rule entry the raw dot
/// product is computed, and a [`ComparisonResult`] is emitted whenever the
/// score falls below `config.threshold()`. Returns an empty vector when no
/// sub-threshold pair exists.
///
/// Lowering the threshold can only remove results, raising it can only add
/// them — emission is monotonic in the threshold.
pub fn match_against_rules(
    differences: &[DifferenceRecord],
    vocabulary: &Vocabulary,
    rules: &IndexMap<String, TfidfVector>,
    config: &MatcherConfig,
) -> Vec<ComparisonResult> {
    let mut results = Vec::new();

    for difference in differences {
        let difference_vector = vocabulary.vectorize(&difference.document_content);

        for (identifier, rule_vector) in rules {
            let similarity = difference_vector.dot(rule_vector);
            if similarity < config.threshold() {
                results.push(ComparisonResult {
                    difference: difference.clone(),
                    rule: identifier.clone(),
                    similarity,
                });
            }
        }
    }

    results
}
