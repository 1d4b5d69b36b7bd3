// Similarity between two frequency profiles.
//
// Both profiles are treated as sparse vectors over the union of their tokens,
// a missing token counting as zero. Two bounded, symmetric metrics are offered:
//
//   Cosine (default)  dot(a, b) / (|a| * |b|) over raw counts
//   WeightedJaccard   sum(min(a_t, b_t)) / sum(max(a_t, b_t)) over fractions
//
// Counts are never negative, so both land in [0, 1]. An empty profile on
// either side scores 0.0. Sums always run in token order so swapping the
// arguments gives a bit-identical result.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::profile::FrequencyProfile;

/// Which formula `similarity` uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityMetric {
    #[default]
    Cosine,
    WeightedJaccard,
}

impl SimilarityMetric {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityMetric::Cosine => "cosine",
            SimilarityMetric::WeightedJaccard => "jaccard",
        }
    }
}

impl fmt::Display for SimilarityMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimilarityMetric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cosine" => Ok(SimilarityMetric::Cosine),
            "jaccard" | "weighted_jaccard" | "weighted-jaccard" => {
                Ok(SimilarityMetric::WeightedJaccard)
            }
            other => Err(Error::config(format!(
                "unknown similarity metric '{other}' (expected cosine or jaccard)"
            ))),
        }
    }
}

/// Score two profiles with the chosen metric. Result is in [0, 1].
pub fn similarity(a: &FrequencyProfile, b: &FrequencyProfile, metric: SimilarityMetric) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    // Identical vectors are exactly 1 under both metrics; skip the rounding.
    if a.counts() == b.counts() {
        return 1.0;
    }

    match metric {
        SimilarityMetric::Cosine => cosine_similarity(a, b),
        SimilarityMetric::WeightedJaccard => weighted_jaccard(a, b),
    }
}

/// Cosine similarity over raw counts.
pub fn cosine_similarity(a: &FrequencyProfile, b: &FrequencyProfile) -> f64 {
    cosine_from_weights(&as_weights(a), &as_weights(b))
}

/// Weighted Jaccard over each token's share of its page.
pub fn weighted_jaccard(a: &FrequencyProfile, b: &FrequencyProfile) -> f64 {
    jaccard_from_weights(&a.fractions(), &b.fractions())
}

/// Euclidean distance between the two pages' word fractions.
///
/// 0.0 means identical distributions; the upper bound is sqrt(2). Lower is
/// closer, the opposite direction of `similarity`.
pub fn euclidean_distance(a: &FrequencyProfile, b: &FrequencyProfile) -> f64 {
    let fa = a.fractions();
    let fb = b.fractions();
    union_keys(&fa, &fb)
        .into_iter()
        .map(|token| {
            let d = fa.get(token).copied().unwrap_or(0.0) - fb.get(token).copied().unwrap_or(0.0);
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Cosine similarity of two sparse weight vectors, clamped to [0, 1].
pub fn cosine_from_weights(a: &BTreeMap<String, f64>, b: &BTreeMap<String, f64>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    // Only shared tokens contribute to the dot product. Walking the smaller
    // map in key order visits the same tokens in the same order either way.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .filter_map(|(token, wa)| large.get(token).map(|wb| wa * wb))
        .sum();

    // Disjoint vectors sum an empty iterator to -0.0; report +0.0 so zero
    // scores compare equal when ranked.
    if dot <= 0.0 {
        return 0.0;
    }

    let norm_a: f64 = a.values().map(|w| w * w).sum();
    let norm_b: f64 = b.values().map(|w| w * w).sum();
    let denom = (norm_a * norm_b).sqrt();

    if denom < f64::EPSILON {
        return 0.0;
    }

    (dot / denom).clamp(0.0, 1.0)
}

/// Weighted Jaccard of two sparse weight vectors.
pub fn jaccard_from_weights(a: &BTreeMap<String, f64>, b: &BTreeMap<String, f64>) -> f64 {
    let keys = union_keys(a, b);
    if keys.is_empty() {
        return 0.0;
    }

    let mut min_sum = 0.0;
    let mut max_sum = 0.0;
    for token in keys {
        let wa = a.get(token).copied().unwrap_or(0.0);
        let wb = b.get(token).copied().unwrap_or(0.0);
        min_sum += wa.min(wb);
        max_sum += wa.max(wb);
    }

    if max_sum < f64::EPSILON {
        0.0
    } else {
        (min_sum / max_sum).clamp(0.0, 1.0)
    }
}

fn as_weights(profile: &FrequencyProfile) -> BTreeMap<String, f64> {
    profile
        .iter()
        .map(|(token, count)| (token.to_string(), count as f64))
        .collect()
}

fn union_keys<'a>(a: &'a BTreeMap<String, f64>, b: &'a BTreeMap<String, f64>) -> BTreeSet<&'a str> {
    a.keys().chain(b.keys()).map(String::as_str).collect()
}
