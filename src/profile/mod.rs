// FrequencyProfile — the word-count vector of one article under one mode.
//
// A profile is built once from a token sequence and never mutated after.
// Keys are kept in a BTreeMap so serialized profiles and iteration order are
// stable across runs.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::text::{parse_words, ParseMode};

/// Token → occurrence count for one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyProfile {
    /// Parsing mode the tokens were extracted with
    mode: ParseMode,
    /// Occurrence count per token; every value is at least 1
    counts: BTreeMap<String, u64>,
}

impl FrequencyProfile {
    /// Count the tokens of a sequence. An empty sequence gives an empty profile.
    pub fn from_tokens<I, S>(mode: ParseMode, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts = BTreeMap::new();
        for token in tokens {
            let token: String = token.into();
            if token.is_empty() {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }
        Self { mode, counts }
    }

    /// Extract, tokenize and count raw article content.
    pub fn from_content(content: &str, mode: ParseMode) -> Result<Self, ParseError> {
        let words = parse_words(content, mode)?;
        Ok(Self::from_tokens(mode, words))
    }

    /// Rebuild a profile from a saved count map. Zero counts are dropped.
    pub fn from_counts(mode: ParseMode, counts: BTreeMap<String, u64>) -> Self {
        let counts = counts
            .into_iter()
            .filter(|(token, count)| *count > 0 && !token.is_empty())
            .collect();
        Self { mode, counts }
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Serializable view of the token → count mapping.
    pub fn counts(&self) -> &BTreeMap<String, u64> {
        &self.counts
    }

    /// Occurrences of `token` (0 when absent).
    pub fn count(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Total number of counted occurrences.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct tokens.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over (token, count) pairs in token order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(t, c)| (t.as_str(), *c))
    }

    /// Each token's share of the total. Empty for an empty profile.
    pub fn fractions(&self) -> BTreeMap<String, f64> {
        let total = self.total();
        if total == 0 {
            return BTreeMap::new();
        }
        self.counts
            .iter()
            .map(|(token, count)| (token.clone(), *count as f64 / total as f64))
            .collect()
    }

    /// The `n` most frequent tokens, highest count first.
    ///
    /// Equal counts are ordered alphabetically so output is reproducible.
    pub fn most_common(&self, n: usize) -> Vec<(&str, u64)> {
        let mut pairs: Vec<(&str, u64)> = self.iter().collect();
        pairs.sort_by_key(|&(token, count)| (Reverse(count), token));
        pairs.truncate(n);
        pairs
    }

    /// Tokens that occur more often here than in `other`, with the excess,
    /// largest excess first.
    ///
    /// Handy for seeing what one parsing mode picks up that another misses.
    pub fn difference(&self, other: &FrequencyProfile) -> Vec<(String, u64)> {
        let mut excess: Vec<(String, u64)> = self
            .counts
            .iter()
            .filter_map(|(token, &count)| {
                let theirs = other.count(token);
                (count > theirs).then(|| (token.clone(), count - theirs))
            })
            .collect();
        excess.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        excess
    }
}
