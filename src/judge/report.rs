// Result values produced by the judge.
//
// Plain structured data: the presentation layer renders these, the judge
// never formats text itself. Everything serializes so results can be dumped
// as JSON.

use serde::Serialize;

use crate::error::Error;
use crate::profile::FrequencyProfile;
use crate::similarity::SimilarityMetric;
use crate::text::ParseMode;

/// An article title plus the mode its profile was built with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PageRef {
    pub title: String,
    pub mode: ParseMode,
}

impl PageRef {
    pub fn new(title: impl Into<String>, mode: ParseMode) -> Self {
        Self {
            title: title.into(),
            mode,
        }
    }
}

/// A page that was skipped during a list operation, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageFailure {
    pub title: String,
    pub reason: String,
    /// True when the source has no such page (as opposed to a broken one)
    pub not_found: bool,
}

impl PageFailure {
    pub fn new(title: &str, error: &Error) -> Self {
        Self {
            title: title.to_string(),
            reason: error.to_string(),
            not_found: error.is_not_found(),
        }
    }
}

/// Similarity of one unordered pair of pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairScore {
    pub first: PageRef,
    pub second: PageRef,
    pub score: f64,
}

/// Every pairwise score among a set of named pages.
#[derive(Debug, Clone, Serialize)]
pub struct PairwiseReport {
    pub metric: SimilarityMetric,
    /// One entry per unordered pair, in input order
    pub scores: Vec<PairScore>,
    pub failures: Vec<PageFailure>,
    /// Scored pages whose selected text had no words
    pub empty_pages: Vec<String>,
}

impl PairwiseReport {
    /// Score for the pair (a, b) in either order.
    pub fn score(&self, a: &str, b: &str) -> Option<f64> {
        self.scores
            .iter()
            .find(|p| {
                (p.first.title == a && p.second.title == b)
                    || (p.first.title == b && p.second.title == a)
            })
            .map(|p| p.score)
    }
}

/// A candidate page and its similarity to the reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPage {
    pub page: PageRef,
    pub score: f64,
}

/// Sampled peers ranked by similarity to a reference page.
#[derive(Debug, Clone, Serialize)]
pub struct RankingReport {
    pub reference: PageRef,
    pub metric: SimilarityMetric,
    /// Descending by score; ties keep candidate-list order
    pub ranking: Vec<RankedPage>,
    pub failures: Vec<PageFailure>,
    /// Scored pages, reference included, whose selected text had no words
    pub empty_pages: Vec<String>,
}

impl RankingReport {
    pub fn titles(&self) -> Vec<&str> {
        self.ranking.iter().map(|r| r.page.title.as_str()).collect()
    }

    /// True when the reference had no words, so every score is 0.
    pub fn reference_is_empty(&self) -> bool {
        self.empty_pages.contains(&self.reference.title)
    }
}

/// Verdict on which of two pages is closer to a reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Judgement {
    pub reference: PageRef,
    pub metric: SimilarityMetric,
    pub closer: RankedPage,
    pub farther: RankedPage,
    pub empty_pages: Vec<String>,
}

/// Similarity between the profiles of one page under two modes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModePairScore {
    pub first: ParseMode,
    pub second: ParseMode,
    pub score: f64,
}

/// One page parsed several ways.
#[derive(Debug, Clone, Serialize)]
pub struct ModeComparison {
    pub title: String,
    pub metric: SimilarityMetric,
    /// One profile per requested mode, in request order
    pub profiles: Vec<FrequencyProfile>,
    pub scores: Vec<ModePairScore>,
}

impl ModeComparison {
    pub fn profile(&self, mode: ParseMode) -> Option<&FrequencyProfile> {
        self.profiles.iter().find(|p| p.mode() == mode)
    }

    pub fn score(&self, a: ParseMode, b: ParseMode) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| (s.first == a && s.second == b) || (s.first == b && s.second == a))
            .map(|s| s.score)
    }
}
