// Judgment orchestration — pairwise comparison, random judging, triple
// judgements and parser comparisons.

pub mod orchestrator;
pub mod report;

use serde::{Deserialize, Serialize};

use crate::similarity::SimilarityMetric;
use crate::text::ParseMode;

pub use orchestrator::{sample_titles, Judge};
pub use report::{
    Judgement, ModeComparison, ModePairScore, PageFailure, PageRef, PairScore, PairwiseReport,
    RankedPage, RankingReport,
};

/// Peers drawn per random judgement unless configured otherwise.
pub const DEFAULT_SAMPLE_SIZE: usize = 2;

/// Settings for one Judge, passed in explicitly at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgeConfig {
    /// How article content is turned into words
    pub mode: ParseMode,
    /// How two profiles are scored
    pub metric: SimilarityMetric,
    /// Peers drawn per random judgement
    pub sample_size: usize,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            mode: ParseMode::Body,
            metric: SimilarityMetric::Cosine,
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}
