use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::judge::{JudgeConfig, DEFAULT_SAMPLE_SIZE};
use crate::similarity::SimilarityMetric;
use crate::text::ParseMode;
use crate::wiki::client::DEFAULT_BASE_URL;

/// Seconds to wait between downloads unless configured otherwise.
pub const DEFAULT_WAIT_SECS: f64 = 1.0;

/// Central configuration loaded from environment variables.
///
/// A .env file is loaded automatically at startup via dotenvy. Every value
/// has a default; command-line flags override what is loaded here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Article source (WIKIWORDS_BASE_URL)
    pub base_url: String,
    /// Default parsing mode (WIKIWORDS_PARSE)
    pub mode: ParseMode,
    /// Default similarity metric (WIKIWORDS_METRIC)
    pub metric: SimilarityMetric,
    /// Peers per random judgement (WIKIWORDS_SAMPLE_SIZE)
    pub sample_size: usize,
    /// Pause between downloads in seconds (WIKIWORDS_WAIT_SECS)
    pub wait_secs: f64,
    /// Seed for peer sampling; random when unset (WIKIWORDS_SEED)
    pub seed: Option<u64>,
    /// Where `save` writes frequency files (WIKIWORDS_OUTPUT_DIR)
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            mode: ParseMode::default(),
            metric: SimilarityMetric::default(),
            sample_size: DEFAULT_SAMPLE_SIZE,
            wait_secs: DEFAULT_WAIT_SECS,
            seed: None,
            output_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset or empty keys keep their
    /// defaults; values that do not parse are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let mode = match get("WIKIWORDS_PARSE") {
            Some(v) => v.parse::<ParseMode>().context("WIKIWORDS_PARSE")?,
            None => defaults.mode,
        };
        let metric = match get("WIKIWORDS_METRIC") {
            Some(v) => v.parse::<SimilarityMetric>().context("WIKIWORDS_METRIC")?,
            None => defaults.metric,
        };
        let sample_size = match get("WIKIWORDS_SAMPLE_SIZE") {
            Some(v) => v
                .trim()
                .parse::<usize>()
                .with_context(|| format!("WIKIWORDS_SAMPLE_SIZE must be a whole number, got '{v}'"))?,
            None => defaults.sample_size,
        };
        let wait_secs = match get("WIKIWORDS_WAIT_SECS") {
            Some(v) => v
                .trim()
                .parse::<f64>()
                .with_context(|| format!("WIKIWORDS_WAIT_SECS must be a number, got '{v}'"))?,
            None => defaults.wait_secs,
        };
        let seed = match get("WIKIWORDS_SEED") {
            Some(v) => Some(
                v.trim()
                    .parse::<u64>()
                    .with_context(|| format!("WIKIWORDS_SEED must be a whole number, got '{v}'"))?,
            ),
            None => None,
        };

        let config = Self {
            base_url: get("WIKIWORDS_BASE_URL").unwrap_or(defaults.base_url),
            mode,
            metric,
            sample_size,
            wait_secs,
            seed,
            output_dir: get("WIKIWORDS_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values no command could run with.
    pub fn validate(&self) -> Result<()> {
        if self.sample_size == 0 {
            anyhow::bail!("Sample size must be at least 1.");
        }
        if !self.wait_secs.is_finite() || self.wait_secs < 0.0 {
            anyhow::bail!(
                "Wait between downloads must be zero or more seconds, got {}.",
                self.wait_secs
            );
        }
        Ok(())
    }

    /// The explicit settings handed to a Judge.
    pub fn judge_config(&self) -> JudgeConfig {
        JudgeConfig {
            mode: self.mode,
            metric: self.metric,
            sample_size: self.sample_size,
        }
    }
}
