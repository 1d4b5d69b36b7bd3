// The judge: fetch pages, profile them, compare the profiles.
//
// Pages are fetched one after another in list order. List operations record a
// PageFailure for any page that cannot be fetched or parsed and keep going.
// The reference page of a ranking aborts the run instead, whether the caller
// named it or it defaulted to the first candidate. Pages that parse but yield
// no words are still scored (always 0) and listed in `empty_pages`.

use std::collections::HashSet;

use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::index;
use rand::Rng;
use tracing::{debug, info, warn};

use super::report::{
    Judgement, ModeComparison, ModePairScore, PageFailure, PageRef, PairScore, PairwiseReport,
    RankedPage, RankingReport,
};
use super::JudgeConfig;
use crate::error::{Error, Result};
use crate::profile::FrequencyProfile;
use crate::similarity::similarity;
use crate::text::ParseMode;
use crate::wiki::PageFetcher;

/// Drives multi-page comparisons over a page fetcher.
pub struct Judge<'a> {
    fetcher: &'a dyn PageFetcher,
    config: JudgeConfig,
    show_progress: bool,
}

impl<'a> Judge<'a> {
    pub fn new(fetcher: &'a dyn PageFetcher, config: JudgeConfig) -> Self {
        Self {
            fetcher,
            config,
            show_progress: false,
        }
    }

    /// Draw a progress bar on stderr while fetching candidate lists.
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn config(&self) -> &JudgeConfig {
        &self.config
    }

    /// Fetch `title` and build its profile under the configured mode.
    pub async fn profile_page(&self, title: &str) -> Result<FrequencyProfile> {
        let content = self.fetcher.fetch(title).await?;
        let profile = FrequencyProfile::from_content(&content, self.config.mode)?;
        debug!(
            title,
            mode = %self.config.mode,
            tokens = profile.total(),
            distinct = profile.distinct(),
            "Built profile"
        );
        Ok(profile)
    }

    /// Score every unordered pair among `titles`.
    ///
    /// Duplicate titles are fetched once. Pages that fail are listed in the
    /// report; fewer than two usable pages is a configuration error.
    pub async fn compare_pages(&self, titles: &[String]) -> Result<PairwiseReport> {
        let titles = dedup(titles.iter().map(String::as_str));
        if titles.len() < 2 {
            return Err(Error::config(format!(
                "comparison needs at least two distinct pages, got {}",
                titles.len()
            )));
        }

        let mut profiles: Vec<(PageRef, FrequencyProfile)> = Vec::with_capacity(titles.len());
        let mut failures = Vec::new();
        let mut empty_pages = Vec::new();

        let pb = self.progress_bar(titles.len());
        for title in &titles {
            match self.profile_page(title).await {
                Ok(profile) => {
                    note_empty(title, &profile, &mut empty_pages);
                    profiles.push((PageRef::new(*title, self.config.mode), profile));
                }
                Err(e) => {
                    warn!(title, error = %e, "Skipping page");
                    failures.push(PageFailure::new(title, &e));
                }
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        if profiles.len() < 2 {
            return Err(Error::config(format!(
                "comparison needs at least two resolvable pages, got {} of {}",
                profiles.len(),
                titles.len()
            )));
        }

        let mut scores = Vec::new();
        for (i, (first, profile_a)) in profiles.iter().enumerate() {
            for (second, profile_b) in &profiles[i + 1..] {
                scores.push(PairScore {
                    first: first.clone(),
                    second: second.clone(),
                    score: similarity(profile_a, profile_b, self.config.metric),
                });
            }
        }

        info!(
            pages = profiles.len(),
            pairs = scores.len(),
            failed = failures.len(),
            "Pairwise comparison complete"
        );

        Ok(PairwiseReport {
            metric: self.config.metric,
            scores,
            failures,
            empty_pages,
        })
    }

    /// Rank a random sample of candidates by similarity to a reference page.
    ///
    /// The reference is `reference` when given, otherwise the first candidate.
    /// It is removed from the pool before sampling, and the sample size is
    /// clamped to the pool size. Sampled peers are fetched in candidate order
    /// and sorted stably, so a seeded `rng` gives a reproducible ranking.
    pub async fn random_judgement<R: Rng + ?Sized>(
        &self,
        candidates: &[String],
        reference: Option<&str>,
        rng: &mut R,
    ) -> Result<RankingReport> {
        if self.config.sample_size == 0 {
            return Err(Error::config("sample size must be at least 1"));
        }

        let reference = match reference {
            Some(title) => title,
            None => candidates
                .first()
                .map(String::as_str)
                .ok_or_else(|| Error::config("no candidate pages to judge"))?,
        };

        let pool = dedup(
            candidates
                .iter()
                .map(String::as_str)
                .filter(|title| *title != reference),
        );
        if pool.is_empty() {
            return Err(Error::config(format!(
                "no candidate pages besides the reference '{reference}'"
            )));
        }

        let amount = self.config.sample_size.min(pool.len());
        if amount < self.config.sample_size {
            warn!(
                requested = self.config.sample_size,
                available = pool.len(),
                "Sample size larger than candidate pool, using every candidate"
            );
        }

        let mut picks = index::sample(rng, pool.len(), amount).into_vec();
        picks.sort_unstable();

        info!(reference, sample = amount, pool = pool.len(), "Random judging");

        let reference_profile = self.profile_page(reference).await?;
        let mut empty_pages = Vec::new();
        note_empty(reference, &reference_profile, &mut empty_pages);

        let mut ranking = Vec::with_capacity(amount);
        let mut failures = Vec::new();

        let pb = self.progress_bar(amount);
        for title in picks.into_iter().map(|i| pool[i]) {
            match self.profile_page(title).await {
                Ok(profile) => {
                    note_empty(title, &profile, &mut empty_pages);
                    ranking.push(RankedPage {
                        page: PageRef::new(title, self.config.mode),
                        score: similarity(&reference_profile, &profile, self.config.metric),
                    });
                }
                Err(e) => {
                    warn!(title, error = %e, "Skipping candidate");
                    failures.push(PageFailure::new(title, &e));
                }
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        // Stable: equal scores keep candidate order.
        ranking.sort_by(|a, b| b.score.total_cmp(&a.score));

        Ok(RankingReport {
            reference: PageRef::new(reference, self.config.mode),
            metric: self.config.metric,
            ranking,
            failures,
            empty_pages,
        })
    }

    /// Decide which of `first` and `second` is closer to `reference`.
    ///
    /// All three pages must resolve. On a tie `first` counts as closer.
    pub async fn triple_judgement(
        &self,
        reference: &str,
        first: &str,
        second: &str,
    ) -> Result<Judgement> {
        let reference_profile = self.profile_page(reference).await?;
        let mut empty_pages = Vec::new();
        note_empty(reference, &reference_profile, &mut empty_pages);

        let first = self
            .rank_against(&reference_profile, first, &mut empty_pages)
            .await?;
        let second = self
            .rank_against(&reference_profile, second, &mut empty_pages)
            .await?;
        let (closer, farther) = if second.score > first.score {
            (second, first)
        } else {
            (first, second)
        };

        info!(
            reference,
            closer = %closer.page.title,
            farther = %farther.page.title,
            "Judgement made"
        );

        Ok(Judgement {
            reference: PageRef::new(reference, self.config.mode),
            metric: self.config.metric,
            closer,
            farther,
            empty_pages,
        })
    }

    async fn rank_against(
        &self,
        reference: &FrequencyProfile,
        title: &str,
        empty_pages: &mut Vec<String>,
    ) -> Result<RankedPage> {
        let profile = self.profile_page(title).await?;
        note_empty(title, &profile, empty_pages);
        Ok(RankedPage {
            page: PageRef::new(title, self.config.mode),
            score: similarity(reference, &profile, self.config.metric),
        })
    }

    /// Parse one page under several modes and compare the results.
    ///
    /// The page is fetched once. Repeated modes are ignored.
    pub async fn compare_modes(&self, title: &str, modes: &[ParseMode]) -> Result<ModeComparison> {
        let mut seen = HashSet::new();
        let modes: Vec<ParseMode> = modes.iter().copied().filter(|m| seen.insert(*m)).collect();
        if modes.is_empty() {
            return Err(Error::config("at least one parsing mode is required"));
        }

        let content = self.fetcher.fetch(title).await?;
        let profiles = modes
            .iter()
            .map(|&mode| FrequencyProfile::from_content(&content, mode))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut scores = Vec::new();
        for (i, profile_a) in profiles.iter().enumerate() {
            for profile_b in &profiles[i + 1..] {
                scores.push(ModePairScore {
                    first: profile_a.mode(),
                    second: profile_b.mode(),
                    score: similarity(profile_a, profile_b, self.config.metric),
                });
            }
        }

        Ok(ModeComparison {
            title: title.to_string(),
            metric: self.config.metric,
            profiles,
            scores,
        })
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(len as u64);
        if let Ok(style) =
            ProgressStyle::default_bar().template("  Pages [{bar:30}] {pos}/{len} ({eta})")
        {
            pb.set_style(style);
        }
        pb
    }
}

/// Pick `n` distinct titles from `candidates` at random, in candidate order.
///
/// Used to draw the pages of a triple judgement from a page list.
pub fn sample_titles<R: Rng + ?Sized>(
    candidates: &[String],
    n: usize,
    rng: &mut R,
) -> Result<Vec<String>> {
    let pool = dedup(candidates.iter().map(String::as_str));
    if pool.len() < n {
        return Err(Error::config(format!(
            "need {n} distinct pages, the list has {}",
            pool.len()
        )));
    }
    let mut picks = index::sample(rng, pool.len(), n).into_vec();
    picks.sort_unstable();
    Ok(picks.into_iter().map(|i| pool[i].to_string()).collect())
}

/// Record and warn about a page whose selected text had no words.
fn note_empty(title: &str, profile: &FrequencyProfile, empty_pages: &mut Vec<String>) {
    if profile.is_empty() {
        warn!(title, mode = %profile.mode(), "Page has no words under this mode, it scores 0");
        empty_pages.push(title.to_string());
    }
}

/// Keep the first occurrence of each title, preserving order.
fn dedup<'t>(titles: impl Iterator<Item = &'t str>) -> Vec<&'t str> {
    let mut seen = HashSet::new();
    titles.filter(|t| seen.insert(*t)).collect()
}
