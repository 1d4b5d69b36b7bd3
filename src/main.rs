use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use wikiwords::config::Config;
use wikiwords::judge::{sample_titles, Judge};
use wikiwords::output::terminal;
use wikiwords::storage::{self, ValueKind};
use wikiwords::wiki::WikiClient;
use wikiwords::{ParseMode, SimilarityMetric};

/// wikiwords: inspect similarity between Wikipedia pages.
///
/// Pages are compared by the frequencies of the words they use.
#[derive(Parser)]
#[command(name = "wikiwords", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that downloads pages.
#[derive(Args)]
struct FetchArgs {
    /// Parser to get words from pages with (raw, html, body, paragraph)
    #[arg(long)]
    parse: Option<ParseMode>,

    /// Similarity metric (cosine, jaccard)
    #[arg(long)]
    metric: Option<SimilarityMetric>,

    /// Seconds to wait between downloads
    #[arg(long, short = 'w')]
    wait: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Judge which of two pages is closer to a third
    Judge {
        /// Three pages to judge; the first is compared to the others
        #[arg(long, num_args = 3, conflicts_with = "page_file")]
        pages: Option<Vec<String>>,

        /// File listing pages (one per line) to draw three at random from
        #[arg(long, short = 'f')]
        page_file: Option<PathBuf>,

        /// Seed for drawing pages from the file
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        fetch: FetchArgs,
    },

    /// Rank random pages from a list by similarity to a reference page
    Rank {
        /// File listing candidate pages, one per line
        #[arg(long, short = 'f')]
        page_file: PathBuf,

        /// Reference page (default: the first page in the file)
        #[arg(long, short = 'r')]
        reference: Option<String>,

        /// Number of peers to sample
        #[arg(long, short = 'n')]
        sample: Option<usize>,

        /// Seed for peer sampling (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        fetch: FetchArgs,
    },

    /// Score every pair among two or more pages
    Pair {
        /// Pages to compare
        #[arg(required = true, num_args = 2..)]
        pages: Vec<String>,

        #[command(flatten)]
        fetch: FetchArgs,
    },

    /// Save a page's word frequencies as JSON
    Save {
        /// Name of page to load (not URL)
        #[arg(long, short = 'p')]
        page: String,

        /// Directory to save word frequencies in
        #[arg(long, short = 'd')]
        directory: Option<PathBuf>,

        /// Type of frequencies to save (count, fraction)
        #[arg(long = "type", short = 't', default_value = "fraction")]
        kind: ValueKind,

        #[command(flatten)]
        fetch: FetchArgs,
    },

    /// Compare the words different parsers get from one page
    Compare {
        /// Name of page to load (not URL)
        #[arg(long, short = 'p')]
        page: String,

        /// Parsers to get words from the page with (default: all)
        #[arg(long, num_args = 1..)]
        parsers: Vec<ParseMode>,

        /// Number of most frequent words to display
        #[arg(long, short = 'n', default_value = "20")]
        num_words: usize,

        #[command(flatten)]
        fetch: FetchArgs,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wikiwords=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::load()?;

    match cli.command {
        Commands::Judge {
            pages,
            page_file,
            seed,
            fetch,
        } => {
            fetch.apply(&mut config)?;
            let pages = match (pages, page_file) {
                (Some(pages), _) => pages,
                (None, Some(path)) => {
                    let candidates = read_page_file(&path)?;
                    let mut rng = seeded_rng(seed.or(config.seed));
                    sample_titles(&candidates, 3, &mut rng)?
                }
                (None, None) => anyhow::bail!("Give three pages with --pages or a list with --page-file."),
            };

            let client = WikiClient::new(&config.base_url, config.wait_secs)?;
            let judge = Judge::new(&client, config.judge_config());
            let judgement = judge
                .triple_judgement(&pages[0], &pages[1], &pages[2])
                .await?;
            terminal::display_judgement(&judgement);
        }

        Commands::Rank {
            page_file,
            reference,
            sample,
            seed,
            fetch,
        } => {
            fetch.apply(&mut config)?;
            if let Some(sample) = sample {
                config.sample_size = sample;
            }
            config.validate()?;

            let candidates = read_page_file(&page_file)?;
            let mut rng = seeded_rng(seed.or(config.seed));

            let client = WikiClient::new(&config.base_url, config.wait_secs)?;
            let judge = Judge::new(&client, config.judge_config()).with_progress(true);
            let report = judge
                .random_judgement(&candidates, reference.as_deref(), &mut rng)
                .await?;
            terminal::display_ranking(&report);
        }

        Commands::Pair { pages, fetch } => {
            fetch.apply(&mut config)?;
            let client = WikiClient::new(&config.base_url, config.wait_secs)?;
            let judge = Judge::new(&client, config.judge_config()).with_progress(true);
            let report = judge.compare_pages(&pages).await?;
            terminal::display_pairwise(&report);
        }

        Commands::Save {
            page,
            directory,
            kind,
            fetch,
        } => {
            fetch.apply(&mut config)?;
            let directory = directory.unwrap_or_else(|| config.output_dir.clone());

            let client = WikiClient::new(&config.base_url, config.wait_secs)?;
            let judge = Judge::new(&client, config.judge_config());
            let profile = judge
                .profile_page(&page)
                .await
                .with_context(|| format!("Could not build word frequencies for '{page}'"))?;
            let path = storage::save_profile(&profile, &page, &directory, kind)?;
            terminal::display_saved(&page, &path);
        }

        Commands::Compare {
            page,
            parsers,
            num_words,
            fetch,
        } => {
            fetch.apply(&mut config)?;
            let parsers = if parsers.is_empty() {
                ParseMode::ALL.to_vec()
            } else {
                parsers
            };

            let client = WikiClient::new(&config.base_url, config.wait_secs)?;
            let judge = Judge::new(&client, config.judge_config());
            let comparison = judge.compare_modes(&page, &parsers).await?;
            terminal::display_comparison(&comparison, num_words);
        }
    }

    Ok(())
}

impl FetchArgs {
    /// Override config values with whatever was given on the command line.
    fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(mode) = self.parse {
            config.mode = mode;
        }
        if let Some(metric) = self.metric {
            config.metric = metric;
        }
        if let Some(wait) = self.wait {
            config.wait_secs = wait;
        }
        config.validate()
    }
}

/// Read page titles from a file, one per line. Blank lines and lines
/// starting with `#` are ignored.
fn read_page_file(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read page file {}", path.display()))?;
    let pages: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    if pages.is_empty() {
        anyhow::bail!("Page file {} lists no pages.", path.display());
    }
    Ok(pages)
}

/// A sampling RNG from `seed`, or from a fresh random seed that gets printed
/// so the run can be repeated.
fn seeded_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(rand::random);
    info!(seed, "Seeding page sampler");
    println!("{}", format!("(seed {seed}; pass --seed {seed} to repeat)").dimmed());
    StdRng::seed_from_u64(seed)
}
