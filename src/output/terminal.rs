// Colored terminal output for judgements, rankings and parser comparisons.
//
// main.rs hands the judge's structured results to these functions; nothing
// in the core formats text.

use std::path::Path;

use colored::Colorize;

use crate::judge::{Judgement, ModeComparison, PageFailure, PairwiseReport, RankingReport};

/// Width of the score bar in rankings.
const BAR_WIDTH: usize = 20;

/// Display the verdict of a triple judgement.
pub fn display_judgement(judgement: &Judgement) {
    println!(
        "\n{} is closer to {} than to {}",
        judgement.reference.title.bold(),
        judgement.closer.page.title.bright_green(),
        judgement.farther.page.title.bright_yellow(),
    );
    println!(
        "  {}",
        format!(
            "{} similarity ({} mode): {:.4} vs {:.4}",
            judgement.metric,
            judgement.reference.mode,
            judgement.closer.score,
            judgement.farther.score
        )
        .dimmed()
    );

    display_empty(&judgement.empty_pages);
}

/// Display a ranking of sampled peers as a bar chart.
pub fn display_ranking(report: &RankingReport) {
    println!(
        "\n{}",
        format!(
            "=== Pages most like {} ({} similarity, {} mode) ===",
            report.reference.title, report.metric, report.reference.mode
        )
        .bold()
    );
    println!();

    if report.ranking.is_empty() {
        println!("  No candidate could be scored.");
    }

    for (i, ranked) in report.ranking.iter().enumerate() {
        println!(
            "  {:>2}. {:<40} {} {:.4}",
            i + 1,
            super::truncate_chars(&ranked.page.title, 37).bold(),
            score_bar(ranked.score),
            ranked.score
        );
    }

    if report.reference_is_empty() {
        println!(
            "\n  {} {} has no words in {} mode; every score is 0.",
            "!".yellow(),
            report.reference.title.bold(),
            report.reference.mode
        );
    }
    display_empty(&report.empty_pages);
    display_failures(&report.failures);
}

/// Display every pairwise score, most similar pair first.
pub fn display_pairwise(report: &PairwiseReport) {
    println!(
        "\n{}",
        format!("=== Pairwise {} similarity ===", report.metric).bold()
    );
    println!();

    let mut scores: Vec<_> = report.scores.iter().collect();
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));

    for pair in scores {
        println!(
            "  {:<30} {:<30} {} {:.4}",
            super::truncate_chars(&pair.first.title, 27),
            super::truncate_chars(&pair.second.title, 27),
            score_bar(pair.score),
            pair.score
        );
    }

    display_empty(&report.empty_pages);
    display_failures(&report.failures);
}

/// Display the most common words of a page under each parser, then how
/// similar the parsers' profiles are to each other.
pub fn display_comparison(comparison: &ModeComparison, num_words: usize) {
    for profile in &comparison.profiles {
        println!(
            "\n{}",
            format!(
                "Top {} most common words using {} ({} words, {} distinct):",
                num_words,
                profile.mode(),
                profile.total(),
                profile.distinct()
            )
            .bold()
        );
        for (i, (word, count)) in profile.most_common(num_words).into_iter().enumerate() {
            println!("  {:>3}\t{}, {}", i + 1, word, count);
        }
    }

    if !comparison.scores.is_empty() {
        println!(
            "\n{}",
            format!("=== Parser {} similarity ===", comparison.metric).bold()
        );
        for pair in &comparison.scores {
            println!(
                "  {:<10} vs {:<10} {} {:.4}",
                pair.first.to_string(),
                pair.second.to_string(),
                score_bar(pair.score),
                pair.score
            );
        }
    }
}

/// Confirm a saved frequency file.
pub fn display_saved(title: &str, path: &Path) {
    println!("Saved word frequencies for {} to {}", title.bold(), path.display());
}

/// List the pages that were scored without any words, if any.
pub fn display_empty(titles: &[String]) {
    if titles.is_empty() {
        return;
    }

    println!();
    println!(
        "  {} {} page(s) had no words and scored 0:",
        "!".yellow(),
        titles.len()
    );
    for title in titles {
        println!("    {}", title.dimmed());
    }
}

/// List the pages that were skipped, if any.
pub fn display_failures(failures: &[PageFailure]) {
    if failures.is_empty() {
        return;
    }

    println!();
    println!("  {} {} page(s) skipped:", "!".yellow(), failures.len());
    for failure in failures {
        let label = if failure.not_found {
            "not found".yellow()
        } else {
            "error".red()
        };
        println!(
            "    {} [{}] {}",
            failure.title,
            label,
            failure.reason.dimmed()
        );
    }
}

/// A fixed-width bar colored by how high the score is.
fn score_bar(score: f64) -> colored::ColoredString {
    let filled = (score.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    let bar = format!(
        "[{}{}]",
        "=".repeat(filled),
        " ".repeat(BAR_WIDTH.saturating_sub(filled))
    );

    if score >= 0.75 {
        bar.bright_green()
    } else if score >= 0.40 {
        bar.bright_yellow()
    } else {
        bar.bright_blue()
    }
}
