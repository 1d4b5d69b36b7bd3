// Saving and loading word frequencies as JSON files.
//
// One file per page: `<directory>/<title>.json`, a flat object mapping each
// word to its count or to its fraction of the page total, indented by one
// space per level.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::error::Error;
use crate::profile::FrequencyProfile;
use crate::text::ParseMode;

/// What the saved numbers mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueKind {
    /// Raw occurrence counts
    Count,
    /// Share of the page total (sums to 1)
    #[default]
    Fraction,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Count => f.write_str("count"),
            ValueKind::Fraction => f.write_str("fraction"),
        }
    }
}

impl FromStr for ValueKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "count" => Ok(ValueKind::Count),
            "fraction" => Ok(ValueKind::Fraction),
            other => Err(Error::config(format!(
                "unknown frequency type '{other}' (expected count or fraction)"
            ))),
        }
    }
}

/// Write `profile` to `<directory>/<title>.json`, creating the directory.
///
/// Returns the path written.
pub fn save_profile(
    profile: &FrequencyProfile,
    title: &str,
    directory: &Path,
    kind: ValueKind,
) -> Result<PathBuf> {
    fs::create_dir_all(directory)
        .with_context(|| format!("Failed to create directory {}", directory.display()))?;

    let path = directory.join(format!("{}.json", file_stem(title)));
    let json = match kind {
        ValueKind::Count => to_json(profile.counts())?,
        ValueKind::Fraction => to_json(&profile.fractions())?,
    };

    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    info!(
        title,
        path = %path.display(),
        kind = %kind,
        words = profile.distinct(),
        "Saved word frequencies"
    );
    Ok(path)
}

/// Read a counts file written by `save_profile` with `ValueKind::Count`.
pub fn load_profile(path: &Path, mode: ParseMode) -> Result<FrequencyProfile> {
    let json =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let counts: BTreeMap<String, u64> = serde_json::from_str(&json)
        .with_context(|| format!("{} is not a word-count file", path.display()))?;
    Ok(FrequencyProfile::from_counts(mode, counts))
}

/// A file name for `title`: path separators and other characters that are
/// unsafe in file names become `_`.
pub fn file_stem(title: &str) -> String {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if stem.is_empty() || stem.chars().all(|c| c == '.') {
        "_".to_string()
    } else {
        stem
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value
        .serialize(&mut serializer)
        .context("Failed to serialize frequencies")?;
    Ok(out)
}
