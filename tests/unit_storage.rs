// Unit tests for saving and loading word-frequency files.
//
// Everything is written under a fresh temporary directory.

use std::collections::BTreeMap;

use wikiwords::storage::{load_profile, save_profile, ValueKind};
use wikiwords::{FrequencyProfile, ParseMode};

fn tree_profile() -> FrequencyProfile {
    FrequencyProfile::from_content("The Tree. The tree! A leaf.", ParseMode::Body).unwrap()
}

#[test]
fn save_counts_writes_token_count_map() {
    let dir = tempfile::tempdir().unwrap();
    let path = save_profile(&tree_profile(), "Tree", dir.path(), ValueKind::Count).unwrap();

    assert_eq!(path, dir.path().join("Tree.json"));
    let json: BTreeMap<String, u64> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["the"], 2);
    assert_eq!(json["tree"], 2);
    assert_eq!(json["a"], 1);
    assert_eq!(json["leaf"], 1);
}

#[test]
fn save_fractions_sum_to_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = save_profile(&tree_profile(), "Tree", dir.path(), ValueKind::Fraction).unwrap();

    let json: BTreeMap<String, f64> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let sum: f64 = json.values().sum();
    assert!((sum - 1.0).abs() < 1e-9);
    assert!((json["tree"] - 2.0 / 6.0).abs() < 1e-12);
}

#[test]
fn save_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("freqs").join("body");
    let path = save_profile(&tree_profile(), "Tree", &nested, ValueKind::Count).unwrap();
    assert!(path.exists());
}

#[test]
fn titles_with_slashes_stay_in_the_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = save_profile(&tree_profile(), "AC/DC", dir.path(), ValueKind::Count).unwrap();
    assert_eq!(path, dir.path().join("AC_DC.json"));
}

#[test]
fn saved_counts_load_back() {
    let dir = tempfile::tempdir().unwrap();
    let profile = tree_profile();
    let path = save_profile(&profile, "Tree", dir.path(), ValueKind::Count).unwrap();

    let loaded = load_profile(&path, ParseMode::Body).unwrap();
    assert_eq!(loaded, profile);
}

#[test]
fn loading_a_fraction_file_as_counts_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = save_profile(&tree_profile(), "Tree", dir.path(), ValueKind::Fraction).unwrap();
    assert!(load_profile(&path, ParseMode::Body).is_err());
}
