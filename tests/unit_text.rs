// Unit tests for the tokenizer and frequency profiler.
//
// Tests the public text pipeline: extraction per parsing mode, token
// normalization, and the counting invariants of FrequencyProfile.

use wikiwords::text::{extract, parse_words, tokenize, ParseMode};
use wikiwords::{FrequencyProfile, ParseError};

const ARTICLE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Tree - Wikipedia</title>
  <script>var wgPageName = "Tree";</script>
</head>
<body class="mediawiki">
  <div id="siteNotice">Donate today</div>
  <h1>Tree</h1>
  <p>In botany, a tree is a perennial plant with an elongated stem.</p>
  <p>Trees are not a taxonomic group.</p>
</body>
</html>"#;

// ============================================================
// Scenario from the tool's documentation
// ============================================================

#[test]
fn body_mode_counts_the_tree_sentence() {
    let profile = FrequencyProfile::from_content("The Tree. The tree!", ParseMode::Body).unwrap();
    assert_eq!(profile.distinct(), 2);
    assert_eq!(profile.count("the"), 2);
    assert_eq!(profile.count("tree"), 2);
}

// ============================================================
// Extraction modes
// ============================================================

#[test]
fn raw_mode_sees_markup_words() {
    let words = parse_words(ARTICLE, ParseMode::Raw).unwrap();
    assert!(words.contains(&"html".to_string()));
    assert!(words.contains(&"mediawiki".to_string()));
    assert!(words.contains(&"wgpagename".to_string()));
}

#[test]
fn html_mode_sees_head_text_but_not_tags() {
    let words = parse_words(ARTICLE, ParseMode::Html).unwrap();
    assert!(words.contains(&"wikipedia".to_string()));
    assert!(!words.contains(&"mediawiki".to_string()));
}

#[test]
fn body_mode_skips_head() {
    let words = parse_words(ARTICLE, ParseMode::Body).unwrap();
    assert!(!words.contains(&"wikipedia".to_string()));
    assert!(!words.contains(&"wgpagename".to_string()));
    assert!(words.contains(&"donate".to_string()));
    assert!(words.contains(&"botany".to_string()));
}

#[test]
fn paragraph_mode_keeps_only_prose() {
    let words = parse_words(ARTICLE, ParseMode::Paragraph).unwrap();
    assert!(!words.contains(&"donate".to_string()));
    assert_eq!(words.first().map(String::as_str), Some("in"));
    assert_eq!(words.last().map(String::as_str), Some("group"));
}

#[test]
fn modes_are_nested_subsets() {
    let count = |mode| parse_words(ARTICLE, mode).unwrap().len();
    assert!(count(ParseMode::Raw) > count(ParseMode::Html));
    assert!(count(ParseMode::Html) > count(ParseMode::Body));
    assert!(count(ParseMode::Body) > count(ParseMode::Paragraph));
}

#[test]
fn paragraph_mode_on_plain_text_is_empty_not_an_error() {
    let profile = FrequencyProfile::from_content("no paragraphs here", ParseMode::Paragraph).unwrap();
    assert!(profile.is_empty());
}

// ============================================================
// Failures
// ============================================================

#[test]
fn empty_content_is_a_parse_error_in_every_mode() {
    for mode in ParseMode::ALL {
        assert_eq!(extract("", mode), Err(ParseError::EmptyContent));
        assert_eq!(
            FrequencyProfile::from_content("   ", mode),
            Err(ParseError::EmptyContent)
        );
    }
}

#[test]
fn unknown_mode_is_a_parse_error() {
    let err = "sentences".parse::<ParseMode>().unwrap_err();
    assert_eq!(err, ParseError::UnknownMode("sentences".to_string()));
}

// ============================================================
// Counting invariants
// ============================================================

#[test]
fn total_equals_token_count() {
    let samples = [
        "",
        "one",
        "The Tree. The tree!",
        "It's a tree's leaf -- isn't it?",
        "Ünïcödé wörds, 42 numbers & symbols: ©®™",
        ARTICLE,
    ];
    for text in samples {
        let tokens = tokenize(text);
        let profile = FrequencyProfile::from_tokens(ParseMode::Raw, tokens.clone());
        assert_eq!(
            profile.total(),
            tokens.len() as u64,
            "total mismatch for {text:?}"
        );
    }
}

#[test]
fn tokens_are_lowercase_and_nonempty() {
    for token in tokenize(ARTICLE) {
        assert!(!token.is_empty());
        assert_eq!(token, token.to_lowercase());
    }
}

#[test]
fn profile_serializes_as_token_counts() {
    let profile = FrequencyProfile::from_tokens(ParseMode::Body, ["tree", "oak", "tree"]);
    let json = serde_json::to_value(profile.counts()).unwrap();
    assert_eq!(json, serde_json::json!({"oak": 1, "tree": 2}));
}
