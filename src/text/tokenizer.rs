// Word tokenizer.
//
// Normalization: apostrophes are dropped first (so "don't" stays one word),
// then the text is lower-cased and every Unicode word run (`\w+`) becomes a
// token. Empty tokens cannot occur because the pattern needs one character.

use once_cell::sync::Lazy;
use regex::Regex;

use super::extract::extract;
use super::mode::ParseMode;
use crate::error::ParseError;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("valid word pattern"));

/// Apostrophe variants removed before splitting.
const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// Split already-extracted text into normalized tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .filter(|c| !APOSTROPHES.contains(c))
        .collect::<String>()
        .to_lowercase();

    WORD_RE
        .find_iter(&cleaned)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extract text from `content` under `mode` and tokenize it.
pub fn parse_words(content: &str, mode: ParseMode) -> Result<Vec<String>, ParseError> {
    let text = extract(content, mode)?;
    Ok(tokenize(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(
            tokenize("The Tree. The tree!"),
            vec!["the", "tree", "the", "tree"]
        );
    }

    #[test]
    fn test_apostrophes_join_words() {
        assert_eq!(tokenize("Don't stop"), vec!["dont", "stop"]);
        assert_eq!(tokenize("it\u{2019}s"), vec!["its"]);
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(tokenize("Café, Straße"), vec!["café", "straße"]);
    }

    #[test]
    fn test_keeps_digits() {
        assert_eq!(tokenize("In 1905, E=mc2"), vec!["in", "1905", "e", "mc2"]);
    }

    #[test]
    fn test_punctuation_only_yields_nothing() {
        assert!(tokenize("... -- !!").is_empty());
    }

    #[test]
    fn test_parse_words_body_mode() {
        let words = parse_words("<p>Oak <b>trees</b></p>", ParseMode::Body).unwrap();
        assert_eq!(words, vec!["oak", "trees"]);
    }

    #[test]
    fn test_parse_words_empty_fails() {
        assert_eq!(
            parse_words("", ParseMode::Body),
            Err(ParseError::EmptyContent)
        );
    }
}
