// Text extraction from article HTML.
//
// Each parsing mode maps to one pure function from raw content to the text
// that should be tokenized. HTML is parsed with scraper (html5ever), which
// always synthesizes <html> and <body>, so plain text lands in the body too.

use scraper::{Html, Selector};

use super::mode::ParseMode;
use crate::error::ParseError;

/// Select the tokenizable text of `content` under `mode`.
///
/// Text nodes are joined with a space so words in adjacent elements never
/// run together. Fails only when `content` is empty or whitespace.
pub fn extract(content: &str, mode: ParseMode) -> Result<String, ParseError> {
    if content.trim().is_empty() {
        return Err(ParseError::EmptyContent);
    }

    let text = match mode {
        ParseMode::Raw => content.to_string(),
        ParseMode::Html => document_text(content),
        ParseMode::Body => selected_text(content, "body"),
        ParseMode::Paragraph => selected_text(content, "p"),
    };

    Ok(text)
}

/// Every text node of the document, `<head>` included.
fn document_text(html: &str) -> String {
    let document = Html::parse_document(html);
    document.root_element().text().collect::<Vec<_>>().join(" ")
}

/// Text nodes of all elements matching `selector`.
fn selected_text(html: &str, selector: &str) -> String {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse(selector) else {
        return String::new();
    };

    document
        .select(&selector)
        .flat_map(|el| el.text())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "<html><head><title>Tree - Wikipedia</title></head>\
        <body><div class=\"nav\">Menu</div><p>A tree is a plant.</p><p>Trees grow.</p></body></html>";

    #[test]
    fn test_raw_keeps_markup() {
        let text = extract(PAGE, ParseMode::Raw).unwrap();
        assert!(text.contains("<title>"));
        assert!(text.contains("class=\"nav\""));
    }

    #[test]
    fn test_html_includes_head_text() {
        let text = extract(PAGE, ParseMode::Html).unwrap();
        assert!(text.contains("Tree - Wikipedia"));
        assert!(text.contains("Menu"));
        assert!(!text.contains("<p>"));
    }

    #[test]
    fn test_body_excludes_head() {
        let text = extract(PAGE, ParseMode::Body).unwrap();
        assert!(!text.contains("Wikipedia"));
        assert!(text.contains("Menu"));
        assert!(text.contains("A tree is a plant."));
    }

    #[test]
    fn test_paragraph_only() {
        let text = extract(PAGE, ParseMode::Paragraph).unwrap();
        assert!(!text.contains("Menu"));
        assert!(text.contains("A tree is a plant."));
        assert!(text.contains("Trees grow."));
    }

    #[test]
    fn test_plain_text_lands_in_body() {
        let text = extract("The Tree. The tree!", ParseMode::Body).unwrap();
        assert_eq!(text.trim(), "The Tree. The tree!");
    }

    #[test]
    fn test_empty_content_fails() {
        assert_eq!(extract("", ParseMode::Body), Err(ParseError::EmptyContent));
        assert_eq!(extract("  \n\t", ParseMode::Raw), Err(ParseError::EmptyContent));
    }
}
