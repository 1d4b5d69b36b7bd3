// Parsing modes — which part of an article contributes words.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Strategy for pulling tokenizable text out of raw article content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Everything, markup and attribute values included
    Raw,
    /// Every text node of the parsed document, head included
    Html,
    /// Text nodes inside `<body>`
    #[default]
    Body,
    /// Text nodes inside `<p>` elements
    Paragraph,
}

impl ParseMode {
    /// All modes, in the order the CLI lists them.
    pub const ALL: [ParseMode; 4] = [
        ParseMode::Raw,
        ParseMode::Html,
        ParseMode::Body,
        ParseMode::Paragraph,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParseMode::Raw => "raw",
            ParseMode::Html => "html",
            ParseMode::Body => "body",
            ParseMode::Paragraph => "paragraph",
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParseMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(ParseMode::Raw),
            "html" => Ok(ParseMode::Html),
            "body" => Ok(ParseMode::Body),
            "paragraph" | "p" => Ok(ParseMode::Paragraph),
            _ => Err(ParseError::UnknownMode(s.to_string())),
        }
    }
}
