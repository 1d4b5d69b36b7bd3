// Error taxonomy for the similarity core.
//
// The core returns typed errors so the orchestrator can tell a page that
// could not be fetched apart from one that could not be parsed. The binary
// and the I/O wrappers wrap these in anyhow with extra context.

use thiserror::Error;

/// Result type alias for the core.
pub type Result<T> = std::result::Result<T, Error>;

/// Raised by the tokenizer when content cannot be turned into words.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Content was empty or whitespace only
    #[error("page content is empty")]
    EmptyContent,

    /// The requested parsing mode does not exist
    #[error("unknown parsing mode '{0}' (expected raw, html, body or paragraph)")]
    UnknownMode(String),
}

/// Raised by a `PageFetcher` when a page cannot be retrieved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The source has no page with this title
    #[error("page not found: {0}")]
    NotFound(String),

    /// Transport failure or unexpected response
    #[error("network error: {0}")]
    Network(String),
}

/// Main error type for the core.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The requested comparison cannot be set up
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl Error {
    /// Shorthand for a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Configuration(message.into())
    }

    /// True when the error is a missing page rather than a broken one.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Fetch(FetchError::NotFound(_)))
    }
}
