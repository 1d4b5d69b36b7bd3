// wikiwords: compare word frequencies between Wikipedia pages
//
// This is the library root. Data flows text -> profile -> similarity ->
// judge; wiki, storage and output are the I/O around that core.

pub mod config;
pub mod error;
pub mod judge;
pub mod output;
pub mod profile;
pub mod similarity;
pub mod storage;
pub mod text;
pub mod wiki;

pub use error::{Error, FetchError, ParseError, Result};
pub use judge::{Judge, JudgeConfig};
pub use profile::FrequencyProfile;
pub use similarity::{similarity, SimilarityMetric};
pub use text::ParseMode;
