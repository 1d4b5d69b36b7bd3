// Fetch collaborator — where article text comes from.
//
// The judge only sees the PageFetcher trait. WikiClient is the HTTP
// implementation used by the CLI; tests swap in an in-memory fetcher.

pub mod client;
pub mod fetcher;
pub mod rate_limiter;

pub use client::WikiClient;
pub use fetcher::{MemoryFetcher, PageFetcher};
pub use rate_limiter::RateLimiter;
