//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`dom`] - Window/document access, selectors, history helpers
//! - [`fetch_text`] - Same-origin text fetching with timeout

pub mod dom;
mod fetch;

pub use fetch::{RaceResult, fetch_text, race_with_timeout};
