// src/feed/mod.rs
pub mod providers;
pub mod types;

use crate::feed::providers::{file::FileFeed, http::HttpFeed};
use crate::feed::types::FeedSource;
use crate::error::Result;

/// Pick a source for `location`: `http(s)://` URLs are fetched over HTTP,
/// anything else (optionally `file://`-prefixed) is read from disk.
pub fn feed_for(location: &str) -> Result<Box<dyn FeedSource>> {
    let lower = location.trim().to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return Ok(Box::new(HttpFeed::new(location.trim())?));
    }
    let path = location
        .trim()
        .strip_prefix("file://")
        .unwrap_or(location.trim());
    Ok(Box::new(FileFeed::new(path)))
}
