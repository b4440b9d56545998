// src/feed/providers/file.rs
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use metrics::counter;

use crate::error::{ReportError, Result};
use crate::feed::types::FeedSource;

/// Feed saved on disk, for offline runs.
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl FeedSource for FileFeed {
    async fn fetch(&self) -> Result<String> {
        tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            tracing::warn!(error = %e, path = %self.path.display(), "feed file read failed");
            counter!("feed_fetch_errors_total").increment(1);
            ReportError::fetch(self.path.display().to_string(), e)
        })
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreadable_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.xml");
        match FileFeed::new(&path).fetch().await.unwrap_err() {
            ReportError::Fetch { source_name, .. } => {
                assert_eq!(source_name, path.display().to_string())
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn reads_the_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed.xml");
        std::fs::write(&path, "<Listings/>").unwrap();
        assert_eq!(FileFeed::new(&path).fetch().await.unwrap(), "<Listings/>");
    }
}
