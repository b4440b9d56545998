// src/feed/providers/fixture.rs
use async_trait::async_trait;

use crate::error::Result;
use crate::feed::types::FeedSource;

/// In-memory feed. Keeps its own copy so callers need no `'static` data.
pub struct FixtureFeed {
    xml: String,
}

impl FixtureFeed {
    pub fn from_fixture(xml: &str) -> Self {
        Self {
            xml: xml.to_string(),
        }
    }
}

#[async_trait]
impl FeedSource for FixtureFeed {
    async fn fetch(&self) -> Result<String> {
        Ok(self.xml.clone())
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}
