// src/feed/types.rs
use crate::error::Result;

/// Something that can hand back the raw feed XML.
#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch(&self) -> Result<String>;
    fn name(&self) -> &'static str;
}
