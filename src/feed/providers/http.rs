// src/feed/providers/http.rs
use async_trait::async_trait;
use metrics::counter;
use reqwest::Client;

use crate::error::{ReportError, Result};
use crate::feed::types::FeedSource;

const USER_AGENT: &str = concat!("listing-feed-report/", env!("CARGO_PKG_VERSION"));

/// Plain GET of the feed URL. One attempt, no timeout beyond the client's.
pub struct HttpFeed {
    url: String,
    client: Client,
}

impl HttpFeed {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ReportError::fetch("http", e))?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    fn fail(&self, detail: impl ToString) -> ReportError {
        counter!("feed_fetch_errors_total").increment(1);
        ReportError::fetch(self.url.clone(), detail)
    }
}

#[async_trait]
impl FeedSource for HttpFeed {
    async fn fetch(&self) -> Result<String> {
        let resp = match self.client.get(&self.url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(error = ?e, url = %self.url, "feed http error");
                return Err(self.fail(e));
            }
        };

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%status, url = %self.url, "feed http status");
            return Err(self.fail(format!("HTTP {status}")));
        }

        let body = resp.text().await.map_err(|e| self.fail(e))?;
        tracing::debug!(url = %self.url, bytes = body.len(), "feed fetched");
        Ok(body)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
