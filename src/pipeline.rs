// src/pipeline.rs
//! Fetch → parse → filter (year, phrase) → sort → write, once.

use std::path::PathBuf;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use once_cell::sync::OnceCell;
use tracing::info;

use crate::config::RunConfig;
use crate::error::Result;
use crate::feed::feed_for;
use crate::feed::types::FeedSource;
use crate::filter::{filter_by_phrase, filter_by_year};
use crate::listing::parse_listings;
use crate::report::write_report;
use crate::sort::sort_by_date_listed;

/// One-time metrics registration.
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("listings_parsed_total", "Listings parsed from the feed.");
        describe_counter!(
            "listings_filtered_total",
            "Listings dropped by the year or phrase filter."
        );
        describe_counter!("report_rows_written_total", "Data rows written to the CSV report.");
        describe_counter!("feed_fetch_errors_total", "Feed fetch failures.");
        describe_histogram!("feed_parse_ms", "Feed parse time in milliseconds.");
    });
}

/// Counts from one run, stage by stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub parsed: usize,
    pub after_year: usize,
    pub after_phrase: usize,
    pub written: usize,
    pub output_path: PathBuf,
}

/// Run the whole pipeline against `source`. Nothing is written unless fetch,
/// parse and filtering all succeed.
pub async fn run_once(source: &dyn FeedSource, cfg: &RunConfig) -> Result<RunSummary> {
    ensure_metrics_described();

    info!(target: "pipeline", source = source.name(), "fetching feed");
    let xml = source.fetch().await?;

    let t0 = std::time::Instant::now();
    let listings = parse_listings(&xml)?;
    histogram!("feed_parse_ms").record(t0.elapsed().as_secs_f64() * 1_000.0);
    let parsed = listings.len();
    counter!("listings_parsed_total").increment(parsed as u64);

    let listings = filter_by_year(listings, cfg.target_year);
    let after_year = listings.len();
    let listings = filter_by_phrase(listings, &cfg.target_phrase);
    let after_phrase = listings.len();
    counter!("listings_filtered_total").increment((parsed - after_phrase) as u64);
    info!(
        target: "pipeline",
        parsed,
        after_year,
        after_phrase,
        year = cfg.target_year,
        phrase = %cfg.target_phrase,
        "listings filtered"
    );

    let ordered = sort_by_date_listed(listings);
    let written = write_report(&cfg.output_path, &ordered, cfg.cell_format)?;
    counter!("report_rows_written_total").increment(written as u64);

    Ok(RunSummary {
        parsed,
        after_year,
        after_phrase,
        written,
        output_path: cfg.output_path.clone(),
    })
}

/// Build the source named by `cfg.feed_url` and run once.
pub async fn run(cfg: &RunConfig) -> Result<RunSummary> {
    let source = feed_for(&cfg.feed_url)?;
    run_once(source.as_ref(), cfg).await
}
