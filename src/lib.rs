// src/lib.rs
//! Listing feed report: fetch a real-estate XML feed, keep the listings from
//! one year whose description contains a phrase, order them by listed date
//! and write a flattened CSV.

pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod feed;
pub mod filter;
pub mod listing;
pub mod pipeline;
pub mod report;
pub mod sort;

// ---- Re-exports for stable public API ----
pub use crate::config::RunConfig;
pub use crate::error::ReportError;
pub use crate::listing::{parse_listings, Listing};
pub use crate::pipeline::{run, run_once, RunSummary};
pub use crate::report::CellFormat;
pub use crate::sort::DatedListing;
