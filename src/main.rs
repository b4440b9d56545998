//! Listing feed report — binary entrypoint.
//! Loads `.env` and config, runs the pipeline once, exits non-zero on failure.

use std::path::PathBuf;

use listing_feed_report::{run, RunConfig};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// `RUST_LOG` controls verbosity; `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("listing_feed_report=info,pipeline=info,report=info,warn")
    });

    let json = std::env::var("LOG_FORMAT")
        .ok()
        .is_some_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

async fn run_from_env() -> anyhow::Result<()> {
    let explicit = std::env::args_os().nth(1).map(PathBuf::from);
    let cfg = RunConfig::load(explicit.as_deref())?;
    info!(
        feed = %cfg.feed_url,
        year = cfg.target_year,
        phrase = %cfg.target_phrase,
        output = %cfg.output_path.display(),
        "config loaded"
    );

    let summary = run(&cfg).await?;
    info!(
        parsed = summary.parsed,
        written = summary.written,
        output = %summary.output_path.display(),
        "report complete"
    );
    Ok(())
}

#[tokio::main]
async fn main() {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    if let Err(e) = run_from_env().await {
        error!(error = %e, "report run failed");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
