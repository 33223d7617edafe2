//! lineedits: plot recent lines-touched activity per author
//!
//! This binary reads `git log --numstat` style records (or walks a
//! repository directly) and writes a flot plot payload or a rendered page.

use anyhow::Result;
use clap::Parser;
use lineedits::config::Config;
use lineedits::report;
use tracing::info;

fn main() -> Result<()> {
    let config = Config::parse();

    // Initialize tracing subscriber on stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    config.validate()?;

    info!(
        window_days = config.window_days,
        metric = ?config.metric,
        "Starting lineedits..."
    );

    report::run(&config)
}
