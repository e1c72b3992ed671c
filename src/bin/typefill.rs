// src/bin/typefill.rs

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::time::FormatTime;

use typefill::cli::Cli;
use typefill::commands::{CommandError, build_config, generate_types, run_demo};

/// A timer that outputs nothing but still enables span timing calculation
struct NoTimestamp;

impl FormatTime for NoTimestamp {
    fn format_time(
        &self,
        _w: &mut tracing_subscriber::fmt::format::Writer<'_>,
    ) -> std::fmt::Result {
        Ok(())
    }
}

/// Install a subscriber when TYPEFILL_LOG is set.
/// TYPEFILL_LOG_STYLE: "compact" (default) or "full" (with timestamps).
fn init_tracing() {
    let Ok(filter) = EnvFilter::try_from_env("TYPEFILL_LOG") else {
        return;
    };
    let style = std::env::var("TYPEFILL_LOG_STYLE").unwrap_or_default();
    if style == "full" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .with_timer(NoTimestamp)
            .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
            .with_writer(std::io::stderr)
            .init();
    }
    tracing::debug!("tracing initialized");
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let config = match build_config(cli.config.as_deref(), cli.seed, cli.max_depth) {
        Ok(config) => config,
        Err(e) => return CommandError::from(e).report(cli.color),
    };

    if cli.types.is_empty() {
        run_demo(&config, cli.color)
    } else {
        generate_types(&cli.types, cli.count, cli.json, &config, cli.color)
    }
}
