//! Watch command handler (the default when no subcommand is given).

use anyhow::{Context, Result, ensure};
use hookwatch_core::config::{Config, paths};
use hookwatch_core::logging;

pub fn run(config: &Config) -> Result<()> {
    // Validate up front so a bad endpoint is a startup error, not a silent
    // stream of failed polls.
    config.endpoint_url()?;
    ensure!(
        config.poll_interval_ms > 0,
        "poll interval must be at least 1ms"
    );

    let _guard = logging::init(&paths::logs_dir()).context("init logging")?;
    tracing::info!(
        endpoint = %config.endpoint,
        interval_ms = config.poll_interval_ms,
        "starting viewer"
    );

    hookwatch_tui::run_viewer(config)
}
