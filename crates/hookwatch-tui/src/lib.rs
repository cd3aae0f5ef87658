//! Full-screen terminal viewer for webhook events.

pub mod common;
pub mod effects;
pub mod events;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
use hookwatch_core::config::Config;

pub use runtime::ViewerRuntime;

/// Runs the polling viewer until the user quits.
pub fn run_viewer(config: &Config) -> Result<()> {
    // The viewer needs a terminal to render into
    if !stderr().is_terminal() {
        anyhow::bail!(
            "hookwatch needs a terminal.\n\
             Run it interactively, pointed at the events endpoint."
        );
    }

    // Pre-TUI info to stderr (replaced by the alternate screen)
    let mut err = stderr();
    writeln!(err, "hookwatch")?;
    writeln!(err, "Endpoint: {}", config.endpoint)?;
    writeln!(err, "Poll interval: {}ms", config.poll_interval_ms)?;
    err.flush()?;

    let mut runtime = ViewerRuntime::new(config)?;
    runtime.run()?;

    Ok(())
}
