//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use hookwatch_core::config::Config;

mod commands;

#[derive(Parser)]
#[command(name = "hookwatch")]
#[command(version)]
#[command(about = "Terminal viewer for webhook events")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Events endpoint URL (overrides config)
    #[arg(long, env = "HOOKWATCH_ENDPOINT", value_name = "URL")]
    endpoint: Option<String>,

    /// Poll period in milliseconds (overrides config)
    #[arg(long, value_name = "MS")]
    interval_ms: Option<u64>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything; the event loop itself is synchronous
    // and blocks here while the scheduler and fetches run on the pool
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli) })
}

fn dispatch(cli: Cli) -> Result<()> {
    let mut config = Config::load().context("load config")?;

    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(interval_ms) = cli.interval_ms {
        config.poll_interval_ms = interval_ms;
    }

    // default to the viewer
    let Some(command) = cli.command else {
        return commands::watch::run(&config);
    };

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
