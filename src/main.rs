//! feedrelay
//!
//! Watches the Roll Call Truth Social listing, translates new posts to
//! Hungarian and relays them to a Discord webhook.

mod adapters;
mod cli;
mod cmd_check;
mod cmd_run;
mod cmd_state;

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use feedrelay_config::Config;
use feedrelay_daemon::EXIT_FAILURE;

use crate::cli::{Cli, Commands};

/// Initialize tracing with console output and an optional rolling log file.
fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let ansi = std::io::stdout().is_terminal();
    let (console_text, console_json) = if config.logging.json {
        (None, Some(fmt::layer().json().with_target(true)))
    } else {
        (Some(fmt::layer().with_target(true).with_ansi(ansi)), None)
    };

    let file_layer = if config.logging.file {
        let log_dir = config.monitor.data_dir.join("logs");
        std::fs::create_dir_all(&log_dir)?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("feedrelay")
            .filename_suffix("log")
            .max_log_files(14)
            .build(&log_dir)?;

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // The worker flushes on drop, so the guard lives as long as the process.
        static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
            std::sync::OnceLock::new();
        let _ = GUARD.set(guard);

        Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_text)
        .with(console_json)
        .with(file_layer)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match adapters::load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    if let Err(e) = init_tracing(&config) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::from(EXIT_FAILURE);
    }

    let code = match cli.command {
        None | Some(Commands::Run) => cmd_run::run(config, false).await,
        Some(Commands::Once) => cmd_run::run(config, true).await,
        Some(Commands::Check) => cmd_check::check(&config).await,
        Some(Commands::State { action }) => cmd_state::handle(action, &config).await,
    };

    ExitCode::from(code)
}
