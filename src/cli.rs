//! CLI definitions for feedrelay.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// feedrelay CLI.
#[derive(Parser)]
#[command(name = "feedrelay")]
#[command(about = "Relays new Truth Social posts to Discord, translated to Hungarian")]
#[command(version)]
pub(crate) struct Cli {
    /// Optional TOML configuration file (environment variables still apply)
    #[arg(short, long, global = true, env = "FEEDRELAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the data directory holding the state file
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the monitoring loop in the foreground (default)
    Run,

    /// Run a single check and exit
    Once,

    /// Validate configuration and the data directory
    Check,

    /// Inspect or edit the last processed post id
    State {
        #[command(subcommand)]
        action: StateAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum StateAction {
    /// Print the stored id
    Show,

    /// Forget the stored id; the next check posts only the newest post
    Reset,

    /// Store an id explicitly
    Set {
        /// Post id (decimal)
        id: String,
    },
}
