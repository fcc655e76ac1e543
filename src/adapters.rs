//! Wiring of configuration into the pipeline components.

use std::sync::Arc;

use anyhow::Context;

use feedrelay_channel_discord::DiscordPublisher;
use feedrelay_config::{Config, ConfigError, ConfigLoader};
use feedrelay_core::{FileStateStore, Monitor, MonitorSettings};
use feedrelay_provider_anthropic::HungarianTranslator;
use feedrelay_source_browser::RollCallSource;

use crate::cli::Cli;

/// Resolve configuration from the CLI flags, file and environment.
pub(crate) fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut config = ConfigLoader::resolve(cli.config.as_deref())?;
    if let Some(ref data_dir) = cli.data_dir {
        config.monitor.data_dir = data_dir.clone();
    }
    Ok(config)
}

/// Build the monitor with the browser source, Anthropic translator,
/// Discord publisher and file state.
pub(crate) fn build_monitor(config: &Config) -> anyhow::Result<Monitor> {
    let source = RollCallSource::from_config(&config.browser);
    let translator =
        HungarianTranslator::from_config(&config.anthropic).context("creating translator")?;
    let publisher =
        DiscordPublisher::from_config(&config.discord).context("creating Discord publisher")?;
    let state = FileStateStore::new(&config.monitor.data_dir);

    Ok(Monitor::new(
        Arc::new(source),
        Arc::new(translator),
        Arc::new(publisher),
        Arc::new(state),
        MonitorSettings::from_config(&config.monitor),
    ))
}
