//! The `run` and `once` commands.

use tracing::{error, info, warn};

use feedrelay_config::{Config, ConfigError, ConfigValidator, EnvOverlay};
use feedrelay_core::ensure_data_dir;
use feedrelay_daemon::{
    ChildReaper, DaemonSignal, EXIT_FAILURE, EXIT_SUCCESS, SignalHandler, exit_code_for,
};

use crate::adapters::build_monitor;

/// Start the monitor. With `once` a single check runs and the process exits.
pub(crate) async fn run(config: Config, once: bool) -> u8 {
    let missing = EnvOverlay::missing_required(&config);
    if !missing.is_empty() {
        error!("{}", ConfigError::MissingRequired(missing));
        return EXIT_FAILURE;
    }

    let validation = ConfigValidator::validate(&config);
    for warning in &validation.warnings {
        warn!("Config {}: {}", warning.path, warning.message);
    }
    if !validation.is_valid() {
        for e in &validation.errors {
            error!("Config {}: {}", e.path, e.message);
        }
        return EXIT_FAILURE;
    }

    if let Err(e) = ensure_data_dir(&config.monitor.data_dir).await {
        error!("Data directory is not usable: {}", e);
        return EXIT_FAILURE;
    }

    let signals = SignalHandler::new();
    if let Err(e) = signals.setup_os_signals() {
        warn!("Failed to install signal handlers: {}", e);
    }
    spawn_terminate_watch(&signals);

    let _reaper = match ChildReaper::install_if_pid1(config.daemon.reap_orphans) {
        Ok(reaper) => reaper,
        Err(e) => {
            warn!("Failed to install child reaper: {}", e);
            None
        }
    };

    let mut monitor = match build_monitor(&config) {
        Ok(monitor) => monitor,
        Err(e) => {
            error!("{:#}", e);
            return EXIT_FAILURE;
        }
    };

    info!("feedrelay v{} starting", env!("CARGO_PKG_VERSION"));
    info!("Feed: {}", config.browser.feed_url);
    info!("Model: {}", config.anthropic.model);
    info!("Data directory: {}", config.monitor.data_dir.display());

    let shutdown = signals.shutdown_token();

    if once {
        monitor.initialize().await;
        let report = monitor.run_cycle_until(&shutdown).await;
        info!(
            found = report.found,
            new = report.new,
            published = report.published,
            failed = report.failed,
            "Check complete"
        );
        return EXIT_SUCCESS;
    }

    exit_code_for(monitor.run(shutdown).await)
}

/// A second termination signal exits without waiting for the cycle.
fn spawn_terminate_watch(signals: &SignalHandler) {
    let mut rx = signals.subscribe();
    tokio::spawn(async move {
        while let Ok(signal) = rx.recv().await {
            if signal == DaemonSignal::Terminate {
                warn!("Terminating without waiting for the current check");
                std::process::exit(i32::from(EXIT_FAILURE));
            }
        }
    });
}
