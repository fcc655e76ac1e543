//! The `check` command.

use feedrelay_config::{Config, ConfigValidator};
use feedrelay_core::ensure_data_dir;
use feedrelay_daemon::{EXIT_FAILURE, EXIT_SUCCESS};

/// Validate configuration and the data directory, printing a summary.
pub(crate) async fn check(config: &Config) -> u8 {
    let result = ConfigValidator::validate(config);

    println!("Feed URL:       {}", config.browser.feed_url);
    println!("Model:          {}", config.anthropic.model);
    println!("Data directory: {}", config.monitor.data_dir.display());
    println!(
        "Interval:       {}s (restart after {} cycles)",
        config.monitor.check_interval_secs, config.monitor.max_cycles
    );
    println!();

    for warning in &result.warnings {
        println!("warning: {}: {}", warning.path, warning.message);
    }
    for error in &result.errors {
        println!("error:   {}: {}", error.path, error.message);
    }

    let data_dir_ok = match ensure_data_dir(&config.monitor.data_dir).await {
        Ok(()) => true,
        Err(e) => {
            println!("error:   {}", e);
            false
        }
    };

    if result.is_valid() && data_dir_ok {
        println!("Configuration OK");
        EXIT_SUCCESS
    } else {
        println!(
            "Configuration has {} error(s)",
            result.errors.len() + usize::from(!data_dir_ok)
        );
        EXIT_FAILURE
    }
}
