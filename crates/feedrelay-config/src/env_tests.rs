use super::*;
use std::collections::HashMap;

fn overlay(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let mut config = Config::default();
    EnvOverlay::apply_with(&mut config, |key| map.get(key).cloned())?;
    Ok(config)
}

#[test]
fn test_overlay_required_values() {
    let config = overlay(&[
        ("DISCORD_WEBHOOK_URL", "https://discord.com/api/webhooks/1/abc"),
        ("ANTHROPIC_API_KEY", "sk-ant-test"),
    ])
    .unwrap();

    assert_eq!(
        config.discord.webhook_url.as_deref(),
        Some("https://discord.com/api/webhooks/1/abc")
    );
    assert_eq!(config.anthropic.api_key.as_deref(), Some("sk-ant-test"));
    assert!(EnvOverlay::missing_required(&config).is_empty());
}

#[test]
fn test_overlay_optional_values() {
    let config = overlay(&[
        ("ANTHROPIC_MODEL", "claude-sonnet-4-20250514"),
        ("CHECK_INTERVAL", "120"),
        ("DATA_DIR", "/tmp/feedrelay"),
        ("MAX_CYCLES", "10"),
    ])
    .unwrap();

    assert_eq!(config.anthropic.model, "claude-sonnet-4-20250514");
    assert_eq!(config.monitor.check_interval_secs, 120);
    assert_eq!(config.monitor.data_dir, PathBuf::from("/tmp/feedrelay"));
    assert_eq!(config.monitor.max_cycles, 10);
}

#[test]
fn test_force_reprocess_case_insensitive() {
    assert!(overlay(&[("FORCE_REPROCESS", "TRUE")]).unwrap().monitor.force_reprocess);
    assert!(overlay(&[("FORCE_REPROCESS", "true")]).unwrap().monitor.force_reprocess);
    assert!(!overlay(&[("FORCE_REPROCESS", "false")]).unwrap().monitor.force_reprocess);
    assert!(!overlay(&[("FORCE_REPROCESS", "nope")]).unwrap().monitor.force_reprocess);
}

#[test]
fn test_invalid_check_interval() {
    let err = overlay(&[("CHECK_INTERVAL", "soon")]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "CHECK_INTERVAL"));
}

#[test]
fn test_empty_values_ignored() {
    let config = overlay(&[("ANTHROPIC_MODEL", ""), ("DISCORD_WEBHOOK_URL", "  ")]).unwrap();
    assert_eq!(config.anthropic.model, crate::schema::DEFAULT_MODEL);
    assert!(config.discord.webhook_url.is_none());
}

#[test]
fn test_missing_required_reports_both() {
    let config = Config::default();
    let missing = EnvOverlay::missing_required(&config);
    assert_eq!(missing, vec!["DISCORD_WEBHOOK_URL", "ANTHROPIC_API_KEY"]);
}

#[test]
fn test_headless_flag() {
    let config = overlay(&[("HEADLESS", "false"), ("CHROME_PATH", "/opt/chrome")]).unwrap();
    assert!(!config.browser.headless);
    assert_eq!(config.browser.chrome_path, Some(PathBuf::from("/opt/chrome")));
}
