use super::*;

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert!(config.discord.webhook_url.is_none());
    assert_eq!(config.discord.max_attempts, 3);
    assert_eq!(config.anthropic.model, "claude-3-7-sonnet-20250219");
    assert_eq!(config.anthropic.max_tokens, 1024);
    assert_eq!(config.monitor.check_interval_secs, 60);
    assert_eq!(config.monitor.data_dir, PathBuf::from("/data"));
    assert_eq!(config.monitor.max_cycles, 30);
    assert!(!config.monitor.force_reprocess);
    assert!(config.browser.headless);
    assert_eq!(config.browser.feed_hard_limit_secs, 180);
    assert_eq!(config.browser.details_hard_limit_secs, 45);
    assert!(!config.daemon.reap_orphans);
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.monitor.post_delay_secs, 5);
    assert_eq!(config.browser.feed_url, DEFAULT_FEED_URL);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_partial_section() {
    let content = r#"
        [monitor]
        check_interval_secs = 120
    "#;
    let config: Config = toml::from_str(content).unwrap();
    assert_eq!(config.monitor.check_interval_secs, 120);
    assert_eq!(config.monitor.max_cycles, 30);
}

#[test]
fn test_browser_section() {
    let content = r#"
        [browser]
        chrome_path = "/usr/bin/chromium"
        headless = false
    "#;
    let config: Config = toml::from_str(content).unwrap();
    assert_eq!(config.browser.chrome_path, Some(PathBuf::from("/usr/bin/chromium")));
    assert!(!config.browser.headless);
    assert_eq!(config.browser.user_agent, DEFAULT_USER_AGENT);
}

#[test]
fn test_temperature_default() {
    let config = AnthropicConfig::default();
    assert!((config.temperature - 0.3).abs() < f32::EPSILON);
}
