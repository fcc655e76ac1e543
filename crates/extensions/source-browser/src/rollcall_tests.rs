use super::*;

#[test]
fn test_cache_busted_url_with_query() {
    let url = cache_busted_url(
        "https://rollcall.com/factbase/trump/topic/social/?platform=all&sort=date",
        1_752_883_200,
    );
    assert_eq!(
        url,
        "https://rollcall.com/factbase/trump/topic/social/?platform=all&sort=date&t=1752883200"
    );
}

#[test]
fn test_cache_busted_url_without_query() {
    assert_eq!(
        cache_busted_url("https://example.com/feed", 5),
        "https://example.com/feed?t=5"
    );
}

#[test]
fn test_from_config() {
    let config = BrowserConfig::default();
    let source = RollCallSource::from_config(&config);
    assert_eq!(source.feed_hard_limit, Duration::from_secs(180));
    assert_eq!(source.details_hard_limit, Duration::from_secs(45));
    assert_eq!(source.settle, Duration::from_secs(5));
    assert!(source.user_agent.contains("Chrome/120"));
}

#[tokio::test]
async fn test_hard_limit_elapsed() {
    let result: Result<(), SourceError> = with_hard_limit(Duration::from_millis(10), async {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(())
    })
    .await;
    assert!(matches!(result, Err(SourceError::HardTimeout(0))));
}

#[tokio::test]
async fn test_hard_limit_passes_result_through() {
    let result = with_hard_limit(Duration::from_secs(1), async { Ok(7) }).await;
    assert_eq!(result.unwrap(), 7);

    let result: Result<(), SourceError> = with_hard_limit(Duration::from_secs(1), async {
        Err(SourceError::Browser("Chrome not found".to_string()))
    })
    .await;
    assert!(matches!(result, Err(SourceError::Browser(_))));
}

#[tokio::test]
async fn test_fetch_feed_without_chrome_fails() {
    let config = BrowserConfig {
        chrome_path: Some("/dev/null".into()),
        ..Default::default()
    };
    let source = RollCallSource::from_config(&config);
    assert!(source.fetch_feed().await.is_err());
}
