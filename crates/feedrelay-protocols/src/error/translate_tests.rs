use super::*;

#[test]
fn test_from_api_response_auth() {
    let err = TranslateError::from_api_response(401, "invalid x-api-key".to_string());
    assert!(matches!(err, TranslateError::Authentication(_)));

    let err = TranslateError::from_api_response(403, "forbidden".to_string());
    assert!(matches!(err, TranslateError::Authentication(_)));
}

#[test]
fn test_from_api_response_rate_limited() {
    let err = TranslateError::from_api_response(429, "slow down".to_string());
    assert!(matches!(err, TranslateError::RateLimited(_)));
    assert!(err.to_string().contains("slow down"));
}

#[test]
fn test_from_api_response_other() {
    let err = TranslateError::from_api_response(529, "overloaded".to_string());
    match err {
        TranslateError::Api { status, message } => {
            assert_eq!(status, 529);
            assert_eq!(message, "overloaded");
        }
        _ => panic!("Expected Api"),
    }
}

#[test]
fn test_empty_response_display() {
    assert_eq!(
        TranslateError::EmptyResponse.to_string(),
        "Empty response from model"
    );
}
