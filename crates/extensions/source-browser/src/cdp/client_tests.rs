use super::*;

fn pending_map() -> PendingMap {
    Arc::new(Mutex::new(HashMap::new()))
}

#[tokio::test]
async fn test_dispatch_routes_result_by_id() {
    let pending = pending_map();
    let (tx, rx) = oneshot::channel();
    pending.lock().insert(5, tx);

    let resp: CdpResponse =
        serde_json::from_str(r#"{"id": 5, "result": {"value": 42}}"#).unwrap();
    CdpClient::dispatch(resp, &pending);

    let value = rx.await.unwrap().unwrap();
    assert_eq!(value["value"], 42);
    assert!(pending.lock().is_empty());
}

#[tokio::test]
async fn test_dispatch_routes_protocol_error() {
    let pending = pending_map();
    let (tx, rx) = oneshot::channel();
    pending.lock().insert(9, tx);

    let resp: CdpResponse = serde_json::from_str(
        r#"{"id": 9, "error": {"code": -32601, "message": "'Foo.bar' wasn't found"}}"#,
    )
    .unwrap();
    CdpClient::dispatch(resp, &pending);

    match rx.await.unwrap() {
        Err(CdpError::Protocol { code, message }) => {
            assert_eq!(code, -32601);
            assert!(message.contains("Foo.bar"));
        }
        other => panic!("Expected protocol error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_dispatch_missing_result_is_null() {
    let pending = pending_map();
    let (tx, rx) = oneshot::channel();
    pending.lock().insert(1, tx);

    let resp: CdpResponse = serde_json::from_str(r#"{"id": 1}"#).unwrap();
    CdpClient::dispatch(resp, &pending);

    assert_eq!(rx.await.unwrap().unwrap(), Value::Null);
}

#[test]
fn test_dispatch_ignores_events_and_unknown_ids() {
    let pending = pending_map();
    let (tx, _rx) = oneshot::channel();
    pending.lock().insert(2, tx);

    let event: CdpResponse =
        serde_json::from_str(r#"{"method": "Page.frameNavigated", "params": {}}"#).unwrap();
    CdpClient::dispatch(event, &pending);

    let stray: CdpResponse = serde_json::from_str(r#"{"id": 99, "result": {}}"#).unwrap();
    CdpClient::dispatch(stray, &pending);

    assert_eq!(pending.lock().len(), 1);
}

#[tokio::test]
async fn test_connect_unavailable_endpoint() {
    // Port 9 (discard) is essentially never a DevTools endpoint.
    let result = CdpClient::connect("http://127.0.0.1:9").await;
    assert!(matches!(result, Err(CdpError::ChromeNotAvailable(_))));
}
