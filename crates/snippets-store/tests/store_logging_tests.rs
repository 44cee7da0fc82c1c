use snippets_core::logging_facility::test_capture::init_test_capture;
use snippets_core::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use tracing::Level;
use snippets_store::SnippetStore;

#[test]
fn test_put_logs_start_and_end_with_keyword() {
    let capture = init_test_capture();
    let mut store = SnippetStore::in_memory().unwrap();

    store.put("log-put-keyword", "body", false).unwrap();

    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some("put")
            && e.event.as_deref() == Some(EVENT_START)
            && e.keyword.as_deref() == Some("log-put-keyword")
    });
    let ends = capture.count_events(|e| {
        e.op.as_deref() == Some("put")
            && e.event.as_deref() == Some(EVENT_END)
            && e.keyword.as_deref() == Some("log-put-keyword")
    });
    assert_eq!(starts, 1);
    assert_eq!(ends, 1);
}

#[test]
fn test_rejected_put_logs_error() {
    let capture = init_test_capture();
    let mut store = SnippetStore::in_memory().unwrap();

    assert!(store.put("", "body", false).is_err());

    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("put")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.fields.get("err_code").map(String::as_str) == Some("ERR_INVALID_INPUT")
    });
    assert!(errors >= 1);
}

#[test]
fn test_get_logs_found_flag() {
    let capture = init_test_capture();
    let store = SnippetStore::in_memory().unwrap();

    assert_eq!(store.get("log-get-missing").unwrap(), None);

    let ends: Vec<_> = capture
        .find("get", EVENT_END)
        .into_iter()
        .filter(|e| e.keyword.as_deref() == Some("log-get-missing"))
        .collect();
    assert_eq!(ends.len(), 1);
    assert_eq!(ends[0].fields.get("found"), Some(&"false".to_string()));
}

#[test]
fn test_open_logs_connect() {
    let capture = init_test_capture();
    let dir = tempfile::TempDir::new().unwrap();

    let _store = SnippetStore::open(dir.path().join("snippets.db")).unwrap();

    capture.assert_event_exists("connect", EVENT_START);
    capture.assert_event_exists("connect", EVENT_END);
}

#[test]
fn test_upsert_logs_debug_detail() {
    let capture = init_test_capture();
    let mut store = SnippetStore::in_memory().unwrap();

    store.put("log-upsert-detail", "12345", false).unwrap();

    let details: Vec<_> = capture
        .events()
        .into_iter()
        .filter(|e| {
            e.level == Level::DEBUG && e.keyword.as_deref() == Some("log-upsert-detail")
        })
        .collect();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].fields.get("rows"), Some(&"1".to_string()));
    assert_eq!(details[0].fields.get("bytes"), Some(&"5".to_string()));
}
