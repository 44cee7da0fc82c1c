#![allow(clippy::unwrap_used, clippy::expect_used)]

use snippets_core::errors::{ExError, ExErrorKind, SnippetError};
use snippets_core::logging_facility::test_capture::init_test_capture;
use snippets_core::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use snippets_core::{log_op_end, log_op_error, log_op_start};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, keyword = "alpha");

    let start_events = capture.find(op_name, EVENT_START);
    assert_eq!(start_events.len(), 1, "Should have exactly one start event");
    assert_eq!(start_events[0].keyword.as_deref(), Some("alpha"));
    assert!(start_events[0].component.is_some());
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events = capture.find(op_name, EVENT_END);
    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(
        end_events[0].fields.get("duration_ms"),
        Some(&"42".to_string())
    );
}

#[test]
fn test_log_op_error_includes_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    log_op_error!(op_name, SnippetError::EmptyKeyword, duration_ms = 10);

    let error_events = capture.find(op_name, EVENT_END_ERROR);
    assert_eq!(error_events.len(), 1);
    assert_eq!(error_events[0].level, tracing::Level::ERROR);
    assert_eq!(
        error_events[0].fields.get("err_code"),
        Some(&"ERR_INVALID_INPUT".to_string())
    );
    assert_eq!(
        error_events[0].fields.get("err_kind"),
        Some(&"InvalidInput".to_string())
    );
}

#[test]
fn test_log_op_error_accepts_ex_error() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_4";

    let err = ExError::new(ExErrorKind::Concurrency).with_message("database is locked");
    log_op_error!(op_name, err.clone(), duration_ms = 1, keyword = "beta");

    capture.assert_event_exists(op_name, EVENT_END_ERROR);
    let count = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.keyword.as_deref() == Some("beta")
    });
    assert_eq!(count, 1);
    assert_eq!(err.code(), "ERR_CONCURRENCY");
}
