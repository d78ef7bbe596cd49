#![allow(clippy::unwrap_used, clippy::expect_used)]

use userdb_core::errors::{ExError, ExErrorKind, UserDbError};
use userdb_core::logging_facility::test_capture::init_test_capture;
use userdb_core::{log_op_end, log_op_error, log_op_start};
use userdb_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};

#[test]
fn test_log_op_start_records_extra_fields() {
    let capture = init_test_capture();
    let op_name = "logging_test_start_1";

    log_op_start!(op_name, user_id = 12);

    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START)
    });
    assert_eq!(starts, 1);

    let event = &capture.events_for_op(op_name)[0];
    assert_eq!(event.fields.get("user_id"), Some(&"12".to_string()));
}

#[test]
fn test_log_op_end_records_duration() {
    let capture = init_test_capture();
    let op_name = "logging_test_end_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].fields.get("duration_ms"), Some(&"42".to_string()));
}

#[test]
fn test_log_op_error_includes_stable_code() {
    let capture = init_test_capture();
    let op_name = "logging_test_error_3";

    let err = UserDbError::DuplicateEmail {
        email: "alice@example.com".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 5);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(
        events[0].fields.get("err.code"),
        Some(&"ERR_DUPLICATE_EMAIL".to_string())
    );
}

#[test]
fn test_log_op_error_accepts_ex_error() {
    let capture = init_test_capture();
    let op_name = "logging_test_error_4";

    let err = ExError::new(ExErrorKind::Persistence).with_message("disk full");
    log_op_error!(op_name, err, duration_ms = 1, request_id = "req-4");

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].request_id.as_deref(), Some("req-4"));
    assert_eq!(
        events[0].fields.get("err.kind"),
        Some(&"Persistence".to_string())
    );
}

#[test]
fn test_single_start_and_end_per_operation() {
    let capture = init_test_capture();
    let op_name = "logging_test_boundary_5";

    log_op_start!(op_name);
    log_op_end!(op_name, duration_ms = 0, row_count = 3);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_START));
    assert_eq!(events[1].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[1].fields.get("row_count"), Some(&"3".to_string()));
}
