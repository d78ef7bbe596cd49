use tempfile::TempDir;
use userdb_core::logging_facility::test_capture::init_test_capture;
use userdb_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ERR_CODE};
use userdb_store::UserStore;

#[test]
fn test_operations_emit_start_and_end() {
    let capture = init_test_capture();
    let dir = TempDir::new().unwrap();
    let store = UserStore::open(dir.path().join("users.db")).unwrap();

    store.create("Alice Smith", "alice@example.com").unwrap();

    capture.assert_event_exists("create_user", EVENT_START);
    capture.assert_event_exists("create_user", EVENT_END);
}

#[test]
fn test_failed_operation_emits_end_error_with_code() {
    let capture = init_test_capture();
    let dir = TempDir::new().unwrap();
    let store = UserStore::open(dir.path().join("users.db")).unwrap();

    // delete_user on an empty table is the only failing op in this binary
    store.delete(77).unwrap_err();

    let errors: Vec<_> = capture
        .events_for_op("delete_user")
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();
    assert!(!errors.is_empty());
    assert!(errors
        .iter()
        .all(|e| e.fields.get(FIELD_ERR_CODE) == Some(&"ERR_NOT_FOUND".to_string())));
}
