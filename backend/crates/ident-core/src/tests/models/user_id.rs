use crate::{CoreError, UserId};

#[test]
fn test_user_id_parse_round_trips_display() {
    let id = UserId::new();

    let parsed = UserId::parse(&id.to_string()).unwrap();

    assert_eq!(parsed, id);
}

#[test]
fn test_user_id_parse_rejects_garbage() {
    let result = UserId::parse("not-a-uuid");

    match result {
        Err(CoreError::InvalidUserId { value, .. }) => assert_eq!(value, "not-a-uuid"),
        other => panic!("Expected InvalidUserId, got {other:?}"),
    }
}

#[test]
fn test_user_id_serializes_as_plain_string() {
    let id = UserId::new();

    let json = serde_json::to_value(id).unwrap();

    assert_eq!(json, serde_json::Value::String(id.to_string()));
}
