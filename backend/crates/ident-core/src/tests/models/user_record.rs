use crate::{DEFAULT_ROLE, PublicUserView, UserId, UserRecord, UserUpdate};

use chrono::Utc;

fn stored_record() -> UserRecord {
    let now = Utc::now();
    UserRecord {
        id: UserId::new(),
        user_name: "ana".to_string(),
        email: "a@x.com".to_string(),
        password_hash: "$2b$12$abcdefghijklmnopqrstuu".to_string(),
        role: DEFAULT_ROLE.to_string(),
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_public_view_strips_hash_and_role() {
    let record = stored_record();

    let view = PublicUserView::from(record.clone());
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["user_name"], "ana");
    assert_eq!(json["email"], "a@x.com");
    assert_eq!(json["id"], record.id.to_string());
    assert!(json.get("password_hash").is_none());
    assert!(json.get("password").is_none());
    assert!(json.get("role").is_none());
}

#[test]
fn test_identity_claim_matches_record() {
    let record = stored_record();

    let claim = record.identity_claim();

    assert_eq!(claim.id, record.id);
    assert_eq!(claim.user_name, record.user_name);
    assert_eq!(claim.email, record.email);
}

#[test]
fn test_into_public_view_keeps_identity() {
    let record = stored_record();
    let id = record.id;

    let view: PublicUserView = record.into();

    assert_eq!(view.id, id);
}

#[test]
fn test_user_update_ignores_id_and_role_fields() {
    let update: UserUpdate = serde_json::from_str(
        r#"{"email": "new@x.com", "id": "00000000-0000-0000-0000-000000000001", "role": "admin"}"#,
    )
    .unwrap();

    assert_eq!(update.email.as_deref(), Some("new@x.com"));
    assert!(update.user_name.is_none());
    assert!(update.password.is_none());
}
