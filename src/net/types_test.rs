use super::*;

#[test]
fn user_deserializes_with_role() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "name": "Alice",
        "email": "alice@example.com",
        "role": "admin"
    }))
    .unwrap();
    assert_eq!(user.id, "u-1");
    assert_eq!(user.email.as_deref(), Some("alice@example.com"));
    assert_eq!(user.role.as_deref(), Some("admin"));
}

#[test]
fn user_optional_fields_default_to_none() {
    let user: User = serde_json::from_str(r#"{"id":"u-2","name":"Bob"}"#).unwrap();
    assert_eq!(user.email, None);
    assert_eq!(user.role, None);
}

#[test]
fn user_rejects_missing_id() {
    let result = serde_json::from_str::<User>(r#"{"name":"Nobody"}"#);
    assert!(result.is_err());
}
