use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_parse_teacher_is_case_insensitive() {
    assert_eq!(Role::parse("teacher"), Role::Teacher);
    assert_eq!(Role::parse(" Teacher "), Role::Teacher);
}

#[test]
fn role_parse_unknown_defaults_to_student() {
    assert_eq!(Role::parse("student"), Role::Student);
    assert_eq!(Role::parse("admin"), Role::Student);
    assert_eq!(Role::parse(""), Role::Student);
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Role::Teacher).unwrap(), serde_json::json!("teacher"));
    assert_eq!(Role::Student.to_string(), "student");
}

// =============================================================
// User decoding
// =============================================================

#[test]
fn user_decodes_string_id() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "name": "Ada",
        "email": "ada@example.com",
        "role": "teacher"
    }))
    .unwrap();
    assert_eq!(user.id, "u-1");
    assert_eq!(user.role, Role::Teacher);
}

#[test]
fn user_decodes_numeric_id_and_mongo_alias() {
    let numeric: User = serde_json::from_value(serde_json::json!({
        "id": 42, "name": "Ada", "email": "a@b.c", "role": "student"
    }))
    .unwrap();
    assert_eq!(numeric.id, "42");

    let aliased: User = serde_json::from_value(serde_json::json!({
        "_id": "64f0c2", "name": "Ada", "email": "a@b.c", "role": "student"
    }))
    .unwrap();
    assert_eq!(aliased.id, "64f0c2");
}

#[test]
fn user_rejects_object_id() {
    let result = serde_json::from_value::<User>(serde_json::json!({
        "id": {"oid": 1}, "name": "Ada", "email": "a@b.c", "role": "student"
    }));
    assert!(result.is_err());
}

#[test]
fn login_response_decodes_token_and_user() {
    let body = r#"{"token":"abc","user":{"id":"u","name":"N","email":"e@x","role":"student"}}"#;
    let resp: LoginResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.token, "abc");
    assert_eq!(resp.user.name, "N");
}

#[test]
fn register_request_serializes_role_lowercase() {
    let req = RegisterRequest { name: "N", email: "e@x", password: "pw", role: Role::Teacher };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({"name": "N", "email": "e@x", "password": "pw", "role": "teacher"})
    );
}

// =============================================================
// Credential
// =============================================================

#[test]
fn credential_rejects_blank_tokens() {
    assert!(Credential::new("").is_none());
    assert!(Credential::new("   ").is_none());
    assert_eq!(Credential::new("tok").unwrap().as_str(), "tok");
}

#[test]
fn credential_debug_is_redacted() {
    let credential = Credential::new("super-secret").unwrap();
    assert!(!format!("{credential:?}").contains("super-secret"));
}
