use super::*;

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("http://localhost:5000/api", PROFILE_PATH), "http://localhost:5000/api/auth/profile");
    assert_eq!(endpoint("http://localhost:5000/api/", LOGIN_PATH), "http://localhost:5000/api/auth/login");
}

#[test]
fn bearer_header_formats_token() {
    let credential = Credential::new("abc.def").unwrap();
    assert_eq!(bearer_header(&credential), "Bearer abc.def");
}

#[test]
fn service_message_reads_message_field() {
    assert_eq!(service_message(r#"{"message":"User already exists"}"#), Some("User already exists".to_owned()));
}

#[test]
fn service_message_ignores_non_json_and_missing_field() {
    assert_eq!(service_message("Internal Server Error"), None);
    assert_eq!(service_message(r#"{"error":"nope"}"#), None);
    assert_eq!(service_message(r#"{"message":"  "}"#), None);
    assert_eq!(service_message(""), None);
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn native_build_reports_unavailable() {
    let credential = Credential::new("tok").unwrap();
    assert_eq!(fetch_profile("http://x", &credential).await, Err(VerificationError::Unavailable));
    assert_eq!(login("http://x", "a@b.c", "pw").await, Err(FormError::Unavailable));
    assert_eq!(register("http://x", "A", "a@b.c", "pw", Role::Student).await, Err(FormError::Unavailable));
}
