use super::*;

#[test]
fn success_text_has_check_prefix() {
    let message = FormMessage::Success("User registered".to_owned());
    assert_eq!(message.text(), "✅ User registered");
    assert!(message.class().ends_with("--success"));
}

#[test]
fn failure_from_rejection_uses_service_message() {
    let err = FormError::Rejected { status: 400, message: Some("Email taken".to_owned()) };
    let message = FormMessage::from_error(&err, "Registration failed");
    assert_eq!(message.text(), "❌ Email taken");
    assert!(message.class().ends_with("--failure"));
}

#[test]
fn failure_from_transport_error_uses_fallback() {
    let err = FormError::Transport("offline".to_owned());
    assert_eq!(FormMessage::from_error(&err, "Login failed").text(), "❌ Login failed");
}
