use super::*;

#[test]
fn defaults_apply_when_unset() {
    let config = ClientConfig::from_values(None, None);
    assert_eq!(config.api_base, DEFAULT_API_BASE);
    assert_eq!(config.token_storage_key, DEFAULT_TOKEN_STORAGE_KEY);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = ClientConfig::from_values(Some("   "), Some(""));
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn api_base_trailing_slashes_are_trimmed() {
    let config = ClientConfig::from_values(Some(" https://lms.example/api// "), None);
    assert_eq!(config.api_base, "https://lms.example/api");
}

#[test]
fn api_base_of_only_slashes_uses_default() {
    let config = ClientConfig::from_values(Some("///"), None);
    assert_eq!(config.api_base, DEFAULT_API_BASE);
}

#[test]
fn token_key_override_is_used() {
    let config = ClientConfig::from_values(None, Some("lms_token"));
    assert_eq!(config.token_storage_key, "lms_token");
}
