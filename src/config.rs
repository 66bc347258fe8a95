//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity service base URL and the storage slot name are baked in at
//! compile time so static deployments need no runtime lookup. Values are
//! public; nothing secret belongs here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";

/// Endpoints and storage names used by the session layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Identity service base URL without a trailing slash.
    pub api_base: String,
    /// `localStorage` key holding the raw bearer token.
    pub token_storage_key: String,
}

impl ClientConfig {
    /// Build config from the `LMS_API_BASE` and `LMS_TOKEN_KEY` build-time variables.
    pub fn load() -> Self {
        Self::from_values(option_env!("LMS_API_BASE"), option_env!("LMS_TOKEN_KEY"))
    }

    fn from_values(api_base: Option<&str>, token_storage_key: Option<&str>) -> Self {
        let api_base = normalize(api_base)
            .map(|base| base.trim_end_matches('/').to_owned())
            .filter(|base| !base.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_owned());
        let token_storage_key =
            normalize(token_storage_key).unwrap_or_else(|| DEFAULT_TOKEN_STORAGE_KEY.to_owned());
        Self { api_base, token_storage_key }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
