//! Error types for identity service calls.
//!
//! ERROR HANDLING
//! ==============
//! `VerificationError` never escapes the session controller: every variant is
//! absorbed into an `Unauthenticated` transition. `FormError` is caught at the
//! form boundary and rendered inline; it never touches session state.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Why a stored credential could not be confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    #[error("identity service rejected the credential (status {status})")]
    Rejected { status: u16 },
    #[error("identity service unreachable: {0}")]
    Transport(String),
    #[error("malformed profile response: {0}")]
    Decode(String),
    #[error("session verification is only available in the browser")]
    Unavailable,
}

/// A login or registration request the identity service did not accept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("request rejected (status {status})")]
    Rejected { status: u16, message: Option<String> },
    #[error("identity service unreachable: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("form submission is only available in the browser")]
    Unavailable,
}

impl FormError {
    /// Text shown to the user: the service's own message when it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}
