//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the session controller and mirrored into a Leptos signal. Route
//! guards and the navigation bar read it; nothing else writes it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Whether auth status is still being determined, established, or absent.
///
/// Leaves `Loading` at most once per page load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Loading,
    Authenticated(User),
    Unauthenticated,
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Loading | Self::Unauthenticated => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Short tag for log lines; never includes user details.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Authenticated(_) => "authenticated",
            Self::Unauthenticated => "unauthenticated",
        }
    }
}
