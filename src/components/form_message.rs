//! Inline result banner shared by the login and register forms.

#[cfg(test)]
#[path = "form_message_test.rs"]
mod form_message_test;

use leptos::prelude::*;

use crate::error::FormError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMessage {
    Success(String),
    Failure(String),
}

impl FormMessage {
    /// Failure banner for `err`, using `fallback` when the service gave no reason.
    pub fn from_error(err: &FormError, fallback: &str) -> Self {
        Self::Failure(err.user_message(fallback))
    }

    pub fn text(&self) -> String {
        match self {
            Self::Success(message) => format!("✅ {message}"),
            Self::Failure(message) => format!("❌ {message}"),
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Self::Success(_) => "form-message form-message--success",
            Self::Failure(_) => "form-message form-message--failure",
        }
    }
}

#[component]
pub fn FormMessageBanner(message: RwSignal<Option<FormMessage>>) -> impl IntoView {
    move || {
        message.get().map(|message| {
            view! { <div class=message.class()>{message.text()}</div> }
        })
    }
}
