//! Login page: email + password against the identity service.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the issued user and token go straight to the session controller
//! (no re-verification). The route guard then sees an authenticated session on
//! `/login` and redirects to the dashboard. Failures stay inline and leave
//! session state untouched.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::form_message::{FormMessage, FormMessageBanner};
use crate::util::guard::REGISTER_PATH;

pub const LOGIN_FALLBACK: &str = "Login failed";

/// Trim the email and require both fields.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(None::<FormMessage>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let session = expect_context::<crate::app::SessionHandle>();
    #[cfg(feature = "hydrate")]
    let api_base = expect_context::<crate::config::ClientConfig>().api_base;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(reason) => {
                message.set(Some(FormMessage::Failure(reason.to_owned())));
                return;
            }
        };
        busy.set(true);
        message.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api_base = api_base.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&api_base, &email_value, &password_value).await {
                    Ok(resp) => match crate::net::types::Credential::new(resp.token) {
                        Some(credential) => session.login(resp.user, credential),
                        None => {
                            log::warn!("login response carried an empty token");
                            message.set(Some(FormMessage::Failure(LOGIN_FALLBACK.to_owned())));
                            busy.set(false);
                        }
                    },
                    Err(err) => {
                        log::info!("login rejected: {err}");
                        message.set(Some(FormMessage::from_error(&err, LOGIN_FALLBACK)));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Login"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">"Email"</label>
                    <input
                        class="auth-input"
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="auth-label">"Password"</label>
                    <input
                        class="auth-input"
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                    <FormMessageBanner message=message/>
                </form>
                <p class="auth-card__switch">
                    "No account yet? "
                    <a href=REGISTER_PATH>"Register"</a>
                </p>
            </div>
        </div>
    }
}
