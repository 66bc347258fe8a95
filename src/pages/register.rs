//! Registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Registration only creates the account; it never touches session state. On
//! success the confirmation is shown briefly before moving to `/login`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::components::form_message::{FormMessage, FormMessageBanner};
use crate::net::types::Role;
use crate::util::guard::LOGIN_PATH;

pub const REGISTER_FALLBACK: &str = "Registration failed";
pub const REGISTER_SUCCESS_FALLBACK: &str = "Registration successful";
/// Delay between the success banner and the move to `/login`.
pub const REDIRECT_DELAY_MS: u32 = 1_500;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Trim name and email and require every field.
pub fn validate_registration(name: &str, email: &str, password: &str, role: Role) -> Result<Registration, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in name, email and password.");
    }
    Ok(Registration { name: name.to_owned(), email: email.to_owned(), password: password.to_owned(), role })
}

/// Success banner text; the service's own confirmation when it sent one.
pub fn success_message(service_message: &str) -> FormMessage {
    let trimmed = service_message.trim();
    let text = if trimmed.is_empty() { REGISTER_SUCCESS_FALLBACK } else { trimmed };
    FormMessage::Success(text.to_owned())
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Student);
    let message = RwSignal::new(None::<FormMessage>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let api_base = expect_context::<crate::config::ClientConfig>().api_base;
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let registration = match validate_registration(&name.get(), &email.get(), &password.get(), role.get()) {
            Ok(registration) => registration,
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
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let Registration { name, email, password, role } = registration;
                match crate::net::api::register(&api_base, &name, &email, &password, role).await {
                    Ok(confirmation) => {
                        message.set(Some(success_message(&confirmation)));
                        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(REDIRECT_DELAY_MS)))
                            .await;
                        navigate(LOGIN_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        log::info!("registration rejected: {err}");
                        message.set(Some(FormMessage::from_error(&err, REGISTER_FALLBACK)));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = registration;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Register"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">"Name"</label>
                    <input
                        class="auth-input"
                        type="text"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                    <label class="auth-label">"Role"</label>
                    <select
                        class="auth-input"
                        prop:value=move || role.get().as_str()
                        on:change=move |ev| role.set(Role::parse(&event_target_value(&ev)))
                    >
                        <option value="student">"Student"</option>
                        <option value="teacher">"Teacher"</option>
                    </select>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                    <FormMessageBanner message=message/>
                </form>
                <p class="auth-card__switch">
                    "Already registered? "
                    <a href=LOGIN_PATH>"Login"</a>
                </p>
            </div>
        </div>
    }
}
