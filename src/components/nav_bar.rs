//! Top navigation bar with identity and session affordances.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads session state from context; shows nothing while the session is
//! loading so a valid login never flashes Login/Register links.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::app::SessionHandle;
use crate::state::auth::SessionState;
use crate::util::guard::{COURSES_PATH, HOME_PATH, LOGIN_PATH, REGISTER_PATH};

/// What the right side of the bar shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavItems {
    Hidden,
    Anonymous,
    SignedIn { label: String },
}

pub fn nav_items(state: &SessionState) -> NavItems {
    match state {
        SessionState::Loading => NavItems::Hidden,
        SessionState::Unauthenticated => NavItems::Anonymous,
        SessionState::Authenticated(user) => NavItems::SignedIn { label: format!("{} ({})", user.name, user.role) },
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let handle = expect_context::<SessionHandle>();
    let items = Memo::new(move |_| nav_items(&session.get()));

    let on_logout = move |_| handle.logout();

    view! {
        <nav class="nav-bar">
            <a href=HOME_PATH class="nav-bar__brand">"LMS Hackathon"</a>
            <div class="nav-bar__actions">
                {move || match items.get() {
                    NavItems::Hidden => ().into_any(),
                    NavItems::Anonymous => view! {
                        <a href=LOGIN_PATH class="nav-bar__button nav-bar__button--login">"Login"</a>
                        <a href=REGISTER_PATH class="nav-bar__button">"Register"</a>
                    }
                    .into_any(),
                    NavItems::SignedIn { label } => view! {
                        <span class="nav-bar__identity">{label}</span>
                        <a href=COURSES_PATH class="nav-bar__button">"Dashboard"</a>
                        <button class="nav-bar__logout" on:click=on_logout>"Logout"</button>
                    }
                    .into_any(),
                }}
            </div>
        </nav>
    }
}
