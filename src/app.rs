//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser `App` builds the one session controller for this page load,
//! mirrors its state into a signal, and runs the startup check exactly once.
//! Server renders get a detached handle and stay `Loading`: the controller is
//! `Rc`-based and must not outlive the thread that rendered it. Routes render
//! through `Guarded`, which consults the route table.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::route_guard::Guarded;
use crate::config::ClientConfig;
use crate::net::types::{Credential, User};
use crate::session::BrowserSession;
#[cfg(feature = "hydrate")]
use crate::session::{HttpSessionVerifier, SessionController};
use crate::state::auth::SessionState;
#[cfg(feature = "hydrate")]
use crate::util::token_store::LocalStorageTokenStore;

/// Context handle through which forms and the nav bar drive session
/// transitions.
///
/// A detached handle (server renders) holds no controller and ignores
/// `login`/`logout`.
#[derive(Clone, Copy)]
pub struct SessionHandle(Option<StoredValue<BrowserSession, LocalStorage>>);

impl SessionHandle {
    #[cfg(feature = "hydrate")]
    fn attached(controller: BrowserSession) -> Self {
        Self(Some(StoredValue::new_local(controller)))
    }

    pub fn detached() -> Self {
        Self(None)
    }

    pub fn login(&self, user: User, credential: Credential) {
        if let Some(stored) = self.0 {
            stored.with_value(|controller| controller.login(user, credential));
        }
    }

    pub fn logout(&self) {
        if let Some(stored) = self.0 {
            stored.with_value(BrowserSession::logout);
        }
    }
}

/// Build the session handle for this render and wire it to `session`.
///
/// In the browser this creates the controller, mirrors its transitions into
/// `session`, and spawns the one-time startup check. Everywhere else the
/// handle is detached and `session` stays `Loading`, since the server never
/// sees the browser's stored token.
#[cfg(feature = "hydrate")]
pub fn session_handle(session: RwSignal<SessionState>, config: &ClientConfig) -> SessionHandle {
    let controller: BrowserSession = SessionController::new(
        LocalStorageTokenStore::new(config.token_storage_key.clone()),
        HttpSessionVerifier::new(config.api_base.clone()),
    );
    controller.subscribe(move |next| session.set(next.clone()));

    let handle = SessionHandle::attached(controller.clone());
    leptos::task::spawn_local(async move {
        let outcome = controller.startup().await;
        log::debug!("session startup finished: {outcome:?}");
    });
    handle
}

#[cfg(not(feature = "hydrate"))]
pub fn session_handle(_session: RwSignal<SessionState>, _config: &ClientConfig) -> SessionHandle {
    SessionHandle::detached()
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::load();
    let session = RwSignal::new(SessionState::Loading);
    let handle = session_handle(session, &config);

    provide_context(session);
    provide_context(config);
    provide_context(handle);

    view! {
        <Stylesheet id="leptos" href="/pkg/lms-client.css"/>
        <Title text="LMS Hackathon"/>

        <Router>
            <NavBar/>
            <main>
                <Routes fallback=|| view! { <Guarded/> }>
                    <Route path=StaticSegment("") view=Guarded/>
                    <Route path=StaticSegment("login") view=Guarded/>
                    <Route path=StaticSegment("register") view=Guarded/>
                    <Route path=StaticSegment("courses") view=Guarded/>
                </Routes>
            </main>
        </Router>
    }
}
