//! Route table and render-or-redirect decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed view goes through [`decide`], so all pages share identical
//! redirect behavior. The decision is a pure function of the requested path
//! and the current [`SessionState`]; the Leptos layer only renders it.
//!
//! While the session is `Loading` every path renders the placeholder. This
//! keeps protected content hidden and avoids bouncing a valid session to
//! `/login` before verification resolves.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::auth::SessionState;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
/// Authenticated landing (dashboard).
pub const COURSES_PATH: &str = "/courses";

/// Session precondition for a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    RequiresAuth,
    RequiresAnon,
}

/// Routed top-level views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Home,
    Login,
    Register,
    Courses,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub access: Access,
    pub view: View,
}

pub static ROUTES: [RouteEntry; 4] = [
    RouteEntry { path: HOME_PATH, access: Access::Public, view: View::Home },
    RouteEntry { path: LOGIN_PATH, access: Access::RequiresAnon, view: View::Login },
    RouteEntry { path: REGISTER_PATH, access: Access::RequiresAnon, view: View::Register },
    RouteEntry { path: COURSES_PATH, access: Access::RequiresAuth, view: View::Courses },
];

/// What the router should do for a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderDecision {
    Loading,
    Render(View),
    Redirect(&'static str),
    NotFound,
}

/// Look up the table entry for `path`, ignoring a trailing slash.
pub fn find_route(path: &str) -> Option<&'static RouteEntry> {
    let trimmed = path.trim_end_matches('/');
    let normalized = if trimmed.is_empty() { HOME_PATH } else { trimmed };
    ROUTES.iter().find(|entry| entry.path == normalized)
}

/// Decide whether `path` renders, redirects, or waits for the session.
pub fn decide(path: &str, state: &SessionState) -> RenderDecision {
    if state.is_loading() {
        return RenderDecision::Loading;
    }
    match find_route(path) {
        Some(entry) => evaluate(entry.access, entry.view, state),
        None => RenderDecision::NotFound,
    }
}

/// Apply the access matrix for a single route.
pub fn evaluate(access: Access, view: View, state: &SessionState) -> RenderDecision {
    match (state, access) {
        (SessionState::Loading, _) => RenderDecision::Loading,
        (SessionState::Unauthenticated, Access::RequiresAuth) => RenderDecision::Redirect(LOGIN_PATH),
        (SessionState::Authenticated(_), Access::RequiresAnon) => RenderDecision::Redirect(COURSES_PATH),
        _ => RenderDecision::Render(view),
    }
}
