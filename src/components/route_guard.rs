//! Router outlet that applies the route table to the current location.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every `<Route>` (and the fallback) renders through `Guarded`, so redirect
//! policy lives in one place: `util::guard::decide`.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::components::loading::LoadingPlaceholder;
use crate::pages::courses::CoursesPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::register::RegisterPage;
use crate::state::auth::SessionState;
use crate::util::guard::{RenderDecision, View, decide};

#[component]
pub fn Guarded() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let decision = Memo::new(move |_| decide(&location.pathname.get(), &session.get()));

    move || match decision.get() {
        RenderDecision::Loading => view! { <LoadingPlaceholder/> }.into_any(),
        RenderDecision::Render(target) => render_view(target),
        RenderDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
        RenderDecision::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}

fn render_view(target: View) -> AnyView {
    match target {
        View::Home => view! { <HomePage/> }.into_any(),
        View::Login => view! { <LoginPage/> }.into_any(),
        View::Register => view! { <RegisterPage/> }.into_any(),
        View::Courses => view! { <CoursesPage/> }.into_any(),
    }
}
