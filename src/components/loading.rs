use leptos::prelude::*;

/// Shown for every route until the startup session check resolves.
#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! { <div class="loading-placeholder">"Loading..."</div> }
}
