use leptos::prelude::*;

use crate::util::guard::HOME_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <p>"Page not found."</p>
            <a href=HOME_PATH>"Back to home"</a>
        </div>
    }
}
