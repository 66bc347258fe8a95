//! Static content cards for the landing page and dashboards.

use leptos::prelude::*;

/// A dashboard tile: title, headline figure and target link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardSpec {
    pub title: &'static str,
    pub count: &'static str,
    pub link: &'static str,
}

#[component]
pub fn StatCard(spec: CardSpec) -> impl IntoView {
    view! {
        <a href=spec.link class="stat-card">
            <div class="stat-card__count">{spec.count}</div>
            <h3 class="stat-card__title">{spec.title}</h3>
        </a>
    }
}

#[component]
pub fn FeatureCard(title: &'static str, desc: &'static str) -> impl IntoView {
    view! {
        <div class="feature-card">
            <h3 class="feature-card__title">{title}</h3>
            <p class="feature-card__desc">{desc}</p>
        </div>
    }
}
