//! Public landing page.

use leptos::prelude::*;

use crate::components::card::FeatureCard;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Welcome to LMS Hackathon"</h1>
            <p class="home-page__lead">
                "Complete Learning Management System with Student/Teacher dashboards, courses, assignments, and grading."
            </p>
            <div class="home-page__features">
                <FeatureCard title="Courses" desc="Browse and enroll in courses"/>
                <FeatureCard title="Assignments" desc="Submit and review assignments"/>
                <FeatureCard title="Grading" desc="Track your performance"/>
            </div>
        </div>
    }
}
