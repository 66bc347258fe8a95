//! Authenticated landing: the role-specific dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only reachable once the guard has seen an authenticated session. The
//! student/teacher split is a pure function of `User::role`.

#[cfg(test)]
#[path = "courses_test.rs"]
mod courses_test;

use leptos::prelude::*;

use crate::components::card::{CardSpec, StatCard};
use crate::net::types::{Role, User};
use crate::state::auth::SessionState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardView {
    Student,
    Teacher,
}

pub fn dashboard_view(role: Role) -> DashboardView {
    match role {
        Role::Teacher => DashboardView::Teacher,
        Role::Student => DashboardView::Student,
    }
}

static TEACHER_CARDS: [CardSpec; 3] = [
    CardSpec { title: "My Courses", count: "0", link: "/teacher/courses" },
    CardSpec { title: "Total Students", count: "12", link: "#" },
    CardSpec { title: "Assignments", count: "5", link: "/teacher/assignments" },
];

static STUDENT_CARDS: [CardSpec; 3] = [
    CardSpec { title: "Enrolled Courses", count: "3", link: "/student/courses" },
    CardSpec { title: "Pending Assignments", count: "2", link: "/student/assignments" },
    CardSpec { title: "Average Grade", count: "92%", link: "/student/grades" },
];

pub fn dashboard_cards(view: DashboardView) -> &'static [CardSpec] {
    match view {
        DashboardView::Teacher => &TEACHER_CARDS,
        DashboardView::Student => &STUDENT_CARDS,
    }
}

pub fn welcome_heading(user: &User) -> String {
    format!("Welcome back, {}!", user.name)
}

#[component]
pub fn CoursesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    move || session.get().user().cloned().map(|user| view! { <Dashboard user=user/> })
}

#[component]
fn Dashboard(user: User) -> impl IntoView {
    let variant = dashboard_view(user.role);
    let cards = dashboard_cards(variant);
    let grid_class = match variant {
        DashboardView::Teacher => "dashboard__grid dashboard__grid--teacher",
        DashboardView::Student => "dashboard__grid dashboard__grid--student",
    };

    view! {
        <div class="dashboard">
            <div class="dashboard__header">
                <h1>{welcome_heading(&user)}</h1>
                <p>"Role: " <span class="dashboard__role">{user.role.as_str()}</span></p>
            </div>
            <div class=grid_class>
                {cards.iter().map(|spec| view! { <StatCard spec=*spec/> }).collect_view()}
            </div>
        </div>
    }
}
