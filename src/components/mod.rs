//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render navigation chrome, cards and form feedback while reading
//! session state from Leptos context providers.

pub mod card;
pub mod form_message;
pub mod loading;
pub mod nav_bar;
pub mod route_guard;
