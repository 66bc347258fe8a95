//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Access control is applied before a page renders, by
//! `components::route_guard`.

pub mod courses;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;
