//! Networking modules for the identity service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the profile, login and register requests; `types` defines the
//! wire schema shared by those calls and the session layer.

pub mod api;
pub mod types;
