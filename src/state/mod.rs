//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components depend on small focused models.
//! Only session state exists today.

pub mod auth;
