//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser storage and routing policy from page and
//! component logic to improve reuse and testability.

pub mod guard;
pub mod token_store;
