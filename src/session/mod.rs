//! Session lifecycle: credential verification and the controller that owns
//! authentication state.

pub mod controller;
pub mod verifier;

pub use controller::{SessionController, StartupOutcome};
pub use verifier::{HttpSessionVerifier, SessionVerifier};

use crate::util::token_store::LocalStorageTokenStore;

/// The controller wired to browser storage and the identity service.
pub type BrowserSession = SessionController<LocalStorageTokenStore, HttpSessionVerifier>;
