//! Session controller: the single owner of [`SessionState`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Built once per page load, then `startup()` runs once to restore the stored
//! credential. Login and logout forms call the synchronous transitions; route
//! guards and the navigation bar observe state through `subscribe`.
//!
//! CONCURRENCY
//! ===========
//! Single UI thread. The verification request in `startup()` is the only
//! suspension point. A `login()` or `logout()` landing while it is pending is
//! allowed; whichever finishes second sets the final state.
//!
//! ERROR HANDLING
//! ==============
//! Verification failures are absorbed here: the credential is purged and the
//! state becomes `Unauthenticated`. Nothing propagates to callers.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::verifier::SessionVerifier;
use crate::net::types::{Credential, User};
use crate::state::auth::SessionState;
use crate::util::token_store::TokenStore;

type Observer = Box<dyn Fn(&SessionState)>;

/// How the one-time startup check resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartupOutcome {
    /// No stored credential; no request was made.
    NoCredential,
    /// The identity service accepted the stored credential.
    Verified,
    /// The credential was rejected or could not be checked; it was purged.
    Rejected,
    /// `startup()` had already run for this controller.
    AlreadyStarted,
}

/// Cheap-to-clone handle; clones share state, store and observers.
pub struct SessionController<S, V> {
    inner: Rc<Inner<S, V>>,
}

struct Inner<S, V> {
    store: S,
    verifier: V,
    state: RefCell<SessionState>,
    started: Cell<bool>,
    observers: RefCell<Vec<Observer>>,
}

impl<S, V> Clone for SessionController<S, V> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<S: TokenStore, V: SessionVerifier> SessionController<S, V> {
    /// Create a controller in the `Loading` state. No storage or network
    /// access happens until [`startup`](Self::startup).
    pub fn new(store: S, verifier: V) -> Self {
        Self {
            inner: Rc::new(Inner {
                store,
                verifier,
                state: RefCell::new(SessionState::Loading),
                started: Cell::new(false),
                observers: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn current_state(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    /// Register `observer` to be called after every state change.
    ///
    /// Observers must not call `subscribe` themselves.
    pub fn subscribe(&self, observer: impl Fn(&SessionState) + 'static) {
        self.inner.observers.borrow_mut().push(Box::new(observer));
    }

    /// Restore the stored session. Only the first call does any work.
    pub async fn startup(&self) -> StartupOutcome {
        if self.inner.started.replace(true) {
            log::warn!("session startup already ran; ignoring");
            return StartupOutcome::AlreadyStarted;
        }

        let Some(credential) = self.inner.store.read() else {
            log::info!("no stored credential");
            self.transition(SessionState::Unauthenticated);
            return StartupOutcome::NoCredential;
        };

        match self.inner.verifier.verify(&credential).await {
            Ok(user) => {
                log::info!("stored session verified");
                self.transition(SessionState::Authenticated(user));
                StartupOutcome::Verified
            }
            Err(err) => {
                log::warn!("stored session rejected: {err}");
                self.inner.store.clear();
                self.transition(SessionState::Unauthenticated);
                StartupOutcome::Rejected
            }
        }
    }

    /// Adopt a user and credential the identity service just issued.
    pub fn login(&self, user: User, credential: Credential) {
        self.inner.store.write(&credential);
        self.transition(SessionState::Authenticated(user));
    }

    /// Forget the session. Safe to call in any state, any number of times.
    pub fn logout(&self) {
        self.inner.store.clear();
        self.transition(SessionState::Unauthenticated);
    }

    fn transition(&self, next: SessionState) {
        {
            let mut state = self.inner.state.borrow_mut();
            if *state == next {
                return;
            }
            log::debug!("session {} -> {}", state.label(), next.label());
            *state = next.clone();
        }
        for observer in self.inner.observers.borrow().iter() {
            observer(&next);
        }
    }
}
