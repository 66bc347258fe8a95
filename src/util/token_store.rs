//! Persistent slot holding the single bearer credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser store wraps `localStorage`; SSR and native builds get a no-op
//! so server rendering stays deterministic. `MemoryTokenStore` backs tests and
//! any non-browser host.
//!
//! Absence is not an error: unreadable storage and blank values both read as
//! `None`.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::net::types::Credential;

/// Synchronous key-value access to the stored credential.
pub trait TokenStore {
    fn read(&self) -> Option<Credential>;
    fn write(&self, credential: &Credential);
    fn clear(&self);
}

/// Credential slot in browser `localStorage`.
#[derive(Clone, Debug)]
pub struct LocalStorageTokenStore {
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokenStore {
    fn read(&self) -> Option<Credential> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(&self.key).ok().flatten()?;
            Credential::new(raw)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn write(&self, credential: &Credential) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; session will not survive reload");
                return;
            };
            let _ = storage.set_item(&self.key, credential.as_str());
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credential;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(&self.key);
            }
        }
    }
}

/// In-process credential slot. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `raw`, as if left over from a previous load.
    pub fn with_token(raw: &str) -> Self {
        let store = Self::new();
        *store.slot.borrow_mut() = Some(raw.to_owned());
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn read(&self) -> Option<Credential> {
        self.slot.borrow().clone().and_then(Credential::new)
    }

    fn write(&self, credential: &Credential) {
        *self.slot.borrow_mut() = Some(credential.as_str().to_owned());
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}
