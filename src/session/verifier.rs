//! One-shot confirmation that a stored credential still names a user.

use std::future::Future;

use crate::error::VerificationError;
use crate::net::api;
use crate::net::types::{Credential, User};

/// Resolves a credential to its user with exactly one request and no retry.
pub trait SessionVerifier {
    fn verify(&self, credential: &Credential) -> impl Future<Output = Result<User, VerificationError>>;
}

/// Verifier backed by `GET /auth/profile` on the identity service.
#[derive(Clone, Debug)]
pub struct HttpSessionVerifier {
    api_base: String,
}

impl HttpSessionVerifier {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self { api_base: api_base.into() }
    }
}

impl SessionVerifier for HttpSessionVerifier {
    async fn verify(&self, credential: &Credential) -> Result<User, VerificationError> {
        api::fetch_profile(&self.api_base, credential).await
    }
}
