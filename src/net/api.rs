//! REST calls to the identity service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: stubs returning `Unavailable` since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every non-success status, transport failure and undecodable body is mapped
//! to a typed error; nothing here panics or retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Credential, LoginResponse, Role, User};
use crate::error::{FormError, VerificationError};
#[cfg(any(test, feature = "hydrate"))]
use super::types::MessageResponse;

pub const PROFILE_PATH: &str = "/auth/profile";
pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(api_base: &str, path: &str) -> String {
    format!("{}{path}", api_base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(credential: &Credential) -> String {
    format!("Bearer {}", credential.as_str())
}

/// Pull the `message` field out of an error body, if it is JSON and has one.
#[cfg(any(test, feature = "hydrate"))]
fn service_message(body: &str) -> Option<String> {
    serde_json::from_str::<MessageResponse>(body)
        .ok()
        .and_then(|resp| resp.message)
        .filter(|message| !message.trim().is_empty())
}

/// Fetch the user identified by `credential` from `GET /auth/profile`.
///
/// # Errors
///
/// Returns a [`VerificationError`] on any transport failure, non-success
/// status or malformed body.
pub async fn fetch_profile(api_base: &str, credential: &Credential) -> Result<User, VerificationError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint(api_base, PROFILE_PATH))
            .header("Authorization", &bearer_header(credential))
            .send()
            .await
            .map_err(|e| VerificationError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(VerificationError::Rejected { status: resp.status() });
        }
        let body: super::types::ProfileResponse =
            resp.json().await.map_err(|e| VerificationError::Decode(e.to_string()))?;
        Ok(body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api_base, credential);
        Err(VerificationError::Unavailable)
    }
}

/// Exchange email and password for a token via `POST /auth/login`.
///
/// # Errors
///
/// Returns [`FormError::Rejected`] with the service's message when the
/// credentials are refused, or another [`FormError`] on transport/decoding
/// failure.
pub async fn login(api_base: &str, email: &str, password: &str) -> Result<LoginResponse, FormError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::LoginRequest { email, password };
        let resp = gloo_net::http::Request::post(&endpoint(api_base, LOGIN_PATH))
            .json(&payload)
            .map_err(|e| FormError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| FormError::Transport(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(FormError::Rejected { status, message: service_message(&body) });
        }
        resp.json::<LoginResponse>().await.map_err(|e| FormError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api_base, email, password);
        Err(FormError::Unavailable)
    }
}

/// Create an account via `POST /auth/register`.
///
/// Returns the service's confirmation message (empty if it sent none).
///
/// # Errors
///
/// Returns [`FormError::Rejected`] with the service's message when the
/// registration is refused, or another [`FormError`] on transport failure.
pub async fn register(api_base: &str, name: &str, email: &str, password: &str, role: Role) -> Result<String, FormError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::RegisterRequest { name, email, password, role };
        let resp = gloo_net::http::Request::post(&endpoint(api_base, REGISTER_PATH))
            .json(&payload)
            .map_err(|e| FormError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| FormError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if !resp.ok() {
            return Err(FormError::Rejected { status, message: service_message(&body) });
        }
        Ok(service_message(&body).unwrap_or_default())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api_base, name, email, password, role);
        Err(FormError::Unavailable)
    }
}
