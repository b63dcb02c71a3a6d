//! REST gateway for the Nonito's Food auth endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`AuthError::Unavailable`] since these
//! endpoints are only reachable from the browser bundle.
//!
//! ERROR HANDLING
//! ==============
//! Every response goes through [`decode_envelope`], so callers see either the
//! unwrapped `data` payload or an [`AuthError`] carrying the server's message.
//! Nothing here retries; the caller decides.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::error::AuthError;
use super::types::{ApiEnvelope, CredentialBundle, LoginRequest, RegisterRequest};
use crate::config::ApiConfig;

const LOGIN_PATH: &str = "auth/login";
const REGISTER_PATH: &str = "auth/register";
const REFRESH_PATH: &str = "auth/refresh";
const VERIFY_EMAIL_PATH: &str = "auth/verify-email";

/// Remote auth operations consumed by the session context.
///
/// Futures are `?Send`: browser HTTP handles live on the single UI thread.
#[async_trait(?Send)]
pub trait AuthGateway: Send + Sync {
    /// Exchange email + password for a credential bundle.
    async fn login(&self, request: &LoginRequest) -> Result<CredentialBundle, AuthError>;

    /// Create an account and receive its first credential bundle.
    async fn register(&self, request: &RegisterRequest) -> Result<CredentialBundle, AuthError>;

    /// Trade a refresh token for a new access token.
    async fn refresh_access_token(&self, refresh_token: &str) -> Result<String, AuthError>;

    /// Confirm an email address with the token from the verification mail.
    async fn verify_email(&self, token: &str) -> Result<(), AuthError>;
}

/// [`AuthGateway`] backed by the real API.
#[derive(Debug, Clone, Default)]
pub struct HttpAuthGateway {
    config: ApiConfig,
}

impl HttpAuthGateway {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    #[cfg(feature = "csr")]
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, AuthError>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        let resp = gloo_net::http::Request::post(&url)
            .json(body)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| AuthError::Network(e.to_string()))?;
        decode_envelope(status, &text)
    }
}

#[async_trait(?Send)]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, request: &LoginRequest) -> Result<CredentialBundle, AuthError> {
        #[cfg(feature = "csr")]
        {
            self.post_json(LOGIN_PATH, request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, LOGIN_PATH);
            Err(AuthError::Unavailable)
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<CredentialBundle, AuthError> {
        #[cfg(feature = "csr")]
        {
            self.post_json(REGISTER_PATH, request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, REGISTER_PATH);
            Err(AuthError::Unavailable)
        }
    }

    async fn refresh_access_token(&self, refresh_token: &str) -> Result<String, AuthError> {
        #[cfg(feature = "csr")]
        {
            let body = super::types::RefreshRequest { refresh_token: refresh_token.to_owned() };
            let data: super::types::RefreshResponse = self.post_json(REFRESH_PATH, &body).await?;
            Ok(data.access_token)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (refresh_token, REFRESH_PATH);
            Err(AuthError::Unavailable)
        }
    }

    async fn verify_email(&self, token: &str) -> Result<(), AuthError> {
        #[cfg(feature = "csr")]
        {
            let url = self.config.endpoint(VERIFY_EMAIL_PATH);
            let resp = gloo_net::http::Request::post(&url)
                .query([("token", token)])
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| AuthError::Network(e.to_string()))?;
            decode_envelope::<String>(status, &text).map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, VERIFY_EMAIL_PATH);
            Err(AuthError::Unavailable)
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Unwrap an API envelope, classifying failures.
///
/// # Errors
///
/// - non-2xx: [`AuthError::Rejected`] when the body carries a message,
///   otherwise [`AuthError::Status`].
/// - 2xx with `success: false`: same rule, using the envelope message.
/// - undecodable body or missing `data`: [`AuthError::Decode`].
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, AuthError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.message);
        return Err(rejection(status, message));
    }
    let envelope: ApiEnvelope<T> = serde_json::from_str(body).map_err(|e| AuthError::Decode(e.to_string()))?;
    if !envelope.success {
        return Err(rejection(status, Some(envelope.message)));
    }
    envelope
        .data
        .ok_or_else(|| AuthError::Decode("response carried no data".to_owned()))
}

fn rejection(status: u16, message: Option<String>) -> AuthError {
    match message {
        Some(message) if !message.trim().is_empty() => AuthError::Rejected { status, message },
        _ => AuthError::Status(status),
    }
}

/// `Authorization` header value for an access token.
#[must_use]
pub fn bearer_header(access_token: &str) -> String {
    format!("Bearer {access_token}")
}
