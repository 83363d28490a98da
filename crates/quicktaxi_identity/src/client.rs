//! Identity service client module
//!
//! This module provides a client for the hosted identity service's
//! password sign-in endpoint (Identity Toolkit style REST API). The
//! engine only ever verifies credentials; account management, token
//! refresh and password policies all stay with the provider.

use quicktaxi_common::models::UserProfile;
use quicktaxi_common::HTTP_CLIENT;
use quicktaxi_config::IdentityConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur when interacting with the identity API
#[derive(Error, Debug)]
pub enum IdentityError {
    /// The provider rejected the sign-in, typically bad credentials.
    /// Carries the provider's error message (e.g. `INVALID_PASSWORD`).
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Error during HTTP request to the identity API
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    email: String,
    #[serde(default)]
    display_name: Option<String>,
}

/// Error envelope the provider wraps failures in:
/// `{"error": {"message": "INVALID_PASSWORD", ...}}`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for the hosted identity service.
pub struct IdentityClient {
    /// HTTP client for making requests to the identity API
    client: Client,

    /// Endpoint and project API key
    config: IdentityConfig,
}

impl IdentityClient {
    /// Creates a new identity client with the given configuration.
    pub fn new(config: IdentityConfig) -> Self {
        Self {
            client: HTTP_CLIENT.clone(),
            config,
        }
    }

    /// Verifies the credentials against the provider and returns the
    /// signed-in user's profile.
    ///
    /// # Errors
    ///
    /// * `IdentityError::Auth` when the provider answers with an error
    ///   envelope (wrong password, unknown account, disabled user, ...)
    /// * `IdentityError::Request` when the HTTP call itself fails
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserProfile, IdentityError> {
        let url = format!(
            "{}/v1/accounts:signInWithPassword",
            self.config.base_url.trim_end_matches('/')
        );

        debug!(%email, "authenticating against identity service");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&SignInRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            // The provider reports failures as {"error": {"message": ...}};
            // fall back to the raw body when the envelope does not parse.
            let message = serde_json::from_str::<ErrorEnvelope>(&error_text)
                .map(|envelope| envelope.error.message)
                .unwrap_or(error_text);
            warn!(%status, %message, "identity service rejected sign-in");
            return Err(IdentityError::Auth(message));
        }

        let body: SignInResponse = response.json().await?;
        debug!(user_id = %body.local_id, "sign-in accepted");
        Ok(UserProfile::from_identity(
            body.local_id,
            body.email,
            body.display_name,
        ))
    }
}
