use crate::models::Session;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Identity provider error: {0}")]
    Provider(String),
}

/// Strategy for checking an email/password pair
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}

/// Verifies passwords against the hosted identity provider's REST API
pub struct IdentityToolkitVerifier {
    base_url: String,
    api_key: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    profile_picture: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

impl IdentityToolkitVerifier {
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> Result<Self, AuthError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url,
            api_key,
            client,
        })
    }
}

#[async_trait]
impl CredentialVerifier for IdentityToolkitVerifier {
    async fn verify(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let url = format!(
            "{}/accounts:signInWithPassword?key={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.api_key)
        );

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let reason = serde_json::from_str::<ProviderError>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| status.to_string());

            // The provider answers 400 for every kind of bad credential
            if status == reqwest::StatusCode::BAD_REQUEST {
                tracing::debug!("Sign-in rejected for {}: {}", email, reason);
                return Err(AuthError::InvalidCredentials);
            }
            return Err(AuthError::Provider(reason));
        }

        let account: SignInResponse = response.json().await?;

        Ok(Session {
            user_id: account.local_id,
            name: account
                .display_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| "User".to_string()),
            email: if account.email.is_empty() { email.to_string() } else { account.email },
            photo_url: account.profile_picture,
        })
    }

    fn name(&self) -> &'static str {
        "identity-toolkit"
    }
}

/// Accepts exactly one configured account
///
/// Meant for offline demos only. Never wire this in unless a demo account is
/// explicitly configured.
pub struct StaticCredentialVerifier {
    email: String,
    password: String,
    session: Session,
}

impl StaticCredentialVerifier {
    pub fn new(email: String, password: String, user_id: String, name: String) -> Self {
        let session = Session {
            user_id,
            name,
            email: email.clone(),
            photo_url: None,
        };

        Self {
            email,
            password,
            session,
        }
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentialVerifier {
    async fn verify(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        if email.eq_ignore_ascii_case(&self.email) && password == self.password {
            Ok(self.session.clone())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// Tries `primary`, then `fallback` when the primary rejects or fails
pub struct FallbackVerifier {
    primary: Arc<dyn CredentialVerifier>,
    fallback: Arc<dyn CredentialVerifier>,
}

impl FallbackVerifier {
    pub fn new(primary: Arc<dyn CredentialVerifier>, fallback: Arc<dyn CredentialVerifier>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl CredentialVerifier for FallbackVerifier {
    async fn verify(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        match self.primary.verify(email, password).await {
            Ok(session) => Ok(session),
            Err(e) => {
                tracing::warn!(
                    "{} verifier failed ({}), trying {} verifier",
                    self.primary.name(),
                    e,
                    self.fallback.name()
                );
                self.fallback.verify(email, password).await
            }
        }
    }

    fn name(&self) -> &'static str {
        "fallback"
    }
}
