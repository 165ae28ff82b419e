use crate::models::Session;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Missing bearer token")]
    MissingToken,

    #[error("Invalid session token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("Session lifetime must be a positive number of seconds within range, got {0}")]
    InvalidTtl(i64),

    #[error("Session expiry is out of range")]
    ExpiryOutOfRange,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    name: String,
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    picture: Option<String>,
    iat: i64,
    exp: i64,
}

/// Signs and checks the HS256 tokens that carry a [`Session`] between requests
pub struct SessionIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl SessionIssuer {
    /// Create an issuer whose tokens live for `ttl_secs`
    ///
    /// The lifetime must be positive and small enough that an expiry
    /// computed from the current time stays representable.
    pub fn new(secret: &str, ttl_secs: i64) -> Result<Self, SessionError> {
        let ttl = Duration::try_seconds(ttl_secs)
            .filter(|ttl| *ttl > Duration::zero())
            .filter(|ttl| Utc::now().checked_add_signed(*ttl).is_some())
            .ok_or(SessionError::InvalidTtl(ttl_secs))?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        })
    }

    /// Issue a token for `session`, returning it with its expiry time
    pub fn issue(&self, session: &Session) -> Result<(String, DateTime<Utc>), SessionError> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or(SessionError::ExpiryOutOfRange)?;

        let claims = Claims {
            sub: session.user_id.clone(),
            name: session.name.clone(),
            email: session.email.clone(),
            picture: session.photo_url.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok((token, expires_at))
    }

    pub fn verify(&self, token: &str) -> Result<Session, SessionError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))?;
        let claims = data.claims;

        Ok(Session {
            user_id: claims.sub,
            name: claims.name,
            email: claims.email,
            photo_url: claims.picture,
        })
    }

    /// Resolve the session from an `Authorization` header value
    pub fn session_from_header(&self, header: Option<&str>) -> Result<Session, SessionError> {
        let token = header
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(SessionError::MissingToken)?;

        self.verify(token)
    }
}
