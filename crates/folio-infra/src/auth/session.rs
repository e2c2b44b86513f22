//! JWT session tokens.
//!
//! The token is what keeps a browser logged in: it is stored in a cookie
//! and carries the identity, so a request never needs a user lookup.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use folio_core::domain::Identity;
use folio_core::ports::{AuthError, SessionClaims, SessionService};

/// Placeholder secret used when `SECRET_KEY` is unset.
pub const DEFAULT_SECRET: &str = "change-me-in-production";

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub secret: String,
    pub lifetime_hours: i64,
    pub issuer: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            lifetime_hours: 24,
            issuer: "folio".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String, // user id
    email: String,
    name: String,
    exp: i64,
    iat: i64,
    iss: String,
}

pub struct JwtSessionService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: SessionConfig,
}

impl JwtSessionService {
    pub fn new(config: SessionConfig) -> Self {
        if config.secret == DEFAULT_SECRET {
            tracing::warn!("Using default session secret. Set SECRET_KEY for production use.");
        }

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            encoding_key,
            decoding_key,
            config,
        }
    }
}

impl SessionService for JwtSessionService {
    fn issue(&self, identity: &Identity) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now + TimeDelta::hours(self.config.lifetime_hours);

        let claims = Claims {
            sub: identity.user_id.to_string(),
            email: identity.email.clone(),
            name: identity.name.clone(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InvalidSession(e.to_string()))
    }

    fn validate(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::SessionExpired,
                _ => AuthError::InvalidSession(e.to_string()),
            }
        })?;

        let user_id = token_data
            .claims
            .sub
            .parse::<i32>()
            .map_err(|e| AuthError::InvalidSession(e.to_string()))?;

        Ok(SessionClaims {
            identity: Identity {
                user_id,
                email: token_data.claims.email,
                name: token_data.claims.name,
            },
            exp: token_data.claims.exp,
        })
    }

    fn lifetime_seconds(&self) -> i64 {
        self.config.lifetime_hours * 3600
    }
}
