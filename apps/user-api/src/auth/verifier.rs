use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use user_lib::entities::Role;

use crate::auth::{AuthError, Principal};

/// Claims carried by the bearer tokens the auth server mints. The gate
/// only reads them; issuing tokens is the auth server's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(email: impl Into<String>, roles: &[Role], ttl: Duration) -> Self {
        let now = Utc::now();
        Claims {
            sub: email.into(),
            roles: roles.iter().map(|r| r.as_str().to_string()).collect(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}

/// Turns a raw bearer token into a caller identity.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<Principal, AuthError>;
}

/// HS256 verifier sharing its secret with the auth server.
pub struct JwtVerifier {
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(secret: &Secret<String>) -> Self {
        let decoding = DecodingKey::from_secret(secret.expose_secret().as_bytes());
        let validation = Validation::new(Algorithm::HS256);
        JwtVerifier {
            decoding,
            validation,
        }
    }
}

impl TokenVerifier for JwtVerifier {
    fn verify(&self, token: &str) -> Result<Principal, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::InvalidToken(e.to_string()),
            }
        })?;

        let claims = data.claims;
        if claims.sub.is_empty() {
            return Err(AuthError::InvalidToken("empty subject".to_string()));
        }

        // Unknown role names are dropped rather than failing the whole
        // token; the auth server may mint roles this service never uses.
        let roles: Vec<Role> = claims
            .roles
            .iter()
            .filter_map(|raw| match raw.parse::<Role>() {
                Ok(role) => Some(role),
                Err(_) => {
                    tracing::debug!(role = %raw, "ignoring unknown role claim");
                    None
                }
            })
            .collect();

        Ok(Principal::new(claims.sub, roles))
    }
}
