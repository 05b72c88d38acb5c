pub mod verifier;

pub use verifier::{Claims, JwtVerifier, TokenVerifier};

use std::convert::Infallible;
use std::fmt;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use user_lib::entities::Role;

use crate::state::AppState;

/// The authenticated caller as asserted by the bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub email: String,
    pub roles: Vec<Role>,
}

impl Principal {
    pub fn new(email: impl Into<String>, roles: Vec<Role>) -> Self {
        Principal {
            email: email.into(),
            roles,
        }
    }

    pub fn has_any_role(&self, allowed: &[Role]) -> bool {
        self.roles.iter().any(|role| allowed.contains(role))
    }
}

#[derive(Debug)]
pub enum AuthError {
    MalformedHeader,
    InvalidToken(String),
    Expired,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MalformedHeader => write!(f, "malformed authorization header"),
            AuthError::InvalidToken(detail) => write!(f, "invalid token: {detail}"),
            AuthError::Expired => write!(f, "token expired"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Who is calling, if anyone. Extraction never rejects: a missing or
/// broken credential leaves the identity empty and the policy check
/// turns that into a 401. Keeping rejection out of the extractor is
/// what guarantees authentication is judged before request parsing.
pub struct Identity(Option<Principal>);

impl Identity {
    pub fn principal(&self) -> Option<&Principal> {
        self.0.as_ref()
    }
}

fn bearer_token(headers: &HeaderMap) -> Result<Option<&str>, AuthError> {
    let Some(raw) = headers.get(AUTHORIZATION) else {
        return Ok(None);
    };
    let value = raw.to_str().map_err(|_| AuthError::MalformedHeader)?;
    match value.strip_prefix("Bearer ") {
        Some(token) if !token.is_empty() => Ok(Some(token)),
        _ => Err(AuthError::MalformedHeader),
    }
}

impl<S> FromRequestParts<S> for Identity
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let principal = match bearer_token(&parts.headers) {
            Ok(Some(token)) => match app_state.verifier.verify(token) {
                Ok(principal) => Some(principal),
                Err(e) => {
                    tracing::debug!(error = %e, "bearer token rejected");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::debug!(error = %e, "authorization header rejected");
                None
            }
        };
        Ok(Identity(principal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_token_absent_header_is_none() {
        let headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers).unwrap(), None);
    }

    #[test]
    fn bearer_token_strips_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(bearer_token(&headers).unwrap(), Some("abc.def"));
    }

    #[test]
    fn bearer_token_rejects_other_schemes() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcg=="));
        assert!(bearer_token(&headers).is_err());
    }

    #[test]
    fn has_any_role_checks_overlap() {
        let principal = Principal::new("u@example.com", vec![Role::Moderator]);
        assert!(principal.has_any_role(&[Role::Admin, Role::Moderator]));
        assert!(!principal.has_any_role(&[Role::Admin]));
    }
}
