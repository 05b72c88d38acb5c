use std::sync::Arc;

use user_lib::service::UserService;

use crate::auth::TokenVerifier;
use crate::error::is_prod_like;

/// Shared per-request context. Both collaborators sit behind trait
/// objects so tests can swap in doubles without touching the router.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub verifier: Arc<dyn TokenVerifier>,
    pub env: String,
}

impl AppState {
    pub fn new(
        user_service: Arc<dyn UserService>,
        verifier: Arc<dyn TokenVerifier>,
        env: impl Into<String>,
    ) -> Self {
        AppState {
            user_service,
            verifier,
            env: env.into(),
        }
    }

    pub fn is_prod_like(&self) -> bool {
        is_prod_like(&self.env)
    }
}
