#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum UserServiceError {
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl UserServiceError {
    pub fn user_by_id(id: i64) -> Self {
        UserServiceError::NotFound {
            entity: "user",
            key: id.to_string(),
        }
    }

    pub fn user_by_email(email: &str) -> Self {
        UserServiceError::NotFound {
            entity: "user",
            key: email.to_string(),
        }
    }

    pub fn language(id: i64) -> Self {
        UserServiceError::NotFound {
            entity: "language",
            key: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, UserServiceError::NotFound { .. })
    }
}
