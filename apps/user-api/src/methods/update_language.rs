use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::auth::Identity;
use crate::error::{handle_service_error, ApiError};
use crate::methods::routes::USER_LANGUAGE_PATH;
use crate::policy::{authorize, Operation};
use crate::state::AppState;
use crate::validation::path_i64;

#[utoipa::path(
    put,
    path = USER_LANGUAGE_PATH,
    tag = "user",
    params(
        ("language_id" = String, Path, description = "Numeric id of the language to switch to")
    ),
    responses(
        (status = 200, description = "Language updated"),
        (status = 400, description = "language_id is not a number"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Caller or language not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn update_language(
    State(state): State<AppState>,
    identity: Identity,
    Path(language_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let principal = authorize(Operation::UpdateLanguage, identity.principal())?;
    let language_id = path_i64(&language_id, "language_id")?;

    let user = state
        .user_service
        .find_by_email(&principal.email)
        .await
        .map_err(|e| handle_service_error(e, &state.env, "update_language"))?;

    state
        .user_service
        .update_language(user.id, language_id)
        .await
        .map(|_| StatusCode::OK)
        .map_err(|e| handle_service_error(e, &state.env, "update_language"))
}
