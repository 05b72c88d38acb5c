use axum::extract::{Query, State};
use axum::Json;

use crate::auth::Identity;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{EmailQuery, UserResponse};
use crate::methods::routes::USER_FIND_BY_EMAIL_PATH;
use crate::policy::{authorize, Operation};
use crate::state::AppState;
use crate::validation::require_param;

#[utoipa::path(
    get,
    path = USER_FIND_BY_EMAIL_PATH,
    tag = "management",
    params(EmailQuery),
    responses(
        (status = 200, description = "The user with that email", body = UserResponse),
        (status = 400, description = "Missing email parameter"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is not an administrator"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn find_by_email(
    State(state): State<AppState>,
    identity: Identity,
    Query(query): Query<EmailQuery>,
) -> Result<Json<UserResponse>, ApiError> {
    authorize(Operation::FindByEmail, identity.principal())?;
    let email = require_param(&query.email, "email")?;

    state
        .user_service
        .find_by_email(email)
        .await
        .map(|user| Json(UserResponse::from(user)))
        .map_err(|e| handle_service_error(e, &state.env, "find_by_email"))
}
