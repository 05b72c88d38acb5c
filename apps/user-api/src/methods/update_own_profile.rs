use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use crate::auth::Identity;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{ProfileUpdateRequest, UserResponse};
use crate::methods::routes::USER_PATH;
use crate::policy::{authorize, Operation};
use crate::state::AppState;
use crate::validation::valid_json_body;

#[utoipa::path(
    patch,
    path = USER_PATH,
    tag = "user",
    request_body = ProfileUpdateRequest,
    responses(
        (status = 200, description = "Profile updated", body = UserResponse),
        (status = 400, description = "Malformed or invalid payload"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Caller has no user record"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn update_own_profile(
    State(state): State<AppState>,
    identity: Identity,
    body: Bytes,
) -> Result<Json<UserResponse>, ApiError> {
    let principal = authorize(Operation::UpdateOwnProfile, identity.principal())?;
    let payload: ProfileUpdateRequest = valid_json_body(&body)?;

    state
        .user_service
        .update_profile(payload.into(), &principal.email)
        .await
        .map(|user| Json(UserResponse::from(user)))
        .map_err(|e| handle_service_error(e, &state.env, "update_own_profile"))
}
