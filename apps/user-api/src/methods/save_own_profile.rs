use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use crate::auth::Identity;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{ProfileSaveRequest, UserResponse};
use crate::methods::routes::USER_PROFILE_PATH;
use crate::policy::{authorize, Operation};
use crate::state::AppState;
use crate::validation::valid_json_body;

#[utoipa::path(
    put,
    path = USER_PROFILE_PATH,
    tag = "user",
    request_body = ProfileSaveRequest,
    responses(
        (status = 200, description = "Profile saved", body = UserResponse),
        (status = 400, description = "Malformed or invalid payload"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Caller has no user record"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn save_own_profile(
    State(state): State<AppState>,
    identity: Identity,
    body: Bytes,
) -> Result<Json<UserResponse>, ApiError> {
    let principal = authorize(Operation::SaveOwnProfile, identity.principal())?;
    let payload: ProfileSaveRequest = valid_json_body(&body)?;

    state
        .user_service
        .save_profile(payload.into(), &principal.email)
        .await
        .map(|user| Json(UserResponse::from(user)))
        .map_err(|e| handle_service_error(e, &state.env, "save_own_profile"))
}
