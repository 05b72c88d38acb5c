use axum::extract::State;
use axum::Json;

use crate::auth::Identity;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::UserUpdateInfoResponse;
use crate::methods::routes::USER_PATH;
use crate::policy::{authorize, Operation};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = USER_PATH,
    tag = "user",
    responses(
        (status = 200, description = "Editable slice of the caller's profile", body = UserUpdateInfoResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Caller has no user record"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn view_own_profile(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<UserUpdateInfoResponse>, ApiError> {
    let principal = authorize(Operation::ViewOwnProfile, identity.principal())?;

    state
        .user_service
        .user_update_info(&principal.email)
        .await
        .map(|info| Json(UserUpdateInfoResponse::from(info)))
        .map_err(|e| handle_service_error(e, &state.env, "view_own_profile"))
}
