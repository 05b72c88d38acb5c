use axum::extract::State;
use axum::http::StatusCode;

use crate::auth::Identity;
use crate::error::{handle_service_error, ApiError};
use crate::methods::routes::USER_DELETE_PROFILE_PICTURE_PATH;
use crate::policy::{authorize, Operation};
use crate::state::AppState;

#[utoipa::path(
    patch,
    path = USER_DELETE_PROFILE_PICTURE_PATH,
    tag = "user",
    responses(
        (status = 200, description = "Profile picture removed"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Caller has no user record"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn delete_profile_picture(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<StatusCode, ApiError> {
    let principal = authorize(Operation::DeleteProfilePicture, identity.principal())?;

    state
        .user_service
        .delete_profile_picture(&principal.email)
        .await
        .map(|_| StatusCode::OK)
        .map_err(|e| handle_service_error(e, &state.env, "delete_profile_picture"))
}
