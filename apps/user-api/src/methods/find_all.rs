use axum::extract::State;
use axum::Json;

use crate::auth::Identity;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::UserResponse;
use crate::methods::routes::USER_FIND_ALL_PATH;
use crate::policy::{authorize, Operation};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = USER_FIND_ALL_PATH,
    tag = "management",
    responses(
        (status = 200, description = "Every user, unpaged", body = [UserResponse]),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is not an administrator"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn find_all(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    authorize(Operation::FindAll, identity.principal())?;

    state
        .user_service
        .find_all()
        .await
        .map(|users| Json(users.into_iter().map(UserResponse::from).collect()))
        .map_err(|e| handle_service_error(e, &state.env, "find_all"))
}
