use axum::extract::{Path, State};
use axum::Json;

use crate::auth::Identity;
use crate::error::{handle_service_error, ApiError};
use crate::methods::routes::USER_IS_ONLINE_PATH;
use crate::policy::{authorize, Operation};
use crate::state::AppState;
use crate::validation::path_i64;

#[utoipa::path(
    get,
    path = USER_IS_ONLINE_PATH,
    tag = "management",
    params(
        ("user_id" = String, Path, description = "Id of the user to check")
    ),
    responses(
        (status = 200, description = "Whether the user was active recently", body = bool),
        (status = 400, description = "user_id is not a number"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is not an administrator"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn is_online(
    State(state): State<AppState>,
    identity: Identity,
    Path(user_id): Path<String>,
) -> Result<Json<bool>, ApiError> {
    authorize(Operation::IsOnline, identity.principal())?;
    let user_id = path_i64(&user_id, "user_id")?;

    state
        .user_service
        .is_online(user_id)
        .await
        .map(Json)
        .map_err(|e| handle_service_error(e, &state.env, "is_online"))
}
