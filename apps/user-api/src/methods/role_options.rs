use axum::extract::State;
use axum::Json;

use crate::auth::Identity;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::RoleOptionsResponse;
use crate::methods::routes::USER_ROLES_PATH;
use crate::policy::{authorize, Operation};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = USER_ROLES_PATH,
    tag = "user",
    responses(
        (status = 200, description = "Roles this service knows about", body = RoleOptionsResponse),
        (status = 401, description = "Not authenticated"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn role_options(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<RoleOptionsResponse>, ApiError> {
    authorize(Operation::RoleOptions, identity.principal())?;

    state
        .user_service
        .role_options()
        .await
        .map(|roles| Json(RoleOptionsResponse { roles }))
        .map_err(|e| handle_service_error(e, &state.env, "role_options"))
}
