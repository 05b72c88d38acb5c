use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use crate::auth::Identity;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{UserStatusRequest, UserStatusResponse};
use crate::methods::routes::USER_STATUS_PATH;
use crate::policy::{authorize, Operation};
use crate::state::AppState;
use crate::validation::json_body;

#[utoipa::path(
    patch,
    path = USER_STATUS_PATH,
    tag = "management",
    request_body = UserStatusRequest,
    responses(
        (status = 200, description = "Status applied", body = UserStatusResponse),
        (status = 400, description = "Malformed payload"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is not an administrator"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn update_status(
    State(state): State<AppState>,
    identity: Identity,
    body: Bytes,
) -> Result<Json<UserStatusResponse>, ApiError> {
    let principal = authorize(Operation::UpdateStatus, identity.principal())?;
    let payload: UserStatusRequest = json_body(&body)?;

    state
        .user_service
        .update_status(payload.id, payload.user_status, &principal.email)
        .await
        .map(|user| Json(UserStatusResponse::from(user)))
        .map_err(|e| handle_service_error(e, &state.env, "update_status"))
}
