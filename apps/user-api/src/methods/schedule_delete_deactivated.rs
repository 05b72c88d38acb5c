use axum::extract::State;
use axum::Json;

use crate::auth::Identity;
use crate::error::{handle_service_error, ApiError};
use crate::methods::routes::USER_DELETE_DEACTIVATED_PATH;
use crate::policy::{authorize, Operation};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = USER_DELETE_DEACTIVATED_PATH,
    tag = "management",
    responses(
        (status = 200, description = "How many deactivated users were scheduled for deletion", body = u64),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is not an administrator"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn schedule_delete_deactivated(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<u64>, ApiError> {
    authorize(Operation::ScheduleDeleteDeactivated, identity.principal())?;

    state
        .user_service
        .schedule_delete_deactivated()
        .await
        .map(Json)
        .map_err(|e| handle_service_error(e, &state.env, "schedule_delete_deactivated"))
}
