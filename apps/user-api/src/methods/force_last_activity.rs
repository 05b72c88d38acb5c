use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::auth::Identity;
use crate::error::{handle_service_error, ApiError};
use crate::methods::routes::USER_LAST_ACTIVITY_PATH;
use crate::policy::{authorize, Operation};
use crate::state::AppState;
use crate::validation::path_datetime;

#[utoipa::path(
    put,
    path = USER_LAST_ACTIVITY_PATH,
    tag = "management",
    params(
        ("date" = String, Path, description = "Last activity instant, ISO-8601 without zone")
    ),
    responses(
        (status = 200, description = "Last activity time recorded"),
        (status = 400, description = "Unparseable date"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is not an administrator"),
        (status = 404, description = "Caller has no user record"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn force_last_activity(
    State(state): State<AppState>,
    identity: Identity,
    Path(date): Path<String>,
) -> Result<StatusCode, ApiError> {
    let principal = authorize(Operation::ForceLastActivity, identity.principal())?;
    let time = path_datetime(&date, "date")?;

    let user = state
        .user_service
        .find_by_email(&principal.email)
        .await
        .map_err(|e| handle_service_error(e, &state.env, "force_last_activity"))?;

    state
        .user_service
        .update_last_activity(user.id, time)
        .await
        .map(|_| StatusCode::OK)
        .map_err(|e| handle_service_error(e, &state.env, "force_last_activity"))
}
