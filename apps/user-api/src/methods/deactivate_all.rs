use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use crate::auth::Identity;
use crate::error::{handle_service_error, ApiError};
use crate::methods::routes::USER_DEACTIVATE_ALL_PATH;
use crate::policy::{authorize, Operation};
use crate::state::AppState;
use crate::validation::json_body;

#[utoipa::path(
    put,
    path = USER_DEACTIVATE_ALL_PATH,
    tag = "management",
    request_body = Vec<i64>,
    responses(
        (status = 200, description = "Ids from the request, echoed back", body = [i64]),
        (status = 400, description = "Body is not a JSON array of ids"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is not an administrator"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn deactivate_all(
    State(state): State<AppState>,
    identity: Identity,
    body: Bytes,
) -> Result<Json<Vec<i64>>, ApiError> {
    authorize(Operation::DeactivateAll, identity.principal())?;
    let ids: Vec<i64> = json_body(&body)?;

    state
        .user_service
        .deactivate_all(ids)
        .await
        .map(Json)
        .map_err(|e| handle_service_error(e, &state.env, "deactivate_all"))
}
