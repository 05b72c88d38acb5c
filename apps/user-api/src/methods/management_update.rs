use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;

use crate::auth::Identity;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{ManagementUpdateRequest, ManagementUserResponse};
use crate::methods::routes::USER_BY_ID_PATH;
use crate::policy::{authorize, Operation};
use crate::state::AppState;
use crate::validation::{path_i64, valid_json_body};

#[utoipa::path(
    put,
    path = USER_BY_ID_PATH,
    tag = "management",
    params(
        ("id" = String, Path, description = "Id of the user to rewrite")
    ),
    request_body = ManagementUpdateRequest,
    responses(
        (status = 200, description = "User rewritten", body = ManagementUserResponse),
        (status = 400, description = "Malformed or invalid payload, or non-numeric id"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is not an administrator"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn management_update(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<ManagementUserResponse>, ApiError> {
    authorize(Operation::ManagementUpdate, identity.principal())?;
    let id = path_i64(&id, "id")?;
    let payload: ManagementUpdateRequest = valid_json_body(&body)?;

    state
        .user_service
        .update_user(id, payload.into())
        .await
        .map(|user| Json(ManagementUserResponse::from(user)))
        .map_err(|e| handle_service_error(e, &state.env, "management_update"))
}
