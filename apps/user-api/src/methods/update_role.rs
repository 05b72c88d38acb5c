use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;

use crate::auth::Identity;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{RoleUpdateRequest, RoleUpdateResponse};
use crate::methods::routes::USER_ROLE_BY_ID_PATH;
use crate::policy::{authorize, Operation};
use crate::state::AppState;
use crate::validation::{json_body, path_i64};

#[utoipa::path(
    patch,
    path = USER_ROLE_BY_ID_PATH,
    tag = "management",
    params(
        ("id" = String, Path, description = "Id of the user whose role changes")
    ),
    request_body = RoleUpdateRequest,
    responses(
        (status = 200, description = "Role applied", body = RoleUpdateResponse),
        (status = 400, description = "Malformed payload or non-numeric id"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is not an administrator"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn update_role(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<RoleUpdateResponse>, ApiError> {
    let principal = authorize(Operation::UpdateRole, identity.principal())?;
    let id = path_i64(&id, "id")?;
    let payload: RoleUpdateRequest = json_body(&body)?;

    state
        .user_service
        .update_role(id, payload.role, &principal.email)
        .await
        .map(|user| Json(RoleUpdateResponse::from(user)))
        .map_err(|e| handle_service_error(e, &state.env, "update_role"))
}
