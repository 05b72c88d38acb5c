use axum::extract::{Query, State};
use axum::Json;

use crate::auth::Identity;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{IdQuery, UserResponse};
use crate::methods::routes::USER_FIND_BY_ID_PATH;
use crate::policy::{authorize, Operation};
use crate::state::AppState;
use crate::validation::param_i64;

#[utoipa::path(
    get,
    path = USER_FIND_BY_ID_PATH,
    tag = "management",
    params(IdQuery),
    responses(
        (status = 200, description = "The user with that id", body = UserResponse),
        (status = 400, description = "Missing or non-numeric id parameter"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is not an administrator"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn find_by_id(
    State(state): State<AppState>,
    identity: Identity,
    Query(query): Query<IdQuery>,
) -> Result<Json<UserResponse>, ApiError> {
    authorize(Operation::FindById, identity.principal())?;
    let id = param_i64(&query.id, "id")?;

    state
        .user_service
        .find_by_id(id)
        .await
        .map(|user| Json(UserResponse::from(user)))
        .map_err(|e| handle_service_error(e, &state.env, "find_by_id"))
}
