use axum::extract::{Query, State};
use axum::Json;

use crate::auth::Identity;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::ReasonsQuery;
use crate::methods::routes::USER_REASONS_PATH;
use crate::policy::{authorize, Operation};
use crate::state::AppState;
use crate::validation::param_i64;

const DEFAULT_REASONS_LANGUAGE: &str = "en";

#[utoipa::path(
    get,
    path = USER_REASONS_PATH,
    tag = "user",
    params(ReasonsQuery),
    responses(
        (status = 200, description = "Reasons recorded when the user was deactivated", body = [String]),
        (status = 400, description = "Missing or non-numeric id"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn deactivation_reasons(
    State(state): State<AppState>,
    identity: Identity,
    Query(query): Query<ReasonsQuery>,
) -> Result<Json<Vec<String>>, ApiError> {
    authorize(Operation::DeactivationReasons, identity.principal())?;
    let user_id = param_i64(&query.id, "id")?;
    let language = query.lang.as_deref().unwrap_or(DEFAULT_REASONS_LANGUAGE);

    state
        .user_service
        .deactivation_reasons(user_id, language)
        .await
        .map(Json)
        .map_err(|e| handle_service_error(e, &state.env, "deactivation_reasons"))
}
