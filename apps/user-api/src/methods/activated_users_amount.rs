use axum::extract::State;
use axum::Json;

use crate::auth::Identity;
use crate::error::{handle_service_error, ApiError};
use crate::methods::routes::USER_ACTIVATED_AMOUNT_PATH;
use crate::policy::{authorize, Operation};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = USER_ACTIVATED_AMOUNT_PATH,
    tag = "management",
    responses(
        (status = 200, description = "Count of activated users", body = u64),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is not an administrator"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn activated_users_amount(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<u64>, ApiError> {
    authorize(Operation::ActivatedUsersAmount, identity.principal())?;

    state
        .user_service
        .activated_users_amount()
        .await
        .map(Json)
        .map_err(|e| handle_service_error(e, &state.env, "activated_users_amount"))
}
