use axum::extract::State;

use crate::auth::Identity;
use crate::error::{handle_service_error, ApiError};
use crate::methods::routes::USER_LANG_PATH;
use crate::policy::{authorize, Operation};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = USER_LANG_PATH,
    tag = "user",
    responses(
        (status = 200, description = "The caller's interface language code", body = String),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Caller has no user record"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn own_language(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<String, ApiError> {
    let principal = authorize(Operation::OwnLanguage, identity.principal())?;

    state
        .user_service
        .find_by_email(&principal.email)
        .await
        .map(|user| user.language_code)
        .map_err(|e| handle_service_error(e, &state.env, "own_language"))
}
