use axum::extract::State;
use axum::Json;

use user_lib::entities::EmailNotification;

use crate::auth::Identity;
use crate::error::{handle_service_error, ApiError};
use crate::methods::routes::USER_EMAIL_NOTIFICATIONS_PATH;
use crate::policy::{authorize, Operation};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = USER_EMAIL_NOTIFICATIONS_PATH,
    tag = "user",
    responses(
        (status = 200, description = "Email notification cadences a profile can pick", body = [EmailNotification]),
        (status = 401, description = "Not authenticated"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn email_notification_options(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<Vec<EmailNotification>>, ApiError> {
    authorize(Operation::EmailNotificationOptions, identity.principal())?;

    state
        .user_service
        .email_notification_options()
        .await
        .map(Json)
        .map_err(|e| handle_service_error(e, &state.env, "email_notification_options"))
}
