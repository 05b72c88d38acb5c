use axum::extract::{Query, State};
use axum::Json;

use user_lib::entities::EmailNotification;

use crate::auth::Identity;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{NotificationQuery, UserResponse};
use crate::methods::routes::USER_FIND_ALL_BY_NOTIFICATION_PATH;
use crate::policy::{authorize, Operation};
use crate::state::AppState;
use crate::validation::require_param;

#[utoipa::path(
    get,
    path = USER_FIND_ALL_BY_NOTIFICATION_PATH,
    tag = "management",
    params(NotificationQuery),
    responses(
        (status = 200, description = "Users on that notification cadence", body = [UserResponse]),
        (status = 400, description = "Missing or unknown emailNotification parameter"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is not an administrator"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn find_all_by_email_notification(
    State(state): State<AppState>,
    identity: Identity,
    Query(query): Query<NotificationQuery>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    authorize(Operation::FindAllByEmailNotification, identity.principal())?;
    let raw = require_param(&query.email_notification, "emailNotification")?;
    let notification = raw.parse::<EmailNotification>().map_err(|_| {
        ApiError::bad_request(format!("{raw} is not a valid email notification"))
    })?;

    state
        .user_service
        .find_all_by_email_notification(notification)
        .await
        .map(|users| Json(users.into_iter().map(UserResponse::from).collect()))
        .map_err(|e| handle_service_error(e, &state.env, "find_all_by_email_notification"))
}
