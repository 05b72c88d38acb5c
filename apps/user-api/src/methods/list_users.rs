use axum::extract::{Query, State};
use axum::Json;

use crate::auth::Identity;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{PageQuery, PageResponse, UserResponse};
use crate::methods::routes::USER_ALL_PATH;
use crate::policy::{authorize, Operation};
use crate::state::AppState;
use crate::validation::page_request;

#[utoipa::path(
    get,
    path = USER_ALL_PATH,
    tag = "management",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of users", body = PageResponse<UserResponse>),
        (status = 400, description = "Bad paging or sort parameters"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is not an administrator"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    identity: Identity,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageResponse<UserResponse>>, ApiError> {
    authorize(Operation::ListUsers, identity.principal())?;
    let request = page_request(&query.page, &query.size, &query.sort)?;

    state
        .user_service
        .find_by_page(request)
        .await
        .map(|page| Json(PageResponse::from(page)))
        .map_err(|e| handle_service_error(e, &state.env, "list_users"))
}
