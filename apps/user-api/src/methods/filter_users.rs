use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::Json;

use crate::auth::Identity;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{FilterRequest, PageQuery, PageResponse, UserResponse};
use crate::methods::routes::USER_FILTER_PATH;
use crate::policy::{authorize, Operation};
use crate::state::AppState;
use crate::validation::{json_body, page_request};

#[utoipa::path(
    post,
    path = USER_FILTER_PATH,
    tag = "management",
    params(PageQuery),
    request_body = FilterRequest,
    responses(
        (status = 200, description = "Users matching the filter", body = PageResponse<UserResponse>),
        (status = 400, description = "Malformed filter or paging parameters"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is not an administrator"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn filter_users(
    State(state): State<AppState>,
    identity: Identity,
    Query(query): Query<PageQuery>,
    body: Bytes,
) -> Result<Json<PageResponse<UserResponse>>, ApiError> {
    authorize(Operation::FilterUsers, identity.principal())?;
    let request = page_request(&query.page, &query.size, &query.sort)?;
    let payload: FilterRequest = json_body(&body)?;

    state
        .user_service
        .filter(payload.into(), request)
        .await
        .map(|page| Json(PageResponse::from(page)))
        .map_err(|e| handle_service_error(e, &state.env, "filter_users"))
}
