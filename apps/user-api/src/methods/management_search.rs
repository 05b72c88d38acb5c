use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::Json;

use crate::auth::Identity;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{
    ManagementSearchRequest, ManagementUserResponse, PageQuery, PageResponse,
};
use crate::methods::routes::USER_SEARCH_PATH;
use crate::policy::{authorize, Operation};
use crate::state::AppState;
use crate::validation::{json_body, page_request};

#[utoipa::path(
    post,
    path = USER_SEARCH_PATH,
    tag = "management",
    params(PageQuery),
    request_body = ManagementSearchRequest,
    responses(
        (status = 200, description = "Rows matching the column criteria", body = PageResponse<ManagementUserResponse>),
        (status = 400, description = "Malformed criteria or paging parameters"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is not an administrator"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn management_search(
    State(state): State<AppState>,
    identity: Identity,
    Query(query): Query<PageQuery>,
    body: Bytes,
) -> Result<Json<PageResponse<ManagementUserResponse>>, ApiError> {
    authorize(Operation::ManagementSearch, identity.principal())?;
    let request = page_request(&query.page, &query.size, &query.sort)?;
    let payload: ManagementSearchRequest = json_body(&body)?;

    state
        .user_service
        .search(request, payload.into())
        .await
        .map(|page| Json(PageResponse::from(page)))
        .map_err(|e| handle_service_error(e, &state.env, "management_search"))
}
