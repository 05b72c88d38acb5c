use axum::extract::{Query, State};
use axum::Json;

use crate::auth::Identity;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{ManagementUserResponse, PageQuery, PageResponse};
use crate::methods::routes::USER_FIND_FOR_MANAGEMENT_PATH;
use crate::policy::{authorize, Operation};
use crate::state::AppState;
use crate::validation::page_request;

#[utoipa::path(
    get,
    path = USER_FIND_FOR_MANAGEMENT_PATH,
    tag = "management",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of management rows", body = PageResponse<ManagementUserResponse>),
        (status = 400, description = "Bad paging or sort parameters"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is not an administrator"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn management_list(
    State(state): State<AppState>,
    identity: Identity,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageResponse<ManagementUserResponse>>, ApiError> {
    authorize(Operation::ManagementList, identity.principal())?;
    let request = page_request(&query.page, &query.size, &query.sort)?;

    state
        .user_service
        .find_user_for_management(request)
        .await
        .map(|page| Json(PageResponse::from(page)))
        .map_err(|e| handle_service_error(e, &state.env, "management_list"))
}
