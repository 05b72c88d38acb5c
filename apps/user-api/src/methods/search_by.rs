use axum::extract::{Query, State};
use axum::Json;

use crate::auth::Identity;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{ManagementUserResponse, PageResponse, SearchByQuery};
use crate::methods::routes::USER_SEARCH_BY_PATH;
use crate::policy::{authorize, Operation};
use crate::state::AppState;
use crate::validation::{page_request, require_param};

#[utoipa::path(
    get,
    path = USER_SEARCH_BY_PATH,
    tag = "management",
    params(SearchByQuery),
    responses(
        (status = 200, description = "Rows whose fields contain the query", body = PageResponse<ManagementUserResponse>),
        (status = 400, description = "Missing query or bad paging parameters"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is not an administrator"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn search_by(
    State(state): State<AppState>,
    identity: Identity,
    Query(query): Query<SearchByQuery>,
) -> Result<Json<PageResponse<ManagementUserResponse>>, ApiError> {
    authorize(Operation::SearchBy, identity.principal())?;
    let request = page_request(&query.page, &query.size, &query.sort)?;
    let text = require_param(&query.query, "query")?;

    state
        .user_service
        .search_by(request, text)
        .await
        .map(|page| Json(PageResponse::from(page)))
        .map_err(|e| handle_service_error(e, &state.env, "search_by"))
}
