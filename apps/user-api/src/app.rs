use axum::routing::{get, patch, post, put};
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use user_lib::entities::{EmailNotification, Role, UserStatus};

use crate::methods::activated_users_amount::{
    __path_activated_users_amount, activated_users_amount,
};
use crate::methods::deactivate_all::{__path_deactivate_all, deactivate_all};
use crate::methods::deactivation_reasons::{__path_deactivation_reasons, deactivation_reasons};
use crate::methods::delete_profile_picture::{
    __path_delete_profile_picture, delete_profile_picture,
};
use crate::methods::email_notification_options::{
    __path_email_notification_options, email_notification_options,
};
use crate::methods::entities::{
    FilterRequest, ManagementSearchRequest, ManagementUpdateRequest, ManagementUserResponse,
    PageResponse, ProfileSaveRequest, ProfileUpdateRequest, RoleOptionsResponse,
    RoleUpdateRequest, RoleUpdateResponse, UserResponse, UserStatusRequest, UserStatusResponse,
    UserUpdateInfoResponse,
};
use crate::methods::filter_users::{__path_filter_users, filter_users};
use crate::methods::find_all::{__path_find_all, find_all};
use crate::methods::find_all_by_email_notification::{
    __path_find_all_by_email_notification, find_all_by_email_notification,
};
use crate::methods::find_by_email::{__path_find_by_email, find_by_email};
use crate::methods::find_by_id::{__path_find_by_id, find_by_id};
use crate::methods::force_last_activity::{__path_force_last_activity, force_last_activity};
use crate::methods::health_check::health_check;
use crate::methods::is_online::{__path_is_online, is_online};
use crate::methods::list_users::{__path_list_users, list_users};
use crate::methods::management_list::{__path_management_list, management_list};
use crate::methods::management_search::{__path_management_search, management_search};
use crate::methods::management_update::{__path_management_update, management_update};
use crate::methods::own_language::{__path_own_language, own_language};
use crate::methods::role_options::{__path_role_options, role_options};
use crate::methods::routes::{
    SERVICE_DOCS_PATH, SERVICE_HEALTH_PATH, USER_ACTIVATED_AMOUNT_PATH, USER_ALL_PATH,
    USER_BY_ID_PATH, USER_DEACTIVATE_ALL_PATH, USER_DELETE_DEACTIVATED_PATH,
    USER_DELETE_PROFILE_PICTURE_PATH, USER_EMAIL_NOTIFICATIONS_PATH, USER_FILTER_PATH,
    USER_FIND_ALL_BY_NOTIFICATION_PATH, USER_FIND_ALL_PATH, USER_FIND_BY_EMAIL_PATH,
    USER_FIND_BY_ID_PATH, USER_FIND_FOR_MANAGEMENT_PATH, USER_IS_ONLINE_PATH,
    USER_LANGUAGE_PATH, USER_LANG_PATH, USER_LAST_ACTIVITY_PATH, USER_PATH,
    USER_PROFILE_PATH, USER_PROFILE_PICTURE_PATH, USER_REASONS_PATH, USER_ROLES_PATH,
    USER_ROLE_BY_ID_PATH, USER_SEARCH_BY_PATH, USER_SEARCH_PATH, USER_STATUS_PATH,
};
use crate::methods::save_own_profile::{__path_save_own_profile, save_own_profile};
use crate::methods::schedule_delete_deactivated::{
    __path_schedule_delete_deactivated, schedule_delete_deactivated,
};
use crate::methods::search_by::{__path_search_by, search_by};
use crate::methods::update_language::{__path_update_language, update_language};
use crate::methods::update_own_profile::{__path_update_own_profile, update_own_profile};
use crate::methods::update_profile_picture::{
    __path_update_profile_picture, update_profile_picture,
};
use crate::methods::update_role::{__path_update_role, update_role};
use crate::methods::update_status::{__path_update_status, update_status};
use crate::methods::view_own_profile::{__path_view_own_profile, view_own_profile};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        view_own_profile, update_own_profile, save_own_profile, own_language,
        update_language, update_profile_picture, delete_profile_picture,
        email_notification_options, role_options, deactivation_reasons,
        update_status, update_role, management_update, force_last_activity,
        list_users, filter_users, management_list, management_search, search_by,
        deactivate_all, schedule_delete_deactivated, is_online,
        find_by_email, find_by_id, find_all, find_all_by_email_notification,
        activated_users_amount
    ),
    components(schemas(
        ProfileUpdateRequest, ProfileSaveRequest, ManagementUpdateRequest,
        ManagementSearchRequest, FilterRequest, UserStatusRequest, RoleUpdateRequest,
        UserResponse, ManagementUserResponse, UserStatusResponse, RoleUpdateResponse,
        UserUpdateInfoResponse, RoleOptionsResponse,
        PageResponse<UserResponse>, PageResponse<ManagementUserResponse>,
        Role, UserStatus, EmailNotification
    )),
    tags(
        (name = "user", description = "Self-service profile endpoints"),
        (name = "management", description = "Administrator-only user management endpoints")
    )
)]
pub struct ApiDoc;

/// Builds the full application router. Middleware layers are applied
/// by the binary; tests drive this router directly.
pub fn app(state: AppState) -> Router {
    // Self-service endpoints
    let user_routes = Router::new()
        .route(USER_PATH, get(view_own_profile).patch(update_own_profile))
        .route(USER_PROFILE_PATH, put(save_own_profile))
        .route(USER_LANG_PATH, get(own_language))
        .route(USER_LANGUAGE_PATH, put(update_language))
        .route(USER_PROFILE_PICTURE_PATH, patch(update_profile_picture))
        .route(USER_DELETE_PROFILE_PICTURE_PATH, patch(delete_profile_picture))
        .route(USER_EMAIL_NOTIFICATIONS_PATH, get(email_notification_options))
        .route(USER_ROLES_PATH, get(role_options))
        .route(USER_REASONS_PATH, get(deactivation_reasons));

    // Management endpoints
    let management_routes = Router::new()
        .route(USER_STATUS_PATH, patch(update_status))
        .route(USER_ROLE_BY_ID_PATH, patch(update_role))
        .route(USER_BY_ID_PATH, put(management_update))
        .route(USER_LAST_ACTIVITY_PATH, put(force_last_activity))
        .route(USER_ALL_PATH, get(list_users))
        .route(USER_FILTER_PATH, post(filter_users))
        .route(USER_FIND_FOR_MANAGEMENT_PATH, get(management_list))
        .route(USER_SEARCH_PATH, post(management_search))
        .route(USER_SEARCH_BY_PATH, get(search_by))
        .route(USER_DEACTIVATE_ALL_PATH, put(deactivate_all))
        .route(USER_DELETE_DEACTIVATED_PATH, post(schedule_delete_deactivated))
        .route(USER_IS_ONLINE_PATH, get(is_online))
        .route(USER_FIND_BY_EMAIL_PATH, get(find_by_email))
        .route(USER_FIND_BY_ID_PATH, get(find_by_id))
        .route(USER_FIND_ALL_PATH, get(find_all))
        .route(USER_FIND_ALL_BY_NOTIFICATION_PATH, get(find_all_by_email_notification))
        .route(USER_ACTIVATED_AMOUNT_PATH, get(activated_users_amount));

    // Health and docs sit at the root, outside the gate
    let root_routes = Router::new()
        .route(SERVICE_HEALTH_PATH, get(health_check))
        .merge(SwaggerUi::new(SERVICE_DOCS_PATH).url("/api-doc/openapi.json", ApiDoc::openapi()));

    Router::new()
        .merge(user_routes)
        .merge(management_routes)
        .merge(root_routes)
        .with_state(state)
}
