use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use user_lib::entities::{
    EmailNotification, ManagementCriteria, ManagementUpdate, ProfileUpdate, Role, User,
    UserFilter, UserProfile, UserStatus,
};
use user_lib::paging::Page;

// ---------- Request bodies ----------

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserStatusRequest {
    pub id: i64,
    pub user_status: UserStatus,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RoleUpdateRequest {
    pub role: Role,
}

#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateRequest {
    #[validate(length(min = 1, max = 30, message = "must be 1 to 30 characters"))]
    pub name: String,
    pub email_notification: EmailNotification,
}

impl From<ProfileUpdateRequest> for ProfileUpdate {
    fn from(request: ProfileUpdateRequest) -> Self {
        ProfileUpdate {
            name: request.name,
            email_notification: request.email_notification,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSaveRequest {
    #[validate(length(min = 1, max = 30, message = "must be 1 to 30 characters"))]
    pub name: String,
    #[validate(length(max = 85, message = "must be at most 85 characters"))]
    pub city: Option<String>,
    #[validate(length(max = 170, message = "must be at most 170 characters"))]
    pub user_credo: Option<String>,
    #[serde(default)]
    pub show_location: bool,
    #[serde(default)]
    pub show_contacts: bool,
    #[serde(default)]
    pub show_activity: bool,
}

impl From<ProfileSaveRequest> for UserProfile {
    fn from(request: ProfileSaveRequest) -> Self {
        UserProfile {
            name: request.name,
            city: request.city,
            user_credo: request.user_credo,
            show_location: request.show_location,
            show_contacts: request.show_contacts,
            show_activity: request.show_activity,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ManagementUpdateRequest {
    #[validate(length(min = 1, max = 30, message = "must be 1 to 30 characters"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(max = 170, message = "must be at most 170 characters"))]
    pub user_credo: Option<String>,
    pub role: Role,
    pub user_status: UserStatus,
}

impl From<ManagementUpdateRequest> for ManagementUpdate {
    fn from(request: ManagementUpdateRequest) -> Self {
        ManagementUpdate {
            name: request.name,
            email: request.email,
            user_credo: request.user_credo,
            role: request.role,
            status: request.user_status,
        }
    }
}

/// Column criteria for the management search; every field is optional
/// and matched as a substring.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManagementSearchRequest {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub user_credo: Option<String>,
    pub role: Option<String>,
    pub user_status: Option<String>,
}

impl From<ManagementSearchRequest> for ManagementCriteria {
    fn from(request: ManagementSearchRequest) -> Self {
        ManagementCriteria {
            id: request.id,
            name: request.name,
            email: request.email,
            user_credo: request.user_credo,
            role: request.role,
            status: request.user_status,
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterRequest {
    pub search_text: Option<String>,
}

impl From<FilterRequest> for UserFilter {
    fn from(request: FilterRequest) -> Self {
        UserFilter {
            search_text: request.search_text,
        }
    }
}

// ---------- Query parameters ----------
//
// Every field is an optional string so that extraction itself can
// never fail; requiredness and types are enforced after the policy
// check by the validation helpers.

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PageQuery {
    pub page: Option<String>,
    pub size: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SearchByQuery {
    pub query: Option<String>,
    pub page: Option<String>,
    pub size: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct EmailQuery {
    pub email: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct IdQuery {
    pub id: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ReasonsQuery {
    pub id: Option<String>,
    pub lang: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct NotificationQuery {
    #[serde(rename = "emailNotification")]
    pub email_notification: Option<String>,
}

// ---------- Responses ----------

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub user_status: UserStatus,
    pub email_notification: EmailNotification,
    pub language_code: String,
    pub city: Option<String>,
    pub user_credo: Option<String>,
    pub profile_picture_path: Option<String>,
    pub last_activity_time: NaiveDateTime,
    pub date_of_registration: NaiveDateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            user_status: user.status,
            email_notification: user.email_notification,
            language_code: user.language_code,
            city: user.city,
            user_credo: user.user_credo,
            profile_picture_path: user.profile_picture_path,
            last_activity_time: user.last_activity_time,
            date_of_registration: user.date_of_registration,
        }
    }
}

/// Row shape used by the management table.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManagementUserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub user_credo: Option<String>,
    pub role: Role,
    pub user_status: UserStatus,
}

impl From<User> for ManagementUserResponse {
    fn from(user: User) -> Self {
        ManagementUserResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            user_credo: user.user_credo,
            role: user.role,
            user_status: user.status,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserStatusResponse {
    pub id: i64,
    pub user_status: UserStatus,
}

impl From<User> for UserStatusResponse {
    fn from(user: User) -> Self {
        UserStatusResponse {
            id: user.id,
            user_status: user.status,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoleUpdateResponse {
    pub id: i64,
    pub role: Role,
}

impl From<User> for RoleUpdateResponse {
    fn from(user: User) -> Self {
        RoleUpdateResponse {
            id: user.id,
            role: user.role,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateInfoResponse {
    pub name: String,
    pub email_notification: EmailNotification,
}

impl From<ProfileUpdate> for UserUpdateInfoResponse {
    fn from(info: ProfileUpdate) -> Self {
        UserUpdateInfoResponse {
            name: info.name,
            email_notification: info.email_notification,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoleOptionsResponse {
    pub roles: Vec<Role>,
}

/// Page envelope with the navigation flags management tables expect.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub page: Vec<T>,
    pub total_elements: u64,
    pub current_page: u32,
    pub total_pages: u32,
    pub number: u32,
    pub has_previous: bool,
    pub has_next: bool,
    pub first: bool,
    pub last: bool,
}

impl<T, U> From<Page<U>> for PageResponse<T>
where
    T: From<U>,
{
    fn from(page: Page<U>) -> Self {
        let total_pages = page.total_pages();
        let has_previous = page.has_previous();
        let has_next = page.has_next();
        let first = page.is_first();
        let last = page.is_last();
        PageResponse {
            total_elements: page.total_elements,
            current_page: page.page,
            number: page.page,
            total_pages,
            has_previous,
            has_next,
            first,
            last,
            page: page.items.into_iter().map(T::from).collect(),
        }
    }
}
