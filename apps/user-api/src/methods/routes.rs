// Self-service routes
pub const USER_PATH: &str = "/user";
pub const USER_PROFILE_PATH: &str = "/user/profile";
pub const USER_LANG_PATH: &str = "/user/lang";
pub const USER_LANGUAGE_PATH: &str = "/user/language/{language_id}";
pub const USER_PROFILE_PICTURE_PATH: &str = "/user/profilePicture";
pub const USER_DELETE_PROFILE_PICTURE_PATH: &str = "/user/deleteProfilePicture";
pub const USER_EMAIL_NOTIFICATIONS_PATH: &str = "/user/emailNotifications";
pub const USER_ROLES_PATH: &str = "/user/roles";
pub const USER_REASONS_PATH: &str = "/user/reasons";

// Management routes
pub const USER_STATUS_PATH: &str = "/user/status";
pub const USER_ROLE_BY_ID_PATH: &str = "/user/{id}/role";
pub const USER_BY_ID_PATH: &str = "/user/{id}";
pub const USER_LAST_ACTIVITY_PATH: &str = "/user/updateUserLastActivityTime/{date}";
pub const USER_ALL_PATH: &str = "/user/all";
pub const USER_FILTER_PATH: &str = "/user/filter";
pub const USER_FIND_FOR_MANAGEMENT_PATH: &str = "/user/findUserForManagement";
pub const USER_SEARCH_PATH: &str = "/user/search";
pub const USER_SEARCH_BY_PATH: &str = "/user/searchBy";
pub const USER_DEACTIVATE_ALL_PATH: &str = "/user/deactivateAll";
pub const USER_DELETE_DEACTIVATED_PATH: &str = "/user/deleteDeactivatedUsers";
pub const USER_IS_ONLINE_PATH: &str = "/user/isOnline/{user_id}";
pub const USER_FIND_BY_EMAIL_PATH: &str = "/user/findByEmail";
pub const USER_FIND_BY_ID_PATH: &str = "/user/findById";
pub const USER_FIND_ALL_PATH: &str = "/user/findAll";
pub const USER_FIND_ALL_BY_NOTIFICATION_PATH: &str = "/user/findAllByEmailNotification";
pub const USER_ACTIVATED_AMOUNT_PATH: &str = "/user/activatedUsersAmount";

// Root-level service routes (outside the gate)
pub const SERVICE_HEALTH_PATH: &str = "/health";
pub const SERVICE_DOCS_PATH: &str = "/docs";
