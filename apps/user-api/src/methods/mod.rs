pub mod entities;
pub mod routes;

pub mod health_check;

// Self-service
pub mod deactivation_reasons;
pub mod delete_profile_picture;
pub mod email_notification_options;
pub mod own_language;
pub mod role_options;
pub mod save_own_profile;
pub mod update_language;
pub mod update_own_profile;
pub mod update_profile_picture;
pub mod view_own_profile;

// Management
pub mod activated_users_amount;
pub mod deactivate_all;
pub mod filter_users;
pub mod find_all;
pub mod find_all_by_email_notification;
pub mod find_by_email;
pub mod find_by_id;
pub mod force_last_activity;
pub mod is_online;
pub mod list_users;
pub mod management_list;
pub mod management_search;
pub mod management_update;
pub mod schedule_delete_deactivated;
pub mod search_by;
pub mod update_role;
pub mod update_status;
