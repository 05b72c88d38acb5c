use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::entities::{
    EmailNotification, ManagementCriteria, ManagementUpdate, PictureUpload, ProfileUpdate, Role,
    User, UserFilter, UserProfile, UserStatus,
};
use crate::errors_service::UserServiceError;
use crate::paging::{Page, PageRequest};

/// Everything the HTTP layer may ask of the user store. Implementations
/// decide how accounts are persisted; callers only see this surface.
#[async_trait]
pub trait UserService: Send + Sync {
    // Lookups
    async fn find_by_id(&self, id: i64) -> Result<User, UserServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<User, UserServiceError>;
    async fn find_all(&self) -> Result<Vec<User>, UserServiceError>;
    async fn find_all_by_email_notification(
        &self,
        notification: EmailNotification,
    ) -> Result<Vec<User>, UserServiceError>;
    async fn activated_users_amount(&self) -> Result<u64, UserServiceError>;
    async fn is_online(&self, user_id: i64) -> Result<bool, UserServiceError>;
    async fn deactivation_reasons(
        &self,
        user_id: i64,
        language: &str,
    ) -> Result<Vec<String>, UserServiceError>;

    // Listings
    async fn find_by_page(&self, request: PageRequest) -> Result<Page<User>, UserServiceError>;
    async fn find_user_for_management(
        &self,
        request: PageRequest,
    ) -> Result<Page<User>, UserServiceError>;
    async fn search(
        &self,
        request: PageRequest,
        criteria: ManagementCriteria,
    ) -> Result<Page<User>, UserServiceError>;
    async fn search_by(
        &self,
        request: PageRequest,
        query: &str,
    ) -> Result<Page<User>, UserServiceError>;
    async fn filter(
        &self,
        filter: UserFilter,
        request: PageRequest,
    ) -> Result<Page<User>, UserServiceError>;

    // Own profile
    async fn user_update_info(&self, email: &str) -> Result<ProfileUpdate, UserServiceError>;
    async fn update_profile(
        &self,
        update: ProfileUpdate,
        email: &str,
    ) -> Result<User, UserServiceError>;
    async fn save_profile(
        &self,
        profile: UserProfile,
        email: &str,
    ) -> Result<User, UserServiceError>;
    async fn update_language(
        &self,
        user_id: i64,
        language_id: i64,
    ) -> Result<(), UserServiceError>;
    async fn update_profile_picture(
        &self,
        picture: PictureUpload,
        email: &str,
    ) -> Result<User, UserServiceError>;
    async fn delete_profile_picture(&self, email: &str) -> Result<(), UserServiceError>;

    // Administration
    async fn update_status(
        &self,
        id: i64,
        status: UserStatus,
        updater_email: &str,
    ) -> Result<User, UserServiceError>;
    async fn update_role(
        &self,
        id: i64,
        role: Role,
        updater_email: &str,
    ) -> Result<User, UserServiceError>;
    async fn update_user(
        &self,
        id: i64,
        update: ManagementUpdate,
    ) -> Result<User, UserServiceError>;
    async fn update_last_activity(
        &self,
        user_id: i64,
        time: NaiveDateTime,
    ) -> Result<(), UserServiceError>;
    async fn deactivate_all(&self, ids: Vec<i64>) -> Result<Vec<i64>, UserServiceError>;
    async fn schedule_delete_deactivated(&self) -> Result<u64, UserServiceError>;

    // Wire vocabularies exposed to clients
    async fn role_options(&self) -> Result<Vec<Role>, UserServiceError>;
    async fn email_notification_options(
        &self,
    ) -> Result<Vec<EmailNotification>, UserServiceError>;
}
