use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Duration, NaiveDateTime, Utc};
use tokio::sync::RwLock;

use crate::entities::{
    EmailNotification, ManagementCriteria, ManagementUpdate, PictureUpload, ProfileUpdate, Role,
    User, UserFilter, UserProfile, UserStatus,
};
use crate::errors_service::UserServiceError;
use crate::paging::{Direction, Page, PageRequest, Sort};
use crate::service::UserService;

/// Minutes of inactivity after which a user stops counting as online.
const ONLINE_WINDOW_MINUTES: i64 = 5;

/// Languages a profile can switch to, keyed by their wire id.
const LANGUAGES: &[(i64, &str)] = &[(1, "en"), (2, "ua"), (3, "de")];

/// User store backed by a map, used for local runs and as the reference
/// implementation for the service contract.
pub struct InMemoryUserService {
    users: RwLock<HashMap<i64, User>>,
}

impl Default for InMemoryUserService {
    fn default() -> Self {
        Self::new()
    }
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

fn base_user(id: i64, name: &str, email: &str, role: Role, status: UserStatus) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
        email_notification: EmailNotification::Disabled,
        language_code: "en".to_string(),
        city: None,
        user_credo: None,
        profile_picture_path: None,
        show_location: false,
        show_contacts: false,
        show_activity: false,
        deactivation_reasons: vec![],
        last_activity_time: now(),
        date_of_registration: now(),
    }
}

fn apply_sort(users: &mut [User], sort: &Sort) {
    users.sort_by(|a, b| {
        let ordering = compare_by_property(a, b, &sort.property);
        match sort.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    });
}

fn compare_by_property(a: &User, b: &User, property: &str) -> Ordering {
    match property {
        "name" => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        "email" => a.email.cmp(&b.email),
        "userCredo" => a.user_credo.cmp(&b.user_credo),
        "role" => a.role.as_str().cmp(b.role.as_str()),
        "userStatus" => a.status.as_str().cmp(b.status.as_str()),
        _ => a.id.cmp(&b.id),
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn matches_criteria(user: &User, criteria: &ManagementCriteria) -> bool {
    let field_matches = |value: &Option<String>, actual: &str| match value {
        Some(wanted) if !wanted.is_empty() => contains_ignore_case(actual, wanted),
        _ => true,
    };

    field_matches(&criteria.id, &user.id.to_string())
        && field_matches(&criteria.name, &user.name)
        && field_matches(&criteria.email, &user.email)
        && field_matches(&criteria.user_credo, user.user_credo.as_deref().unwrap_or(""))
        && field_matches(&criteria.role, user.role.as_str())
        && field_matches(&criteria.status, user.status.as_str())
}

impl InMemoryUserService {
    pub fn new() -> Self {
        InMemoryUserService {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// A store with a handful of accounts, enough to click through the
    /// API locally without a registration flow.
    pub fn seeded() -> Self {
        let mut admin = base_user(
            1,
            "Taras Melnyk",
            "taras.melnyk@example.com",
            Role::Admin,
            UserStatus::Activated,
        );
        admin.email_notification = EmailNotification::Weekly;
        admin.city = Some("Lviv".to_string());

        let mut anna = base_user(
            2,
            "Anna Kovalenko",
            "anna.kovalenko@example.com",
            Role::User,
            UserStatus::Activated,
        );
        anna.user_credo = Some("Leave it better than you found it".to_string());
        anna.email_notification = EmailNotification::Daily;

        let mut mark = base_user(
            3,
            "Mark Danyliuk",
            "mark.danyliuk@example.com",
            Role::User,
            UserStatus::Deactivated,
        );
        mark.deactivation_reasons = vec!["No longer using the platform".to_string()];
        mark.last_activity_time = now() - Duration::days(30);

        let users = [admin, anna, mark]
            .into_iter()
            .map(|user| (user.id, user))
            .collect();
        InMemoryUserService {
            users: RwLock::new(users),
        }
    }

    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }

    async fn collect_sorted(
        &self,
        request: &PageRequest,
        keep: impl Fn(&User) -> bool,
    ) -> Vec<User> {
        let users = self.users.read().await;
        let mut selected: Vec<User> = users.values().filter(|u| keep(u)).cloned().collect();
        selected.sort_by_key(|u| u.id);
        if let Some(sort) = &request.sort {
            apply_sort(&mut selected, sort);
        }
        selected
    }

    async fn modify_by_id(
        &self,
        id: i64,
        change: impl FnOnce(&mut User),
    ) -> Result<User, UserServiceError> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&id)
            .ok_or_else(|| UserServiceError::user_by_id(id))?;
        change(user);
        Ok(user.clone())
    }

    async fn modify_by_email(
        &self,
        email: &str,
        change: impl FnOnce(&mut User),
    ) -> Result<User, UserServiceError> {
        let mut users = self.users.write().await;
        let user = users
            .values_mut()
            .find(|u| u.email == email)
            .ok_or_else(|| UserServiceError::user_by_email(email))?;
        change(user);
        Ok(user.clone())
    }
}

#[async_trait]
impl UserService for InMemoryUserService {
    async fn find_by_id(&self, id: i64) -> Result<User, UserServiceError> {
        self.users
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| UserServiceError::user_by_id(id))
    }

    async fn find_by_email(&self, email: &str) -> Result<User, UserServiceError> {
        self.users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned()
            .ok_or_else(|| UserServiceError::user_by_email(email))
    }

    async fn find_all(&self) -> Result<Vec<User>, UserServiceError> {
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by_key(|u| u.id);
        Ok(all)
    }

    async fn find_all_by_email_notification(
        &self,
        notification: EmailNotification,
    ) -> Result<Vec<User>, UserServiceError> {
        let users = self.users.read().await;
        let mut matching: Vec<User> = users
            .values()
            .filter(|u| u.email_notification == notification)
            .cloned()
            .collect();
        matching.sort_by_key(|u| u.id);
        Ok(matching)
    }

    async fn activated_users_amount(&self) -> Result<u64, UserServiceError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .filter(|u| u.status == UserStatus::Activated)
            .count() as u64)
    }

    async fn is_online(&self, user_id: i64) -> Result<bool, UserServiceError> {
        let users = self.users.read().await;
        let user = users
            .get(&user_id)
            .ok_or_else(|| UserServiceError::user_by_id(user_id))?;
        let cutoff = now() - Duration::minutes(ONLINE_WINDOW_MINUTES);
        Ok(user.last_activity_time > cutoff)
    }

    async fn deactivation_reasons(
        &self,
        user_id: i64,
        _language: &str,
    ) -> Result<Vec<String>, UserServiceError> {
        let users = self.users.read().await;
        let user = users
            .get(&user_id)
            .ok_or_else(|| UserServiceError::user_by_id(user_id))?;
        Ok(user.deactivation_reasons.clone())
    }

    async fn find_by_page(&self, request: PageRequest) -> Result<Page<User>, UserServiceError> {
        let selected = self.collect_sorted(&request, |_| true).await;
        Ok(Page::from_vec(selected, &request))
    }

    async fn find_user_for_management(
        &self,
        request: PageRequest,
    ) -> Result<Page<User>, UserServiceError> {
        self.find_by_page(request).await
    }

    async fn search(
        &self,
        request: PageRequest,
        criteria: ManagementCriteria,
    ) -> Result<Page<User>, UserServiceError> {
        let selected = self
            .collect_sorted(&request, |u| matches_criteria(u, &criteria))
            .await;
        Ok(Page::from_vec(selected, &request))
    }

    async fn search_by(
        &self,
        request: PageRequest,
        query: &str,
    ) -> Result<Page<User>, UserServiceError> {
        let selected = self
            .collect_sorted(&request, |u| {
                contains_ignore_case(&u.name, query)
                    || contains_ignore_case(&u.email, query)
                    || u.city
                        .as_deref()
                        .is_some_and(|city| contains_ignore_case(city, query))
                    || u.user_credo
                        .as_deref()
                        .is_some_and(|credo| contains_ignore_case(credo, query))
            })
            .await;
        Ok(Page::from_vec(selected, &request))
    }

    async fn filter(
        &self,
        filter: UserFilter,
        request: PageRequest,
    ) -> Result<Page<User>, UserServiceError> {
        let selected = self
            .collect_sorted(&request, |u| match filter.search_text.as_deref() {
                Some(text) if !text.is_empty() => {
                    contains_ignore_case(&u.name, text) || contains_ignore_case(&u.email, text)
                }
                _ => true,
            })
            .await;
        Ok(Page::from_vec(selected, &request))
    }

    async fn user_update_info(&self, email: &str) -> Result<ProfileUpdate, UserServiceError> {
        let user = self.find_by_email(email).await?;
        Ok(ProfileUpdate {
            name: user.name,
            email_notification: user.email_notification,
        })
    }

    async fn update_profile(
        &self,
        update: ProfileUpdate,
        email: &str,
    ) -> Result<User, UserServiceError> {
        self.modify_by_email(email, |user| {
            user.name = update.name;
            user.email_notification = update.email_notification;
        })
        .await
    }

    async fn save_profile(
        &self,
        profile: UserProfile,
        email: &str,
    ) -> Result<User, UserServiceError> {
        self.modify_by_email(email, |user| {
            user.name = profile.name;
            user.city = profile.city;
            user.user_credo = profile.user_credo;
            user.show_location = profile.show_location;
            user.show_contacts = profile.show_contacts;
            user.show_activity = profile.show_activity;
        })
        .await
    }

    async fn update_language(
        &self,
        user_id: i64,
        language_id: i64,
    ) -> Result<(), UserServiceError> {
        let code = LANGUAGES
            .iter()
            .find(|(id, _)| *id == language_id)
            .map(|(_, code)| *code)
            .ok_or_else(|| UserServiceError::language(language_id))?;
        self.modify_by_id(user_id, |user| {
            user.language_code = code.to_string();
        })
        .await?;
        Ok(())
    }

    async fn update_profile_picture(
        &self,
        picture: PictureUpload,
        email: &str,
    ) -> Result<User, UserServiceError> {
        if picture.base64.is_empty() {
            return Err(UserServiceError::Validation(
                "profile picture payload is empty".to_string(),
            ));
        }
        self.modify_by_email(email, |user| {
            user.profile_picture_path = Some(format!("pictures/user-{}.png", user.id));
        })
        .await
    }

    async fn delete_profile_picture(&self, email: &str) -> Result<(), UserServiceError> {
        self.modify_by_email(email, |user| {
            user.profile_picture_path = None;
        })
        .await?;
        Ok(())
    }

    async fn update_status(
        &self,
        id: i64,
        status: UserStatus,
        updater_email: &str,
    ) -> Result<User, UserServiceError> {
        let updated = self
            .modify_by_id(id, |user| {
                user.status = status;
            })
            .await?;
        tracing::info!(
            user_id = id,
            status = %status,
            updater = updater_email,
            "user status updated"
        );
        Ok(updated)
    }

    async fn update_role(
        &self,
        id: i64,
        role: Role,
        updater_email: &str,
    ) -> Result<User, UserServiceError> {
        let updated = self
            .modify_by_id(id, |user| {
                user.role = role;
            })
            .await?;
        tracing::info!(user_id = id, role = %role, updater = updater_email, "user role updated");
        Ok(updated)
    }

    async fn update_user(
        &self,
        id: i64,
        update: ManagementUpdate,
    ) -> Result<User, UserServiceError> {
        self.modify_by_id(id, |user| {
            user.name = update.name;
            user.email = update.email;
            user.user_credo = update.user_credo;
            user.role = update.role;
            user.status = update.status;
        })
        .await
    }

    async fn update_last_activity(
        &self,
        user_id: i64,
        time: NaiveDateTime,
    ) -> Result<(), UserServiceError> {
        self.modify_by_id(user_id, |user| {
            user.last_activity_time = time;
        })
        .await?;
        Ok(())
    }

    async fn deactivate_all(&self, ids: Vec<i64>) -> Result<Vec<i64>, UserServiceError> {
        let mut users = self.users.write().await;
        for id in &ids {
            if let Some(user) = users.get_mut(id) {
                user.status = UserStatus::Deactivated;
            }
        }
        Ok(ids)
    }

    async fn schedule_delete_deactivated(&self) -> Result<u64, UserServiceError> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|_, user| user.status != UserStatus::Deactivated);
        let removed = (before - users.len()) as u64;
        tracing::info!(removed, "deactivated users scheduled for deletion");
        Ok(removed)
    }

    async fn role_options(&self) -> Result<Vec<Role>, UserServiceError> {
        Ok(Role::ALL.to_vec())
    }

    async fn email_notification_options(
        &self,
    ) -> Result<Vec<EmailNotification>, UserServiceError> {
        Ok(EmailNotification::ALL.to_vec())
    }
}
