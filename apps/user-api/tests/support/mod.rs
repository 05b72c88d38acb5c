#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use mockall::mock;
use secrecy::Secret;
use tower::ServiceExt;

use user_api::app::app;
use user_api::auth::{Claims, JwtVerifier};
use user_api::state::AppState;
use user_lib::entities::{
    EmailNotification, ManagementCriteria, ManagementUpdate, PictureUpload, ProfileUpdate, Role,
    User, UserFilter, UserProfile, UserStatus,
};
use user_lib::errors_service::UserServiceError;
use user_lib::paging::{Page, PageRequest};
use user_lib::service::UserService;

/// Shared secret between the token mint below and the app verifier.
pub const TEST_SECRET: &str = "integration-test-secret";

// ==================== MOCKS ====================

mock! {
    pub UserApi {}

    #[async_trait]
    impl UserService for UserApi {
        async fn find_by_id(&self, id: i64) -> Result<User, UserServiceError>;
        async fn find_by_email(&self, email: &str) -> Result<User, UserServiceError>;
        async fn find_all(&self) -> Result<Vec<User>, UserServiceError>;
        async fn find_all_by_email_notification(&self, notification: EmailNotification) -> Result<Vec<User>, UserServiceError>;
        async fn activated_users_amount(&self) -> Result<u64, UserServiceError>;
        async fn is_online(&self, user_id: i64) -> Result<bool, UserServiceError>;
        async fn deactivation_reasons(&self, user_id: i64, language: &str) -> Result<Vec<String>, UserServiceError>;
        async fn find_by_page(&self, request: PageRequest) -> Result<Page<User>, UserServiceError>;
        async fn find_user_for_management(&self, request: PageRequest) -> Result<Page<User>, UserServiceError>;
        async fn search(&self, request: PageRequest, criteria: ManagementCriteria) -> Result<Page<User>, UserServiceError>;
        async fn search_by(&self, request: PageRequest, query: &str) -> Result<Page<User>, UserServiceError>;
        async fn filter(&self, filter: UserFilter, request: PageRequest) -> Result<Page<User>, UserServiceError>;
        async fn user_update_info(&self, email: &str) -> Result<ProfileUpdate, UserServiceError>;
        async fn update_profile(&self, update: ProfileUpdate, email: &str) -> Result<User, UserServiceError>;
        async fn save_profile(&self, profile: UserProfile, email: &str) -> Result<User, UserServiceError>;
        async fn update_language(&self, user_id: i64, language_id: i64) -> Result<(), UserServiceError>;
        async fn update_profile_picture(&self, picture: PictureUpload, email: &str) -> Result<User, UserServiceError>;
        async fn delete_profile_picture(&self, email: &str) -> Result<(), UserServiceError>;
        async fn update_status(&self, id: i64, status: UserStatus, updater_email: &str) -> Result<User, UserServiceError>;
        async fn update_role(&self, id: i64, role: Role, updater_email: &str) -> Result<User, UserServiceError>;
        async fn update_user(&self, id: i64, update: ManagementUpdate) -> Result<User, UserServiceError>;
        async fn update_last_activity(&self, user_id: i64, time: NaiveDateTime) -> Result<(), UserServiceError>;
        async fn deactivate_all(&self, ids: Vec<i64>) -> Result<Vec<i64>, UserServiceError>;
        async fn schedule_delete_deactivated(&self) -> Result<u64, UserServiceError>;
        async fn role_options(&self) -> Result<Vec<Role>, UserServiceError>;
        async fn email_notification_options(&self) -> Result<Vec<EmailNotification>, UserServiceError>;
    }
}

// ==================== TEST HELPERS ====================

/// App wired to the given service double and a verifier that accepts
/// tokens minted by `bearer`.
pub fn test_app(service: MockUserApi) -> Router {
    let verifier = JwtVerifier::new(&Secret::new(TEST_SECRET.to_string()));
    app(AppState::new(Arc::new(service), Arc::new(verifier), "test"))
}

/// Mints an Authorization header value for the given caller.
pub fn bearer(email: &str, roles: &[Role]) -> String {
    let claims = Claims::new(email, roles, Duration::hours(1));
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();
    format!("Bearer {token}")
}

pub fn admin_bearer() -> String {
    bearer("admin@example.com", &[Role::Admin])
}

pub fn user_bearer() -> String {
    bearer("taras.melnyk@example.com", &[Role::User])
}

pub fn sample_user(id: i64) -> User {
    let registered = NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();
    User {
        id,
        name: format!("User {id}"),
        email: format!("user{id}@example.com"),
        role: Role::User,
        status: UserStatus::Activated,
        email_notification: EmailNotification::Weekly,
        language_code: "en".to_string(),
        city: Some("Lviv".to_string()),
        user_credo: None,
        profile_picture_path: None,
        show_location: true,
        show_contacts: false,
        show_activity: true,
        deactivation_reasons: vec![],
        last_activity_time: registered,
        date_of_registration: registered,
    }
}

pub fn empty_request(method: &str, path: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = auth {
        builder = builder.header(header::AUTHORIZATION, token);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn json_request(
    method: &str,
    path: &str,
    auth: Option<&str>,
    payload: &serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = auth {
        builder = builder.header(header::AUTHORIZATION, token);
    }
    builder.body(Body::from(payload.to_string())).unwrap()
}

/// Multipart body with a single `base64` part, the shape the profile
/// picture endpoint reads.
pub fn picture_request(path: &str, auth: Option<&str>, base64: &str) -> Request<Body> {
    let boundary = "picture-test-boundary";
    let body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"base64\"\r\n\r\n{base64}\r\n--{boundary}--\r\n"
    );
    let mut builder = Request::builder()
        .method("PATCH")
        .uri(path)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        );
    if let Some(token) = auth {
        builder = builder.header(header::AUTHORIZATION, token);
    }
    builder.body(Body::from(body)).unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
