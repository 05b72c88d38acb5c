mod support;

use axum::http::StatusCode;
use chrono::{Duration, NaiveDate, Utc};
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;

use user_api::auth::Claims;
use user_lib::entities::Role;

use support::{
    admin_bearer, bearer, body_json, empty_request, json_request, picture_request, send,
    sample_user, test_app, user_bearer, MockUserApi,
};

/// Every route behind the gate, with the method it is mounted on.
const GATED_ROUTES: &[(&str, &str)] = &[
    ("GET", "/user"),
    ("PATCH", "/user"),
    ("PUT", "/user/profile"),
    ("GET", "/user/lang"),
    ("PUT", "/user/language/1"),
    ("PATCH", "/user/profilePicture"),
    ("PATCH", "/user/deleteProfilePicture"),
    ("GET", "/user/emailNotifications"),
    ("GET", "/user/roles"),
    ("GET", "/user/reasons"),
    ("PATCH", "/user/status"),
    ("PATCH", "/user/7/role"),
    ("PUT", "/user/7"),
    ("PUT", "/user/updateUserLastActivityTime/2024-03-01T10:00:00"),
    ("GET", "/user/all"),
    ("POST", "/user/filter"),
    ("GET", "/user/findUserForManagement"),
    ("POST", "/user/search"),
    ("GET", "/user/searchBy"),
    ("PUT", "/user/deactivateAll"),
    ("POST", "/user/deleteDeactivatedUsers"),
    ("GET", "/user/isOnline/7"),
    ("GET", "/user/findByEmail"),
    ("GET", "/user/findById"),
    ("GET", "/user/findAll"),
    ("GET", "/user/findAllByEmailNotification"),
    ("GET", "/user/activatedUsersAmount"),
];

const ADMIN_ONLY_ROUTES: &[(&str, &str)] = &[
    ("PATCH", "/user/status"),
    ("PATCH", "/user/7/role"),
    ("PUT", "/user/7"),
    ("PUT", "/user/updateUserLastActivityTime/2024-03-01T10:00:00"),
    ("GET", "/user/all"),
    ("POST", "/user/filter"),
    ("GET", "/user/findUserForManagement"),
    ("POST", "/user/search"),
    ("GET", "/user/searchBy"),
    ("PUT", "/user/deactivateAll"),
    ("POST", "/user/deleteDeactivatedUsers"),
    ("GET", "/user/isOnline/7"),
    ("GET", "/user/findByEmail"),
    ("GET", "/user/findById"),
    ("GET", "/user/findAll"),
    ("GET", "/user/findAllByEmailNotification"),
    ("GET", "/user/activatedUsersAmount"),
];

// ==================== ANONYMOUS REQUEST TESTS ====================
//
// The service doubles carry no expectations, so any call that slips
// past the gate panics the test.

#[tokio::test]
async fn test_anonymous_request_refused_on_every_gated_route() {
    for (method, path) in GATED_ROUTES {
        let response = send(
            test_app(MockUserApi::new()),
            empty_request(method, path, None),
        )
        .await;
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{method} {path} should refuse anonymous callers"
        );
    }
}

#[tokio::test]
async fn test_anonymous_refusal_has_error_body() {
    let response = send(test_app(MockUserApi::new()), empty_request("GET", "/user", None)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "unauthenticated");
    assert_eq!(body["message"], "authentication required");
}

#[tokio::test]
async fn test_anonymous_multipart_upload_refused_before_parsing() {
    let response = send(
        test_app(MockUserApi::new()),
        picture_request("/user/profilePicture", None, "aGVsbG8="),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ==================== CREDENTIAL QUALITY TESTS ====================

#[tokio::test]
async fn test_garbage_token_refused() {
    let response = send(
        test_app(MockUserApi::new()),
        empty_request("GET", "/user", Some("Bearer not.a.token")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_foreign_secret_refused() {
    let claims = Claims::new("spoof@example.com", &[Role::Admin], Duration::hours(1));
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"not-the-shared-secret"),
    )
    .unwrap();

    let response = send(
        test_app(MockUserApi::new()),
        empty_request("GET", "/user/all", Some(&format!("Bearer {token}"))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_refused() {
    let mut claims = Claims::new("late@example.com", &[Role::Admin], Duration::hours(1));
    claims.iat = (Utc::now() - Duration::hours(3)).timestamp();
    claims.exp = (Utc::now() - Duration::hours(2)).timestamp();
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(support::TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let response = send(
        test_app(MockUserApi::new()),
        empty_request("GET", "/user", Some(&format!("Bearer {token}"))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_non_bearer_scheme_refused() {
    let response = send(
        test_app(MockUserApi::new()),
        empty_request("GET", "/user", Some("Basic dXNlcjpwYXNz")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ==================== ROLE ENFORCEMENT TESTS ====================

#[tokio::test]
async fn test_non_admin_roles_refused_on_management_routes() {
    for role in [Role::User, Role::Moderator, Role::Employee, Role::UbsEmployee] {
        let auth = bearer("worker@example.com", &[role]);
        for (method, path) in ADMIN_ONLY_ROUTES {
            let response = send(
                test_app(MockUserApi::new()),
                empty_request(method, path, Some(&auth)),
            )
            .await;
            assert_eq!(
                response.status(),
                StatusCode::FORBIDDEN,
                "{method} {path} should refuse {role}"
            );
        }
    }
}

#[tokio::test]
async fn test_forbidden_refusal_has_error_body() {
    let response = send(
        test_app(MockUserApi::new()),
        empty_request("GET", "/user/all", Some(&user_bearer())),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["error"], "forbidden");
    assert_eq!(body["message"], "insufficient role for this operation");
}

#[tokio::test]
async fn test_admin_passes_management_route() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();

    let mut service = MockUserApi::new();
    service
        .expect_find_by_email()
        .withf(|email| email == "admin@example.com")
        .times(1)
        .returning(|_| Ok(sample_user(7)));
    service
        .expect_update_last_activity()
        .withf(move |user_id, time| *user_id == 7 && *time == date)
        .times(1)
        .returning(|_, _| Ok(()));

    let response = send(
        test_app(service),
        empty_request(
            "PUT",
            "/user/updateUserLastActivityTime/2024-03-01T10:00:00",
            Some(&admin_bearer()),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_every_role_passes_self_service_routes() {
    for role in Role::ALL {
        let mut service = MockUserApi::new();
        service
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(sample_user(3)));

        let auth = bearer("anyone@example.com", &[role]);
        let response = send(
            test_app(service),
            empty_request("GET", "/user/lang", Some(&auth)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK, "{role} on GET /user/lang");
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"en");
    }
}

#[tokio::test]
async fn test_token_with_unknown_roles_only_is_authenticated_not_admin() {
    let mut claims = Claims::new("odd@example.com", &[], Duration::hours(1));
    claims.roles.push("ROLE_WIZARD".to_string());
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(support::TEST_SECRET.as_bytes()),
    )
    .unwrap();
    let auth = format!("Bearer {token}");

    // Authenticated is enough for self-service
    let mut service = MockUserApi::new();
    service
        .expect_find_by_email()
        .times(1)
        .returning(|_| Ok(sample_user(3)));
    let response = send(
        test_app(service),
        empty_request("GET", "/user/lang", Some(&auth)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // but not for management
    let response = send(
        test_app(MockUserApi::new()),
        empty_request("GET", "/user/all", Some(&auth)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ==================== REFUSAL ORDER TESTS ====================

#[tokio::test]
async fn test_missing_token_wins_over_malformed_body() {
    let mut service = MockUserApi::new();
    service.expect_update_status().times(0);

    let response = send(
        test_app(service),
        json_request("PATCH", "/user/status", None, &json!("not an object")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_insufficient_role_wins_over_malformed_body() {
    let mut service = MockUserApi::new();
    service.expect_update_status().times(0);

    let response = send(
        test_app(service),
        json_request(
            "PATCH",
            "/user/status",
            Some(&user_bearer()),
            &json!("not an object"),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_body_is_judged_only_after_the_gate_opens() {
    let mut service = MockUserApi::new();
    service.expect_update_status().times(0);

    let response = send(
        test_app(service),
        json_request(
            "PATCH",
            "/user/status",
            Some(&admin_bearer()),
            &json!("not an object"),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_token_wins_over_bad_path_segment() {
    let response = send(
        test_app(MockUserApi::new()),
        empty_request("PUT", "/user/language/abc", None),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_bad_path_segment_rejected_after_authentication() {
    let response = send(
        test_app(MockUserApi::new()),
        empty_request("PUT", "/user/language/abc", Some(&user_bearer())),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "language_id must be a number");
}

// ==================== OPEN ROUTE TESTS ====================

#[tokio::test]
async fn test_health_needs_no_token() {
    let response = send(test_app(MockUserApi::new()), empty_request("GET", "/health", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn test_docs_need_no_token() {
    let response = send(test_app(MockUserApi::new()), empty_request("GET", "/docs", None)).await;

    let status = response.status();
    assert!(
        status.is_success() || status.is_redirection(),
        "unexpected status {status} for /docs"
    );
}
