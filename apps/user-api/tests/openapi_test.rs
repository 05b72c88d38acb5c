use utoipa::OpenApi;

use user_api::app::ApiDoc;

#[test]
fn test_openapi_spec_has_all_endpoints() {
    let spec = ApiDoc::openapi();
    let json = spec.to_pretty_json().expect("Failed to generate OpenAPI JSON");

    let paths = spec.paths.paths;

    // Self-service endpoints
    assert!(paths.contains_key("/user"), "Missing /user path");
    assert!(paths.contains_key("/user/profile"), "Missing /user/profile path");
    assert!(paths.contains_key("/user/lang"), "Missing /user/lang path");
    assert!(
        paths.contains_key("/user/language/{language_id}"),
        "Missing /user/language path"
    );
    assert!(
        paths.contains_key("/user/profilePicture"),
        "Missing /user/profilePicture path"
    );
    assert!(
        paths.contains_key("/user/deleteProfilePicture"),
        "Missing /user/deleteProfilePicture path"
    );
    assert!(
        paths.contains_key("/user/emailNotifications"),
        "Missing /user/emailNotifications path"
    );
    assert!(paths.contains_key("/user/roles"), "Missing /user/roles path");
    assert!(paths.contains_key("/user/reasons"), "Missing /user/reasons path");

    // Management endpoints
    assert!(paths.contains_key("/user/status"), "Missing /user/status path");
    assert!(paths.contains_key("/user/{id}/role"), "Missing /user/{{id}}/role path");
    assert!(paths.contains_key("/user/{id}"), "Missing /user/{{id}} path");
    assert!(
        paths.contains_key("/user/updateUserLastActivityTime/{date}"),
        "Missing last activity path"
    );
    assert!(paths.contains_key("/user/all"), "Missing /user/all path");
    assert!(paths.contains_key("/user/filter"), "Missing /user/filter path");
    assert!(
        paths.contains_key("/user/findUserForManagement"),
        "Missing /user/findUserForManagement path"
    );
    assert!(paths.contains_key("/user/search"), "Missing /user/search path");
    assert!(paths.contains_key("/user/searchBy"), "Missing /user/searchBy path");
    assert!(
        paths.contains_key("/user/deactivateAll"),
        "Missing /user/deactivateAll path"
    );
    assert!(
        paths.contains_key("/user/deleteDeactivatedUsers"),
        "Missing /user/deleteDeactivatedUsers path"
    );
    assert!(
        paths.contains_key("/user/isOnline/{user_id}"),
        "Missing /user/isOnline path"
    );
    assert!(
        paths.contains_key("/user/findByEmail"),
        "Missing /user/findByEmail path"
    );
    assert!(paths.contains_key("/user/findById"), "Missing /user/findById path");
    assert!(paths.contains_key("/user/findAll"), "Missing /user/findAll path");
    assert!(
        paths.contains_key("/user/findAllByEmailNotification"),
        "Missing /user/findAllByEmailNotification path"
    );
    assert!(
        paths.contains_key("/user/activatedUsersAmount"),
        "Missing /user/activatedUsersAmount path"
    );

    // Verify HTTP methods for routes that carry more than one
    let user_path = paths.get("/user").unwrap();
    assert!(user_path.get.is_some(), "Missing GET /user");
    assert!(user_path.patch.is_some(), "Missing PATCH /user");

    let status_path = paths.get("/user/status").unwrap();
    assert!(status_path.patch.is_some(), "Missing PATCH /user/status");

    let by_id_path = paths.get("/user/{id}").unwrap();
    assert!(by_id_path.put.is_some(), "Missing PUT /user/{{id}}");

    // Verify schemas exist
    let schemas = &spec.components.as_ref().unwrap().schemas;
    assert!(
        schemas.contains_key("ProfileUpdateRequest"),
        "Missing ProfileUpdateRequest schema"
    );
    assert!(
        schemas.contains_key("ProfileSaveRequest"),
        "Missing ProfileSaveRequest schema"
    );
    assert!(
        schemas.contains_key("ManagementUpdateRequest"),
        "Missing ManagementUpdateRequest schema"
    );
    assert!(
        schemas.contains_key("UserStatusRequest"),
        "Missing UserStatusRequest schema"
    );
    assert!(
        schemas.contains_key("RoleUpdateRequest"),
        "Missing RoleUpdateRequest schema"
    );
    assert!(schemas.contains_key("UserResponse"), "Missing UserResponse schema");
    assert!(
        schemas.contains_key("ManagementUserResponse"),
        "Missing ManagementUserResponse schema"
    );
    assert!(schemas.contains_key("Role"), "Missing Role schema");
    assert!(schemas.contains_key("UserStatus"), "Missing UserStatus schema");
    assert!(
        schemas.contains_key("EmailNotification"),
        "Missing EmailNotification schema"
    );

    // Print the full spec for manual verification
    println!("OpenAPI Spec:\n{}", json);
}

#[test]
fn test_openapi_json_contains_tags() {
    let spec = ApiDoc::openapi();
    let json = spec.to_pretty_json().expect("Failed to generate OpenAPI JSON");

    assert!(json.contains("\"user\""), "Missing 'user' tag in JSON");
    assert!(json.contains("\"management\""), "Missing 'management' tag in JSON");
}
