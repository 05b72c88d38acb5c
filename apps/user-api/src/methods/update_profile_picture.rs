use axum::extract::{FromRequest, Multipart, Request, State};
use axum::Json;

use user_lib::entities::PictureUpload;

use crate::auth::Identity;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::UserResponse;
use crate::methods::routes::USER_PROFILE_PICTURE_PATH;
use crate::policy::{authorize, Operation};
use crate::state::AppState;

/// Pulls the `base64` and `image` parts out of the multipart form.
/// The multipart reader is built by hand instead of extracted so the
/// policy check always runs first, whatever the content type is.
async fn read_picture_upload(request: Request) -> Result<PictureUpload, ApiError> {
    let mut multipart = Multipart::from_request(request, &())
        .await
        .map_err(|_| ApiError::bad_request("expected multipart form data"))?;

    let mut base64: Option<String> = None;
    let mut image: Option<Vec<u8>> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("unreadable multipart field: {e}")))?
    {
        match field.name() {
            Some("base64") => {
                let text = field
                    .text()
                    .await
                    .map_err(|_| ApiError::bad_request("base64 part must be text"))?;
                base64 = Some(text);
            }
            Some("image") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| ApiError::bad_request("image part is unreadable"))?;
                image = Some(bytes.to_vec());
            }
            _ => {}
        }
    }

    let base64 = base64
        .filter(|b| !b.is_empty())
        .ok_or_else(|| ApiError::bad_request("base64 part is required"))?;
    Ok(PictureUpload { base64, image })
}

#[utoipa::path(
    patch,
    path = USER_PROFILE_PICTURE_PATH,
    tag = "user",
    responses(
        (status = 200, description = "Profile picture updated", body = UserResponse),
        (status = 400, description = "Missing base64 part or not a multipart form"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Caller has no user record"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn update_profile_picture(
    State(state): State<AppState>,
    identity: Identity,
    request: Request,
) -> Result<Json<UserResponse>, ApiError> {
    let principal = authorize(Operation::UpdateProfilePicture, identity.principal())?;
    let upload = read_picture_upload(request).await?;

    state
        .user_service
        .update_profile_picture(upload, &principal.email)
        .await
        .map(|user| Json(UserResponse::from(user)))
        .map_err(|e| handle_service_error(e, &state.env, "update_profile_picture"))
}
