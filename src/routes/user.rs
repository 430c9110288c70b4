use actix_web::{get, put, web};
use std::sync::Arc;
use tracing::info;

use crate::error::ApiError;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::user::{MAX_AGE, MIN_AGE};
use crate::models::Profile;
use crate::types::{UpdateProfileRequest, UserResponse};
use crate::AppState;

const MAX_DISPLAY_NAME_CHARS: usize = 50;

/// The signed-in user and their profile.
#[utoipa::path(
    tag = "user",
    responses(
        (status = 200, body = UserResponse),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "Profile not created yet"),
    )
)]
#[get("/user")]
pub async fn get_user(
    app_state: web::Data<Arc<AppState>>,
    authenticated_user: AuthenticatedUser,
) -> Result<web::Json<UserResponse>, ApiError> {
    let profile = app_state
        .profiles
        .get_profile(&authenticated_user.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))?;

    Ok(web::Json(UserResponse {
        id: authenticated_user.user_id,
        email: authenticated_user.email.or_else(|| profile.email.clone()),
        profile,
    }))
}

/// Create or update the profile collected during onboarding.
#[utoipa::path(
    tag = "user",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, body = Profile),
        (status = 400, description = "Missing name or unsupported age"),
        (status = 401, description = "Not signed in"),
    )
)]
#[put("/user/profile")]
pub async fn update_profile(
    app_state: web::Data<Arc<AppState>>,
    authenticated_user: AuthenticatedUser,
    web::Json(request): web::Json<UpdateProfileRequest>,
) -> Result<web::Json<Profile>, ApiError> {
    let display_name = request.display_name.trim();
    if display_name.is_empty() || display_name.chars().count() > MAX_DISPLAY_NAME_CHARS {
        return Err(ApiError::BadRequest(format!(
            "Display name must be between 1 and {} characters",
            MAX_DISPLAY_NAME_CHARS
        )));
    }
    if !Profile::age_is_supported(request.age) {
        return Err(ApiError::BadRequest(format!(
            "This platform is designed for youth aged {}-{}",
            MIN_AGE, MAX_AGE
        )));
    }

    let profile = app_state
        .profiles
        .upsert_profile(
            &authenticated_user.user_id,
            authenticated_user.email.as_deref(),
            display_name,
            request.age as i16,
        )
        .await?;

    info!("Saved profile for user {}", authenticated_user.user_id);
    Ok(web::Json(profile))
}
