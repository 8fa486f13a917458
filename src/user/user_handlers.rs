use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::Result,
    middleware::ValidatedJson,
    response::ApiMessage,
    state::AppState,
};
use super::{
    user_dto::UpdateProfileRequest,
    user_models::ProfileResponse,
};

/// Get a user's public profile
#[utoipa::path(
    get,
    path = "/api/profile/{username}",
    tag = "profile",
    params(
        ("username" = String, Path, description = "Exact, case-sensitive username")
    ),
    responses(
        (status = 200, description = "Profile retrieved successfully", body = ProfileResponse),
        (status = 404, description = "User not found", body = ApiMessage)
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse> {
    let profile = state.user_service.get_profile(&username).await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// Update a user's location and/or languages
#[utoipa::path(
    post,
    path = "/api/profile/{username}",
    tag = "profile",
    params(
        ("username" = String, Path, description = "Exact, case-sensitive username")
    ),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated successfully", body = ApiMessage),
        (status = 400, description = "Invalid input", body = ApiMessage),
        (status = 404, description = "User not found", body = ApiMessage)
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateProfileRequest>,
) -> Result<impl IntoResponse> {
    state.user_service.update_profile(&username, payload).await?;

    Ok((
        StatusCode::OK,
        Json(ApiMessage::new("Profile updated successfully.")),
    ))
}
