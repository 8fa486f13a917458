use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::Result,
    middleware::ValidatedJson,
    response::ApiMessage,
    state::AppState,
};
use super::auth_dto::{LoginRequest, RegisterRequest};

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = ApiMessage),
        (status = 400, description = "Invalid input or user already exists", body = ApiMessage)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse> {
    state
        .auth_service
        .register(&payload.username, &payload.email, &payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiMessage::new("User registered successfully.")),
    ))
}

/// Check a username/password pair
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiMessage),
        (status = 400, description = "Invalid input", body = ApiMessage),
        (status = 401, description = "Incorrect username or password", body = ApiMessage)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse> {
    state
        .auth_service
        .login(&payload.username, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(ApiMessage::new("Login successful."))))
}
