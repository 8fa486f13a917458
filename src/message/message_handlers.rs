use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::Result,
    message::{message_dto::SendMessageRequest, message_models::Message},
    middleware::ValidatedJson,
    response::ApiMessage,
    state::AppState,
};

/// List every stored message in insertion order
#[utoipa::path(
    get,
    path = "/api/messages",
    tag = "messages",
    responses(
        (status = 200, description = "All messages", body = Vec<Message>)
    )
)]
pub async fn get_messages(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let messages = state.message_service.list_messages().await?;

    Ok((StatusCode::OK, Json(messages)))
}

/// Send a message from one user to another
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = "messages",
    request_body = SendMessageRequest,
    responses(
        (status = 201, description = "Message sent successfully", body = ApiMessage),
        (status = 400, description = "Invalid input or unknown sender/receiver", body = ApiMessage)
    )
)]
pub async fn send_message(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SendMessageRequest>,
) -> Result<impl IntoResponse> {
    state.message_service.send_message(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiMessage::new("Message sent successfully.")),
    ))
}
