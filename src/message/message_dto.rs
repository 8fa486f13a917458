use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Clone, Debug, Deserialize, Validate, ToSchema)]
pub struct SendMessageRequest {
    pub sender_id: i32,
    pub receiver_id: i32,
    #[validate(length(min = 1))]
    pub content: String,
}
