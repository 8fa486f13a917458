use serde::Serialize;
use utoipa::ToSchema;

/// Status body shared by every non-data response, e.g. `{"Messages": "Login successful."}`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiMessage {
    #[serde(rename = "Messages")]
    pub messages: String,
}

impl ApiMessage {
    pub fn new(messages: impl Into<String>) -> Self {
        Self {
            messages: messages.into(),
        }
    }
}
