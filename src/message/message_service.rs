use crate::error::{AppError, Result};
use crate::message::message_dto::SendMessageRequest;
use crate::message::message_models::Message;
use crate::message::message_repository::MessageRepository;
use crate::user::user_repository::UserRepository;

#[derive(Clone)]
pub struct MessageService {
    repo: MessageRepository,
    user_repo: UserRepository,
}

impl MessageService {
    pub fn new(repo: MessageRepository, user_repo: UserRepository) -> Self {
        Self { repo, user_repo }
    }

    /// Stores a message after checking that both ends are registered users.
    pub async fn send_message(&self, payload: SendMessageRequest) -> Result<Message> {
        if self.user_repo.find_by_id(payload.sender_id).await?.is_none() {
            return Err(AppError::Validation("Sender not found.".to_string()));
        }
        if self.user_repo.find_by_id(payload.receiver_id).await?.is_none() {
            return Err(AppError::Validation("Receiver not found.".to_string()));
        }

        let message = self
            .repo
            .create(payload.sender_id, payload.receiver_id, &payload.content)
            .await?;

        tracing::info!(
            message_id = message.id,
            sender_id = message.sender_id,
            receiver_id = message.receiver_id,
            "Message stored"
        );

        Ok(message)
    }

    pub async fn list_messages(&self) -> Result<Vec<Message>> {
        self.repo.find_all().await
    }
}
