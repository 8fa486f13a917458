use crate::{error::Result, message::message_models::Message};
use sqlx::PgPool;

#[derive(Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, sender_id: i32, receiver_id: i32, content: &str) -> Result<Message> {
        let message = sqlx::query_as::<_, Message>(
            "INSERT INTO messages (sender_id, receiver_id, content)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(sender_id)
        .bind(receiver_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    pub async fn find_all(&self) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>("SELECT * FROM messages ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(messages)
    }
}
