use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::{auth::password::PasswordHash, error::Result};

/// A registered user. The password is only reachable through
/// `set_password`/`verify_password`; nothing here serializes the digest.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub location: Option<String>,
    pub languages: Option<String>,
    password_hash: Option<PasswordHash>,
}

impl User {
    pub fn set_password(&mut self, plaintext: &str, cost: u32) -> Result<()> {
        self.password_hash = Some(PasswordHash::generate(plaintext, cost)?);
        Ok(())
    }

    pub fn verify_password(&self, plaintext: &str) -> bool {
        self.password_hash
            .as_ref()
            .map(|hash| hash.verify(plaintext))
            .unwrap_or(false)
    }

    pub(crate) fn password_hash(&self) -> Option<&PasswordHash> {
        self.password_hash.as_ref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub username: String,
    pub email: String,
    pub location: Option<String>,
    pub languages: Option<String>,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            email: user.email,
            location: user.location,
            languages: user.languages,
        }
    }
}
