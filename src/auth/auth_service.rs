use crate::auth::password::PasswordHash;
use crate::error::{AppError, Result};
use crate::user::user_models::User;
use crate::user::user_repository::UserRepository;

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(user_repo: UserRepository, bcrypt_cost: u32) -> Self {
        Self {
            user_repo,
            bcrypt_cost,
        }
    }

    /// Creates the account unless the username or email is taken. A
    /// concurrent registration that slips past the check still fails on the
    /// unique index and surfaces as the same conflict.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<User> {
        if self.user_repo.find_by_username(username).await?.is_some()
            || self.user_repo.find_by_email(email).await?.is_some()
        {
            return Err(AppError::Conflict("User already exists.".into()));
        }

        let password_hash = PasswordHash::generate(password, self.bcrypt_cost)?;
        let user = self.user_repo.create(username, email, &password_hash).await?;

        tracing::info!(user_id = user.id, "Registered user {}", user.username);

        Ok(user)
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<User> {
        let user = self.user_repo.find_by_username(username).await?;
        let verified = match &user {
            Some(user) => user.verify_password(password),
            None => PasswordHash::verify_missing(password, self.bcrypt_cost),
        };

        match user {
            Some(user) if verified => {
                tracing::info!(user_id = user.id, "User {} logged in", user.username);
                Ok(user)
            }
            _ => {
                tracing::warn!("Failed login attempt for {}", username);
                Err(AppError::Unauthorized(
                    "Incorrect username or password.".into(),
                ))
            }
        }
    }
}
