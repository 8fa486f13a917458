use crate::{
    error::{AppError, Result},
    user::{
        user_dto::UpdateProfileRequest,
        user_models::ProfileResponse,
        user_repository::UserRepository,
    },
};

#[derive(Clone)]
pub struct UserService {
    user_repository: UserRepository,
}

impl UserService {
    pub fn new(user_repository: UserRepository) -> Self {
        Self { user_repository }
    }

    pub async fn get_profile(&self, username: &str) -> Result<ProfileResponse> {
        let user = self
            .user_repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found.".to_string()))?;

        Ok(user.into())
    }

    pub async fn update_profile(
        &self,
        username: &str,
        payload: UpdateProfileRequest,
    ) -> Result<ProfileResponse> {
        let user = self
            .user_repository
            .update_profile(username, payload.location, payload.languages)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found.".to_string()))?;

        tracing::info!(user_id = user.id, "Profile updated for {}", user.username);

        Ok(user.into())
    }
}
