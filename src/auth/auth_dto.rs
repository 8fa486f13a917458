use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::password::MAX_PASSWORD_BYTES;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 50))]
    pub username: String,
    #[validate(email, length(max = 100))]
    pub email: String,
    #[validate(length(min = 1), custom(function = "validate_password_bytes"))]
    pub password: String,
}

/// `length` counts chars; bcrypt's limit is in bytes.
fn validate_password_bytes(password: &str) -> Result<(), ValidationError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(ValidationError::new("password_too_long"));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    pub password: String,
}
