use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Partial profile update; omitted fields keep their stored value.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 100))]
    pub location: Option<String>,
    #[validate(length(max = 200))]
    pub languages: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_valid() {
        let payload: UpdateProfileRequest = serde_json::from_str("{}").unwrap();
        assert!(payload.location.is_none());
        assert!(payload.languages.is_none());
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_location_too_long() {
        let payload = UpdateProfileRequest {
            location: Some("x".repeat(101)),
            languages: None,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_languages_limit() {
        let ok = UpdateProfileRequest {
            location: None,
            languages: Some("x".repeat(200)),
        };
        assert!(ok.validate().is_ok());

        let too_long = UpdateProfileRequest {
            location: None,
            languages: Some("x".repeat(201)),
        };
        assert!(too_long.validate().is_err());
    }
}
