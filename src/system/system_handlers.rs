use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct TimeResponse {
    /// Seconds since the Unix epoch, with sub-second precision.
    pub time: f64,
}

impl TimeResponse {
    pub fn now() -> Self {
        Self {
            time: Utc::now().timestamp_micros() as f64 / 1_000_000.0,
        }
    }
}

/// Current server time
#[utoipa::path(
    get,
    path = "/api/time",
    tag = "system",
    responses(
        (status = 200, description = "Current Unix time in seconds", body = TimeResponse)
    )
)]
pub async fn get_time() -> impl IntoResponse {
    (StatusCode::OK, Json(TimeResponse::now()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_is_close_to_now() {
        let reported = TimeResponse::now().time;
        let expected = Utc::now().timestamp() as f64;
        assert!((reported - expected).abs() < 5.0);
        assert!(reported.fract() >= 0.0);
    }
}
