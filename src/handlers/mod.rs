use axum::response::Response;
use serde::Serialize;

use crate::utils::error::AppError;
use crate::utils::response::success;

pub mod events;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Result<Response, AppError> {
    let payload = HealthPayload {
        status: "ok",
        service: "invite-me-api",
    };

    success(&payload)
}
