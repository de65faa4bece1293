use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::Response;

use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::success;

/// GET /events
pub async fn list_events(State(state): State<AppState>) -> Result<Response, AppError> {
    let events = state.events.list();
    success(&events)
}

/// POST /events
///
/// Requires `content-type: application/json`; responds with the stored
/// event including its server-assigned id. Bodies over axum's default
/// limit are rejected with 413.
pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError> {
    let body = body.map_err(body_read_error)?;

    // Non-UTF-8 header bytes are replaced, not rejected.
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());

    let event = state.events.create(content_type.as_deref(), &body)?;
    success(&event)
}

/// GET /events/{id}
///
/// Soft-deleted events are still returned here.
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let event = state.events.get(&id)?;
    success(&event)
}

/// DELETE /events/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let event = state.events.soft_delete(&id)?;
    success(&event)
}

fn body_read_error(rejection: BytesRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(rejection.body_text())
    } else {
        AppError::BodyRead(rejection.body_text())
    }
}
