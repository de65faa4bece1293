use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::utils::error::AppError;

pub const APPLICATION_JSON: &str = "application/json";

#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: ApiErrorBody,
}

/// Encodes `data` as the response body with a JSON content type.
/// Encoding failures surface as [`AppError::Encode`].
pub fn json<T>(status: StatusCode, data: &T) -> Result<Response, AppError>
where
    T: Serialize + ?Sized,
{
    let bytes = serde_json::to_vec(data)?;
    let content_type = [(header::CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))];
    Ok((status, content_type, bytes).into_response())
}

pub fn success<T>(data: &T) -> Result<Response, AppError>
where
    T: Serialize + ?Sized,
{
    json(StatusCode::OK, data)
}

pub fn error(code: &str, message: impl Into<String>, status: StatusCode) -> Response {
    let body = ApiErrorResponse {
        success: false,
        error: ApiErrorBody {
            code: code.to_string(),
            message: message.into(),
        },
    };

    (status, Json(body)).into_response()
}
