use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

impl IntoResponse for MessageResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

/// 404 carrying `{"detail": "<Entity> not found"}`.
#[derive(Debug, Serialize)]
pub struct NotFoundResponse {
    detail: &'static str,
}

impl NotFoundResponse {
    pub fn new(detail: &'static str) -> Self {
        Self { detail }
    }
}

impl IntoResponse for NotFoundResponse {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, axum::Json(self)).into_response()
    }
}
