use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: ApiErrorInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ApiErrorInfo {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    UnprocessableEntity,
    InternalServerError,
}

impl ErrorKind {
    fn status_code(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error returned by HTTP handlers, rendered as an `ApiErrorResponse`.
#[derive(Debug)]
pub struct AppError {
    kind: ErrorKind,
    info: ApiErrorInfo,
}

impl AppError {
    pub fn new(kind: ErrorKind, code: &str, message: &str) -> Self {
        Self {
            kind,
            info: ApiErrorInfo {
                code: code.to_string(),
                message: message.to_string(),
                details: None,
            },
        }
    }

    pub fn with_details(mut self, details: &str) -> Self {
        self.info.details = Some(details.to_string());
        self
    }

    pub fn bad_request(code: &str, message: &str) -> Self {
        Self::new(ErrorKind::BadRequest, code, message)
    }

    pub fn bad_request_with_details(
        code: &str, message: &str, details: &str,
    ) -> Self {
        Self::bad_request(code, message).with_details(details)
    }

    pub fn not_found(code: &str, message: &str) -> Self {
        Self::new(ErrorKind::NotFound, code, message)
    }

    pub fn unprocessable_entity(code: &str, message: &str) -> Self {
        Self::new(ErrorKind::UnprocessableEntity, code, message)
    }

    pub fn internal_server_error(message: &str) -> Self {
        Self::new(ErrorKind::InternalServerError, "INTERNAL_ERROR", message)
    }

    pub fn kind(&self) -> ErrorKind { self.kind }

    pub fn code(&self) -> &str { &self.info.code }

    pub fn status_code(&self) -> StatusCode { self.kind.status_code() }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = %self.info.code, "{}", self.info.message);
        }
        let body = ApiErrorResponse { error: self.info };
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal_server_error(&format!(
            "An unexpected error occurred: {err}"
        ))
    }
}

pub type AppResult<T> = Result<T, AppError>;
