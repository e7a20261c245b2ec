use crate::app_error::{AppError, ErrorCode};
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        match &self {
            AppError::Database(_) => tracing::error!(error = ?self, "Request failed"),
            _ => tracing::warn!(error = %self, "Request rejected"),
        }

        match self {
            AppError::Database(_) => error_resp(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::DatabaseError,
                "Something went wrong. Please try again later.".into(),
            ),
            AppError::InvalidInput(msg) => {
                error_resp(StatusCode::BAD_REQUEST, ErrorCode::InvalidInput, msg)
            }
            AppError::Duplicate(field) => error_resp(
                StatusCode::CONFLICT,
                ErrorCode::AlreadyOnWaitlist,
                field.message().into(),
            ),
            AppError::OriginNotAllowed(_) => error_resp(
                StatusCode::FORBIDDEN,
                ErrorCode::OriginNotAllowed,
                "Not allowed by CORS".into(),
            ),
        }
    }
}

fn error_resp(status: StatusCode, code: ErrorCode, message: String) -> Response {
    let body = serde_json::json!({
        "success": false,
        "code": code.as_str(),
        "message": message,
    });
    (status, Json(body)).into_response()
}
