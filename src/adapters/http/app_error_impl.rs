use crate::app_error::{AppError, ErrorCode};
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub const MSG_ALREADY_REGISTERED: &str = "This email is already on our waitlist!";
pub const MSG_TRY_AGAIN: &str = "Something went wrong. Please try again.";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        match &self {
            AppError::DuplicateEmail | AppError::InvalidInput(_) => {
                tracing::warn!(error = ?self, "Request rejected")
            }
            AppError::Storage(_) | AppError::Internal(_) => {
                tracing::error!(error = ?self, "Request failed")
            }
        }

        match self {
            AppError::DuplicateEmail => error_resp(
                StatusCode::CONFLICT,
                ErrorCode::DuplicateEmail,
                Some(MSG_ALREADY_REGISTERED.to_string()),
            ),
            AppError::Storage(_) => error_resp(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::StorageError,
                Some(MSG_TRY_AGAIN.to_string()),
            ),
            AppError::InvalidInput(msg) => {
                error_resp(StatusCode::BAD_REQUEST, ErrorCode::InvalidInput, Some(msg))
            }
            AppError::Internal(_) => error_resp(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::InternalError,
                Some(MSG_TRY_AGAIN.to_string()),
            ),
        }
    }
}

fn error_resp(status: StatusCode, code: ErrorCode, message: Option<String>) -> Response {
    let body = match message {
        Some(msg) => serde_json::json!({ "success": false, "code": code.as_str(), "message": msg }),
        None => serde_json::json!({ "success": false, "code": code.as_str() }),
    };
    (status, Json(body)).into_response()
}
