use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

/// Generic message returned to callers when an unexpected failure occurs.
/// The underlying cause is logged for operators, never exposed.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error. Please try again later.";

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Unauthorized { message: String, details: Value },
    MethodNotAllowed { method: String, allowed: &'static [&'static str] },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn method_not_allowed(method: impl Into<String>, allowed: &'static [&'static str]) -> Self {
        Self::MethodNotAllowed {
            method: method.into(),
            allowed,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Unauthorized { message, .. }
            | AppError::Internal { message, .. } => write!(f, "{message}"),
            AppError::MethodNotAllowed { method, .. } => {
                write!(f, "Method {method} Not Allowed")
            }
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            AppError::Validation { message, details } => {
                (StatusCode::BAD_REQUEST, message, details)
            }
            AppError::NotFound { message, details } => (StatusCode::NOT_FOUND, message, details),
            AppError::Unauthorized { message, details } => {
                (StatusCode::UNAUTHORIZED, message, details)
            }
            AppError::MethodNotAllowed { method, allowed } => {
                let body = ErrorBody {
                    success: false,
                    message: format!("Method {method} Not Allowed"),
                };

                let mut response =
                    (StatusCode::METHOD_NOT_ALLOWED, Json(body)).into_response();
                if let Ok(value) = HeaderValue::from_str(&allowed.join(", ")) {
                    response.headers_mut().insert(header::ALLOW, value);
                }
                return response;
            }
            AppError::Internal { message, details } => {
                // Cause goes to the operator log; the caller only sees the
                // generic message chosen at the raise site.
                tracing::error!(%message, %details, "internal error");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        success: false,
                        message,
                    }),
                )
                    .into_response();
            }
        };

        tracing::debug!(%status, %message, %details, "request rejected");

        let body = ErrorBody {
            success: false,
            message,
        };

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "database error");
        AppError::internal(INTERNAL_ERROR_MESSAGE, serde_json::json!({}))
    }
}
