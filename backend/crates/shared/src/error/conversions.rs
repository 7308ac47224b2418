//! Error conversions - From implementations for common error types
//!
//! Conversion from `reqwest` errors into [`AppError`] and the HTTP
//! rendering of `AppError`, each behind its feature.

#[cfg(any(feature = "reqwest", feature = "axum"))]
use super::app_error::AppError;
#[cfg(feature = "reqwest")]
use super::kind::ErrorKind;

// ============================================================================
// reqwest conversions (feature-gated)
// ============================================================================

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::GatewayTimeout
        } else if let Some(status) = err.status() {
            ErrorKind::from_upstream_status(status.as_u16())
        } else {
            ErrorKind::BadGateway
        };
        AppError::new(kind, "Authentication service unavailable").with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // `message` is the field the sign-in/sign-up pages read.
        let body = serde_json::json!({
            "status": self.status_code(),
            "title": self.kind().as_str(),
            "message": self.message(),
        });

        (status, Json(body)).into_response()
    }
}
