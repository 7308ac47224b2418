//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Form input rejected before contacting the remote API
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Remote API answered with a non-success status
    #[error("Authentication API rejected the request with status {status}")]
    Rejected {
        status: u16,
        /// `message` field of the error body, when there was one
        message: Option<String>,
    },

    /// Remote API unreachable, timed out, or its body could not be read
    #[error("Authentication API request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Remote API answered 2xx with a body we cannot use
    #[error("Malformed authentication API response: {0}")]
    MalformedResponse(String),

    /// Access token failed verification
    #[error("Token rejected: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Flow cookie missing a part, badly signed, or expired
    #[error("Invalid auth flow context: {0}")]
    FlowInvalid(&'static str),

    /// Refusing to run with an unusable configuration
    #[error("Misconfigured: {0}")]
    Misconfigured(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) | AuthError::FlowInvalid(_) => ErrorKind::BadRequest,
            AuthError::Rejected { status, .. } => ErrorKind::from_upstream_status(*status),
            AuthError::Upstream(e) if e.is_timeout() => ErrorKind::GatewayTimeout,
            AuthError::Upstream(_) | AuthError::MalformedResponse(_) => ErrorKind::BadGateway,
            AuthError::Token(_) => ErrorKind::Unauthorized,
            AuthError::Misconfigured(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Text safe to show on the sign-in / sign-up page.
    ///
    /// Validation messages and the remote API's own `message` pass through;
    /// everything else collapses to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AuthError::Validation(msg) => msg.clone(),
            AuthError::Rejected {
                message: Some(msg), ..
            } if !msg.trim().is_empty() => msg.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Convert to AppError, using `fallback` as the user-facing message when
    /// the error carries none of its own.
    pub fn into_app_error(self, fallback: &str) -> AppError {
        let kind = self.kind();
        let message = self.user_message(fallback);
        match self {
            AuthError::Upstream(e) => AppError::new(kind, message).with_source(AppError::from(e)),
            other => AppError::new(kind, message).with_source(other),
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            AuthError::Upstream(e) => {
                tracing::warn!(error = %e, "Authentication API unreachable");
            }
            AuthError::MalformedResponse(msg) => {
                tracing::error!(message = %msg, "Authentication API returned an unusable body");
            }
            AuthError::Rejected { status, .. } if *status >= 500 => {
                tracing::warn!(status = status, "Authentication API failed");
            }
            AuthError::Rejected { status, .. } => {
                tracing::info!(status = status, "Authentication API rejected request");
            }
            AuthError::Misconfigured(msg) | AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}
