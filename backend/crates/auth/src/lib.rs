//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, the remote API port
//! - `application/` - Use cases, token verification, access gate
//! - `infra/` - HTTP client for the remote authentication API
//! - `presentation/` - HTTP handlers, DTOs, router, gate middleware
//!
//! ## Features
//! - Sign-in and sign-up forms backed by a remote authentication API
//! - Post sign-in routing by verification status (email, documents)
//! - Access gate verifying the HS256 `token` cookie on every page request
//!
//! ## Security Model
//! - The access token lives only in an HttpOnly cookie
//! - Only HS256 tokens signed with the configured secret are accepted;
//!   there is no fallback secret
//! - Flow context (email, step) is HMAC-signed and expires after an hour

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::access_gate::AccessGate;
pub use application::config::{AuthConfig, GateConfig};
pub use application::token::{JwtSecret, TokenClaims};
pub use error::{AuthError, AuthResult};
pub use infra::http_api::HttpAuthApi;
pub use presentation::middleware::with_access_gate;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
