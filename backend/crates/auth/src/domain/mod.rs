//! Domain Layer
//!
//! Contains entities, value objects, and the remote API port.

pub mod auth_api;
pub mod entity;
pub mod value_object;

// Re-exports
pub use auth_api::{AuthApi, Credentials, IssuedSession, Registration};
pub use entity::{account::AccountStatus, account::SignInDestination, auth_flow::AuthFlow};
