//! Authentication API Port
//!
//! Interface to the remote service that owns accounts and issues tokens.
//! Implementation is in the infrastructure layer.

use crate::domain::entity::account::AccountStatus;
use crate::domain::value_object::{email::Email, password::Password, person_name::PersonName};
use crate::error::AuthResult;

/// Validated sign-in form
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: Email,
    pub password: Password,
}

/// Validated sign-up form
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: PersonName,
    pub lastname: PersonName,
    pub email: Email,
    pub password: Password,
}

/// Successful authentication
#[derive(Debug, Clone)]
pub struct IssuedSession {
    /// Signed access token, opaque to the portal until the gate verifies it
    pub token: String,
    pub account: AccountStatus,
}

/// Remote authentication API
#[trait_variant::make(AuthApi: Send)]
pub trait LocalAuthApi {
    /// Exchange credentials for a token and the account's status
    async fn authenticate(&self, credentials: &Credentials) -> AuthResult<IssuedSession>;

    /// Create an account. The confirmation payload is passed through as-is.
    async fn register(&self, registration: &Registration) -> AuthResult<serde_json::Value>;
}
