//! Sign Up Use Case
//!
//! Validates the registration form and creates the account at the remote
//! API. The new user always continues with email verification.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::auth_api::{AuthApi, Registration};
use crate::domain::entity::account::SignInDestination;
use crate::domain::entity::auth_flow::{AuthFlow, FlowStep};
use crate::domain::value_object::{
    email::Email, password::Password, person_name::PersonName,
};
use crate::error::AuthResult;

/// Shown when the failure carries no message of its own
pub const SIGN_UP_FAILED: &str = "Failed to register";

/// Sign up input
pub struct SignUpInput {
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    pub redirect_to: &'static str,
    pub flow: AuthFlow,
    /// Confirmation payload of the remote API, untouched
    pub confirmation: serde_json::Value,
}

/// Sign up use case
pub struct SignUpUseCase<A>
where
    A: AuthApi,
{
    api: Arc<A>,
    config: Arc<AuthConfig>,
}

impl<A> SignUpUseCase<A>
where
    A: AuthApi,
{
    pub fn new(api: Arc<A>, config: Arc<AuthConfig>) -> Self {
        Self { api, config }
    }

    pub async fn execute(&self, input: SignUpInput, now: u64) -> AuthResult<SignUpOutput> {
        let registration = Registration {
            name: PersonName::new("Name", &input.name)?,
            lastname: PersonName::new("Last name", &input.lastname)?,
            email: Email::new(&input.email)?,
            password: Password::for_sign_up(input.password)?,
        };

        let confirmation = self.api.register(&registration).await?;

        tracing::info!("User signed up");

        Ok(SignUpOutput {
            redirect_to: SignInDestination::VerifyEmail.path(),
            flow: AuthFlow::new(
                registration.email,
                FlowStep::Verify,
                now,
                self.config.flow_ttl.as_secs(),
            ),
            confirmation,
        })
    }
}
