//! Sign In Use Case
//!
//! Exchanges credentials for an access token at the remote API and picks
//! the page the user continues on.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::auth_api::{AuthApi, Credentials};
use crate::domain::entity::account::SignInDestination;
use crate::domain::entity::auth_flow::AuthFlow;
use crate::domain::value_object::{email::Email, password::Password};
use crate::error::{AuthError, AuthResult};

/// Shown when the failure carries no message of its own
pub const SIGN_IN_FAILED: &str = "Login failed";

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Access token for the `token` cookie
    pub token: String,
    pub destination: SignInDestination,
    /// Flow context to store, `None` when the flow is complete
    pub flow: Option<AuthFlow>,
}

/// Sign in use case
pub struct SignInUseCase<A>
where
    A: AuthApi,
{
    api: Arc<A>,
    config: Arc<AuthConfig>,
}

impl<A> SignInUseCase<A>
where
    A: AuthApi,
{
    pub fn new(api: Arc<A>, config: Arc<AuthConfig>) -> Self {
        Self { api, config }
    }

    pub async fn execute(&self, input: SignInInput, now: u64) -> AuthResult<SignInOutput> {
        let credentials = Credentials {
            email: Email::new(&input.email)?,
            password: Password::for_sign_in(input.password)?,
        };

        let session = self.api.authenticate(&credentials).await?;

        // The token goes into a header verbatim
        if !is_token_safe(&session.token) {
            return Err(AuthError::MalformedResponse(
                "token is empty or has unexpected characters".to_string(),
            ));
        }

        let destination = session.account.destination();
        let flow = destination.flow_step().map(|step| {
            AuthFlow::new(
                credentials.email.clone(),
                step,
                now,
                self.config.flow_ttl.as_secs(),
            )
        });

        tracing::info!(
            destination = destination.path(),
            flow_step = ?flow.as_ref().map(|f| f.step),
            "User signed in"
        );

        Ok(SignInOutput {
            token: session.token,
            destination,
            flow,
        })
    }
}

/// JWS compact serialization alphabet: base64url plus the dot separators
fn is_token_safe(token: &str) -> bool {
    !token.is_empty()
        && token
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
}
