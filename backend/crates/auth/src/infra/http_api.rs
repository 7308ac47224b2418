//! Remote Authentication API Client
//!
//! [`AuthApi`] over HTTP with `reqwest`. One pooled client per process.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::Instrument;

use crate::domain::auth_api::{AuthApi, Credentials, IssuedSession, Registration};
use crate::domain::entity::account::AccountStatus;
use crate::error::{AuthError, AuthResult};

const USER_AGENT: &str = concat!("portal/", env!("CARGO_PKG_VERSION"));

const SIGN_IN_ENDPOINT: &str = "api/v1/auth";
const SIGN_UP_ENDPOINT: &str = "api/v1/auth/signup";

#[derive(Serialize)]
struct SignInBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    name: &'a str,
    lastname: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct SignInReply {
    user: AccountStatus,
    token: String,
}

#[derive(Deserialize)]
struct ErrorReply {
    message: Option<String>,
}

/// HTTP implementation of the authentication API port
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    client: Client,
    base_url: Url,
}

impl HttpAuthApi {
    /// `base_url` may carry a path prefix (`https://host/auth-service`);
    /// endpoint paths are resolved below it.
    pub fn new(base_url: &str, timeout: Duration) -> AuthResult<Self> {
        let mut url = Url::parse(base_url).map_err(|e| {
            AuthError::Misconfigured(format!("Invalid API base URL {base_url}: {e}"))
        })?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| AuthError::Misconfigured(format!("HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// POST a JSON body, decode a JSON success body.
    async fn post<B, T>(&self, endpoint: &str, body: &B) -> AuthResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self
            .base_url
            .join(endpoint)
            .map_err(|e| AuthError::Internal(format!("Endpoint URL: {e}")))?;
        let span = tracing::info_span!("auth_api.request", http.method = "POST", url = %url);

        async {
            let response = self.client.post(url).json(body).send().await?;
            let status = response.status();
            let bytes = response.bytes().await?;

            if !status.is_success() {
                return Err(rejection(status, &bytes));
            }

            tracing::debug!(status = status.as_u16(), "Authentication API answered");

            // An empty confirmation body is still a confirmation
            let bytes: &[u8] = if bytes.is_empty() { b"null" } else { &bytes };
            serde_json::from_slice(bytes).map_err(|e| AuthError::MalformedResponse(e.to_string()))
        }
        .instrument(span)
        .await
    }
}

/// Build the error for a non-success answer, keeping the body's `message`.
fn rejection(status: StatusCode, body: &[u8]) -> AuthError {
    let message = serde_json::from_slice::<ErrorReply>(body)
        .ok()
        .and_then(|reply| reply.message)
        .filter(|m| !m.trim().is_empty());

    AuthError::Rejected {
        status: status.as_u16(),
        message,
    }
}

impl AuthApi for HttpAuthApi {
    async fn authenticate(&self, credentials: &Credentials) -> AuthResult<IssuedSession> {
        let body = SignInBody {
            email: credentials.email.as_str(),
            password: credentials.password.expose(),
        };
        let reply: SignInReply = self.post(SIGN_IN_ENDPOINT, &body).await?;

        Ok(IssuedSession {
            token: reply.token,
            account: reply.user,
        })
    }

    async fn register(&self, registration: &Registration) -> AuthResult<serde_json::Value> {
        let body = SignUpBody {
            name: registration.name.as_str(),
            lastname: registration.lastname.as_str(),
            email: registration.email.as_str(),
            password: registration.password.expose(),
        };
        self.post(SIGN_UP_ENDPOINT, &body).await
    }
}
