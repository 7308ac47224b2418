//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{AppendHeaders, IntoResponse, Response};
use http::{HeaderMap, StatusCode, header};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::flow::FlowCodec;
use crate::application::sign_in::SIGN_IN_FAILED;
use crate::application::sign_up::SIGN_UP_FAILED;
use crate::application::{SignInInput, SignInUseCase, SignUpInput, SignUpUseCase};
use crate::domain::auth_api::AuthApi;
use crate::domain::entity::auth_flow::AuthFlow;
use crate::error::AuthError;
use crate::presentation::dto::{
    FlowRedirectResponse, FlowStatusResponse, SignInRequest, SignUpRequest,
};

/// Shared state for auth handlers
pub struct AuthAppState<A>
where
    A: AuthApi + Send + Sync + 'static,
{
    pub api: Arc<A>,
    pub config: Arc<AuthConfig>,
    pub flow_codec: FlowCodec,
}

impl<A> AuthAppState<A>
where
    A: AuthApi + Send + Sync + 'static,
{
    pub fn new(api: A, config: AuthConfig) -> Self {
        let flow_codec = FlowCodec::new(config.flow_secret);
        Self {
            api: Arc::new(api),
            config: Arc::new(config),
            flow_codec,
        }
    }
}

impl<A> Clone for AuthAppState<A>
where
    A: AuthApi + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            config: self.config.clone(),
            flow_codec: self.flow_codec.clone(),
        }
    }
}

/// Failed form submission, rendered with the operation's default message
pub struct FormFailure {
    error: AuthError,
    fallback: &'static str,
}

impl FormFailure {
    fn new(fallback: &'static str) -> impl FnOnce(AuthError) -> Self {
        move |error| Self { error, fallback }
    }
}

impl IntoResponse for FormFailure {
    fn into_response(self) -> Response {
        self.error.log();
        self.error.into_app_error(self.fallback).into_response()
    }
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AuthError> {
    payload.map(|Json(value)| value).map_err(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable form body");
        AuthError::Validation("Invalid request body".to_string())
    })
}

fn now() -> u64 {
    jsonwebtoken::get_current_timestamp()
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/auth/signin
pub async fn sign_in<A>(
    State(state): State<AuthAppState<A>>,
    payload: Result<Json<SignInRequest>, JsonRejection>,
) -> Result<Response, FormFailure>
where
    A: AuthApi + Send + Sync + 'static,
{
    let req = body(payload).map_err(FormFailure::new(SIGN_IN_FAILED))?;

    let use_case = SignInUseCase::new(state.api.clone(), state.config.clone());

    let input = SignInInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case
        .execute(input, now())
        .await
        .map_err(FormFailure::new(SIGN_IN_FAILED))?;

    let token_cookie = state.config.token_cookie().build_set_cookie(&output.token);
    let flow_cookie = flow_cookie(&state, output.flow.as_ref())
        .map_err(FormFailure::new(SIGN_IN_FAILED))?;

    Ok((
        StatusCode::OK,
        AppendHeaders([
            (header::SET_COOKIE, token_cookie),
            (header::SET_COOKIE, flow_cookie),
        ]),
        Json(FlowRedirectResponse {
            redirect_to: output.destination.path().to_string(),
            step: output.flow.map(|flow| flow.step),
        }),
    )
        .into_response())
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/auth/signup
pub async fn sign_up<A>(
    State(state): State<AuthAppState<A>>,
    payload: Result<Json<SignUpRequest>, JsonRejection>,
) -> Result<Response, FormFailure>
where
    A: AuthApi + Send + Sync + 'static,
{
    let req = body(payload).map_err(FormFailure::new(SIGN_UP_FAILED))?;

    let use_case = SignUpUseCase::new(state.api.clone(), state.config.clone());

    let input = SignUpInput {
        name: req.name,
        lastname: req.lastname,
        email: req.email,
        password: req.password,
    };

    let output = use_case
        .execute(input, now())
        .await
        .map_err(FormFailure::new(SIGN_UP_FAILED))?;

    let flow_cookie =
        flow_cookie(&state, Some(&output.flow)).map_err(FormFailure::new(SIGN_UP_FAILED))?;

    Ok((
        StatusCode::OK,
        AppendHeaders([(header::SET_COOKIE, flow_cookie)]),
        Json(FlowRedirectResponse {
            redirect_to: output.redirect_to.to_string(),
            step: Some(output.flow.step),
        }),
    )
        .into_response())
}

// ============================================================================
// Flow Status
// ============================================================================

/// GET /api/auth/flow
///
/// A missing, forged or expired flow cookie reads as "no flow".
pub async fn flow_status<A>(
    State(state): State<AuthAppState<A>>,
    headers: HeaderMap,
) -> Json<FlowStatusResponse>
where
    A: AuthApi + Send + Sync + 'static,
{
    let flow = platform::cookie::extract_cookie(&headers, &state.config.flow_cookie_name)
        .and_then(|value| match state.flow_codec.decode(&value, now()) {
            Ok(flow) => Some(flow),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring flow cookie");
                None
            }
        });

    Json(match flow {
        Some(flow) => FlowStatusResponse {
            active: true,
            email: Some(flow.email.as_str().to_string()),
            step: Some(flow.step),
        },
        None => FlowStatusResponse::default(),
    })
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Set-Cookie storing `flow`, or clearing the flow cookie when there is none
fn flow_cookie<A>(state: &AuthAppState<A>, flow: Option<&AuthFlow>) -> Result<String, AuthError>
where
    A: AuthApi + Send + Sync + 'static,
{
    let cookie = state.config.flow_cookie();
    match flow {
        Some(flow) => Ok(cookie.build_set_cookie(&state.flow_codec.encode(flow)?)),
        None => Ok(cookie.build_delete_cookie()),
    }
}
