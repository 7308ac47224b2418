//! Access Gate Middleware
//!
//! Runs [`AccessGate`] in front of every route of the router it wraps.

use axum::Router;
use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use crate::application::access_gate::{AccessGate, GateDecision};

/// Middleware that admits a request or redirects it to the sign-in page.
///
/// On success the verified claims are stored in request extensions as
/// [`TokenClaims`](crate::application::token::TokenClaims).
pub async fn require_access_token(
    State(gate): State<Arc<AccessGate>>,
    mut req: Request,
    next: Next,
) -> Response {
    let token = platform::cookie::extract_cookie(req.headers(), gate.token_cookie_name());

    match gate.evaluate(req.uri().path(), token.as_deref()) {
        GateDecision::Bypass | GateDecision::Public => next.run(req).await,
        GateDecision::Verified(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        GateDecision::Redirect(reason) => {
            tracing::info!(
                method = %req.method(),
                path = %req.uri().path(),
                reason = %reason,
                "Access denied, redirecting to sign-in"
            );
            Redirect::temporary(gate.sign_in_path()).into_response()
        }
    }
}

/// Wrap every route of `router`, fallback included, with the access gate.
pub fn with_access_gate(router: Router, gate: AccessGate) -> Router {
    router.layer(middleware::from_fn_with_state(
        Arc::new(gate),
        require_access_token,
    ))
}
