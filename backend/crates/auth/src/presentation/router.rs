//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};

use crate::application::config::AuthConfig;
use crate::domain::auth_api::AuthApi;
use crate::infra::http_api::HttpAuthApi;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router backed by the remote HTTP API
pub fn auth_router(api: HttpAuthApi, config: AuthConfig) -> Router {
    auth_router_generic(api, config)
}

/// Create a generic Auth router for any API implementation
pub fn auth_router_generic<A>(api: A, config: AuthConfig) -> Router
where
    A: AuthApi + Send + Sync + 'static,
{
    let state = AuthAppState::new(api, config);

    Router::new()
        .route("/signin", post(handlers::sign_in::<A>))
        .route("/signup", post(handlers::sign_up::<A>))
        .route("/flow", get(handlers::flow_status::<A>))
        .with_state(state)
}
