//! Portal Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;
mod pages;

use auth::{AccessGate, GateConfig, HttpAuthApi, auth_router, with_access_gate};
use axum::{Router, extract::Request, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kernel::error::app_error::AppError;

use crate::config::PortalConfig;
use crate::pages::StaticPages;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portal=info,auth=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // No token secret, no server
    let config = PortalConfig::from_env()?;

    tracing::info!(
        auth_api = %config.auth.api_base_url,
        cookie_secure = config.auth.cookie_secure,
        static_dir = ?config.static_dir,
        "Configuration loaded"
    );

    let addr = config.bind_addr;
    let app = app(config)?;

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Assemble the portal: auth endpoints, health check, pages, all behind
/// the access gate.
fn app(config: PortalConfig) -> anyhow::Result<Router> {
    let api = HttpAuthApi::new(&config.auth.api_base_url, config.auth.api_timeout)?;
    let gate = AccessGate::new(GateConfig::new(config.jwt_secret));

    let router = Router::new()
        .nest("/api/auth", auth_router(api, config.auth))
        .route("/healthz", get(healthz));

    let router = match config.static_dir {
        Some(dir) => {
            let pages = StaticPages::new(dir);
            router.fallback(move |req: Request| {
                let pages = pages.clone();
                async move { pages.serve(req).await }
            })
        }
        None => router.fallback(not_found),
    };

    Ok(with_access_gate(router, gate).layer(TraceLayer::new_for_http()))
}

async fn healthz() -> &'static str {
    "ok"
}

async fn not_found() -> AppError {
    AppError::not_found("Page not found")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
