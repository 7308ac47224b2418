//! Portal Configuration
//!
//! Read once from the environment (and `.env`) at startup.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use auth::{AuthConfig, JwtSecret};
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug)]
pub struct PortalConfig {
    pub bind_addr: SocketAddr,
    pub jwt_secret: JwtSecret,
    pub auth: AuthConfig,
    /// Built frontend pages, served as the router fallback
    pub static_dir: Option<PathBuf>,
}

impl PortalConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = var("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        let jwt_secret = JwtSecret::new(jwt_secret).map_err(|e| ConfigError::Invalid {
            var: "JWT_SECRET",
            reason: e.to_string(),
        })?;

        let mut auth = AuthConfig::default();

        if let Some(url) = var("AUTH_API_URL") {
            auth.api_base_url = url;
        }

        if let Some(secs) = var("AUTH_API_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .map_err(|_| invalid("AUTH_API_TIMEOUT_SECS", "not a number"))?;
            if secs == 0 {
                return Err(invalid("AUTH_API_TIMEOUT_SECS", "must be positive"));
            }
            auth.api_timeout = Duration::from_secs(secs);
        }

        auth.flow_secret = match var("FLOW_SECRET") {
            Some(b64) => {
                let bytes = platform::crypto::from_base64(&b64)
                    .map_err(|e| invalid("FLOW_SECRET", &e.to_string()))?;
                bytes
                    .try_into()
                    .map_err(|_| invalid("FLOW_SECRET", "must decode to 32 bytes"))?
            }
            None => {
                tracing::warn!("FLOW_SECRET not set, flow cookies will not survive a restart");
                platform::crypto::random_key()
            }
        };

        auth.cookie_secure = match var("COOKIE_SECURE") {
            Some(flag) => parse_bool(&flag)
                .ok_or_else(|| invalid("COOKIE_SECURE", "expected true or false"))?,
            None => !cfg!(debug_assertions),
        };

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|e: std::net::AddrParseError| invalid("BIND_ADDR", &e.to_string()))?;

        Ok(Self {
            bind_addr,
            jwt_secret,
            auth,
            static_dir: var("STATIC_DIR").map(PathBuf::from),
        })
    }
}

/// Non-empty value of an environment variable
fn var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn invalid(var: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        var,
        reason: reason.to_string(),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
