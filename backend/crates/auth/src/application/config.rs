//! Application Configuration
//!
//! Configuration for the auth flow endpoints ([`AuthConfig`]) and for the
//! access gate ([`GateConfig`]).

use std::time::Duration;

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

use crate::application::token::JwtSecret;
use crate::domain::value_object::route::{GateScope, PublicRoutes, SIGN_IN_PATH};

/// Name of the cookie carrying the access token
pub const TOKEN_COOKIE_NAME: &str = "token";

/// Name of the cookie carrying the signed auth flow context
pub const FLOW_COOKIE_NAME: &str = "auth_flow";

/// Auth flow configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Base URL of the remote authentication API
    pub api_base_url: String,
    /// Per-request timeout for the remote API
    pub api_timeout: Duration,
    /// Access token cookie name
    pub token_cookie_name: String,
    /// Access token cookie Max-Age (24 hours)
    pub token_ttl: Duration,
    /// Flow context cookie name
    pub flow_cookie_name: String,
    /// How long a started flow stays resumable (1 hour)
    pub flow_ttl: Duration,
    /// HMAC key for the flow cookie (32 bytes). Random per `default()`
    /// call; set it explicitly for cookies that survive a restart.
    pub flow_secret: [u8; 32],
    /// Whether to require Secure cookies
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            api_timeout: Duration::from_secs(10),
            token_cookie_name: TOKEN_COOKIE_NAME.to_string(),
            token_ttl: Duration::from_secs(24 * 3600),
            flow_cookie_name: FLOW_COOKIE_NAME.to_string(),
            flow_ttl: Duration::from_secs(3600),
            flow_secret: platform::crypto::random_key(),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl AuthConfig {
    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::default()
        }
    }

    /// Attributes of the access token cookie
    pub fn token_cookie(&self) -> CookieConfig {
        self.cookie(&self.token_cookie_name, self.token_ttl)
    }

    /// Attributes of the flow context cookie
    pub fn flow_cookie(&self) -> CookieConfig {
        self.cookie(&self.flow_cookie_name, self.flow_ttl)
    }

    fn cookie(&self, name: &str, ttl: Duration) -> CookieConfig {
        CookieConfig {
            name: name.to_string(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(ttl.as_secs()),
        }
    }
}

/// Access gate configuration
///
/// There is no `Default`: the gate cannot exist without a verification
/// secret.
#[derive(Debug, Clone)]
pub struct GateConfig {
    pub jwt_secret: JwtSecret,
    pub token_cookie_name: String,
    pub public_routes: PublicRoutes,
    pub scope: GateScope,
    pub sign_in_path: String,
}

impl GateConfig {
    pub fn new(jwt_secret: JwtSecret) -> Self {
        Self {
            jwt_secret,
            token_cookie_name: TOKEN_COOKIE_NAME.to_string(),
            public_routes: PublicRoutes::default(),
            scope: GateScope::default(),
            sign_in_path: SIGN_IN_PATH.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuthConfig::default();

        assert_eq!(config.token_cookie_name, "token");
        assert_eq!(config.token_ttl, Duration::from_secs(86400));
        assert_eq!(config.flow_cookie_name, "auth_flow");
        assert!(config.cookie_secure);
        assert_eq!(config.cookie_same_site, SameSite::Lax);
    }

    #[test]
    fn test_default_flow_secret_is_random() {
        let config = AuthConfig::default();

        assert_ne!(config.flow_secret, [0u8; 32]);
        assert_ne!(config.flow_secret, AuthConfig::default().flow_secret);
    }

    #[test]
    fn test_development_config() {
        let config = AuthConfig::development();

        assert!(!config.cookie_secure);
        assert!(config.flow_secret.iter().any(|&b| b != 0));
        assert_ne!(config.flow_secret, AuthConfig::development().flow_secret);
    }

    #[test]
    fn test_token_cookie_attributes() {
        let cookie = AuthConfig::default().token_cookie().build_set_cookie("a.b.c");

        assert!(cookie.starts_with("token=a.b.c"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=86400"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
    }

    #[test]
    fn test_gate_config_defaults() {
        let config = GateConfig::new(JwtSecret::new("s3cret").unwrap());

        assert_eq!(config.token_cookie_name, "token");
        assert_eq!(config.sign_in_path, "/auth/signin");
        assert!(config.public_routes.contains("/auth/signin"));
    }
}
