//! Access Gate
//!
//! Decides, for each incoming page request, whether it may proceed.

use crate::application::config::GateConfig;
use crate::application::token::{TokenClaims, TokenVerifier};
use crate::domain::value_object::route::{GateScope, PublicRoutes};

/// Why a request was sent back to the sign-in page
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RedirectReason {
    #[display("missing_token")]
    MissingToken,
    #[display("invalid_token")]
    InvalidToken,
}

/// Outcome of [`AccessGate::evaluate`]
#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    /// Outside the gate's scope (portal API, assets)
    Bypass,
    /// Public page, token not looked at
    Public,
    /// Token verified
    Verified(TokenClaims),
    /// Send the client to the sign-in page
    Redirect(RedirectReason),
}

impl GateDecision {
    pub fn is_allowed(&self) -> bool {
        !matches!(self, GateDecision::Redirect(_))
    }
}

/// Access gate
pub struct AccessGate {
    verifier: TokenVerifier,
    public_routes: PublicRoutes,
    scope: GateScope,
    token_cookie_name: String,
    sign_in_path: String,
}

impl AccessGate {
    pub fn new(config: GateConfig) -> Self {
        if !config.public_routes.contains(&config.sign_in_path) {
            // Every denied request would be redirected into another denial
            tracing::warn!(
                sign_in_path = %config.sign_in_path,
                "Sign-in page is not a public route"
            );
        }

        Self {
            verifier: TokenVerifier::new(&config.jwt_secret),
            public_routes: config.public_routes,
            scope: config.scope,
            token_cookie_name: config.token_cookie_name,
            sign_in_path: config.sign_in_path,
        }
    }

    /// Evaluate a request path and the token presented with it.
    ///
    /// Public paths are decided before the token is inspected, so a garbage
    /// token never blocks the sign-in page.
    pub fn evaluate(&self, path: &str, token: Option<&str>) -> GateDecision {
        if !self.scope.applies_to(path) {
            return GateDecision::Bypass;
        }

        if self.public_routes.contains(path) {
            return GateDecision::Public;
        }

        let Some(token) = token.filter(|t| !t.is_empty()) else {
            tracing::debug!(path = %path, "No access token");
            return GateDecision::Redirect(RedirectReason::MissingToken);
        };

        match self.verifier.verify(token) {
            Ok(claims) => GateDecision::Verified(claims),
            Err(e) => {
                tracing::debug!(path = %path, error = %e, "Access token rejected");
                GateDecision::Redirect(RedirectReason::InvalidToken)
            }
        }
    }

    pub fn sign_in_path(&self) -> &str {
        &self.sign_in_path
    }

    pub fn token_cookie_name(&self) -> &str {
        &self.token_cookie_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::token::JwtSecret;
    use crate::application::token::test_support::*;
    use crate::domain::value_object::route::DEFAULT_PUBLIC_ROUTES;

    fn gate() -> AccessGate {
        AccessGate::new(GateConfig::new(JwtSecret::new(SECRET).unwrap()))
    }

    #[test]
    fn test_public_routes_ignore_token() {
        let gate = gate();
        for path in DEFAULT_PUBLIC_ROUTES {
            assert_eq!(gate.evaluate(path, None), GateDecision::Public);
            assert_eq!(gate.evaluate(path, Some("not-a-jwt")), GateDecision::Public);
        }
    }

    #[test]
    fn test_public_match_is_exact() {
        let gate = gate();
        assert_eq!(
            gate.evaluate("/auth/signin/", None),
            GateDecision::Redirect(RedirectReason::MissingToken)
        );
        assert_eq!(
            gate.evaluate("/auth/signup/verify/extra", None),
            GateDecision::Redirect(RedirectReason::MissingToken)
        );
    }

    #[test]
    fn test_protected_route_without_token() {
        let gate = gate();
        assert_eq!(
            gate.evaluate("/dashboard", None),
            GateDecision::Redirect(RedirectReason::MissingToken)
        );
        assert_eq!(
            gate.evaluate("/", Some("")),
            GateDecision::Redirect(RedirectReason::MissingToken)
        );
    }

    #[test]
    fn test_protected_route_with_bad_token() {
        let gate = gate();
        let tampered = tamper_signature(&valid_token());
        for token in ["garbage", tampered.as_str()] {
            assert_eq!(
                gate.evaluate("/dashboard", Some(token)),
                GateDecision::Redirect(RedirectReason::InvalidToken)
            );
        }
    }

    #[test]
    fn test_protected_route_with_valid_token() {
        let decision = gate().evaluate("/dashboard", Some(&valid_token()));
        assert!(decision.is_allowed());
        match decision {
            GateDecision::Verified(claims) => {
                assert_eq!(claims.sub, Some(serde_json::json!("42")))
            }
            other => panic!("expected Verified, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_scope_paths_bypass() {
        let gate = gate();
        for path in ["/api/auth/signin", "/static/app.js", "/healthz", "/favicon.ico"] {
            assert_eq!(gate.evaluate(path, None), GateDecision::Bypass);
        }
        assert!(!gate.evaluate("/apiary", None).is_allowed());
    }

    #[test]
    fn test_accessors() {
        let gate = gate();
        assert_eq!(gate.sign_in_path(), "/auth/signin");
        assert_eq!(gate.token_cookie_name(), "token");
        assert_eq!(RedirectReason::InvalidToken.to_string(), "invalid_token");
    }
}
