//! Access Token Verification
//!
//! Tokens are compact JWS strings issued by the remote API and signed with a
//! shared secret. Only HS256 is accepted: a token whose header names any
//! other algorithm is rejected before its signature is looked at.

use std::fmt;

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{AuthError, AuthResult};

/// The one signature algorithm the gate trusts
pub const TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

/// Shared secret used to verify token signatures.
///
/// Cannot be empty: there is no built-in fallback value.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct JwtSecret(Vec<u8>);

impl JwtSecret {
    pub fn new(secret: impl Into<Vec<u8>>) -> AuthResult<Self> {
        let secret = secret.into();
        if secret.iter().all(u8::is_ascii_whitespace) {
            return Err(AuthError::Misconfigured(
                "JWT secret must not be empty".to_string(),
            ));
        }
        Ok(Self(secret))
    }

    pub fn expose(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for JwtSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("JwtSecret(***)")
    }
}

/// Claims of a verified token.
///
/// Only the registered time claims are typed; everything else the issuer
/// put in the payload is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// HS256 token verifier
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &JwtSecret) -> Self {
        let mut validation = Validation::new(TOKEN_ALGORITHM);
        // exp/nbf are checked when present, nothing is mandatory
        validation.required_spec_claims.clear();
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.validate_aud = false;
        validation.leeway = 0;

        Self {
            key: DecodingKey::from_secret(secret.expose()),
            validation,
        }
    }

    /// Verify signature, algorithm and time claims.
    pub fn verify(&self, token: &str) -> AuthResult<TokenClaims> {
        let data = jsonwebtoken::decode::<TokenClaims>(token, &self.key, &self.validation)?;
        Ok(data.claims)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use serde_json::json;

    fn verifier() -> TokenVerifier {
        TokenVerifier::new(&JwtSecret::new(SECRET).unwrap())
    }

    #[test]
    fn test_accepts_valid_token() {
        let claims = verifier().verify(&valid_token()).unwrap();
        assert_eq!(claims.sub, Some(json!("42")));
        assert_eq!(claims.extra.get("email"), Some(&json!("a@b.io")));
    }

    #[test]
    fn test_accepts_token_without_time_claims() {
        let token = sign(Algorithm::HS256, SECRET, &json!({ "sub": 7 }));
        assert!(verifier().verify(&token).is_ok());
    }

    #[test]
    fn test_rejects_altered_signature() {
        let token = valid_token();
        assert!(verifier().verify(&token).is_ok());
        assert!(verifier().verify(&tamper_signature(&token)).is_err());
    }

    #[test]
    fn test_rejects_other_algorithms_with_same_secret() {
        let claims = json!({ "sub": "42", "exp": now() + 3600 });
        for alg in [Algorithm::HS384, Algorithm::HS512] {
            let token = sign(alg, SECRET, &claims);
            assert!(verifier().verify(&token).is_err(), "{alg:?} must be rejected");
        }
    }

    #[test]
    fn test_rejects_unsigned_token() {
        // {"alg":"none","typ":"JWT"} . {"sub":"42"} . (empty)
        let token = "eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0.eyJzdWIiOiI0MiJ9.";
        assert!(verifier().verify(token).is_err());
    }

    #[test]
    fn test_rejects_wrong_secret() {
        let token = sign(Algorithm::HS256, "another-secret", &json!({ "sub": "42" }));
        assert!(verifier().verify(&token).is_err());
    }

    #[test]
    fn test_rejects_expired_and_not_yet_valid() {
        let expired = sign(Algorithm::HS256, SECRET, &json!({ "exp": now() - 10 }));
        assert!(verifier().verify(&expired).is_err());

        let early = sign(
            Algorithm::HS256,
            SECRET,
            &json!({ "nbf": now() + 3600, "exp": now() + 7200 }),
        );
        assert!(verifier().verify(&early).is_err());
    }

    #[test]
    fn test_ignores_audience() {
        let token = sign(Algorithm::HS256, SECRET, &json!({ "aud": "mobile", "sub": "1" }));
        assert!(verifier().verify(&token).is_ok());
    }

    #[test]
    fn test_rejects_malformed() {
        for token in ["", "garbage", "a.b", "a.b.c", "....", "eyJhbGciOiJIUzI1NiJ9.W10.sig"] {
            assert!(verifier().verify(token).is_err(), "{token:?} must be rejected");
        }
    }

    #[test]
    fn test_secret_must_not_be_empty() {
        assert!(JwtSecret::new("").is_err());
        assert!(JwtSecret::new("   ").is_err());
        assert_eq!(format!("{:?}", JwtSecret::new("x").unwrap()), "JwtSecret(***)");
    }
}
