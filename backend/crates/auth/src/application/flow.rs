//! Auth Flow Cookie Codec
//!
//! The flow context travels in a cookie as `{payload}.{tag}`, both
//! base64url without padding. `payload` is the JSON of an [`AuthFlow`] and
//! `tag` its HMAC-SHA256 under a server-side key, so clients can read the
//! context but not forge or extend it.

use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};

use crate::domain::entity::auth_flow::AuthFlow;
use crate::error::{AuthError, AuthResult};

/// Signs and checks flow cookies
#[derive(Clone)]
pub struct FlowCodec {
    key: [u8; 32],
}

impl FlowCodec {
    pub fn new(key: [u8; 32]) -> Self {
        Self { key }
    }

    pub fn encode(&self, flow: &AuthFlow) -> AuthResult<String> {
        let json = serde_json::to_vec(flow)
            .map_err(|e| AuthError::Internal(format!("Flow serialization failed: {e}")))?;
        let payload = to_base64url(&json);
        let tag = hmac_sha256(&self.key, payload.as_bytes());
        Ok(format!("{}.{}", payload, to_base64url(&tag)))
    }

    /// Decode a cookie value, rejecting bad signatures and expired contexts.
    pub fn decode(&self, value: &str, now: u64) -> AuthResult<AuthFlow> {
        let (payload, tag) = value
            .split_once('.')
            .ok_or(AuthError::FlowInvalid("malformed"))?;
        let tag = from_base64url(tag).map_err(|_| AuthError::FlowInvalid("malformed"))?;

        if !verify_hmac_sha256(&self.key, payload.as_bytes(), &tag) {
            return Err(AuthError::FlowInvalid("signature"));
        }

        let json = from_base64url(payload).map_err(|_| AuthError::FlowInvalid("malformed"))?;
        let flow: AuthFlow =
            serde_json::from_slice(&json).map_err(|_| AuthError::FlowInvalid("malformed"))?;

        if flow.is_expired(now) {
            return Err(AuthError::FlowInvalid("expired"));
        }

        Ok(flow)
    }
}
