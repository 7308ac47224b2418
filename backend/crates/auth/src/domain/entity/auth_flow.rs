//! Auth Flow Entity
//!
//! Context handed from sign-in/sign-up to the follow-up pages (email
//! verification, document submission). Exists only while the user is in the
//! middle of the flow.

use serde::{Deserialize, Serialize};

use crate::domain::value_object::email::Email;

/// Step of the sign-up flow the user is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum FlowStep {
    #[display("verify")]
    Verify,
    #[display("documents")]
    Documents,
}

/// Auth flow context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthFlow {
    pub email: Email,
    pub step: FlowStep,
    /// Unix seconds after which the context is ignored
    pub expires_at: u64,
}

impl AuthFlow {
    pub fn new(email: Email, step: FlowStep, now: u64, ttl_secs: u64) -> Self {
        Self {
            email,
            step,
            expires_at: now.saturating_add(ttl_secs),
        }
    }

    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.expires_at
    }
}
