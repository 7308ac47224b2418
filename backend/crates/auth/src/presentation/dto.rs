//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::auth_flow::FlowStep;

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request
///
/// Missing fields read as empty so they fail validation with a message
/// naming the field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignUpRequest {
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
}

// ============================================================================
// Flow
// ============================================================================

/// Where the page navigates after a successful sign-in or sign-up
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowRedirectResponse {
    pub redirect_to: String,
    /// Flow step the target page belongs to, if any
    pub step: Option<FlowStep>,
}

/// Current auth flow context, read from the flow cookie
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowStatusResponse {
    pub active: bool,
    pub email: Option<String>,
    pub step: Option<FlowStep>,
}
