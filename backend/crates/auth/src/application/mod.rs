//! Application Layer
//!
//! Use cases, token verification, and the access gate.

pub mod access_gate;
pub mod config;
pub mod flow;
pub mod sign_in;
pub mod sign_up;
pub mod token;

// Re-exports
pub use access_gate::{AccessGate, GateDecision, RedirectReason};
pub use config::{AuthConfig, GateConfig};
pub use flow::FlowCodec;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
pub use token::{JwtSecret, TokenClaims, TokenVerifier};
