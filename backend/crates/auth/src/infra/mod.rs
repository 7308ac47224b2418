//! Infrastructure Layer
//!
//! External service integrations.

pub mod http_api;

pub use http_api::HttpAuthApi;
