//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the vocabulary every portal crate agrees on:
//! - The unified [`error::app_error::AppError`] type and its result alias
//! - The [`error::kind::ErrorKind`] classification mapped to HTTP status codes
//! - The conversion from `reqwest` errors and the HTTP rendering of `AppError`
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
