//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cookie parsing and `Set-Cookie` construction
//! - Cryptographic utilities (HMAC-SHA256, base64url, secure random bytes)

pub mod cookie;
pub mod crypto;
