//! Password Value Object
//!
//! Clear-text password held only long enough to forward it to the remote
//! API. Memory is zeroized on drop and never printed.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{AuthError, AuthResult};

/// Minimum password length accepted at sign-up
pub const PASSWORD_MIN_CHARS: usize = 6;

/// Upper bound for new passwords, so a pasted blob is not shipped upstream
pub const PASSWORD_MAX_CHARS: usize = 128;

#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
    /// Password for an existing account: any non-empty value is forwarded,
    /// the remote API decides whether it is right.
    pub fn for_sign_in(raw: String) -> AuthResult<Self> {
        if raw.is_empty() {
            return Err(AuthError::Validation("Password is required".into()));
        }
        Ok(Self(raw))
    }

    /// Password for a new account, between [`PASSWORD_MIN_CHARS`] and
    /// [`PASSWORD_MAX_CHARS`] characters.
    pub fn for_sign_up(raw: String) -> AuthResult<Self> {
        let chars = raw.chars().count();
        if chars < PASSWORD_MIN_CHARS {
            return Err(AuthError::Validation(format!(
                "Password must be at least {} characters",
                PASSWORD_MIN_CHARS
            )));
        }
        if chars > PASSWORD_MAX_CHARS {
            return Err(AuthError::Validation(format!(
                "Password must be at most {} characters",
                PASSWORD_MAX_CHARS
            )));
        }
        Ok(Self(raw))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}
