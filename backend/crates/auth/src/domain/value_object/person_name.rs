//! Person Name Value Object

use crate::error::{AuthError, AuthResult};

const NAME_MAX_CHARS: usize = 100;

/// First or last name as typed at sign-up, trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    /// `field` names the input in the error message ("First name", "Last name").
    pub fn new(field: &str, raw: impl AsRef<str>) -> AuthResult<Self> {
        let name = raw.as_ref().trim();

        if name.is_empty() {
            return Err(AuthError::Validation(format!("{field} is required")));
        }

        if name.chars().count() > NAME_MAX_CHARS {
            return Err(AuthError::Validation(format!(
                "{field} must be at most {NAME_MAX_CHARS} characters"
            )));
        }

        if name.chars().any(char::is_control) {
            return Err(AuthError::Validation(format!(
                "{field} contains invalid characters"
            )));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed() {
        let name = PersonName::new("First name", "  Anna ").unwrap();
        assert_eq!(name.as_str(), "Anna");
    }

    #[test]
    fn test_required_message_names_field() {
        let err = PersonName::new("Last name", "   ").unwrap_err();
        assert_eq!(err.user_message(""), "Last name is required");
    }

    #[test]
    fn test_rejects_control_and_overlong() {
        assert!(PersonName::new("First name", "An\u{0}na").is_err());
        assert!(PersonName::new("First name", "a".repeat(101)).is_err());
        assert!(PersonName::new("First name", "a".repeat(100)).is_ok());
    }
}
