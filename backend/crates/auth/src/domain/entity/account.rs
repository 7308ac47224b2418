//! Account Status Entity
//!
//! The slice of the remote API's user record that decides where a freshly
//! signed-in user goes next.

use serde::{Deserialize, Serialize};

use crate::domain::entity::auth_flow::FlowStep;

/// Verification milestones of an account, as returned by the remote API.
///
/// Each field is a timestamp string or null. Other fields of the user record
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountStatus {
    #[serde(default)]
    pub email_verified_at: Option<String>,
    #[serde(default)]
    pub documents_submitted_at: Option<String>,
    #[serde(default)]
    pub documents_verified_at: Option<String>,
}

impl AccountStatus {
    pub fn email_verified(&self) -> bool {
        is_set(&self.email_verified_at)
    }

    pub fn documents_submitted(&self) -> bool {
        is_set(&self.documents_submitted_at)
    }

    pub fn documents_verified(&self) -> bool {
        is_set(&self.documents_verified_at)
    }

    /// Next page after sign-in. Checked in order, first match wins.
    pub fn destination(&self) -> SignInDestination {
        if !self.email_verified() {
            SignInDestination::VerifyEmail
        } else if !self.documents_submitted() {
            SignInDestination::SubmitDocuments
        } else if !self.documents_verified() {
            SignInDestination::PendingReview
        } else {
            SignInDestination::Home
        }
    }
}

fn is_set(timestamp: &Option<String>) -> bool {
    timestamp.as_deref().is_some_and(|ts| !ts.trim().is_empty())
}

/// Where the browser goes after a successful sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInDestination {
    VerifyEmail,
    SubmitDocuments,
    PendingReview,
    Home,
}

impl SignInDestination {
    pub const fn path(&self) -> &'static str {
        match self {
            Self::VerifyEmail => "/auth/signup/verify",
            Self::SubmitDocuments => "/auth/signup/documents",
            Self::PendingReview => "/auth/verification-pending",
            Self::Home => "/",
        }
    }

    /// Flow step the user resumes at, `None` once nothing is left for them
    /// to do.
    pub const fn flow_step(&self) -> Option<FlowStep> {
        match self {
            Self::VerifyEmail => Some(FlowStep::Verify),
            Self::SubmitDocuments => Some(FlowStep::Documents),
            Self::PendingReview | Self::Home => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(email: bool, submitted: bool, verified: bool) -> AccountStatus {
        let ts = |set: bool| set.then(|| "2025-01-01T00:00:00Z".to_string());
        AccountStatus {
            email_verified_at: ts(email),
            documents_submitted_at: ts(submitted),
            documents_verified_at: ts(verified),
        }
    }

    #[test]
    fn test_destination_order() {
        assert_eq!(status(false, false, false).destination(), SignInDestination::VerifyEmail);
        // unverified email wins even if later milestones are set
        assert_eq!(status(false, true, true).destination(), SignInDestination::VerifyEmail);
        assert_eq!(status(true, false, false).destination(), SignInDestination::SubmitDocuments);
        assert_eq!(status(true, false, true).destination(), SignInDestination::SubmitDocuments);
        assert_eq!(status(true, true, false).destination(), SignInDestination::PendingReview);
        assert_eq!(status(true, true, true).destination(), SignInDestination::Home);
    }

    #[test]
    fn test_empty_timestamp_is_unset() {
        let account = AccountStatus {
            email_verified_at: Some(String::new()),
            ..Default::default()
        };
        assert!(!account.email_verified());
    }

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let json = r#"{
            "id": 7,
            "email": "a@b.io",
            "email_verified_at": "2025-01-01T00:00:00.000000Z",
            "documents_submitted_at": null
        }"#;
        let account: AccountStatus = serde_json::from_str(json).unwrap();
        assert!(account.email_verified());
        assert!(!account.documents_submitted());
        assert!(!account.documents_verified());
    }

    #[test]
    fn test_destination_paths() {
        assert_eq!(SignInDestination::VerifyEmail.path(), "/auth/signup/verify");
        assert_eq!(SignInDestination::SubmitDocuments.path(), "/auth/signup/documents");
        assert_eq!(SignInDestination::PendingReview.path(), "/auth/verification-pending");
        assert_eq!(SignInDestination::Home.path(), "/");
        assert_eq!(SignInDestination::PendingReview.flow_step(), None);
    }
}
