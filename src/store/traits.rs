//! Trait abstraction for the credential store to enable mocking in tests

use std::path::PathBuf;

use thiserror::Error;

use crate::state::UserRole;

/// Answer of the credential store to a sign-in query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialResult {
    OkAdmin,
    OkEntrepreneur,
    OkCompany,
    NotFound,
    InvalidPassword,
}

impl CredentialResult {
    /// Successful result for a user holding `role`
    pub fn granted(role: UserRole) -> Self {
        match role {
            UserRole::Admin => Self::OkAdmin,
            UserRole::Entrepreneur => Self::OkEntrepreneur,
            UserRole::Company => Self::OkCompany,
        }
    }
}

/// The store could not answer at all
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read users file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("users file {} is not valid: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("user {user:?} has unknown role {role:?}")]
    UnknownRole { user: String, role: String },
}

/// Credential store operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
pub trait CredentialService {
    /// Check a name/password pair
    fn sign_in(&self, name: &str, password: &str) -> Result<CredentialResult, StoreError>;
}
