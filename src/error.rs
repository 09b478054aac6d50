//! Errors that end a sign-in session
//!
//! Operator choices (cancel, quit) are never errors; they surface as `None`.
//! Everything here is a defect or an I/O failure and aborts the session.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum SigninError {
    #[error("form has no usable field names")]
    EmptyForm,

    #[error("credential store failed: {0}")]
    CredentialStore(#[from] StoreError),

    #[error("text channel failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SigninError>;
