//! Credential store module

mod json_file;
mod traits;

pub use json_file::JsonUserStore;
pub use traits::{CredentialResult, CredentialService, StoreError};

#[cfg(test)]
pub use traits::MockCredentialService;
