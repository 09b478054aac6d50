//! Credential store backed by a JSON users file
//!
//! Expected layout:
//!
//! ```json
//! { "users": [ { "name": "Bruno", "type": "admin", "password": "ABC" } ] }
//! ```
//!
//! The file is read again on every query, so edits show up on the next attempt.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::traits::{CredentialResult, CredentialService, StoreError};
use crate::state::UserRole;

#[derive(Debug, Deserialize)]
struct UsersFile {
    users: Vec<UserRecord>,
}

#[derive(Debug, Deserialize)]
struct UserRecord {
    name: String,
    #[serde(rename = "type")]
    role: String,
    password: String,
}

impl UsersFile {
    fn check(&self, name: &str, password: &str) -> Result<CredentialResult, StoreError> {
        let Some(record) = self.users.iter().find(|user| user.name == name) else {
            return Ok(CredentialResult::NotFound);
        };
        if record.password != password {
            return Ok(CredentialResult::InvalidPassword);
        }
        let role = UserRole::from_label(&record.role).ok_or_else(|| StoreError::UnknownRole {
            user: record.name.clone(),
            role: record.role.clone(),
        })?;
        Ok(CredentialResult::granted(role))
    }
}

/// Users file on disk
#[derive(Debug, Clone)]
pub struct JsonUserStore {
    path: PathBuf,
}

impl JsonUserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<UsersFile, StoreError> {
        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

impl CredentialService for JsonUserStore {
    fn sign_in(&self, name: &str, password: &str) -> Result<CredentialResult, StoreError> {
        let users = self.load()?;
        let result = users.check(name, password);
        tracing::debug!(path = %self.path.display(), ?result, "checked credentials");
        result
    }
}
