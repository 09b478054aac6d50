//! Configuration handling for the sign-in front end

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::form::{AbandonPolicy, FormOptions, FormStyle};

/// Environment variable overriding the users file location
const USERS_FILE_ENV: &str = "SIGNIN_USERS_FILE";

/// Users file name inside the data directory
const USERS_FILE_NAME: &str = "users.json";

/// User configuration for the sign-in form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SigninConfig {
    /// Path of the JSON users file
    pub users_file: Option<PathBuf>,
    /// How the form is presented
    pub form_style: Option<FormStyle>,
    /// What cancelling the form does
    pub on_abandon: Option<AbandonPolicy>,
}

impl SigninConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "signin", "signin-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                let config: SigninConfig = serde_json::from_str(&content)
                    .with_context(|| format!("failed to parse {}", path.display()))?;
                tracing::debug!(path = %path.display(), "loaded configuration");
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Users file to authenticate against
    ///
    /// `SIGNIN_USERS_FILE` wins over the config file, which wins over the
    /// platform data directory.
    pub fn users_file(&self) -> PathBuf {
        self.resolve_users_file(std::env::var_os(USERS_FILE_ENV).map(PathBuf::from))
    }

    fn resolve_users_file(&self, env_override: Option<PathBuf>) -> PathBuf {
        env_override
            .or_else(|| self.users_file.clone())
            .or_else(|| {
                Self::project_dirs().map(|dirs| dirs.data_dir().join(USERS_FILE_NAME))
            })
            .unwrap_or_else(|| PathBuf::from(USERS_FILE_NAME))
    }

    pub fn form_options(&self) -> FormOptions {
        FormOptions {
            style: self.form_style.unwrap_or_default(),
            on_abandon: self.on_abandon.unwrap_or_default(),
        }
    }
}
