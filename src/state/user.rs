//! Signed-in user

use std::fmt;

/// Role granted to a user by the credential store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Entrepreneur,
    Company,
}

impl UserRole {
    /// Parse a stored role label, ignoring case and surrounding whitespace.
    /// `ENTREPENEUR` is accepted as a legacy spelling.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_uppercase().as_str() {
            "ADMIN" => Some(Self::Admin),
            "ENTREPRENEUR" | "ENTREPENEUR" => Some(Self::Entrepreneur),
            "COMPANY" => Some(Self::Company),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Entrepreneur => "Entrepreneur",
            Self::Company => "Company",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A user that passed authentication. Holds no password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub role: UserRole,
    pub name: String,
}

impl User {
    pub fn new(role: UserRole, name: impl Into<String>) -> Self {
        Self {
            role,
            name: name.into(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.role, self.name)
    }
}
